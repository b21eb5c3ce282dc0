use std::sync::Arc;

use refuge_core::{
    capture::{CapturedPhoto, EvidenceCapture},
    location::LocationProvider,
    model::{IdentityProvider, IncidentCategory, IncidentReport, ReportStatus},
    remote::IncidentStore,
};

use super::EmergencyError;

/// evidence photos stay on the device; the report only records that one exists.
pub const LOCAL_EVIDENCE_MARKER: &str = "Image captured (local)";

/// an incident report being filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentDraft {
    pub category: IncidentCategory,
    pub details: String,
    pub photo: Option<CapturedPhoto>,
}

impl IncidentDraft {
    pub fn new(category: IncidentCategory, details: impl Into<String>) -> Self {
        Self {
            category,
            details: details.into(),
            photo: None,
        }
    }
}

pub struct IncidentReporter {
    location: Arc<dyn LocationProvider>,
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn IncidentStore>,
}

impl IncidentReporter {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn IncidentStore>,
    ) -> Self {
        Self {
            location,
            identity,
            store,
        }
    }

    /// takes a photo and attaches it to the draft, replacing any earlier one.
    pub fn attach_photo(
        &self,
        draft: &mut IncidentDraft,
        camera: &dyn EvidenceCapture,
    ) -> Result<(), EmergencyError> {
        let photo = camera.capture()?;
        log::debug!("attached photo '{}'", photo.uri.display());
        draft.photo = Some(photo);
        Ok(())
    }

    /// validates and submits the draft at the current location, returning the
    /// submitted row. the draft is left untouched so the caller decides when
    /// to reset the form.
    pub fn submit(&self, draft: &IncidentDraft) -> Result<IncidentReport, EmergencyError> {
        let details = draft.details.trim();
        if details.is_empty() {
            return Err(EmergencyError::MissingDetails);
        }
        let user = self
            .identity
            .current_user()
            .ok_or(EmergencyError::NotAuthenticated)?;
        let position = self.location.current_position()?;
        let report = IncidentReport {
            user_email: user.email,
            category: draft.category,
            details: details.to_string(),
            latitude: position.latitude,
            longitude: position.longitude,
            evidence_url: draft
                .photo
                .as_ref()
                .map(|_| String::from(LOCAL_EVIDENCE_MARKER)),
            status: ReportStatus::Pending,
        };
        self.store.submit_report(&report)?;
        log::info!("{} report submitted from {position}", report.category);
        Ok(report)
    }
}

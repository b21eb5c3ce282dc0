use std::sync::Arc;

use refuge_core::{
    location::LocationProvider,
    model::{IdentityProvider, IncidentCategory, IncidentReport, ReportStatus},
    remote::IncidentStore,
};

use super::EmergencyError;

/// recorded as the sender when nobody is signed in.
pub const UNREGISTERED_SOS_USER: &str = "UNREGISTERED_SOS_USER";
pub const SOS_DESCRIPTION: &str = "TRIGGERED VIA HOME SCREEN SHORTCUT (URGENT)";

/// result of a delivered SOS.
#[derive(Debug, Clone, PartialEq)]
pub struct SosReceipt {
    pub report: IncidentReport,
    /// true when the sender was signed in, in which case the app moves to
    /// the dashboard home tab.
    pub authenticated: bool,
}

/// one-shot emergency broadcast of the current location. nothing is retried
/// or queued: a failed submission is returned to the caller.
pub struct SosBroadcaster {
    location: Arc<dyn LocationProvider>,
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn IncidentStore>,
}

impl SosBroadcaster {
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

    pub fn send_sos(&self) -> Result<SosReceipt, EmergencyError> {
        let user = self.identity.current_user();
        let position = self.location.current_position()?;
        let report = IncidentReport {
            user_email: user
                .as_ref()
                .map(|u| u.email.clone())
                .unwrap_or_else(|| String::from(UNREGISTERED_SOS_USER)),
            category: IncidentCategory::Sos,
            details: String::from(SOS_DESCRIPTION),
            latitude: position.latitude,
            longitude: position.longitude,
            evidence_url: None,
            status: ReportStatus::Pending,
        };
        self.store.submit_report(&report)?;
        log::info!("SOS sent from {position} by {}", report.user_email);
        Ok(SosReceipt {
            report,
            authenticated: user.is_some(),
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use refuge_core::{
        location::StaticLocation,
        model::{Coordinate, IncidentCategory, StaticIdentity},
    };

    use super::{SosBroadcaster, SOS_DESCRIPTION, UNREGISTERED_SOS_USER};
    use crate::{emergency::EmergencyError, test_ops::RecordingIncidents};

    #[test]
    fn test_permission_denied_submits_nothing() {
        let store = Arc::new(RecordingIncidents::default());
        let sos = SosBroadcaster::new(
            Arc::new(StaticLocation::denied()),
            Arc::new(StaticIdentity::signed_in("a@b.c")),
            store.clone(),
        );
        assert_eq!(
            sos.send_sos(),
            Err(EmergencyError::PermissionDenied(String::from("location")))
        );
        assert!(store.submitted().is_empty());
    }

    #[test]
    fn test_anonymous_sos() {
        let store = Arc::new(RecordingIncidents::default());
        let sos = SosBroadcaster::new(
            Arc::new(StaticLocation::granted(Coordinate::new(12.9, 77.6))),
            Arc::new(StaticIdentity::anonymous()),
            store.clone(),
        );
        let receipt = sos.send_sos().expect("should send");
        assert!(!receipt.authenticated);
        let submitted = store.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].user_email, UNREGISTERED_SOS_USER);
        assert_eq!(submitted[0].category, IncidentCategory::Sos);
        assert_eq!(submitted[0].details, SOS_DESCRIPTION);
        assert_eq!((submitted[0].latitude, submitted[0].longitude), (12.9, 77.6));
    }

    #[test]
    fn test_signed_in_sos() {
        let store = Arc::new(RecordingIncidents::default());
        let sos = SosBroadcaster::new(
            Arc::new(StaticLocation::granted(Coordinate::new(12.9, 77.6))),
            Arc::new(StaticIdentity::signed_in("volunteer@example.org")),
            store.clone(),
        );
        let receipt = sos.send_sos().expect("should send");
        assert!(receipt.authenticated);
        assert_eq!(receipt.report.user_email, "volunteer@example.org");
    }

    #[test]
    fn test_network_failure_is_not_retried() {
        let store = Arc::new(RecordingIncidents::rejecting());
        let sos = SosBroadcaster::new(
            Arc::new(StaticLocation::granted(Coordinate::new(12.9, 77.6))),
            Arc::new(StaticIdentity::anonymous()),
            store.clone(),
        );
        assert!(matches!(
            sos.send_sos(),
            Err(EmergencyError::SubmissionFailed(_))
        ));
        assert!(store.submitted().is_empty());
    }
}

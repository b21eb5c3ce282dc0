use std::sync::Arc;

use refuge_core::{
    http::HttpClient,
    model::{IncidentReport, Shelter},
    remote::{IncidentStore, RemoteStoreError, ShelterSource},
};

use crate::{BackendConfig, BackendError};

/// reads shelters from and writes reports to the hosted data backend.
pub struct RestBackend {
    config: BackendConfig,
    client: Arc<dyn HttpClient>,
}

impl RestBackend {
    /// fails early when the URL or API key is missing.
    pub fn new(config: BackendConfig, client: Arc<dyn HttpClient>) -> Result<Self, BackendError> {
        config.table_url(&config.shelters_table)?;
        config.api_key()?;
        Ok(Self { config, client })
    }

    pub fn select_shelters(&self) -> Result<Vec<Shelter>, BackendError> {
        let table = &self.config.shelters_table;
        let url = format!("{}?select=*", self.config.table_url(table)?);
        let key = self.config.api_key()?;
        let bearer = format!("Bearer {key}");
        let headers = [("apikey", key), ("Authorization", bearer.as_str())];
        let body = self.client.get(&url, &headers)?;
        let shelters: Vec<Shelter> =
            serde_json::from_slice(&body).map_err(|e| BackendError::DeserializeError {
                table: table.clone(),
                message: e.to_string(),
            })?;
        log::debug!("selected {} rows from '{table}'", shelters.len());
        Ok(shelters)
    }

    pub fn insert_report(&self, report: &IncidentReport) -> Result<(), BackendError> {
        let table = &self.config.reports_table;
        let url = self.config.table_url(table)?;
        let key = self.config.api_key()?;
        let bearer = format!("Bearer {key}");
        let headers = [
            ("apikey", key),
            ("Authorization", bearer.as_str()),
            ("Prefer", "return=minimal"),
        ];
        let body = serde_json::to_value(report).map_err(|e| {
            BackendError::InvalidConfiguration(format!("report is not serializable: {e}"))
        })?;
        self.client.post_json(&url, &headers, &body)?;
        log::debug!("inserted {} report into '{table}'", report.category);
        Ok(())
    }
}

impl ShelterSource for RestBackend {
    fn fetch_shelters(&self) -> Result<Vec<Shelter>, RemoteStoreError> {
        self.select_shelters().map_err(RemoteStoreError::from)
    }
}

impl IncidentStore for RestBackend {
    fn submit_report(&self, report: &IncidentReport) -> Result<(), RemoteStoreError> {
        self.insert_report(report).map_err(RemoteStoreError::from)
    }
}

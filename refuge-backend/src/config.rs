use serde::{Deserialize, Serialize};

use crate::BackendError;

/// connection details for the hosted data backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    /// project URL, e.g. `https://<project>.example.co`
    #[serde(default)]
    pub url: Option<String>,
    /// public (anonymous role) API key
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_shelters_table")]
    pub shelters_table: String,
    #[serde(default = "default_reports_table")]
    pub reports_table: String,
}

fn default_shelters_table() -> String {
    String::from("shelters")
}

fn default_reports_table() -> String {
    String::from("reports")
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            shelters_table: default_shelters_table(),
            reports_table: default_reports_table(),
        }
    }
}

impl BackendConfig {
    /// the REST endpoint for a table.
    pub fn table_url(&self, table: &str) -> Result<String, BackendError> {
        let url = self.url.as_deref().map(str::trim).unwrap_or_default();
        if url.is_empty() {
            return Err(BackendError::InvalidConfiguration(String::from(
                "backend.url is required (set it in the config file or REFUGE_BACKEND__URL)",
            )));
        }
        Ok(format!("{}/rest/v1/{table}", url.trim_end_matches('/')))
    }

    pub fn api_key(&self) -> Result<&str, BackendError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(BackendError::InvalidConfiguration(String::from(
                "backend.api_key is required (set it in the config file or REFUGE_BACKEND__API_KEY)",
            ))),
        }
    }
}

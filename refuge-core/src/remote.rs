//! the hosted data backend holding shelters and incident reports.
use crate::model::{IncidentReport, Shelter};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RemoteStoreError {
    #[error("remote store request failed: {0}")]
    RequestFailed(String),
    #[error("remote store rejected the request: {0}")]
    Rejected(String),
    #[error("unable to read remote store response: {0}")]
    InvalidResponse(String),
}

pub trait ShelterSource: Send + Sync {
    /// selects every shelter in the directory.
    fn fetch_shelters(&self) -> Result<Vec<Shelter>, RemoteStoreError>;
}

pub trait IncidentStore: Send + Sync {
    /// inserts one report row.
    fn submit_report(&self, report: &IncidentReport) -> Result<(), RemoteStoreError>;
}

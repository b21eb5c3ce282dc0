use refuge_backend::BackendError;
use refuge_core::{http::HttpError, storage::StorageError};
use refuge_osrm::OsrmError;

use crate::{
    app::Alert, config::ConfigError, directory::DirectoryError, emergency::EmergencyError,
    navigation::NavigationError, packet::PacketError,
};

#[derive(thiserror::Error, Debug)]
pub enum RefugeError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error(transparent)]
    Routing(#[from] OsrmError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Emergency(#[from] EmergencyError),
    #[error(transparent)]
    Packet(#[from] PacketError),
    #[error("{0}")]
    Alerted(Alert),
}

impl RefugeError {
    /// what to show the user for this error.
    pub fn alert(&self) -> Alert {
        match self {
            RefugeError::Navigation(e) => Alert::from(e),
            RefugeError::Directory(e) => Alert::from(e),
            RefugeError::Emergency(e) => Alert::from(e),
            RefugeError::Packet(e) => Alert::from(e),
            RefugeError::Alerted(alert) => alert.clone(),
            other => Alert::new("Error", other.to_string()),
        }
    }
}

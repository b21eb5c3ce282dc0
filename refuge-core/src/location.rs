//! device position, supplied by the host platform.
use crate::model::Coordinate;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("current location unavailable: {0}")]
    Unavailable(String),
}

pub trait LocationProvider: Send + Sync {
    /// requests permission if needed and returns the current device position.
    fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// a provider answering with a fixed position, or refusing permission.
#[derive(Clone, Debug)]
pub struct StaticLocation {
    position: Option<Coordinate>,
}

impl StaticLocation {
    pub fn granted(position: Coordinate) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn denied() -> Self {
        Self { position: None }
    }
}

impl LocationProvider for StaticLocation {
    fn current_position(&self) -> Result<Coordinate, LocationError> {
        self.position.ok_or(LocationError::PermissionDenied)
    }
}

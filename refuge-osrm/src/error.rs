use refuge_core::{http::HttpError, routing::RoutingError};

#[derive(thiserror::Error, Debug)]
pub enum OsrmError {
    #[error("invalid routing configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("failed to deserialize OSRM response: {0}")]
    DeserializeError(String),
    #[error("OSRM returned no usable route: {0}")]
    NoRoute(String),
}

impl From<OsrmError> for RoutingError {
    fn from(value: OsrmError) -> Self {
        match value {
            OsrmError::NoRoute(msg) => RoutingError::NoRouteFound(msg),
            other => RoutingError::FetchFailed(other.to_string()),
        }
    }
}

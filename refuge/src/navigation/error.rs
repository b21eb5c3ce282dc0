use refuge_core::{location::LocationError, model::ShelterId, routing::RoutingError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("current location unavailable: {0}")]
    LocationUnavailable(String),
    #[error("no saved route to shelter '{0}' is available offline")]
    NoOfflineRoute(ShelterId),
    #[error("no route found: {0}")]
    NoRouteFound(String),
    #[error("could not fetch route: {0}")]
    RouteFetchFailed(String),
    #[error("failed to persist route: {0}")]
    PersistenceWriteFailed(String),
    #[error("no shelter selected")]
    NoShelterSelected,
}

impl From<RoutingError> for NavigationError {
    fn from(value: RoutingError) -> Self {
        match value {
            RoutingError::NoRouteFound(msg) => NavigationError::NoRouteFound(msg),
            RoutingError::FetchFailed(msg) => NavigationError::RouteFetchFailed(msg),
        }
    }
}

impl From<LocationError> for NavigationError {
    fn from(value: LocationError) -> Self {
        match value {
            LocationError::PermissionDenied => NavigationError::PermissionDenied,
            LocationError::Unavailable(msg) => NavigationError::LocationUnavailable(msg),
        }
    }
}

//! remote route computation between two coordinates.
use crate::model::{Coordinate, Route};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// the service answered but offered no usable path.
    #[error("no route found: {0}")]
    NoRouteFound(String),
    /// the service could not be reached or its answer could not be read.
    #[error("route fetch failed: {0}")]
    FetchFailed(String),
}

pub trait RouteProvider: Send + Sync {
    /// computes a route with full path geometry and turn-by-turn steps.
    fn fetch_route(&self, origin: &Coordinate, destination: &Coordinate)
        -> Result<Route, RoutingError>;
}

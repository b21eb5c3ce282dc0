//! client for the OSRM `route` service. see
//! [http://project-osrm.org/docs/v5.24.0/api/#route-service] for the response format.
mod config;
mod error;
mod response;
mod route_ops;
mod router;

pub use config::OsrmConfig;
pub use error::OsrmError;
pub use response::{OsrmLeg, OsrmManeuver, OsrmResponse, OsrmRoute, OsrmStep};
pub use route_ops::{instruction, into_route};
pub use router::OsrmRouter;

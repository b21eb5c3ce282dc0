mod connectivity;
mod coordinate;
mod identity;
mod manual;
mod report;
mod route;
mod shelter;

pub use connectivity::Connectivity;
pub use coordinate::Coordinate;
pub use identity::{IdentityProvider, StaticIdentity, UserIdentity};
pub use manual::{EmergencyContact, SafetyGuide, SafetyManual};
pub use report::{IncidentCategory, IncidentReport, ReportStatus};
pub use route::{Route, RouteStep};
pub use shelter::{Shelter, ShelterId};

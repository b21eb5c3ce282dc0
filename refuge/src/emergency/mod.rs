mod error;
mod report;
mod sos;

pub use error::EmergencyError;
pub use report::{IncidentDraft, IncidentReporter, LOCAL_EVIDENCE_MARKER};
pub use sos::{SosBroadcaster, SosReceipt, SOS_DESCRIPTION, UNREGISTERED_SOS_USER};

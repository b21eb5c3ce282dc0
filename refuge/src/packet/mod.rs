mod error;
mod safety_packet;

pub use error::PacketError;
pub use safety_packet::{PacketSummary, SafetyPacket};

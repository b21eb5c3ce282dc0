//! well-known keys for values persisted in the local [`super::KeyValueStore`].
use crate::model::ShelterId;

/// snapshot of the full shelter directory.
pub const SHELTERS: &str = "safety_packet_shelters";
/// the downloaded safety manual.
pub const MANUAL: &str = "safety_packet_manual";
/// metadata describing the last safety packet download.
pub const PACKET_META: &str = "safety_packet_meta";

const ROUTE_PREFIX: &str = "route_";

/// key holding the cached route to a shelter.
pub fn route_key(destination: &ShelterId) -> String {
    format!("{ROUTE_PREFIX}{destination}")
}

/// inverse of [`route_key`].
pub fn route_destination(key: &str) -> Option<ShelterId> {
    key.strip_prefix(ROUTE_PREFIX)
        .filter(|id| !id.is_empty())
        .map(ShelterId::new)
}

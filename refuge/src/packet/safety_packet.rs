use std::sync::Arc;

use chrono::{DateTime, Utc};
use refuge_core::{
    model::Connectivity,
    storage::{keys, read_json, write_json, KeyValueStore},
};
use serde::{Deserialize, Serialize};

use super::PacketError;
use crate::{directory::ShelterDirectory, manual::ManualLibrary, navigation::RouteCache};

/// what a safety packet download stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PacketSummary {
    pub downloaded_at: DateTime<Utc>,
    pub shelter_count: usize,
    /// shelters in the packet that already have a cached route. routes are
    /// cached as shelters are navigated to, not as part of the download.
    pub routes_cached: usize,
}

/// bundles everything needed offline: the shelter list, the manual and the
/// routes cached so far.
pub struct SafetyPacket {
    directory: ShelterDirectory,
    manual: ManualLibrary,
    routes: RouteCache,
    store: Arc<dyn KeyValueStore>,
}

impl SafetyPacket {
    pub fn new(
        directory: ShelterDirectory,
        manual: ManualLibrary,
        routes: RouteCache,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            directory,
            manual,
            routes,
            store,
        }
    }

    pub fn download(&self, connectivity: Connectivity) -> Result<PacketSummary, PacketError> {
        if connectivity.is_offline() {
            return Err(PacketError::Offline);
        }
        let shelters = self.directory.fetch_remote()?;
        self.directory.save_snapshot(&shelters)?;
        self.manual.save(&self.manual.load())?;

        let routes_cached = shelters
            .iter()
            .filter(|s| self.routes.contains(&s.id))
            .count();
        let summary = PacketSummary {
            downloaded_at: Utc::now(),
            shelter_count: shelters.len(),
            routes_cached,
        };
        write_json(self.store.as_ref(), keys::PACKET_META, &summary)?;
        log::info!(
            "safety packet stored: {} shelters, {} with cached routes",
            summary.shelter_count,
            summary.routes_cached
        );
        Ok(summary)
    }

    /// the summary of the most recent download, if any.
    pub fn last_download(&self) -> Option<PacketSummary> {
        read_json(self.store.as_ref(), keys::PACKET_META).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable safety packet metadata: {e}");
            None
        })
    }
}

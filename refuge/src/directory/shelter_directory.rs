use std::sync::Arc;

use itertools::Itertools;
use refuge_core::{
    model::{Connectivity, Coordinate, Shelter, ShelterId},
    remote::ShelterSource,
    storage::{keys, read_json, write_json, KeyValueStore, StorageError},
};
use uom::si::f64::Length;

use super::DirectoryError;

/// the list of shelters, synchronized from the remote directory while online
/// and served from the local snapshot while offline. every online refresh
/// replaces the snapshot in full.
pub struct ShelterDirectory {
    source: Arc<dyn ShelterSource>,
    store: Arc<dyn KeyValueStore>,
}

impl ShelterDirectory {
    pub fn new(source: Arc<dyn ShelterSource>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { source, store }
    }

    pub fn refresh(&self, connectivity: Connectivity) -> Result<Vec<Shelter>, DirectoryError> {
        if connectivity.is_offline() {
            let shelters = self.cached();
            log::info!("offline, loaded {} cached shelters", shelters.len());
            return Ok(shelters);
        }
        let shelters = self.fetch_remote()?;
        if let Err(e) = self.save_snapshot(&shelters) {
            log::warn!("shelter list not cached: {e}");
        }
        Ok(shelters)
    }

    /// the full list from the remote directory, without touching the snapshot.
    pub fn fetch_remote(&self) -> Result<Vec<Shelter>, DirectoryError> {
        let shelters = self.source.fetch_shelters()?;
        log::info!("fetched {} shelters from the directory", shelters.len());
        Ok(shelters)
    }

    /// replaces the local snapshot.
    pub fn save_snapshot(&self, shelters: &[Shelter]) -> Result<(), StorageError> {
        write_json(self.store.as_ref(), keys::SHELTERS, shelters)
    }

    /// the last cached snapshot, empty when nothing was cached yet or the
    /// snapshot is unreadable.
    pub fn cached(&self) -> Vec<Shelter> {
        match read_json::<Vec<Shelter>>(self.store.as_ref(), keys::SHELTERS) {
            Ok(shelters) => shelters.unwrap_or_default(),
            Err(e) => {
                log::warn!("ignoring unreadable cached shelter list: {e}");
                vec![]
            }
        }
    }
}

/// shelters sorted by great-circle distance from `origin`, closest first.
pub fn nearest(shelters: &[Shelter], origin: &Coordinate, limit: usize) -> Vec<(Shelter, Length)> {
    shelters
        .iter()
        .map(|s| (s.clone(), origin.haversine_distance(&s.coordinate())))
        .sorted_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
        .take(limit)
        .collect_vec()
}

/// looks up a shelter by id.
pub fn find<'a>(shelters: &'a [Shelter], id: &ShelterId) -> Option<&'a Shelter> {
    shelters.iter().find(|s| &s.id == id)
}

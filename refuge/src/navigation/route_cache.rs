use std::sync::Arc;

use refuge_core::{
    model::{Route, ShelterId},
    storage::{keys, read_json, write_json, KeyValueStore},
};

use super::NavigationError;

/// routes persisted per destination shelter so they can be replayed without
/// connectivity. entries never expire and are only replaced by a newer route
/// to the same shelter.
#[derive(Clone)]
pub struct RouteCache {
    store: Arc<dyn KeyValueStore>,
}

impl RouteCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// the cached route to `destination`, if any. unreadable entries are
    /// reported as absent.
    pub fn get(&self, destination: &ShelterId) -> Option<Route> {
        let key = keys::route_key(destination);
        match read_json::<Route>(self.store.as_ref(), &key) {
            Ok(route) => route,
            Err(e) => {
                log::warn!("ignoring unreadable cached route '{key}': {e}");
                None
            }
        }
    }

    pub fn put(&self, destination: &ShelterId, route: &Route) -> Result<(), NavigationError> {
        let key = keys::route_key(destination);
        write_json(self.store.as_ref(), &key, route)
            .map_err(|e| NavigationError::PersistenceWriteFailed(e.to_string()))
    }

    pub fn contains(&self, destination: &ShelterId) -> bool {
        self.get(destination).is_some()
    }

    /// shelters with a cached route.
    pub fn destinations(&self) -> Vec<ShelterId> {
        match self.store.keys() {
            Ok(names) => names
                .iter()
                .filter_map(|k| keys::route_destination(k))
                .collect(),
            Err(e) => {
                log::warn!("unable to list cached routes: {e}");
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use refuge_core::{
        model::ShelterId,
        storage::{InMemoryKeyValueStore, KeyValueStore},
    };

    use super::RouteCache;
    use crate::test_ops::{sample_route, FailingWrites};

    #[test]
    fn test_put_then_get() {
        let cache = RouteCache::new(Arc::new(InMemoryKeyValueStore::new()));
        let id = ShelterId::new("S1");
        assert_eq!(cache.get(&id), None);
        cache.put(&id, &sample_route()).expect("should write");
        assert_eq!(cache.get(&id), Some(sample_route()));
        assert_eq!(cache.destinations(), vec![id]);
    }

    #[test]
    fn test_corrupt_entry_is_absent() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set("route_S1", "{not json").expect("should write");
        let cache = RouteCache::new(store);
        assert_eq!(cache.get(&ShelterId::new("S1")), None);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let cache = RouteCache::new(Arc::new(FailingWrites::default()));
        let result = cache.put(&ShelterId::new("S1"), &sample_route());
        assert!(result.is_err());
    }
}

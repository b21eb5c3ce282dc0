use std::sync::Arc;

use refuge_core::{
    model::SafetyManual,
    storage::{keys, read_json, write_json, KeyValueStore, StorageError},
};

/// the safety manual as stored on the device, falling back to the bundled
/// default until a safety packet has been downloaded.
#[derive(Clone)]
pub struct ManualLibrary {
    store: Arc<dyn KeyValueStore>,
}

impl ManualLibrary {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> SafetyManual {
        match read_json::<SafetyManual>(self.store.as_ref(), keys::MANUAL) {
            Ok(Some(manual)) => manual,
            Ok(None) => SafetyManual::default(),
            Err(e) => {
                log::warn!("using default manual, cached manual is unreadable: {e}");
                SafetyManual::default()
            }
        }
    }

    pub fn save(&self, manual: &SafetyManual) -> Result<(), StorageError> {
        write_json(self.store.as_ref(), keys::MANUAL, manual)
    }
}

use serde::{de::DeserializeOwned, Serialize};

use super::{KeyValueStore, StorageError};

/// reads and decodes a JSON value, or None if nothing is stored at `key`.
pub fn read_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
{
    match store.get(key)? {
        None => Ok(None),
        Some(text) => {
            let value = serde_json::from_str(&text).map_err(|e| StorageError::DecodeError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
            Ok(Some(value))
        }
    }
}

/// encodes a value as JSON and stores it at `key`.
pub fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let text = serde_json::to_string(value).map_err(|e| StorageError::EncodeError {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, &text)
}

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use super::{KeyValueStore, StorageError};

/// longest escaped key used directly as a file name. most file systems stop
/// at 255 bytes.
const MAX_FILE_NAME: usize = 200;
/// leading character of digest file names. never produced by [`encode_key`].
const DIGEST_PREFIX: char = '~';

/// a [`KeyValueStore`] that keeps one file per key inside a directory.
///
/// keys are escaped into file names: ASCII alphanumerics, `_` and `-` are kept
/// as-is and every other byte is written as `%XX`. an escaped name longer than
/// [`MAX_FILE_NAME`] is replaced by `~` plus the blake3 digest of the key, and
/// the escaped key is written as the first line of the file so it can be
/// recovered. stored names never contain a `.`, which leaves room for the
/// temporary files used to make writes atomic.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    directory: PathBuf,
}

/// where a key lives on disk.
enum Slot {
    Named(PathBuf),
    Digest(PathBuf),
}

impl Slot {
    fn path(&self) -> &Path {
        match self {
            Slot::Named(p) | Slot::Digest(p) => p,
        }
    }
}

impl FileKeyValueStore {
    /// opens a store rooted at `directory`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self, StorageError> {
        let directory = directory.as_ref().to_path_buf();
        if !directory.is_dir() {
            std::fs::create_dir_all(&directory).map_err(|e| StorageError::WriteError {
                path: directory.clone(),
                message: format!("error building storage directory: {e}"),
            })?;
        }
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn slot_for(&self, key: &str) -> Result<Slot, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        let encoded = encode_key(key);
        if encoded.len() <= MAX_FILE_NAME {
            Ok(Slot::Named(self.directory.join(encoded)))
        } else {
            let name = format!("{DIGEST_PREFIX}{}", blake3::hash(key.as_bytes()).to_hex());
            Ok(Slot::Digest(self.directory.join(name)))
        }
    }

    fn read(&self, path: &Path) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// writes to a uniquely named temporary file in the store directory, then
    /// moves it over `path`.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), StorageError> {
        let write_error = |message: String| StorageError::WriteError {
            path: path.to_path_buf(),
            message,
        };
        let mut tmp = NamedTempFile::new_in(&self.directory)
            .map_err(|e| write_error(format!("unable to create temporary file: {e}")))?;
        tmp.write_all(contents.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        tmp.persist(path)
            .map_err(|e| write_error(format!("unable to move file into place: {}", e.error)))?;
        Ok(())
    }
}

/// splits a digest file into its escaped key and value.
fn split_digest_entry(contents: &str) -> Option<(String, &str)> {
    let (encoded, value) = contents.split_once('\n')?;
    Some((decode_key(encoded)?, value))
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.slot_for(key)? {
            Slot::Named(path) => self.read(&path),
            Slot::Digest(path) => {
                let Some(contents) = self.read(&path)? else {
                    return Ok(None);
                };
                match split_digest_entry(&contents) {
                    Some((stored, value)) if stored == key => Ok(Some(value.to_string())),
                    Some(_) => Ok(None),
                    None => Err(StorageError::ReadError {
                        path,
                        message: String::from("entry is missing its key line"),
                    }),
                }
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self.slot_for(key)? {
            Slot::Named(path) => self.write_atomic(&path, value),
            Slot::Digest(path) => {
                let contents = format!("{}\n{value}", encode_key(key));
                self.write_atomic(&path, &contents)
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let slot = self.slot_for(key)?;
        match std::fs::remove_file(slot.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteError {
                path: slot.path().to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries =
            std::fs::read_dir(&self.directory).map_err(|e| StorageError::ReadError {
                path: self.directory.clone(),
                message: e.to_string(),
            })?;
        let mut keys = vec![];
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::ReadError {
                path: self.directory.clone(),
                message: e.to_string(),
            })?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.contains('.') {
                continue;
            }
            let key = if name.starts_with(DIGEST_PREFIX) {
                self.read(&entry.path())?
                    .as_deref()
                    .and_then(split_digest_entry)
                    .map(|(key, _)| key)
            } else {
                decode_key(name)
            };
            match key {
                Some(key) => keys.push(key),
                None => log::warn!(
                    "ignoring unrecognized file '{name}' in storage directory '{}'",
                    self.directory.display()
                ),
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn decode_key(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let hex = name.get(idx + 1..idx + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            idx += 3;
        } else {
            out.push(bytes[idx]);
            idx += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod test {
    use super::{decode_key, encode_key, FileKeyValueStore, MAX_FILE_NAME};
    use crate::storage::KeyValueStore;

    #[test]
    fn test_key_escaping() {
        let key = "route_shelter 7/north.wing";
        let encoded = encode_key(key);
        assert!(!encoded.contains('.'));
        assert!(!encoded.contains('/'));
        assert_eq!(decode_key(&encoded).as_deref(), Some(key));
        assert_eq!(encode_key("route_S1"), "route_S1");
        assert!(encode_key("~").starts_with('%'));
    }

    #[test]
    fn test_set_get_overwrite_remove() {
        let dir = tempfile::tempdir().expect("test invariant failed: no temp dir");
        let store = FileKeyValueStore::new(dir.path().join("nested").join("store"))
            .expect("test invariant failed: could not open store");

        assert_eq!(store.get("route_S1").expect("read"), None);
        store.set("route_S1", "first").expect("write");
        store.set("route_S1", "second").expect("write");
        store.set("safety_packet_shelters", "[]").expect("write");
        assert_eq!(store.get("route_S1").expect("read").as_deref(), Some("second"));
        assert_eq!(
            store.keys().expect("list"),
            vec!["route_S1".to_string(), "safety_packet_shelters".to_string()]
        );

        store.remove("route_S1").expect("remove");
        store.remove("route_S1").expect("removing twice is fine");
        assert_eq!(store.get("route_S1").expect("read"), None);
    }

    #[test]
    fn test_long_keys_round_trip() {
        let dir = tempfile::tempdir().expect("test invariant failed: no temp dir");
        let store = FileKeyValueStore::new(dir.path()).expect("open");
        let slashes = format!("route_{}", "shelter/".repeat(40));
        let kannada = format!("route_{}", "ಸಮುದಾಯ ಭವನ ".repeat(10));
        assert!(slashes.len() > 300);
        assert!(encode_key(&kannada).len() > MAX_FILE_NAME);

        store.set(&slashes, "{\"coordinates\":[]}").expect("write");
        store.set(&kannada, "first\nline two").expect("write");
        store.set(&kannada, "second\nline two").expect("overwrite");
        assert_eq!(
            store.get(&slashes).expect("read").as_deref(),
            Some("{\"coordinates\":[]}")
        );
        assert_eq!(
            store.get(&kannada).expect("read").as_deref(),
            Some("second\nline two")
        );

        let mut expected = vec![slashes.clone(), kannada.clone()];
        expected.sort();
        assert_eq!(store.keys().expect("list"), expected);

        for entry in std::fs::read_dir(dir.path()).expect("list dir") {
            let name = entry.expect("entry").file_name();
            assert!(name.len() <= MAX_FILE_NAME + 1);
        }

        store.remove(&slashes).expect("remove");
        assert_eq!(store.get(&slashes).expect("read"), None);
        assert_eq!(store.keys().expect("list"), vec![kannada]);
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let dir = tempfile::tempdir().expect("test invariant failed: no temp dir");
        let store = FileKeyValueStore::new(dir.path()).expect("open");
        for i in 0..5 {
            store.set("route_S1", &format!("value {i}")).expect("write");
        }
        let names = std::fs::read_dir(dir.path())
            .expect("list dir")
            .map(|e| e.expect("entry").file_name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec![std::ffi::OsString::from("route_S1")]);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().expect("test invariant failed: no temp dir");
        {
            let store = FileKeyValueStore::new(dir.path()).expect("open");
            store.set("route_a b", "{\"coordinates\":[]}").expect("write");
        }
        let reopened = FileKeyValueStore::new(dir.path()).expect("reopen");
        assert_eq!(
            reopened.get("route_a b").expect("read").as_deref(),
            Some("{\"coordinates\":[]}")
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let dir = tempfile::tempdir().expect("test invariant failed: no temp dir");
        let store = FileKeyValueStore::new(dir.path()).expect("open");
        assert!(store.set("", "x").is_err());
    }
}

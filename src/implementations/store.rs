use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::{ RtlForgeError, RtlForgeResult };
use crate::traits::key_value_store::KeyValueStore;

/// One JSON file per key inside a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> RtlForgeResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RtlForgeError::Persistence(format!("Failed to read {}: {}", key, e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> RtlForgeResult<()> {
        fs
            ::create_dir_all(&self.dir)
            .map_err(|e|
                RtlForgeError::Persistence(
                    format!("Failed to create state directory {}: {}", self.dir.display(), e)
                )
            )?;

        // Replace through a sibling temp file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs
            ::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| RtlForgeError::Persistence(format!("Failed to write {}: {}", key, e)))
    }

    fn remove(&self, key: &str) -> RtlForgeResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RtlForgeError::Persistence(format!("Failed to remove {}: {}", key, e))),
        }
    }
}

/// Process-local store, used when persistence is disabled and in tests
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RtlForgeResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| RtlForgeError::Persistence("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> RtlForgeResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RtlForgeResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RtlForgeResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

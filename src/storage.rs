use crate::errors::StorageError;
use crate::models::Habit;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;

/// Key of the single slot holding the habit list.
pub const STORAGE_KEY: &str = "discipline-habits";

/// Load/save of the full habit list. Every save overwrites the previous value.
#[async_trait]
pub trait HabitStore: Send + Sync {
    /// An absent slot is an empty list, not an error.
    async fn load(&self) -> Result<Vec<Habit>, StorageError>;

    async fn save(&self, habits: &[Habit]) -> Result<(), StorageError>;
}

pub fn encode(habits: &[Habit]) -> Result<String, StorageError> {
    serde_json::to_string_pretty(habits).map_err(StorageError::Encode)
}

pub fn decode(text: &str) -> Result<Vec<Habit>, StorageError> {
    serde_json::from_str(text).map_err(StorageError::Malformed)
}

/// Keeps the list as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HabitStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Habit>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(text) => decode(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(StorageError::io(&self.path, err)),
        }
    }

    async fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let payload = encode(habits)?;
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| StorageError::io(parent, err))?;
        }
        fs::write(&self.path, payload)
            .await
            .map_err(|err| StorageError::io(&self.path, err))
    }
}

/// In-process key-value slots holding JSON text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with raw text, bypassing encoding.
    pub fn with_raw(text: impl Into<String>) -> Self {
        let store = Self::default();
        store.put_raw(text.into());
        store
    }

    pub fn raw(&self) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(STORAGE_KEY)
            .cloned()
    }

    fn put_raw(&self, text: String) {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(STORAGE_KEY.to_owned(), text);
    }
}

#[async_trait]
impl HabitStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Habit>, StorageError> {
        match self.raw() {
            Some(text) => decode(&text),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let payload = encode(habits)?;
        self.put_raw(payload);
        Ok(())
    }
}

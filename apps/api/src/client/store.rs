use super::errors::InteractionStoreError;
use super::interaction_cache::{EngagementState, InteractionRecord};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};
use uuid::Uuid;

/// Storage behind the interaction cache. `None` means no record yet (neutral).
///
/// Calls are synchronous and may block on disk I/O; async callers run them inline.
pub trait InteractionStore: Send + Sync {
    fn get(&self, content_id: Uuid) -> Option<EngagementState>;
    fn set(&self, content_id: Uuid, state: EngagementState);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
pub struct InMemoryInteractionStore {
    records: Mutex<HashMap<Uuid, EngagementState>>,
}

impl InteractionStore for InMemoryInteractionStore {
    fn get(&self, content_id: Uuid) -> Option<EngagementState> {
        lock(&self.records).get(&content_id).copied()
    }

    fn set(&self, content_id: Uuid, state: EngagementState) {
        lock(&self.records).insert(content_id, state);
    }
}

/// JSON file of `{ "<content id>": { "liked": bool, "disliked": bool } }`.
///
/// Loaded once on open and rewritten in full on every `set`, holding the lock across the
/// blocking write. A failed write is logged and the in-memory record kept, so toggling
/// stays infallible.
#[derive(Debug)]
pub struct FileInteractionStore {
    path: PathBuf,
    records: Mutex<BTreeMap<Uuid, InteractionRecord>>,
}

impl FileInteractionStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InteractionStoreError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            "interaction store opened"
        );
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(
        &self,
        records: &BTreeMap<Uuid, InteractionRecord>,
    ) -> Result<(), InteractionStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl InteractionStore for FileInteractionStore {
    fn get(&self, content_id: Uuid) -> Option<EngagementState> {
        lock(&self.records)
            .get(&content_id)
            .copied()
            .map(EngagementState::from)
    }

    fn set(&self, content_id: Uuid, state: EngagementState) {
        let mut records = lock(&self.records);
        records.insert(content_id, InteractionRecord::from(state));
        if let Err(e) = self.persist(&records) {
            tracing::error!(
                path = %self.path.display(),
                %content_id,
                "failed to persist interaction: {}",
                e
            );
        }
    }
}

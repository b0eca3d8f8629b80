//! History repository implementations.
//!
//! The store is written in full (overwrite, not append) after every
//! mutation. Loading tolerates an absent file and discards malformed or
//! legacy-shaped content, starting over with an empty store.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use zonewise_core::error::Result;
use zonewise_core::types::HistoryStore;

/// Durable key-value access to saved transcripts.
pub trait HistoryRepository {
    /// Load the entire store. Degrades to an empty store on any failure.
    fn load_all(&self) -> HistoryStore;

    /// Persist the entire store, replacing whatever was there.
    fn save_all(&self, store: &HistoryStore) -> Result<()>;
}

// =============================================================================
// JsonHistoryRepository
// =============================================================================

/// JSON-file-backed repository, one file for all users.
pub struct JsonHistoryRepository {
    path: PathBuf,
}

impl JsonHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryRepository for JsonHistoryRepository {
    fn load_all(&self) -> HistoryStore {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No history file at {}; starting empty", self.path.display());
                return HistoryStore::new();
            }
            Err(e) => {
                warn!(
                    "Failed to read history file {}: {}. Starting empty.",
                    self.path.display(),
                    e
                );
                return HistoryStore::new();
            }
        };

        // Legacy formats (e.g. a top-level array) fail to deserialize and
        // are discarded, not migrated.
        match serde_json::from_str(&content) {
            Ok(store) => store,
            Err(e) => {
                warn!(
                    "Discarding malformed history file {}: {}",
                    self.path.display(),
                    e
                );
                HistoryStore::new()
            }
        }
    }

    fn save_all(&self, store: &HistoryStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(store)?;
        std::fs::write(&self.path, content)?;
        debug!(
            chats = store.chat_count(),
            "History saved to {}",
            self.path.display()
        );
        Ok(())
    }
}

// =============================================================================
// MemoryRepository
// =============================================================================

/// In-memory repository for engine tests.
#[derive(Default)]
pub struct MemoryRepository {
    store: RefCell<HistoryStore>,
    save_count: Cell<usize>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store as of the last `save_all`.
    pub fn saved(&self) -> HistoryStore {
        self.store.borrow().clone()
    }

    /// How many times `save_all` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl HistoryRepository for MemoryRepository {
    fn load_all(&self) -> HistoryStore {
        self.store.borrow().clone()
    }

    fn save_all(&self, store: &HistoryStore) -> Result<()> {
        *self.store.borrow_mut() = store.clone();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

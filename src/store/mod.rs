// src/store/mod.rs

//! The record store: single writer of the conversation list, backed by one
//! of two interchangeable storage ports chosen at start-up.

pub mod snapshot;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::StorageBackend;
use crate::db::RemoteQueryStore;
use crate::domain::conversation::{new_record_id, next_update_stamp};
use crate::domain::{views, ConversationRecord, RecordInput, Status};
use crate::errors::StoreError;

pub use snapshot::LocalSnapshotStore;

/// Persistence seen by the record store. Implementations persist whole records
/// and never decide ids, timestamps or idempotency; the store does.
pub trait StoragePort: Send + Sync {
    /// Human-readable backend description (settings page, logs).
    fn describe(&self) -> String;

    fn load_all(&self) -> Result<Vec<ConversationRecord>, StoreError>;

    /// Place a new record at the most-recent position.
    fn insert(&self, record: &ConversationRecord) -> Result<(), StoreError>;

    /// Set status and `updated_at` of one record; `NotFound` if the id is absent.
    fn update_status(
        &self,
        id: &str,
        status: Status,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    fn find(&self, id: &str) -> Result<Option<ConversationRecord>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|r| r.id == id))
    }

    /// Query is already trimmed and non-empty.
    fn search(&self, query: &str) -> Result<Vec<ConversationRecord>, StoreError> {
        Ok(views::search(&self.load_all()?, query))
    }
}

pub struct RecordStore {
    port: Box<dyn StoragePort>,
}

impl RecordStore {
    pub fn new(port: impl StoragePort + 'static) -> Self {
        Self {
            port: Box::new(port),
        }
    }

    /// Open the backend named by configuration. Called once at start-up.
    pub fn from_backend(backend: &StorageBackend) -> Result<Self, StoreError> {
        let store = match backend {
            StorageBackend::LocalSnapshot { data_dir } => {
                RecordStore::new(LocalSnapshotStore::open(data_dir)?)
            }
            StorageBackend::RemoteQuery { db_path } => {
                RecordStore::new(RemoteQueryStore::open(db_path)?)
            }
        };
        info!(backend = %store.describe(), "record store ready");
        Ok(store)
    }

    pub fn describe(&self) -> String {
        self.port.describe()
    }

    /// Owned snapshot of every record. Backend failures degrade to an empty list.
    pub fn load_all(&self) -> Vec<ConversationRecord> {
        match self.port.load_all() {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "could not read conversations, showing none");
                Vec::new()
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<ConversationRecord> {
        match self.port.find(id) {
            Ok(found) => found,
            Err(err) => {
                warn!(error = %err, id, "could not look up conversation");
                None
            }
        }
    }

    /// Validate the draft, assign id and timestamps, persist.
    /// Nothing is written when validation fails.
    pub fn insert(
        &self,
        draft: RecordInput,
        now: DateTime<Utc>,
    ) -> Result<ConversationRecord, StoreError> {
        let record = draft.into_record(new_record_id(), now)?;
        self.port.insert(&record)?;
        info!(id = %record.id, status = %record.status, "conversation created");
        Ok(record)
    }

    /// Reassign the pipeline status. Same status is a no-op that keeps `updated_at`.
    pub fn update_status(
        &self,
        id: &str,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<ConversationRecord, StoreError> {
        let current = self
            .port
            .find(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if current.status == status {
            return Ok(current);
        }

        let updated_at = next_update_stamp(current.updated_at, now);
        self.port.update_status(id, status, updated_at)?;
        info!(id, from = %current.status, to = %status, "conversation moved");

        Ok(ConversationRecord {
            status,
            updated_at,
            ..current
        })
    }

    /// Blank queries match nothing and never reach the backend.
    pub fn search(&self, query: &str) -> Vec<ConversationRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.port.search(query) {
            Ok(hits) => hits,
            Err(err) => {
                warn!(error = %err, "search failed");
                Vec::new()
            }
        }
    }
}

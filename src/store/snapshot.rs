// src/store/snapshot.rs

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::{ConversationRecord, Status};
use crate::errors::StoreError;
use crate::store::StoragePort;

/// The single key the whole list lives under.
pub const SNAPSHOT_KEY: &str = "conversas";

/// Whole-list JSON blob in `<data_dir>/conversas.json`.
///
/// Every mutation reads the blob, edits it in memory and replaces the file
/// (temp file + rename). Mutations within the process are serialized; other
/// processes writing the same file race last-writer-wins.
pub struct LocalSnapshotStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalSnapshotStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            StoreError::StorageWrite(format!("create {} failed: {e}", dir.display()))
        })?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{SNAPSHOT_KEY}.json"))
    }

    fn read_records(&self) -> Result<Vec<ConversationRecord>, StoreError> {
        self.read_snapshot().map(|snapshot| snapshot.records)
    }

    fn read_snapshot(&self) -> Result<Snapshot, StoreError> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(blob) => decode_snapshot(&blob),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(e) => Err(StoreError::StorageRead(format!(
                "read {} failed: {e}",
                path.display()
            ))),
        }
    }

    fn write_records(&self, records: &[ConversationRecord]) -> Result<(), StoreError> {
        let path = self.path();
        let tmp = path.with_extension("json.tmp");

        let blob = serde_json::to_string(records)
            .map_err(|e| StoreError::StorageWrite(format!("serialize failed: {e}")))?;
        fs::write(&tmp, blob)
            .map_err(|e| StoreError::StorageWrite(format!("write {} failed: {e}", tmp.display())))?;
        fs::rename(&tmp, &path).map_err(|e| {
            StoreError::StorageWrite(format!("replace {} failed: {e}", path.display()))
        })?;

        debug!(count = records.len(), "snapshot written");
        Ok(())
    }

    /// Move an unreadable blob aside so the next write does not destroy it.
    /// Each copy gets its own timestamped name.
    fn preserve_unreadable(&self) -> Result<PathBuf, StoreError> {
        let path = self.path();
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let mut aside = path.with_extension(format!("json.corrupt-{stamp}"));
        let mut n = 1;
        while aside.exists() {
            aside = path.with_extension(format!("json.corrupt-{stamp}-{n}"));
            n += 1;
        }
        fs::rename(&path, &aside).map_err(|e| {
            StoreError::StorageWrite(format!("move aside {} failed: {e}", path.display()))
        })?;
        warn!(path = %aside.display(), "unreadable snapshot moved aside");
        Ok(aside)
    }

    /// Read-modify-write of the whole list.
    fn mutate<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Vec<ConversationRecord>) -> Result<(), StoreError>,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::StorageWrite("snapshot lock poisoned".into()))?;

        let mut records = match self.read_snapshot() {
            Ok(Snapshot { records, skipped: 0 }) => records,
            Ok(Snapshot { records, skipped }) => {
                warn!(skipped, "snapshot has unreadable entries, keeping a copy");
                self.preserve_unreadable()?;
                records
            }
            Err(err) => {
                warn!(error = %err, "snapshot unreadable, starting from an empty list");
                self.preserve_unreadable()?;
                Vec::new()
            }
        };

        f(&mut records)?;
        self.write_records(&records)
    }
}

impl StoragePort for LocalSnapshotStore {
    fn describe(&self) -> String {
        format!("local snapshot ({})", self.path().display())
    }

    fn load_all(&self) -> Result<Vec<ConversationRecord>, StoreError> {
        self.read_records()
    }

    fn insert(&self, record: &ConversationRecord) -> Result<(), StoreError> {
        self.mutate(|records| {
            if records.iter().any(|r| r.id == record.id) {
                return Err(StoreError::StorageWrite(format!(
                    "id {} already in use",
                    record.id
                )));
            }
            records.insert(0, record.clone());
            Ok(())
        })
    }

    fn update_status(
        &self,
        id: &str,
        status: Status,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.mutate(|records| {
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            record.status = status;
            record.updated_at = updated_at;
            Ok(())
        })
    }
}

/// Best-effort parse: the blob must be a JSON array; elements that are not
/// record-shaped are skipped.
pub fn parse_snapshot(blob: &str) -> Result<Vec<ConversationRecord>, StoreError> {
    decode_snapshot(blob).map(|snapshot| snapshot.records)
}

/// Decoded blob plus how many elements could not be read.
#[derive(Debug, Default)]
struct Snapshot {
    records: Vec<ConversationRecord>,
    skipped: usize,
}

fn decode_snapshot(blob: &str) -> Result<Snapshot, StoreError> {
    if blob.trim().is_empty() {
        return Ok(Snapshot::default());
    }

    let items: Vec<Value> = serde_json::from_str(blob)
        .map_err(|e| StoreError::StorageRead(format!("snapshot is not a JSON array: {e}")))?;

    let total = items.len();
    let records: Vec<ConversationRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed snapshot entry");
                None
            }
        })
        .collect();

    Ok(Snapshot {
        skipped: total - records.len(),
        records,
    })
}

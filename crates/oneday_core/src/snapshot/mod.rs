//! Snapshot acquisition contracts.
//!
//! # Responsibility
//! - Define how a refresh obtains the persisted snapshot for an instance.
//! - Provide in-memory and SQLite-backed readers.
//!
//! # Invariants
//! - Readers never write to the underlying store.
//! - A read failure abandons only the affected instance's refresh.

mod sqlite_reader;

pub use sqlite_reader::SqliteSnapshotReader;

use crate::db::DbError;
use crate::model::snapshot::{InstanceId, Snapshot};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Failure to obtain a snapshot for one instance.
#[derive(Debug)]
pub enum SnapshotError {
    /// Backing store is missing, unreadable or has an unsupported schema.
    Store(DbError),
    /// Reader has no data for this instance.
    Unavailable(InstanceId),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "snapshot store read failed: {err}"),
            Self::Unavailable(instance_id) => {
                write!(f, "no snapshot available for instance {instance_id}")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Store(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(DbError::Sqlite(value))
    }
}

/// Source of the latest persisted snapshot.
pub trait SnapshotReader {
    fn read_snapshot(&self, instance_id: InstanceId) -> SnapshotResult<Snapshot>;
}

/// Serves one fixed snapshot to every instance.
///
/// Used when the host hands the snapshot over inline.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotReader {
    snapshot: Snapshot,
}

impl MemorySnapshotReader {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotReader for MemorySnapshotReader {
    fn read_snapshot(&self, _instance_id: InstanceId) -> SnapshotResult<Snapshot> {
        Ok(self.snapshot.clone())
    }
}

//! Read-only SQLite access to the snapshot store written by the main app.
//!
//! # Responsibility
//! - Open the store without ever creating, migrating or writing it.
//! - Reject stores whose schema is newer than this build understands.
//!
//! # Invariants
//! - Connections are opened with `SQLITE_OPEN_READ_ONLY`; a missing file is an
//!   error, never an empty store.
//! - Schema version is read from `PRAGMA user_version` and never changed here.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::open_db_read_only;

/// Schema the main application writes: one `widget_data(key, value)` table.
pub const WIDGET_DATA_SCHEMA: &str = include_str!("widget_data.sql");
/// Highest `user_version` this build can read.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "snapshot store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

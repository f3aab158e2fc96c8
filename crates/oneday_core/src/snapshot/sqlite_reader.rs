//! SQLite-backed snapshot reader.

use super::{SnapshotReader, SnapshotResult};
use crate::db::open_db_read_only;
use crate::model::snapshot::{InstanceId, Snapshot};
use log::debug;
use rusqlite::Connection;
use std::path::Path;

const SNAPSHOT_SELECT_SQL: &str = "SELECT key, value FROM widget_data ORDER BY key;";

/// Reads the application-wide `widget_data` table.
///
/// All instances share one snapshot, so `instance_id` only tags diagnostics.
pub struct SqliteSnapshotReader {
    conn: Connection,
}

impl SqliteSnapshotReader {
    /// Opens the store at `path` read-only.
    ///
    /// A missing file or a too-new schema is `SnapshotError::Store`.
    pub fn open(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        Ok(Self {
            conn: open_db_read_only(path)?,
        })
    }
}

impl SnapshotReader for SqliteSnapshotReader {
    fn read_snapshot(&self, instance_id: InstanceId) -> SnapshotResult<Snapshot> {
        let mut stmt = self.conn.prepare(SNAPSHOT_SELECT_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        let snapshot = rows.collect::<rusqlite::Result<Snapshot>>()?;

        debug!(
            "event=snapshot_read module=snapshot status=ok instance_id={} keys={}",
            instance_id,
            snapshot.len()
        );
        Ok(snapshot)
    }
}

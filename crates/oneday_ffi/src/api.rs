//! FFI refresh API for the Flutter home-widget host.
//!
//! # Responsibility
//! - Expose widget refresh as a sync, use-case level call to Dart via FRB.
//! - Hand plans over as JSON so the platform side applies them verbatim.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - A refresh call always returns an envelope; failures are per instance.

use oneday_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    InstanceId, LocalDateHeader, MemorySnapshotReader, RefreshReport, Snapshot, SnapshotReader,
    SqliteSnapshotReader, WidgetKind, WidgetRefresher,
};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const WIDGET_DB_FILE_NAME: &str = "oneday_widget.sqlite3";
const WIDGET_DB_PATH_ENV: &str = "ONEDAY_WIDGET_DB_PATH";
static WIDGET_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes widget logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Render plan for one refreshed widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetUpdateItem {
    pub instance_id: i32,
    /// Serialized `RenderPlan`; apply as one atomic update.
    pub plan_json: String,
}

/// Instance left untouched by this refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSkipItem {
    pub instance_id: i32,
    /// Diagnostic text; not meant for end users.
    pub message: String,
}

/// Response envelope for one refresh batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRefreshResponse {
    /// `false` only when the request itself was unusable (e.g. unknown kind).
    pub ok: bool,
    pub updates: Vec<WidgetUpdateItem>,
    pub skipped: Vec<WidgetSkipItem>,
    pub message: String,
}

impl WidgetRefreshResponse {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            updates: Vec::new(),
            skipped: Vec::new(),
            message: message.into(),
        }
    }

    fn all_skipped(instance_ids: &BTreeSet<InstanceId>, message: String) -> Self {
        Self {
            ok: true,
            updates: Vec::new(),
            skipped: instance_ids
                .iter()
                .map(|&instance_id| WidgetSkipItem {
                    instance_id,
                    message: message.clone(),
                })
                .collect(),
            message,
        }
    }
}

/// Refreshes widgets from the shared SQLite snapshot store.
///
/// `kind` is `balance|tasks`. The store path comes from
/// `ONEDAY_WIDGET_DB_PATH`, falling back to the temp directory. A missing
/// store skips every instance; it is never created here.
///
/// # FFI contract
/// - Sync call, read-only DB access.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_refresh(kind: String, instance_ids: Vec<i32>) -> WidgetRefreshResponse {
    let kind = match kind.parse::<WidgetKind>() {
        Ok(kind) => kind,
        Err(err) => return WidgetRefreshResponse::rejected(err),
    };
    let instance_ids = instance_ids.into_iter().collect::<BTreeSet<_>>();
    refresh_from_store(&resolve_widget_db_path(), kind, &instance_ids)
}

fn refresh_from_store(
    path: &Path,
    kind: WidgetKind,
    instance_ids: &BTreeSet<InstanceId>,
) -> WidgetRefreshResponse {
    match SqliteSnapshotReader::open(path) {
        Ok(reader) => run_refresh(reader, kind, instance_ids),
        Err(err) => {
            log::error!(
                "event=widget_refresh module=ffi status=error error_code=store_unavailable kind={} error={}",
                kind,
                err
            );
            WidgetRefreshResponse::all_skipped(instance_ids, err.to_string())
        }
    }
}

/// Refreshes widgets from a snapshot handed over by the host.
///
/// # FFI contract
/// - Sync call, no I/O.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_refresh_snapshot(
    kind: String,
    instance_ids: Vec<i32>,
    snapshot: HashMap<String, String>,
) -> WidgetRefreshResponse {
    let kind = match kind.parse::<WidgetKind>() {
        Ok(kind) => kind,
        Err(err) => return WidgetRefreshResponse::rejected(err),
    };
    let instance_ids = instance_ids.into_iter().collect::<BTreeSet<_>>();
    let reader = MemorySnapshotReader::new(snapshot.into_iter().collect::<Snapshot>());

    run_refresh(reader, kind, &instance_ids)
}

fn run_refresh(
    reader: impl SnapshotReader,
    kind: WidgetKind,
    instance_ids: &BTreeSet<InstanceId>,
) -> WidgetRefreshResponse {
    let report = WidgetRefresher::new(reader, LocalDateHeader).refresh(kind, instance_ids);
    to_response(report)
}

fn to_response(report: RefreshReport) -> WidgetRefreshResponse {
    let mut updates = Vec::with_capacity(report.updates.len());
    let mut skipped = report
        .skipped
        .into_iter()
        .map(|failure| WidgetSkipItem {
            instance_id: failure.instance_id,
            message: failure.to_string(),
        })
        .collect::<Vec<_>>();

    for update in report.updates {
        match serde_json::to_string(&update.plan) {
            Ok(plan_json) => updates.push(WidgetUpdateItem {
                instance_id: update.instance_id,
                plan_json,
            }),
            Err(err) => skipped.push(WidgetSkipItem {
                instance_id: update.instance_id,
                message: format!("plan encoding failed: {err}"),
            }),
        }
    }
    skipped.sort_by_key(|item| item.instance_id);

    let message = format!(
        "Updated {} widget(s), skipped {}.",
        updates.len(),
        skipped.len()
    );
    WidgetRefreshResponse {
        ok: true,
        updates,
        skipped,
        message,
    }
}

fn resolve_widget_db_path() -> PathBuf {
    WIDGET_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(WIDGET_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(WIDGET_DB_FILE_NAME)
        })
        .clone()
}

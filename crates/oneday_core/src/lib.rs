//! Core rendering logic for OneDay home-screen widgets.
//! Turns the persisted application snapshot into host-applicable render plans.

pub mod date_header;
pub mod db;
pub mod logging;
pub mod model;
pub mod refresh;
pub mod snapshot;
pub mod view;

pub use date_header::{format_date_header, DateHeaderSource, FixedDateHeader, LocalDateHeader};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::snapshot::{InstanceId, Snapshot};
pub use model::task::{StatusIcon, TaskListViewModel, TaskRecord, TaskRow};
pub use model::view::{FinancialViewModel, WidgetKind, WidgetViewModel};
pub use refresh::{InstanceUpdate, RefreshFailure, RefreshReport, RefreshStage, WidgetRefresher};
pub use snapshot::{
    MemorySnapshotReader, SnapshotError, SnapshotReader, SnapshotResult, SqliteSnapshotReader,
};
pub use view::error_presenter::on_malformed;
pub use view::render::{
    render, ClickAction, ImageId, LayoutId, RenderInstruction, RenderPlan, ViewId,
};
pub use view::render_instance;
pub use view::task_payload::{parse_task_list, MalformedTaskData, ParsedTaskList};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

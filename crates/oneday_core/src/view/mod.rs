//! Snapshot to widget rendering pipeline.
//!
//! # Responsibility
//! - Parse persisted task payloads tolerantly.
//! - Build typed view models and render them into instruction plans.
//! - Substitute a diagnostic list when task data is unreadable.
//!
//! # Invariants
//! - Every stage is a pure function of its input.
//! - No stage performs I/O; snapshot acquisition lives in `snapshot`.

pub mod builder;
pub mod error_presenter;
pub mod render;
pub mod task_payload;

use crate::model::snapshot::Snapshot;
use crate::model::view::WidgetKind;
use render::RenderPlan;

/// Builds and renders one widget instance from its snapshot.
///
/// This is the host-independent form of a widget update callback.
pub fn render_instance(kind: WidgetKind, snapshot: &Snapshot, date_header: &str) -> RenderPlan {
    render::render(&builder::build(kind, snapshot, date_header))
}

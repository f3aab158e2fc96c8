//! Host-facing refresh entry point.
//!
//! # Responsibility
//! - Drive read, build and render for each requested widget instance.
//! - Contain every per-instance failure so a batch call always succeeds.
//!
//! # Invariants
//! - Instances are independent; one failure never affects another.
//! - A skipped instance yields no plan, so the host keeps its old content.
//! - Only complete plans are returned; applying them is the host's job.

use crate::date_header::DateHeaderSource;
use crate::logging::{panic_payload_text, sanitize_message, MAX_PANIC_PAYLOAD_CHARS};
use crate::model::snapshot::InstanceId;
use crate::model::view::WidgetKind;
use crate::snapshot::SnapshotReader;
use crate::view::builder::build;
use crate::view::render::{render, RenderPlan};
use log::{error, info};
use std::any::Any;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Per-instance refresh stage where an unexpected failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStage {
    ReadingSnapshot,
    BuildingViewModel,
    Rendering,
}

impl RefreshStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadingSnapshot => "reading_snapshot",
            Self::BuildingViewModel => "building_view_model",
            Self::Rendering => "rendering",
        }
    }
}

/// Instance whose refresh was abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshFailure {
    pub instance_id: InstanceId,
    pub stage: RefreshStage,
    pub reason: String,
}

impl Display for RefreshFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "refresh of instance {} failed while {}: {}",
            self.instance_id,
            self.stage.as_str(),
            self.reason
        )
    }
}

impl Error for RefreshFailure {}

/// Complete plan for one refreshed instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceUpdate {
    pub instance_id: InstanceId,
    pub plan: RenderPlan,
}

/// Outcome of one refresh batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Plans in ascending instance order.
    pub updates: Vec<InstanceUpdate>,
    pub skipped: Vec<RefreshFailure>,
}

/// Refresh driver over injected snapshot and date collaborators.
pub struct WidgetRefresher<R, D> {
    reader: R,
    date_header: D,
}

impl<R: SnapshotReader, D: DateHeaderSource> WidgetRefresher<R, D> {
    pub fn new(reader: R, date_header: D) -> Self {
        Self {
            reader,
            date_header,
        }
    }

    /// Re-renders every instance in `instance_ids` from the latest snapshot.
    ///
    /// Never fails as a whole; abandoned instances are listed in
    /// `RefreshReport::skipped`.
    pub fn refresh(&self, kind: WidgetKind, instance_ids: &BTreeSet<InstanceId>) -> RefreshReport {
        let mut report = RefreshReport::default();
        for &instance_id in instance_ids {
            match self.refresh_instance(kind, instance_id) {
                Ok(plan) => report.updates.push(InstanceUpdate { instance_id, plan }),
                Err(failure) => report.skipped.push(failure),
            }
        }

        info!(
            "event=widget_refresh_batch module=refresh status=ok kind={} requested={} updated={} skipped={}",
            kind,
            instance_ids.len(),
            report.updates.len(),
            report.skipped.len()
        );
        report
    }

    /// Produces the full plan for one instance.
    pub fn refresh_instance(
        &self,
        kind: WidgetKind,
        instance_id: InstanceId,
    ) -> Result<RenderPlan, RefreshFailure> {
        let result = self.run_stages(kind, instance_id);
        match &result {
            Ok(plan) => info!(
                "event=widget_refresh module=refresh status=ok kind={} instance_id={} instructions={}",
                kind,
                instance_id,
                plan.instructions.len()
            ),
            Err(failure) => error!(
                "event=widget_refresh module=refresh status=error error_code=unexpected_failure kind={} instance_id={} stage={} error={}",
                kind,
                instance_id,
                failure.stage.as_str(),
                failure.reason
            ),
        }
        result
    }

    fn run_stages(
        &self,
        kind: WidgetKind,
        instance_id: InstanceId,
    ) -> Result<RenderPlan, RefreshFailure> {
        let fail = |stage: RefreshStage, reason: String| RefreshFailure {
            instance_id,
            stage,
            reason,
        };

        let snapshot = self
            .reader
            .read_snapshot(instance_id)
            .map_err(|err| fail(RefreshStage::ReadingSnapshot, err.to_string()))?;

        let view_model = catch_unwind(AssertUnwindSafe(|| {
            let date_header = match kind {
                WidgetKind::Tasks => self.date_header.date_header(),
                WidgetKind::Balance => String::new(),
            };
            build(kind, &snapshot, &date_header)
        }))
        .map_err(|payload| fail(RefreshStage::BuildingViewModel, panic_reason(payload)))?;

        catch_unwind(AssertUnwindSafe(|| render(&view_model)))
            .map_err(|payload| fail(RefreshStage::Rendering, panic_reason(payload)))
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    let message = panic_payload_text(payload.as_ref());
    format!("panic: {}", sanitize_message(&message, MAX_PANIC_PAYLOAD_CHARS))
}

#[cfg(test)]
mod tests {
    use super::{panic_reason, RefreshStage, WidgetRefresher};
    use crate::date_header::{DateHeaderSource, FixedDateHeader};
    use crate::model::snapshot::{InstanceId, Snapshot};
    use crate::model::view::WidgetKind;
    use crate::snapshot::{MemorySnapshotReader, SnapshotError, SnapshotReader, SnapshotResult};
    use std::collections::BTreeSet;

    struct PanickingHeader;

    impl DateHeaderSource for PanickingHeader {
        fn date_header(&self) -> String {
            panic!("clock unavailable")
        }
    }

    struct MissingOdd;

    impl SnapshotReader for MissingOdd {
        fn read_snapshot(&self, instance_id: InstanceId) -> SnapshotResult<Snapshot> {
            if instance_id % 2 == 1 {
                Err(SnapshotError::Unavailable(instance_id))
            } else {
                Ok(Snapshot::new())
            }
        }
    }

    #[test]
    fn read_failure_skips_only_that_instance() {
        let refresher = WidgetRefresher::new(MissingOdd, FixedDateHeader::default());
        let ids: BTreeSet<InstanceId> = [1, 2, 3, 4].into_iter().collect();
        let report = refresher.refresh(WidgetKind::Balance, &ids);

        let updated: Vec<_> = report.updates.iter().map(|u| u.instance_id).collect();
        assert_eq!(updated, vec![2, 4]);
        assert_eq!(report.skipped.len(), 2);
        assert!(report
            .skipped
            .iter()
            .all(|f| f.stage == RefreshStage::ReadingSnapshot));
    }

    #[test]
    fn panic_while_building_is_contained() {
        let refresher = WidgetRefresher::new(MemorySnapshotReader::default(), PanickingHeader);
        let failure = refresher
            .refresh_instance(WidgetKind::Tasks, 9)
            .expect_err("panicking collaborator should abandon the instance");
        assert_eq!(failure.instance_id, 9);
        assert_eq!(failure.stage, RefreshStage::BuildingViewModel);
        assert!(failure.reason.contains("clock unavailable"));
    }

    #[test]
    fn balance_refresh_does_not_ask_for_date_header() {
        let refresher = WidgetRefresher::new(MemorySnapshotReader::default(), PanickingHeader);
        assert!(refresher.refresh_instance(WidgetKind::Balance, 1).is_ok());
    }

    #[test]
    fn panic_reason_is_single_line_and_capped() {
        let reason = panic_reason(Box::new(format!("a\nb{}", "x".repeat(400))));
        assert!(!reason.contains('\n'));
        assert!(reason.ends_with("..."));
    }
}

//! Diagnostic substitute for unreadable task payloads.

use crate::model::task::TaskListViewModel;
use crate::view::task_payload::MalformedTaskData;
use log::warn;

/// Returns the one-row diagnostic task list.
///
/// The row is titled `"Error loading tasks."` and carries neither a
/// description nor a status indicator.
pub fn on_malformed() -> TaskListViewModel {
    TaskListViewModel::LoadError
}

/// Logs the parse failure and returns the diagnostic task list.
pub(crate) fn present_malformed(err: &MalformedTaskData) -> TaskListViewModel {
    warn!(
        "event=tasks_parse module=view status=error error_code=malformed_task_data reason={}",
        err.reason()
    );
    on_malformed()
}

//! Snapshot to view model transformation.
//!
//! # Responsibility
//! - Resolve financial display strings with their defaults.
//! - Parse the task payload and pick the normal, empty or diagnostic list.
//!
//! # Invariants
//! - Building never fails; malformed task data degrades to the diagnostic
//!   list instead of partially populated output.
//! - Financial strings are passed through byte-for-byte.

use crate::model::snapshot::{
    Snapshot, DEFAULT_MONEY, DEFAULT_TASKS_JSON, KEY_BALANCE, KEY_EXPENSES, KEY_INCOME,
    KEY_TASKS_JSON,
};
use crate::model::task::TaskListViewModel;
use crate::model::view::{FinancialViewModel, WidgetKind, WidgetViewModel};
use crate::view::error_presenter::present_malformed;
use crate::view::task_payload::{parse_task_list, ParsedTaskList};

/// Builds the view model for one widget variant.
///
/// `date_header` is only used by the task variant.
pub fn build(kind: WidgetKind, snapshot: &Snapshot, date_header: &str) -> WidgetViewModel {
    match kind {
        WidgetKind::Balance => WidgetViewModel::Balance(build_financial(snapshot)),
        WidgetKind::Tasks => WidgetViewModel::Tasks {
            date_header: date_header.to_string(),
            tasks: build_task_list(snapshot),
        },
    }
}

/// Reads `balance`, `income` and `expenses`, defaulting each to `"Rp0"`.
pub fn build_financial(snapshot: &Snapshot) -> FinancialViewModel {
    FinancialViewModel {
        balance: snapshot.get_or(KEY_BALANCE, DEFAULT_MONEY).to_string(),
        income: snapshot.get_or(KEY_INCOME, DEFAULT_MONEY).to_string(),
        expenses: snapshot.get_or(KEY_EXPENSES, DEFAULT_MONEY).to_string(),
    }
}

/// Reads and parses `tasks_json`, defaulting to an empty list.
pub fn build_task_list(snapshot: &Snapshot) -> TaskListViewModel {
    let raw = snapshot.get_or(KEY_TASKS_JSON, DEFAULT_TASKS_JSON);
    match parse_task_list(raw) {
        ParsedTaskList::Valid(records) => TaskListViewModel::from_records(records),
        ParsedTaskList::Malformed(err) => present_malformed(&err),
    }
}

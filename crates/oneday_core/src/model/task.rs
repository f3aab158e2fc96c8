//! Task rows shown by the task widget.
//!
//! # Responsibility
//! - Define the typed record parsed from one payload element.
//! - Define the task list view model with its two sentinels.
//! - Project every list shape into display rows.
//!
//! # Invariants
//! - `TaskListViewModel::rows()` is never empty.
//! - Sentinel rows never carry a status indicator.

use serde::{Deserialize, Serialize};

/// Title used when a record has no usable `title`.
pub const DEFAULT_TASK_TITLE: &str = "No Title";
/// Title of the row shown for an empty task list.
pub const EMPTY_TITLE: &str = "No Task Today";
/// Description of the row shown for an empty task list.
pub const EMPTY_DESCRIPTION: &str = "Enjoy your day!";
/// Title of the diagnostic row shown for an unreadable payload.
pub const LOAD_ERROR_TITLE: &str = "Error loading tasks.";

/// One task parsed from the persisted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    /// Empty when the payload had none; an empty value hides the line.
    pub description: String,
    /// `true` when the task is completed.
    pub status: bool,
}

impl Default for TaskRecord {
    fn default() -> Self {
        Self {
            title: DEFAULT_TASK_TITLE.to_string(),
            description: String::new(),
            status: false,
        }
    }
}

/// Checkbox image selected for a real task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Checked,
    Unchecked,
}

impl StatusIcon {
    pub fn from_status(done: bool) -> Self {
        if done {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

/// Typed task list for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "records", rename_all = "snake_case")]
pub enum TaskListViewModel {
    /// At least one parsed record, in payload order.
    Tasks(Vec<TaskRecord>),
    /// The payload parsed to an empty list.
    Empty,
    /// The payload could not be parsed; see `view::error_presenter`.
    LoadError,
}

impl TaskListViewModel {
    /// Wraps parsed records, mapping zero records to the `Empty` sentinel.
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Tasks(records)
        }
    }

    /// Projects the list into display rows.
    ///
    /// # Invariants
    /// - Always returns at least one row.
    /// - Real rows keep payload order and always carry an icon.
    pub fn rows(&self) -> Vec<TaskRow> {
        match self {
            // `from_records` never builds an empty `Tasks`, but the enum is
            // public; keep the container populated either way.
            Self::Tasks(records) if records.is_empty() => vec![TaskRow::empty_day()],
            Self::Tasks(records) => records.iter().map(TaskRow::from_record).collect(),
            Self::Empty => vec![TaskRow::empty_day()],
            Self::LoadError => vec![TaskRow::load_error()],
        }
    }
}

/// Display-ready projection of one child block in the task container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub title: String,
    /// `None` suppresses the description line.
    pub description: Option<String>,
    /// `None` hides the status indicator.
    pub icon: Option<StatusIcon>,
}

impl TaskRow {
    fn from_record(record: &TaskRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: Some(record.description.clone()).filter(|value| !value.is_empty()),
            icon: Some(StatusIcon::from_status(record.status)),
        }
    }

    fn empty_day() -> Self {
        Self {
            title: EMPTY_TITLE.to_string(),
            description: Some(EMPTY_DESCRIPTION.to_string()),
            icon: None,
        }
    }

    fn load_error() -> Self {
        Self {
            title: LOAD_ERROR_TITLE.to_string(),
            description: None,
            icon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StatusIcon, TaskListViewModel, TaskRecord, EMPTY_TITLE, LOAD_ERROR_TITLE};

    #[test]
    fn zero_records_become_empty_sentinel() {
        assert_eq!(
            TaskListViewModel::from_records(Vec::new()),
            TaskListViewModel::Empty
        );
    }

    #[test]
    fn rows_are_never_empty() {
        for list in [
            TaskListViewModel::Empty,
            TaskListViewModel::LoadError,
            TaskListViewModel::Tasks(Vec::new()),
        ] {
            let rows = list.rows();
            assert_eq!(rows.len(), 1);
            assert!(rows[0].icon.is_none());
        }
        assert_eq!(TaskListViewModel::Empty.rows()[0].title, EMPTY_TITLE);
        assert_eq!(TaskListViewModel::LoadError.rows()[0].title, LOAD_ERROR_TITLE);
    }

    #[test]
    fn record_rows_hide_blank_description_and_map_status() {
        let rows = TaskListViewModel::from_records(vec![
            TaskRecord {
                title: "a".to_string(),
                description: String::new(),
                status: true,
            },
            TaskRecord {
                title: "b".to_string(),
                description: "details".to_string(),
                status: false,
            },
        ])
        .rows();

        assert_eq!(rows[0].description, None);
        assert_eq!(rows[0].icon, Some(StatusIcon::Checked));
        assert_eq!(rows[1].description.as_deref(), Some("details"));
        assert_eq!(rows[1].icon, Some(StatusIcon::Unchecked));
    }
}

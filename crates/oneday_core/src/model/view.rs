//! Per-variant widget view models.

use crate::model::task::TaskListViewModel;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Widget variant placed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Balance, income and expenses.
    Balance,
    /// Date header and daily task list.
    Tasks,
}

impl WidgetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Tasks => "tasks",
        }
    }
}

impl Display for WidgetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "balance" => Ok(Self::Balance),
            "tasks" => Ok(Self::Tasks),
            other => Err(format!(
                "unsupported widget kind `{other}`; expected balance|tasks"
            )),
        }
    }
}

/// Money strings exactly as written by the main application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialViewModel {
    pub balance: String,
    pub income: String,
    pub expenses: String,
}

/// Fully typed input of the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetViewModel {
    Balance(FinancialViewModel),
    Tasks {
        /// Pre-formatted by the date header collaborator.
        date_header: String,
        tasks: TaskListViewModel,
    },
}

impl WidgetViewModel {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Balance(_) => WidgetKind::Balance,
            Self::Tasks { .. } => WidgetKind::Tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WidgetKind;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(" Balance ".parse::<WidgetKind>(), Ok(WidgetKind::Balance));
        assert_eq!("TASKS".parse::<WidgetKind>(), Ok(WidgetKind::Tasks));
        assert!("calendar".parse::<WidgetKind>().is_err());
        assert!("task".parse::<WidgetKind>().is_err());
    }
}

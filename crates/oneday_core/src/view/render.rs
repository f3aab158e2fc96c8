//! View model to render instruction transformation.
//!
//! # Responsibility
//! - Emit the ordered, host-applicable instruction list for one widget.
//! - Name layout, view, image and action targets symbolically; the host
//!   adapter maps them to platform resources.
//!
//! # Invariants
//! - Rendering is pure: same view model, same plan.
//! - Every plan starts with the container click binding.
//! - A task plan clears the task container and then appends at least one
//!   child block, in row order.

use crate::model::task::{StatusIcon, TaskListViewModel, TaskRow};
use crate::model::view::{FinancialViewModel, WidgetViewModel};
use serde::{Deserialize, Serialize};

/// Layout resource a plan or child block is inflated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutId {
    BalanceWidget,
    TaskWidget,
    TaskItem,
}

/// View addressed by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    WidgetContainer,
    Balance,
    Income,
    Expenses,
    WidgetDate,
    TasksList,
    TaskTitle,
    TaskDescription,
    StatusIcon,
}

/// Image resource for an image view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageId {
    CheckboxChecked,
    CheckboxUnchecked,
}

impl From<StatusIcon> for ImageId {
    fn from(value: StatusIcon) -> Self {
        match value {
            StatusIcon::Checked => Self::CheckboxChecked,
            StatusIcon::Unchecked => Self::CheckboxUnchecked,
        }
    }
}

/// Host action bound to a click target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    /// Opens the main application.
    LaunchPrimaryApp,
}

/// One observable effect on a widget surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderInstruction {
    SetText {
        view: ViewId,
        text: String,
    },
    SetVisibility {
        view: ViewId,
        visible: bool,
    },
    SetImage {
        view: ViewId,
        image: ImageId,
    },
    BindClick {
        view: ViewId,
        action: ClickAction,
    },
    ClearChildren {
        container: ViewId,
    },
    /// Inflates `layout`, applies `instructions` to it and appends it.
    AppendChild {
        container: ViewId,
        layout: LayoutId,
        instructions: Vec<RenderInstruction>,
    },
}

/// Complete update for one widget instance, applied atomically by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub layout: LayoutId,
    pub instructions: Vec<RenderInstruction>,
}

impl RenderPlan {
    /// Child blocks appended to `container`, in order.
    pub fn children_of(&self, container: ViewId) -> Vec<&[RenderInstruction]> {
        self.instructions
            .iter()
            .filter_map(|instruction| match instruction {
                RenderInstruction::AppendChild {
                    container: target,
                    instructions,
                    ..
                } if *target == container => Some(instructions.as_slice()),
                _ => None,
            })
            .collect()
    }
}

/// Renders one widget view model.
pub fn render(view_model: &WidgetViewModel) -> RenderPlan {
    match view_model {
        WidgetViewModel::Balance(financial) => render_balance(financial),
        WidgetViewModel::Tasks { date_header, tasks } => render_tasks(date_header, tasks),
    }
}

fn bind_launch() -> RenderInstruction {
    RenderInstruction::BindClick {
        view: ViewId::WidgetContainer,
        action: ClickAction::LaunchPrimaryApp,
    }
}

fn set_text(view: ViewId, text: &str) -> RenderInstruction {
    RenderInstruction::SetText {
        view,
        text: text.to_string(),
    }
}

fn render_balance(financial: &FinancialViewModel) -> RenderPlan {
    RenderPlan {
        layout: LayoutId::BalanceWidget,
        instructions: vec![
            set_text(ViewId::Balance, &financial.balance),
            set_text(ViewId::Income, &financial.income),
            set_text(ViewId::Expenses, &financial.expenses),
            bind_launch(),
        ],
    }
}

fn render_tasks(date_header: &str, tasks: &TaskListViewModel) -> RenderPlan {
    let rows = tasks.rows();
    let mut instructions = Vec::with_capacity(rows.len() + 3);
    instructions.push(bind_launch());
    instructions.push(set_text(ViewId::WidgetDate, date_header));
    instructions.push(RenderInstruction::ClearChildren {
        container: ViewId::TasksList,
    });
    instructions.extend(rows.iter().map(|row| RenderInstruction::AppendChild {
        container: ViewId::TasksList,
        layout: LayoutId::TaskItem,
        instructions: render_row(row),
    }));

    RenderPlan {
        layout: LayoutId::TaskWidget,
        instructions,
    }
}

fn render_row(row: &TaskRow) -> Vec<RenderInstruction> {
    let mut block = vec![set_text(ViewId::TaskTitle, &row.title)];

    match &row.description {
        Some(description) => {
            block.push(set_text(ViewId::TaskDescription, description));
            block.push(RenderInstruction::SetVisibility {
                view: ViewId::TaskDescription,
                visible: true,
            });
        }
        None => block.push(RenderInstruction::SetVisibility {
            view: ViewId::TaskDescription,
            visible: false,
        }),
    }

    match row.icon {
        Some(icon) => {
            block.push(RenderInstruction::SetImage {
                view: ViewId::StatusIcon,
                image: icon.into(),
            });
            block.push(RenderInstruction::SetVisibility {
                view: ViewId::StatusIcon,
                visible: true,
            });
        }
        None => block.push(RenderInstruction::SetVisibility {
            view: ViewId::StatusIcon,
            visible: false,
        }),
    }

    block
}

#[cfg(test)]
mod tests {
    use super::{render, ClickAction, LayoutId, RenderInstruction, ViewId};
    use crate::model::task::TaskListViewModel;
    use crate::model::view::{FinancialViewModel, WidgetViewModel};

    #[test]
    fn balance_plan_sets_three_texts_and_click() {
        let plan = render(&WidgetViewModel::Balance(FinancialViewModel {
            balance: "Rp10".to_string(),
            income: "Rp20".to_string(),
            expenses: "Rp5".to_string(),
        }));

        assert_eq!(plan.layout, LayoutId::BalanceWidget);
        assert_eq!(
            plan.instructions,
            vec![
                RenderInstruction::SetText {
                    view: ViewId::Balance,
                    text: "Rp10".to_string(),
                },
                RenderInstruction::SetText {
                    view: ViewId::Income,
                    text: "Rp20".to_string(),
                },
                RenderInstruction::SetText {
                    view: ViewId::Expenses,
                    text: "Rp5".to_string(),
                },
                RenderInstruction::BindClick {
                    view: ViewId::WidgetContainer,
                    action: ClickAction::LaunchPrimaryApp,
                },
            ]
        );
    }

    #[test]
    fn task_plan_clears_before_appending() {
        let plan = render(&WidgetViewModel::Tasks {
            date_header: "Friday\n16/10/26".to_string(),
            tasks: TaskListViewModel::Empty,
        });

        assert_eq!(plan.layout, LayoutId::TaskWidget);
        let clear_at = plan
            .instructions
            .iter()
            .position(|i| matches!(i, RenderInstruction::ClearChildren { .. }))
            .expect("plan should clear the task list");
        let first_append = plan
            .instructions
            .iter()
            .position(|i| matches!(i, RenderInstruction::AppendChild { .. }))
            .expect("plan should append a row");
        assert!(clear_at < first_append);
        assert_eq!(plan.children_of(ViewId::TasksList).len(), 1);
    }

    #[test]
    fn empty_day_block_shows_description_and_hides_icon() {
        let plan = render(&WidgetViewModel::Tasks {
            date_header: String::new(),
            tasks: TaskListViewModel::Empty,
        });
        let children = plan.children_of(ViewId::TasksList);
        let block = children[0];

        assert!(block.contains(&RenderInstruction::SetText {
            view: ViewId::TaskDescription,
            text: "Enjoy your day!".to_string(),
        }));
        assert!(block.contains(&RenderInstruction::SetVisibility {
            view: ViewId::StatusIcon,
            visible: false,
        }));
        assert!(!block
            .iter()
            .any(|i| matches!(i, RenderInstruction::SetImage { .. })));
    }
}

use thiserror::Error;

/// The command a selection was required for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    MarkCompleted,
    Remove,
}

impl std::fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionAction::MarkCompleted => write!(f, "mark as completed"),
            SelectionAction::Remove => write!(f, "remove"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task description cannot be empty.")]
    EmptyDescription,
    #[error("Please select a task to {0}.")]
    NoSelection(SelectionAction),
    #[error("Task {index} does not exist (only {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type TaskResult<T> = Result<T, TaskError>;

//! View-model derivation and line formatting for the task list.
//!
//! Everything in here is a pure function of a [`TaskStore`] and a
//! [`TaskFilter`]; the visible list is recomputed on every call and never
//! edited on its own.

use super::models::{Task, TaskStore};

/// Which tasks are currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Ongoing,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Ongoing => !task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Completed => "Completed",
            TaskFilter::Ongoing => "Ongoing",
        }
    }
}

/// Returns the tasks whose completion flag equals `show_completed`, in
/// store order.
pub fn filter(store: &TaskStore, show_completed: bool) -> Vec<&Task> {
    store
        .iter()
        .filter(|task| task.completed == show_completed)
        .collect()
}

/// Returns every task, unfiltered.
pub fn reset(store: &TaskStore) -> Vec<&Task> {
    store.iter().collect()
}

/// One visible row: the task plus where it lives in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEntry<'a> {
    pub store_index: usize,
    pub task: &'a Task,
}

/// The filtered list as shown to the user.
///
/// Positions in the view differ from positions in the store whenever a
/// filter is active; [`TaskView::store_index`] maps one to the other.
///
/// # Examples
///
/// ```
/// use todolist::domain::{TaskStore, TaskFilter, TaskView};
///
/// let mut store = TaskStore::default();
/// store.add("Buy milk").unwrap();
/// store.add("Pay bills").unwrap();
/// store.mark_completed(Some(1)).unwrap();
///
/// let view = TaskView::build(&store, TaskFilter::Completed);
/// assert_eq!(view.lines(), vec!["1. [✔] Pay bills"]);
/// assert_eq!(view.store_index(0), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView<'a> {
    entries: Vec<ViewEntry<'a>>,
}

impl<'a> TaskView<'a> {
    pub fn build(store: &'a TaskStore, task_filter: TaskFilter) -> Self {
        let entries = store
            .iter()
            .enumerate()
            .filter(|(_, task)| task_filter.matches(task))
            .map(|(store_index, task)| ViewEntry { store_index, task })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ViewEntry<'a>] {
        &self.entries
    }

    pub fn tasks(&self) -> Vec<&'a Task> {
        self.entries.iter().map(|entry| entry.task).collect()
    }

    pub fn store_index(&self, position: usize) -> Option<usize> {
        self.entries.get(position).map(|entry| entry.store_index)
    }

    pub fn lines(&self) -> Vec<String> {
        render(self.entries.iter().map(|entry| entry.task))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Formats a single row, `position` being 1-based.
pub fn render_line(position: usize, task: &Task) -> String {
    format!("{}. [{}] {}", position, task.status_mark(), task.description)
}

/// Formats every task, numbered from 1 in the given order.
pub fn render<'a, I>(tasks: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| render_line(i + 1, task))
        .collect()
}

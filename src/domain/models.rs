use super::errors::{SelectionAction, TaskError, TaskResult};

/// A single entry in the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    pub fn status_mark(&self) -> char {
        if self.completed { '✔' } else { ' ' }
    }
}

/// Ordered, exclusively owned collection of tasks.
///
/// Tasks are identified by their position. Removing a task shifts every
/// later task down by one, so an index is only meaningful until the next
/// removal.
///
/// # Examples
///
/// ```
/// use todolist::domain::TaskStore;
///
/// let mut store = TaskStore::default();
/// store.add("Buy milk").unwrap();
/// store.mark_completed(Some(0)).unwrap();
/// assert!(store.get(0).unwrap().completed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an ongoing task.
    ///
    /// The description is kept as typed; it is only rejected when nothing
    /// but whitespace remains after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyDescription`] for blank input, leaving the
    /// store unchanged.
    pub fn add(&mut self, description: &str) -> TaskResult<usize> {
        if description.trim().is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        self.tasks.push(Task::new(description));
        Ok(self.tasks.len() - 1)
    }

    /// Marks the task at `index` as completed. Marking a completed task
    /// again is a no-op.
    pub fn mark_completed(&mut self, index: Option<usize>) -> TaskResult<()> {
        let index = self.checked_index(index, SelectionAction::MarkCompleted)?;
        self.tasks[index].completed = true;
        Ok(())
    }

    /// Removes and returns the task at `index`.
    pub fn remove(&mut self, index: Option<usize>) -> TaskResult<Task> {
        let index = self.checked_index(index, SelectionAction::Remove)?;
        Ok(self.tasks.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn checked_index(&self, index: Option<usize>, action: SelectionAction) -> TaskResult<usize> {
        let index = index.ok_or(TaskError::NoSelection(action))?;
        if index >= self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(index)
    }
}

impl FromIterator<Task> for TaskStore {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

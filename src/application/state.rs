//! Application state management for the task list.
//!
//! This module contains the main application state, the command handlers
//! behind each button, and mode management for the terminal user interface.

use crate::domain::{SelectionAction, TaskError, TaskFilter, TaskStore, TaskView};
use tracing::{debug, warn};

/// Title shown when none is configured.
pub const DEFAULT_TITLE: &str = "ToDo List Manager";

/// Represents the current mode of the application.
///
/// Every mode other than `Normal` is modal: it captures all input until it
/// is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal mode - list navigation and button shortcuts
    Normal,
    /// The add-task prompt is open
    AddingTask,
    /// An error notification is displayed
    Error,
    /// Help screen is displayed
    Help,
}

/// Main application state: the task store plus everything the UI needs.
///
/// The selection is a position in the *visible* list. Commands resolve it
/// through the current view to a store index before touching the store.
///
/// # Examples
///
/// ```
/// use todolist::application::App;
///
/// let mut app = App::default();
/// app.start_add_task();
/// app.input = "Buy milk".to_string();
/// app.submit_add_task();
/// assert_eq!(app.visible_lines(), vec!["1. [ ] Buy milk"]);
/// ```
#[derive(Debug)]
pub struct App {
    /// All tasks, in insertion order
    pub store: TaskStore,
    /// Active filter deciding which tasks are visible
    pub filter: TaskFilter,
    /// Selected position in the visible list
    pub selected: Option<usize>,
    /// Current application mode
    pub mode: AppMode,
    /// Input buffer of the add-task prompt
    pub input: String,
    /// Cursor position within the input buffer, in characters
    pub cursor_position: usize,
    /// Error currently shown in the notification popup
    pub error: Option<TaskError>,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Text of the title bar
    pub title: String,
}

impl Default for App {
    fn default() -> Self {
        Self::with_title(DEFAULT_TITLE)
    }
}

impl App {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            store: TaskStore::new(),
            filter: TaskFilter::All,
            selected: None,
            mode: AppMode::Normal,
            input: String::new(),
            cursor_position: 0,
            error: None,
            status_message: None,
            help_scroll: 0,
            title: title.into(),
        }
    }

    /// Recomputes the visible list from the store and the active filter.
    pub fn view(&self) -> TaskView<'_> {
        TaskView::build(&self.store, self.filter)
    }

    pub fn visible_lines(&self) -> Vec<String> {
        self.view().lines()
    }

    pub fn visible_len(&self) -> usize {
        self.view().len()
    }

    /// Store index of the selected row, if the selection is still visible.
    pub fn selected_store_index(&self) -> Option<usize> {
        self.selected.and_then(|position| self.view().store_index(position))
    }

    /// Opens the add-task prompt with an empty input buffer.
    pub fn start_add_task(&mut self) {
        self.mode = AppMode::AddingTask;
        self.input.clear();
        self.cursor_position = 0;
        self.status_message = None;
    }

    /// Adds the prompt's input as a new task.
    ///
    /// Blank input is rejected with an error notification and leaves the
    /// store unchanged.
    pub fn submit_add_task(&mut self) {
        let description = std::mem::take(&mut self.input);
        self.cursor_position = 0;
        self.mode = AppMode::Normal;

        match self.store.add(&description) {
            Ok(index) => {
                debug!(index, description = %description, "task added");
                self.status_message = Some(format!("Added \"{}\"", description));
                self.clamp_selection();
            }
            Err(err) => self.show_error(err),
        }
    }

    /// Closes the add-task prompt without adding anything.
    ///
    /// A cancelled prompt yields no description, so it is reported the same
    /// way as blank input.
    pub fn cancel_add_task(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.show_error(TaskError::EmptyDescription);
    }

    pub fn mark_selected_completed(&mut self) {
        let Some(index) = self.resolve_selection(SelectionAction::MarkCompleted) else {
            return;
        };
        match self.store.mark_completed(Some(index)) {
            Ok(()) => {
                debug!(index, "task marked completed");
                self.status_message = Some("Task marked as completed".to_string());
                self.clamp_selection();
            }
            Err(err) => self.show_error(err),
        }
    }

    pub fn remove_selected(&mut self) {
        let Some(index) = self.resolve_selection(SelectionAction::Remove) else {
            return;
        };
        match self.store.remove(Some(index)) {
            Ok(task) => {
                debug!(index, description = %task.description, "task removed");
                self.status_message = Some(format!("Removed \"{}\"", task.description));
                self.clamp_selection();
            }
            Err(err) => self.show_error(err),
        }
    }

    pub fn view_completed(&mut self) {
        self.set_filter(TaskFilter::Completed);
    }

    pub fn view_ongoing(&mut self) {
        self.set_filter(TaskFilter::Ongoing);
    }

    pub fn reset_filter(&mut self) {
        self.set_filter(TaskFilter::All);
    }

    fn set_filter(&mut self, filter: TaskFilter) {
        debug!(filter = filter.label(), "filter changed");
        self.filter = filter;
        self.selected = None;
        self.status_message = None;
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(position) => (position + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(position) => position.saturating_sub(1).min(len - 1),
            None => len - 1,
        });
    }

    pub fn select_first(&mut self) {
        self.selected = if self.visible_len() == 0 { None } else { Some(0) };
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_len().checked_sub(1);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Selects the visible row at `position`. Positions past the end of the
    /// visible list leave the selection as it was.
    pub fn select_at(&mut self, position: usize) {
        if position < self.visible_len() {
            self.selected = Some(position);
        }
    }

    /// Opens the error notification for `err`.
    pub fn show_error(&mut self, err: TaskError) {
        warn!(error = %err, "command rejected");
        self.error = Some(err);
        self.mode = AppMode::Error;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.mode = AppMode::Normal;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Scrolls the help text down, never past `max_scroll`.
    pub fn scroll_help_down(&mut self, lines: usize, max_scroll: usize) {
        self.help_scroll = (self.help_scroll + lines).min(max_scroll);
    }

    pub fn scroll_help_up(&mut self, lines: usize) {
        self.help_scroll = self.help_scroll.saturating_sub(lines);
    }

    /// The part of the prompt input left of the cursor.
    pub fn input_before_cursor(&self) -> &str {
        &self.input[..self.byte_offset(self.cursor_position)]
    }

    /// Inserts a character into the prompt at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor_position);
        self.input.insert(at, c);
        self.cursor_position += 1;
    }

    /// Deletes the character before the cursor.
    pub fn delete_char_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            let at = self.byte_offset(self.cursor_position - 1);
            self.input.remove(at);
            self.cursor_position -= 1;
        }
    }

    /// Deletes the character under the cursor.
    pub fn delete_char_at_cursor(&mut self) {
        if self.cursor_position < self.input_len() {
            let at = self.byte_offset(self.cursor_position);
            self.input.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input_len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input_len();
    }

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    fn resolve_selection(&mut self, action: SelectionAction) -> Option<usize> {
        let index = self.selected_store_index();
        if index.is_none() {
            self.show_error(TaskError::NoSelection(action));
        }
        index
    }

    // Keeps the selection inside the view after the store changed.
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected = match self.selected {
            Some(_) if len == 0 => None,
            Some(position) => Some(position.min(len - 1)),
            None => None,
        };
    }
}

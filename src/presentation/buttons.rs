use crate::application::App;
use crate::domain::TaskFilter;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};

/// The clickable buttons of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    ViewCompleted,
    ViewOngoing,
    AddTask,
    MarkCompleted,
    RemoveTask,
    ResetFilters,
}

impl Button {
    /// Buttons shown above the task list.
    pub const FILTER_BAR: [Button; 2] = [Button::ViewCompleted, Button::ViewOngoing];

    /// Buttons shown below the task list.
    pub const ACTION_BAR: [Button; 4] = [
        Button::AddTask,
        Button::MarkCompleted,
        Button::RemoveTask,
        Button::ResetFilters,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::ViewCompleted => "View Completed",
            Button::ViewOngoing => "View Ongoing",
            Button::AddTask => "Add Task",
            Button::MarkCompleted => "Mark Completed",
            Button::RemoveTask => "Remove Task",
            Button::ResetFilters => "Reset Filters",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            Button::ViewCompleted => 'v',
            Button::ViewOngoing => 'o',
            Button::AddTask => 'a',
            Button::MarkCompleted => 'c',
            Button::RemoveTask => 'd',
            Button::ResetFilters => 'r',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Button::ViewCompleted => Color::Rgb(52, 152, 219),
            Button::ViewOngoing => Color::Rgb(241, 196, 15),
            Button::AddTask => Color::Rgb(46, 204, 113),
            Button::MarkCompleted => Color::Rgb(70, 130, 180),
            Button::RemoveTask => Color::Rgb(231, 76, 60),
            Button::ResetFilters => Color::Rgb(155, 89, 182),
        }
    }

    /// The filter this button switches to, if it is a filter toggle.
    pub fn filter(self) -> Option<TaskFilter> {
        match self {
            Button::ViewCompleted => Some(TaskFilter::Completed),
            Button::ViewOngoing => Some(TaskFilter::Ongoing),
            Button::ResetFilters => Some(TaskFilter::All),
            _ => None,
        }
    }

    pub fn press(self, app: &mut App) {
        match self {
            Button::ViewCompleted => app.view_completed(),
            Button::ViewOngoing => app.view_ongoing(),
            Button::AddTask => app.start_add_task(),
            Button::MarkCompleted => app.mark_selected_completed(),
            Button::RemoveTask => app.remove_selected(),
            Button::ResetFilters => app.reset_filter(),
        }
    }
}

/// Splits a button bar evenly between `buttons`.
pub fn button_areas(area: Rect, buttons: &[Button]) -> Vec<(Button, Rect)> {
    let constraints = vec![Constraint::Ratio(1, buttons.len() as u32); buttons.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    buttons.iter().copied().zip(cells.iter().copied()).collect()
}

/// Finds the button under a terminal cell, if any.
pub fn button_at(area: Rect, buttons: &[Button], column: u16, row: u16) -> Option<Button> {
    button_areas(area, buttons)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(button, _)| button)
}

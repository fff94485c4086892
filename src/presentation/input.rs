use crate::application::{App, AppMode};
use crate::presentation::buttons::{button_at, Button};
use crate::presentation::ui::{help_max_scroll, list_position_at, AppLayout};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::AddingTask => Self::handle_prompt_mode(app, key),
            AppMode::Error => Self::handle_error_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    /// Presses the button or selects the task under a left click. Clicks
    /// are ignored while a popup is open.
    pub fn handle_mouse_event(app: &mut App, event: MouseEvent, area: Rect) {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if app.mode != AppMode::Normal {
            return;
        }

        let layout = AppLayout::new(area);
        let button = button_at(layout.filter_bar, &Button::FILTER_BAR, event.column, event.row)
            .or_else(|| button_at(layout.action_bar, &Button::ACTION_BAR, event.column, event.row));
        if let Some(button) = button {
            app.status_message = None;
            button.press(app);
        } else if let Some(position) = list_position_at(&layout, app.selected, event.column, event.row) {
            app.select_at(position);
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Char('a') => Button::AddTask.press(app),
            KeyCode::Char('c') | KeyCode::Char(' ') => Button::MarkCompleted.press(app),
            KeyCode::Char('d') | KeyCode::Delete => Button::RemoveTask.press(app),
            KeyCode::Char('r') => Button::ResetFilters.press(app),
            KeyCode::Char('v') => Button::ViewCompleted.press(app),
            KeyCode::Char('o') => Button::ViewOngoing.press(app),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Home | KeyCode::Char('g') => app.select_first(),
            KeyCode::End | KeyCode::Char('G') => app.select_last(),
            KeyCode::Esc => app.clear_selection(),
            KeyCode::F(1) | KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_prompt_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.submit_add_task(),
            KeyCode::Esc => app.cancel_add_task(),
            KeyCode::Backspace => app.delete_char_before_cursor(),
            KeyCode::Delete => app.delete_char_at_cursor(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    fn handle_error_mode(app: &mut App, key: KeyCode) {
        if matches!(key, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_error();
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_help_down(1, help_max_scroll()),
            KeyCode::PageUp => app.scroll_help_up(5),
            KeyCode::PageDown => app.scroll_help_down(5, help_max_scroll()),
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

use crate::application::{App, AppMode};
use crate::presentation::buttons::{button_areas, Button};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Screen regions of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub filter_bar: Rect,
    pub list: Rect,
    pub action_bar: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            title: chunks[0],
            filter_bar: chunks[1],
            list: chunks[2],
            action_bar: chunks[3],
            status: chunks[4],
        }
    }

    /// Rows of the task list inside its border.
    pub fn list_rows(&self) -> Rect {
        self.list.inner(Margin::new(1, 1))
    }
}

/// First visible row of a list `height` rows tall, keeping `selected` on
/// screen.
pub fn list_offset(selected: Option<usize>, height: u16) -> usize {
    match selected {
        Some(position) if height > 0 => position.saturating_sub(height as usize - 1),
        _ => 0,
    }
}

/// Visible-list position under a terminal cell, if the cell is on a row of
/// the task list.
pub fn list_position_at(layout: &AppLayout, selected: Option<usize>, column: u16, row: u16) -> Option<usize> {
    let rows = layout.list_rows();
    if column < rows.x || column >= rows.right() || row < rows.y || row >= rows.bottom() {
        return None;
    }
    Some(list_offset(selected, rows.height) + (row - rows.y) as usize)
}

/// Largest useful value of the help scroll position.
pub fn help_max_scroll() -> usize {
    HELP_TEXT.lines().count().saturating_sub(1)
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let layout = AppLayout::new(f.area());

    render_title(f, app, layout.title);
    render_button_bar(f, app, layout.filter_bar, &Button::FILTER_BAR);
    render_task_list(f, app, layout.list);
    render_button_bar(f, app, layout.action_bar, &Button::ACTION_BAR);
    render_status_bar(f, app, layout.status);

    match app.mode {
        AppMode::AddingTask => render_add_prompt(f, app),
        AppMode::Error => render_error_popup(f, app),
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Normal => {}
    }
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.title.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(title, area);
}

fn render_button_bar(f: &mut Frame, app: &App, area: Rect, buttons: &[Button]) {
    for (button, rect) in button_areas(area, buttons) {
        let mut style = Style::default()
            .fg(Color::White)
            .bg(button.color())
            .add_modifier(Modifier::BOLD);
        if button.filter() == Some(app.filter) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let widget = Paragraph::new(format!("[{}] {}", button.shortcut(), button.label()))
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, rect);
    }
}

fn render_task_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .view()
        .entries()
        .iter()
        .zip(app.visible_lines())
        .map(|(entry, line)| {
            let style = if entry.task.completed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Tasks ({})", app.filter.label())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::LightBlue)
                .fg(Color::Black),
        );

    let offset = list_offset(app.selected, area.height.saturating_sub(2));
    let mut state = ListState::default()
        .with_selected(app.selected)
        .with_offset(offset);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => app.status_message.clone().unwrap_or_else(|| {
            format!(
                "{} tasks, {} shown | ↑↓/jk: select | Esc: clear selection | ?: help | q: quit",
                app.store.len(),
                app.visible_len()
            )
        }),
        AppMode::AddingTask => "Enter: add task | Esc: cancel".to_string(),
        AppMode::Error => "Enter/Esc: dismiss".to_string(),
        AppMode::Help => "↑↓/jk: scroll | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::AddingTask => Style::default().fg(Color::Green),
            AppMode::Error => Style::default().fg(Color::Red),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_add_prompt(f: &mut Frame, app: &App) {
    let area = centered_rect(f.area(), 60, 3);
    f.render_widget(Clear, area);

    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_width = Span::raw(app.input_before_cursor()).width();
    let scroll = cursor_width.saturating_sub(inner_width.saturating_sub(1));

    let prompt = Paragraph::new(app.input.as_str())
        .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter task description:")
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(prompt, area);

    let cursor_offset = u16::try_from(cursor_width - scroll).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(1).saturating_add(cursor_offset);
    f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn render_error_popup(f: &mut Frame, app: &App) {
    let Some(error) = app.error.as_ref() else {
        return;
    };
    let area = centered_rect(f.area(), 50, 5);
    f.render_widget(Clear, area);

    let popup = Paragraph::new(vec![
        Line::from(error.to_string()),
        Line::from(""),
        Line::from("Press Enter to continue").style(Style::default().fg(Color::DarkGray)),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Error")
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(popup, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let help_widget = Paragraph::new(help_lines[start_line..end_line].join("\n"))
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

const HELP_TEXT: &str = r#"TASKS
a               Add a task (opens a prompt)
c or Space      Mark the selected task as completed
d or Delete     Remove the selected task

FILTERS
v               View completed tasks only
o               View ongoing tasks only
r               Reset filters (show every task)

SELECTION
↑↓ or j/k       Move the selection
Home/End        Jump to the first/last task
Esc             Clear the selection

Click a button to press it, or a task to select it.
Tasks are numbered by their position in the visible list.
Nothing is saved: the list is empty on every start.

HELP NAVIGATION
↑↓ or j/k       Scroll this help
Esc/F1/?/q      Close this help

q               Quit"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskError;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(screen: &[String], needle: &str) -> bool {
        screen.iter().any(|row| row.contains(needle))
    }

    fn sample_app() -> App {
        let mut app = App::default();
        app.store.add("Buy milk").unwrap();
        app.store.add("Pay bills").unwrap();
        app.store.mark_completed(Some(1)).unwrap();
        app
    }

    #[test]
    fn test_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.filter_bar.y, 1);
        assert_eq!(layout.list.y, 4);
        assert_eq!(layout.list.height, 14);
        assert_eq!(layout.action_bar.y, 18);
        assert_eq!(layout.status.y, 21);
    }

    #[test]
    fn test_renders_title_buttons_and_tasks() {
        let screen = draw(&sample_app(), 100, 24);

        assert!(screen_contains(&screen, "ToDo List Manager"));
        assert!(screen_contains(&screen, "Tasks (All)"));
        assert!(screen_contains(&screen, "1. [ ] Buy milk"));
        assert!(screen_contains(&screen, "2. [✔] Pay bills"));
        for button in Button::FILTER_BAR.iter().chain(Button::ACTION_BAR.iter()) {
            assert!(screen_contains(&screen, button.label()), "{}", button.label());
        }
    }

    #[test]
    fn test_renders_filtered_view() {
        let mut app = sample_app();
        app.view_completed();
        let screen = draw(&app, 100, 24);

        assert!(screen_contains(&screen, "Tasks (Completed)"));
        assert!(screen_contains(&screen, "1. [✔] Pay bills"));
        assert!(!screen_contains(&screen, "Buy milk"));
    }

    #[test]
    fn test_renders_error_popup() {
        let mut app = sample_app();
        app.show_error(TaskError::EmptyDescription);
        let screen = draw(&app, 100, 24);

        assert!(screen_contains(&screen, "Error"));
        assert!(screen_contains(&screen, "Task description cannot be empty."));
    }

    #[test]
    fn test_renders_add_prompt() {
        let mut app = sample_app();
        app.start_add_task();
        app.insert_char('W');
        let screen = draw(&app, 100, 24);

        assert!(screen_contains(&screen, "Enter task description:"));
        assert!(screen_contains(&screen, "Enter: add task"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut app = sample_app();
        let screen = draw(&app, 100, 24);
        assert!(screen_contains(&screen, "2 tasks, 2 shown"));

        app.status_message = Some("Removed \"x\"".to_string());
        let screen = draw(&app, 100, 24);
        assert!(screen_contains(&screen, "Removed \"x\""));
    }

    #[test]
    fn test_list_offset_keeps_selection_visible() {
        assert_eq!(list_offset(None, 5), 0);
        assert_eq!(list_offset(Some(4), 5), 0);
        assert_eq!(list_offset(Some(5), 5), 1);
        assert_eq!(list_offset(Some(12), 5), 8);
        assert_eq!(list_offset(Some(3), 0), 0);
    }

    #[test]
    fn test_list_position_at_accounts_for_border_and_offset() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        // list rows span y 5..17 inside the border
        assert_eq!(list_position_at(&layout, None, 5, 4), None);
        assert_eq!(list_position_at(&layout, None, 5, 5), Some(0));
        assert_eq!(list_position_at(&layout, None, 5, 6), Some(1));
        assert_eq!(list_position_at(&layout, None, 0, 6), None);
        assert_eq!(list_position_at(&layout, None, 5, 17), None);
        assert_eq!(list_position_at(&layout, Some(20), 5, 5), Some(9));
    }

    #[test]
    fn test_scrolled_list_shows_selected_task() {
        let mut app = App::default();
        for i in 1..=30 {
            app.store.add(&format!("task {i}")).unwrap();
        }
        app.select_last();
        let screen = draw(&app, 80, 24);

        assert!(screen_contains(&screen, "30. [ ] task 30"));
        assert!(screen_contains(&screen, "19. [ ] task 19"));
        assert!(!screen_contains(&screen, "18. [ ] task 18"));
    }

    #[test]
    fn test_add_prompt_scrolls_long_input() {
        let mut app = App::default();
        app.start_add_task();
        for _ in 0..70 {
            app.insert_char('x');
        }
        app.insert_char('Z');
        let screen = draw(&app, 100, 24);

        assert!(screen_contains(&screen, "xZ"));
    }

    #[test]
    fn test_add_prompt_cursor_uses_display_width() {
        let mut app = App::default();
        app.start_add_task();
        for c in "日本".chars() {
            app.insert_char(c);
        }
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();

        // prompt is 60 wide, centred: x 20..80, text starts at x 21
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, 25);
    }

    #[test]
    fn test_help_max_scroll_matches_text() {
        assert_eq!(help_max_scroll() + 1, HELP_TEXT.lines().count());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = sample_app();
        app.show_help();
        draw(&app, 10, 4);
        app.start_add_task();
        draw(&app, 10, 4);
    }
}

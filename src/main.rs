//! todolist - Terminal Task List
//!
//! A terminal-based task list built in Rust. Tasks can be added, marked
//! completed, removed and filtered by status. Nothing is persisted.

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{error, info};

use todolist::application::{App, AppMode};
use todolist::infrastructure::{init_logging, Config};
use todolist::presentation::{render_ui, InputHandler};

/// Entry point for the todolist terminal application.
///
/// Reads configuration from the environment, sets up logging and the
/// terminal, then runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if logging or terminal setup fails, or if there are
/// issues with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    init_logging(&config)?;
    info!(title = %config.title, "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_title(config.title);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    report_exit(&app, res)?;
    Ok(())
}

/// Logs how the event loop ended and hands its error back so the process
/// exits with a failure status.
fn report_exit(app: &App, res: io::Result<()>) -> io::Result<()> {
    match &res {
        Ok(()) => info!(tasks = app.store.len(), "exiting"),
        Err(err) => error!(error = %err, "event loop failed"),
    }
    res
}

/// Main application event loop.
///
/// Redraws after every event; the visible list is recomputed from the
/// store on each draw. Continues until the user presses 'q' in normal mode.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
            },
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                InputHandler::handle_mouse_event(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_exit_propagates_loop_errors() {
        let app = App::default();
        let err = report_exit(&app, Err(io::Error::other("terminal gone"))).unwrap_err();
        assert_eq!(err.to_string(), "terminal gone");
    }

    #[test]
    fn test_report_exit_clean_shutdown() {
        let app = App::default();
        assert!(report_exit(&app, Ok(())).is_ok());
    }
}

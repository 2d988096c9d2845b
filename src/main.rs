mod app;
mod filter;
mod models;
mod tags;
mod ui;
mod utils;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use app::App;
use models::AppMode;
use ui::{render_browser_view, render_help_view, render_reset_confirmation};
use utils::handle_input;

fn main() -> Result<()> {
    // Optional tags file path as the first argument
    let tags_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let source_tags = tags::resolve_tags(tags_path.as_deref())?;

    // Initialize the application
    let mut app = App::new(source_tags);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the application
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Run the main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            match app.mode {
                AppMode::Browse | AppMode::Search => {
                    render_browser_view(frame, app, area);
                }
                AppMode::Help => {
                    render_help_view(frame, area);
                }
                AppMode::ConfirmReset => {
                    // Dialog floats over the browser view
                    render_browser_view(frame, app, area);
                    render_reset_confirmation(frame, app, area);
                }
            }
        })?;

        // Handle input
        handle_input(app)?;

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

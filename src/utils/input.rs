use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};

use crate::app::App;
use crate::models::{AppMode, Panel};

/// Poll for keyboard input and apply it (with timeout for non-blocking)
pub fn handle_input(app: &mut App) -> Result<()> {
    if !event::poll(std::time::Duration::from_millis(100))? {
        return Ok(());
    }

    if let Event::Key(key) = event::read()? {
        handle_key(app, key);
    }

    Ok(())
}

/// Apply one key event based on the current app mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Clear messages on any key press
    app.clear_messages();

    match app.mode {
        AppMode::Browse => handle_browse_input(app, key),
        AppMode::Search => handle_search_input(app, key),
        AppMode::Help => app.return_to_browse(),
        AppMode::ConfirmReset => handle_reset_confirm_input(app, key),
    }
}

/// Handle input in the main browser view
fn handle_browse_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Navigation
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down => {
            app.select_next()
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous()
        }
        KeyCode::Char('g') => app.select_first(),
        KeyCode::Char('G') => app.select_last(),
        KeyCode::Tab | KeyCode::BackTab => app.focus_next_panel(),

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => match app.focused_panel {
            Panel::AllTags => app.toggle_under_cursor(),
            Panel::Selected => app.remove_under_cursor(),
        },
        KeyCode::Char('c') => app.clear_selection(),

        // Filters
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increase_min_length(),
        KeyCode::Char('-') => app.decrease_min_length(),
        KeyCode::Char('o') => app.toggle_only_selected(),
        KeyCode::Char('f') => app.clear_filters(),
        KeyCode::Char('R') => app.start_reset(),

        // Help
        KeyCode::Char('?') => app.show_help(),

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        _ => {}
    }
}

/// Handle input in live search mode
fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Keep the query
        KeyCode::Enter => app.finish_search(),

        // Discard the query
        KeyCode::Esc => app.cancel_search(),

        // Live editing; each keystroke is observable by the next redraw
        KeyCode::Char(c) => app.push_query_char(c),
        KeyCode::Backspace => app.pop_query_char(),

        _ => {}
    }
}

/// Handle input in the reset confirmation dialog
fn handle_reset_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.reset_all(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.return_to_browse(),
        _ => {}
    }
}

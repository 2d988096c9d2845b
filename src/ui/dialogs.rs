use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the reset confirmation dialog
pub fn render_reset_confirmation(frame: &mut Frame, app: &App, area: Rect) {
    // Create a centered dialog box
    let dialog_area = centered_rect(60, 30, area);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(0),    // Message
        Constraint::Length(3), // Actions
    ])
    .split(dialog_area);

    // Title
    let title = Paragraph::new("Confirm Reset")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(title, chunks[0]);

    // Message
    let message = format!(
        "Reset all filters and deselect {} tag(s)?\n\nQuery: {}\nMin length: {}\nOnly selected: {}",
        app.selection.len(),
        if app.criteria.query.is_empty() {
            "-"
        } else {
            app.criteria.query.as_str()
        },
        app.criteria.min_length,
        if app.criteria.only_selected { "on" } else { "off" },
    );
    let msg_widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[1]);

    // Actions
    let actions = Paragraph::new("Y: Yes, reset  │  N/Esc: Cancel")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(actions, chunks[2]);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

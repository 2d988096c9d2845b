use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the help overlay
pub fn render_help_view(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(0),    // Help content
        Constraint::Length(3), // Close instruction
    ])
    .split(area);

    // Title
    let title = Paragraph::new("Help")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    // Help content
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Navigation:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  h / ← , l / →  - Previous / next chip"),
        Line::from("  j / ↓ , k / ↑  - Next / previous chip"),
        Line::from("  g / G          - Jump to first / last chip"),
        Line::from("  Tab            - Switch between All Tags and Selected panels"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Selection:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Space / Enter  - Toggle chip (All Tags) or remove it (Selected)"),
        Line::from("  c              - Clear the selection"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Filters:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  /              - Search tags (Enter keeps the query, Esc clears it)"),
        Line::from("  + / = , -      - Raise / lower the min tag length (0-12)"),
        Line::from("  o              - Toggle 'only selected'"),
        Line::from("  f              - Clear filters (selection is kept)"),
        Line::from("  R              - Reset filters and selection"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Other:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?              - Show this help"),
        Line::from("  q              - Quit"),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Keybindings "))
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, chunks[1]);

    // Close instruction
    let close = Paragraph::new("Press any key to close")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(close, chunks[2]);
}

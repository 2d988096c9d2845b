use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{AppMode, Panel, MIN_LENGTH_MAX};

/// Render the main browser view
pub fn render_browser_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Search bar
        Constraint::Length(6), // Selected tags card
        Constraint::Min(0),    // All tags chip grid
        Constraint::Length(3), // Filter controls
        Constraint::Length(3), // Footer
    ])
    .split(area);

    render_header(frame, app, chunks[0]);
    render_search_bar(frame, app, chunks[1]);
    render_selected_card(frame, app, chunks[2]);
    render_chip_grid(frame, app, chunks[3]);
    render_filter_controls(frame, app, chunks[4]);
    render_footer(frame, app, chunks[5]);
}

/// Render the header with tag counts and active criteria
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut header_text = Vec::new();

    header_text.push(Span::styled(
        format!(
            "{} tags │ {} visible │ {} selected ",
            app.source_tags.len(),
            app.visible_tags().len(),
            app.selection.len()
        ),
        Style::default().fg(Color::Magenta),
    ));

    if !app.criteria.query.is_empty() {
        header_text.push(Span::raw("│ "));
        header_text.push(Span::styled(
            format!("Search: {} ", app.criteria.query),
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.criteria.min_length > 0 {
        header_text.push(Span::raw("│ "));
        header_text.push(Span::styled(
            format!("Min length: {} ", app.criteria.min_length),
            Style::default().fg(Color::Cyan),
        ));
    }

    if app.criteria.only_selected {
        header_text.push(Span::raw("│ "));
        header_text.push(Span::styled(
            "Only selected ",
            Style::default().fg(Color::Green),
        ));
    }

    if app.criteria.is_inert() {
        header_text.push(Span::styled(
            "│ no active filters",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(header_text))
        .block(Block::default().borders(Borders::ALL).title(" tagdeck "));

    frame.render_widget(header, area);
}

/// Render the search bar (live query display)
fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == AppMode::Search;
    let query = &app.criteria.query;

    let search_text = if editing {
        // Trailing block shows the insertion point while typing
        format!("{}█", query)
    } else if query.is_empty() {
        "Press / to search...".to_string()
    } else {
        query.clone()
    };

    let style = if editing {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if query.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search_widget = Paragraph::new(search_text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search tags ")
            .border_style(border_style),
    );

    frame.render_widget(search_widget, area);
}

/// Render the selected-tags card
fn render_selected_card(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected_tags();
    let focused = app.focused_panel == Panel::Selected;

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Selected Tags ({}) ", selected.len()))
        .border_style(border_style);
    let inner_width = block.inner(area).width;

    let content = if selected.is_empty() {
        vec![Line::from(Span::styled(
            "None yet. Space on a chip to select.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let cursor = if focused {
            Some(app.selected_cursor)
        } else {
            None
        };
        chip_lines(&selected, inner_width, cursor, |_| true)
    };

    let card = Paragraph::new(content).block(block);
    frame.render_widget(card, area);
}

/// Render the filtered chip grid
fn render_chip_grid(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_tags();
    let focused = app.focused_panel == Panel::AllTags;

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " All Tags ({}/{}) ",
            visible.len(),
            app.source_tags.len()
        ))
        .border_style(border_style);
    let inner_width = block.inner(area).width;

    let content = if visible.is_empty() {
        vec![Line::from(Span::styled(
            "No tags match the current filters.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let cursor = if focused { Some(app.cursor) } else { None };
        chip_lines(&visible, inner_width, cursor, |tag| {
            app.selection.contains(tag)
        })
    };

    let grid = Paragraph::new(content).block(block);
    frame.render_widget(grid, area);
}

/// Render the filter controls: only-selected switch, min-length slider,
/// clear-filters hint
fn render_filter_controls(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    // Only-selected switch
    let (switch, switch_color) = if app.criteria.only_selected {
        ("[x]", Color::Green)
    } else {
        ("[ ]", Color::DarkGray)
    };
    spans.push(Span::styled(
        format!("{} Only selected (o)", switch),
        Style::default().fg(switch_color),
    ));

    spans.push(Span::raw("  │  "));

    // Min-length slider
    let filled = app.criteria.min_length;
    let track: String = std::iter::repeat('█')
        .take(filled)
        .chain(std::iter::repeat('─').take(MIN_LENGTH_MAX - filled))
        .collect();
    spans.push(Span::raw(format!("Min tag length: {:>2} ", filled)));
    spans.push(Span::styled(track, Style::default().fg(Color::Cyan)));
    spans.push(Span::raw(" (-/+)"));

    spans.push(Span::raw("  │  "));
    spans.push(Span::styled(
        "f: Clear Filters",
        Style::default().fg(Color::Yellow),
    ));

    let controls = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Filters "));

    frame.render_widget(controls, area);
}

/// Render the footer with keybindings, or the current status message
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref msg) = app.status_message {
        let footer = Paragraph::new(msg.clone())
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL).title(" Status "));
        frame.render_widget(footer, area);
        return;
    }

    let keybindings = vec![
        ("Space", "Toggle"),
        ("Tab", "Panel"),
        ("/", "Search"),
        ("o", "Only sel"),
        ("c", "Clear sel"),
        ("f", "Clear filters"),
        ("R", "Reset"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let mut footer_spans = Vec::new();
    for (i, (key, desc)) in keybindings.iter().enumerate() {
        if i > 0 {
            footer_spans.push(Span::raw(" │ "));
        }
        footer_spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        footer_spans.push(Span::raw(":"));
        footer_spans.push(Span::raw(*desc));
    }

    let footer =
        Paragraph::new(Line::from(footer_spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Lay out tags as chips flowing left to right, wrapping at the panel
/// width. `cursor` highlights the chip at that index; `is_selected`
/// decides the chip's fill style.
fn chip_lines(
    tags: &[&str],
    width: u16,
    cursor: Option<usize>,
    is_selected: impl Fn(&str) -> bool,
) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    let mut used = 0usize;

    for (i, tag) in tags.iter().enumerate() {
        let label = format!(" {} ", tag);
        let chip_width = label.chars().count() + 1;

        if used + chip_width > width && !current.is_empty() {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }

        let selected = is_selected(tag);
        let under_cursor = cursor == Some(i);

        let style = match (under_cursor, selected) {
            (true, _) => Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().bg(Color::DarkGray).fg(Color::White),
        };

        current.push(Span::styled(label, style));
        current.push(Span::raw(" "));
        used += chip_width;
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

mod filter_bar;
mod help;
mod log_table;
mod status_bar;
mod tab_bar;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "System Log Analyzer";

/// Draw one frame from the current app state.
///
/// Reads `app` only; drawing the same state twice produces the same frame.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let help_lines = help::help_lines(area.width, &app.theme.ui);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Title
            Constraint::Length(1),                    // Spacer
            Constraint::Length(3),                    // Tab bar
            Constraint::Length(1),                    // Spacer
            Constraint::Length(4),                    // Filter inputs
            Constraint::Length(app.table.height + 3), // Table (borders + header)
            Constraint::Length(1),                    // Status
            Constraint::Length(help_lines.len() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    render_title(f, chunks[0], app);
    tab_bar::render_tab_bar(f, chunks[2], app);
    filter_bar::render_filter_bar(f, chunks[4], app);
    log_table::render_log_table(f, chunks[5], app);
    status_bar::render_status_bar(f, chunks[6], app);
    help::render_help_footer(f, chunks[7], help_lines, &app.theme.ui);
}

fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;
    let width = (TITLE.len() as u16 + 4).min(area.width);
    let centered = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        width,
        ..area
    };

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(ui.title).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(title, centered);
}

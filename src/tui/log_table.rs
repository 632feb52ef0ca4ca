use crate::app::App;
use crate::focus::FocusTarget;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, HighlightSpacing, Paragraph, Row, Table},
    Frame,
};

const EMPTY_MESSAGE: &str = "No logs match the current filters";

pub(super) fn render_log_table(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;
    let focused = app.focus == FocusTarget::LogTable;

    let border_color = if focused { ui.tab_border } else { ui.muted };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.filtered.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(ui.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Timestamp", "Message"])
        .style(Style::default().fg(ui.header).add_modifier(Modifier::BOLD))
        .height(1);

    let rows: Vec<Row> = app
        .filtered
        .iter()
        .map(|record| Row::new(vec![record.timestamp.as_str(), record.message.as_str()]))
        .collect();

    let widths = [
        Constraint::Length(app.table.timestamp_width),
        Constraint::Length(app.table.message_width),
    ];

    // Selection is only highlighted while the table owns the keyboard
    let highlight = if focused {
        Style::default()
            .fg(ui.selection_fg)
            .bg(ui.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(ui.fg))
        .block(block)
        .row_highlight_style(highlight)
        .highlight_spacing(HighlightSpacing::Never);

    // Rendering works on a copy so drawing never moves the selection
    let mut state = app.table.state.clone();
    f.render_stateful_widget(table, area, &mut state);
}

use crate::app::App;
use crate::filter::FilterCriteria;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;

    let mut spans = vec![Span::styled(
        format!(" Showing {} of {}", app.filtered.len(), app.total_in_tab()),
        Style::default().fg(ui.fg),
    )];
    let applied = describe_criteria(app.applied_criteria());
    if !applied.is_empty() {
        spans.push(Span::styled(
            format!(" | {}", applied),
            Style::default().fg(ui.muted),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn describe_criteria(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if !criteria.query.is_empty() {
        parts.push(format!("search \"{}\"", criteria.query));
    }
    if !criteria.start_date.is_empty() {
        parts.push(format!("from {}", criteria.start_date));
    }
    if !criteria.end_date.is_empty() {
        parts.push(format!("to {}", criteria.end_date));
    }
    parts.join(", ")
}

use crate::app::{App, TextInput};
use crate::focus::FocusTarget;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PROMPT: &str = "> ";

const FIELDS: [(FocusTarget, &str, u16); 3] = [
    (FocusTarget::SearchBox, "Search: ", 0),
    (FocusTarget::StartDateBox, "Start Date (YYYY-MM-DD): ", 2),
    (FocusTarget::EndDateBox, "End Date (YYYY-MM-DD): ", 3),
];

pub(super) fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    for (target, label, row) in FIELDS {
        if row >= area.height {
            continue;
        }
        let Some(input) = app.input(target) else {
            continue;
        };
        let line_area = Rect {
            y: area.y + row,
            height: 1,
            ..area
        };
        render_field(f, line_area, label, input, app);
    }
}

/// First char of the value shown so the cursor stays inside the input width
fn scroll_offset(input: &TextInput) -> usize {
    let width = (input.width as usize).max(1);
    (input.cursor_column() + 1).saturating_sub(width)
}

fn render_field(f: &mut Frame, area: Rect, label: &str, input: &TextInput, app: &App) {
    let ui = &app.theme.ui;
    let focused = input.is_focused();

    let text_style = if focused {
        Style::default().fg(ui.input_focused)
    } else {
        Style::default().fg(ui.fg)
    };
    let label_style = if focused {
        text_style.add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ui.muted)
    };

    let body = if input.value().is_empty() {
        Span::styled(
            input.placeholder.clone(),
            Style::default().fg(ui.placeholder),
        )
    } else {
        let visible: String = input
            .value()
            .chars()
            .skip(scroll_offset(input))
            .take(input.width as usize)
            .collect();
        Span::styled(visible, text_style)
    };

    let line = Line::from(vec![
        Span::styled(label.to_string(), label_style),
        Span::styled(PROMPT, text_style),
        body,
    ]);
    f.render_widget(Paragraph::new(line), area);

    if focused {
        let column = (input.cursor_column() - scroll_offset(input)) as u16;
        let x = area.x + (label.len() + PROMPT.len()) as u16 + column;
        if x < area.x + area.width {
            f.set_cursor_position(Position::new(x, area.y));
        }
    }
}

use crate::theme::UiColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Key bindings listed in the footer, in display order
const HELP_ITEMS: [(&str, &str); 7] = [
    ("^Q", "Exit"),
    ("Tab", "Switch Tab"),
    ("/", "Search"),
    ("F", "Start Date"),
    ("E", "End Date"),
    ("^C", "Cancel"),
    ("Enter", "Apply"),
];

const INDENT: &str = "  ";
const SEPARATOR: &str = " | ";

/// Lay the help items out into lines no wider than `width`.
///
/// An item is never split; one wider than the line is placed alone.
pub(super) fn help_lines(width: u16, ui: &UiColors) -> Vec<Line<'static>> {
    let width = width as usize;
    let key_style = Style::default().fg(ui.help_key);
    let desc_style = Style::default().fg(ui.help_fg);
    let sep_style = Style::default().fg(ui.help_separator);

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = vec![Span::raw(INDENT)];
    let mut used = INDENT.width();
    let mut first_on_line = true;

    for (key, desc) in HELP_ITEMS {
        let item_width = key.width() + 1 + desc.width();
        if !first_on_line && used + SEPARATOR.width() + item_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw(INDENT));
            used = INDENT.width();
            first_on_line = true;
        }
        if !first_on_line {
            spans.push(Span::styled(SEPARATOR, sep_style));
            used += SEPARATOR.width();
        }
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
        used += item_width;
        first_on_line = false;
    }
    lines.push(Line::from(spans));
    lines
}

pub(super) fn render_help_footer(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>, ui: &UiColors) {
    let footer = Paragraph::new(lines).style(Style::default().bg(ui.help_bg));
    f.render_widget(footer, area);
}

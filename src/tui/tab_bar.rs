use crate::app::App;
use crate::log_store::Category;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub(super) fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;

    // Title plus one cell of padding and a border on each side
    let widths = Category::ALL.map(|tab| Constraint::Length(tab.title().len() as u16 + 4));
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);

    for (tab, cell) in Category::ALL.into_iter().zip(cells.iter()) {
        let style = if tab == app.active_tab {
            Style::default()
                .fg(ui.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(ui.tab_text)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ui.tab_border))
            .padding(Padding::horizontal(1));

        let label = Paragraph::new(Span::styled(tab.title(), style)).block(block);
        f.render_widget(label, *cell);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, AppOptions};
    use crate::event::AppEvent;
    use crate::log_store::LogStore;
    use crate::tui::test_support::{draw, rows};
    use ratatui::style::Modifier;

    fn underlined_word(app: &App) -> String {
        let buffer = draw(app, 80, 40);
        let row = 5; // title (3) + spacer (1) + tab border (1)
        let line = &rows(&buffer)[row];
        line.chars()
            .enumerate()
            .filter(|(x, _)| {
                buffer[(*x as u16, row as u16)]
                    .modifier
                    .contains(Modifier::UNDERLINED)
            })
            .map(|(_, c)| c)
            .collect()
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut app = App::new(LogStore::sample(), AppOptions::default());
        assert_eq!(underlined_word(&app), "Errors");

        app.apply_event(AppEvent::NextTab);
        assert_eq!(underlined_word(&app), "Warnings");

        app.apply_event(AppEvent::NextTab);
        assert_eq!(underlined_word(&app), "Information");
    }
}

use ratatui::widgets::TableState;

/// Width of the timestamp column in cells
pub const TIMESTAMP_WIDTH: u16 = 20;

/// Cells reserved next to the message column (timestamp column plus spacing)
pub const MESSAGE_MARGIN: u16 = 22;

/// Default number of visible table rows
pub const DEFAULT_TABLE_HEIGHT: u16 = 10;

/// Table widget state for the log view.
///
/// Rebuilt whenever the rows or the terminal width change, which resets the
/// selection to the first row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogTable {
    pub state: TableState,
    pub row_count: usize,
    pub timestamp_width: u16,
    pub message_width: u16,
    /// Visible rows, also the page size
    pub height: u16,
}

impl LogTable {
    pub fn new(row_count: usize, width: u16, height: u16) -> Self {
        let selected = if row_count > 0 { Some(0) } else { None };
        Self {
            state: TableState::default().with_selected(selected),
            row_count,
            timestamp_width: TIMESTAMP_WIDTH,
            message_width: width.saturating_sub(MESSAGE_MARGIN),
            height,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn scroll_down(&mut self) {
        self.move_by(1);
    }

    pub fn scroll_up(&mut self) {
        self.move_by(-1);
    }

    pub fn page_down(&mut self) {
        self.move_by(self.page_size() as isize);
    }

    pub fn page_up(&mut self) {
        self.move_by(-(self.page_size() as isize));
    }

    pub fn jump_to_start(&mut self) {
        if self.row_count > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn jump_to_end(&mut self) {
        if self.row_count > 0 {
            self.state.select(Some(self.row_count - 1));
        }
    }

    fn page_size(&self) -> usize {
        (self.height as usize).max(1)
    }

    fn move_by(&mut self, delta: isize) {
        if self.row_count == 0 {
            return;
        }
        let current = self.state.selected().unwrap_or(0) as isize;
        let last = (self.row_count - 1) as isize;
        let target = (current + delta).clamp(0, last);
        self.state.select(Some(target as usize));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selects_first_row() {
        let table = LogTable::new(5, 80, 10);
        assert_eq!(table.selected(), Some(0));
        assert_eq!(table.message_width, 58);
        assert_eq!(table.timestamp_width, 20);
    }

    #[test]
    fn test_empty_table_has_no_selection() {
        let mut table = LogTable::new(0, 80, 10);
        table.scroll_down();
        table.jump_to_end();
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_narrow_terminal_saturates_message_width() {
        let table = LogTable::new(1, 10, 10);
        assert_eq!(table.message_width, 0);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut table = LogTable::new(3, 80, 10);
        table.scroll_up();
        assert_eq!(table.selected(), Some(0));
        table.scroll_down();
        table.scroll_down();
        table.scroll_down();
        assert_eq!(table.selected(), Some(2));
        table.jump_to_start();
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_page_navigation() {
        let mut table = LogTable::new(25, 80, 10);
        table.page_down();
        assert_eq!(table.selected(), Some(10));
        table.page_down();
        table.page_down();
        assert_eq!(table.selected(), Some(24));
        table.page_up();
        assert_eq!(table.selected(), Some(14));
    }
}

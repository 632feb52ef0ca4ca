/// Single-line text input with a byte-offset cursor.
///
/// The cursor always sits on a char boundary of `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    /// Shown dimmed while the value is empty
    pub placeholder: String,
    /// Display width in cells
    pub width: u16,
}

impl TextInput {
    pub fn new(placeholder: &str, width: u16) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: placeholder.to_string(),
            width,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the cursor to its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Get the current cursor position (byte offset)
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Number of chars before the cursor, used to place the terminal cursor
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    /// Add a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            let mut next = self.cursor + 1;
            while next < self.value.len() && !self.value.is_char_boundary(next) {
                next += 1;
            }
            self.cursor = next;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn delete_to_start(&mut self) {
        self.value.replace_range(..self.cursor, "");
        self.cursor = 0;
    }

    pub fn delete_to_end(&mut self) {
        self.value.truncate(self.cursor);
    }

    fn prev_boundary(&self) -> usize {
        let mut prev = self.cursor - 1;
        while prev > 0 && !self.value.is_char_boundary(prev) {
            prev -= 1;
        }
        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new("", 10);
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_cursor_starts_at_zero() {
        let input = TextInput::new("Enter keyword", 30);
        assert_eq!(input.cursor_position(), 0);
        assert_eq!(input.value(), "");
        assert!(!input.is_focused());
    }

    #[test]
    fn test_cursor_moves_with_input() {
        let input = typed("ab");
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = typed("ac");
        input.cursor_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_backspace_at_cursor() {
        let mut input = typed("abc");
        input.cursor_left();
        input.backspace();
        assert_eq!(input.value(), "ac");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut input = typed("abc");
        input.cursor_home();
        input.backspace();
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = typed("abc");
        input.cursor_home();
        input.delete();
        assert_eq!(input.value(), "bc");
        input.cursor_end();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_cursor_at_boundaries() {
        let mut input = typed("ab");
        input.cursor_right();
        assert_eq!(input.cursor_position(), 2);
        input.cursor_home();
        input.cursor_left();
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_cursor_with_unicode() {
        let mut input = typed("zé");
        assert_eq!(input.cursor_position(), 3);
        assert_eq!(input.cursor_column(), 2);
        input.cursor_left();
        assert_eq!(input.cursor_position(), 1);
        input.cursor_right();
        assert_eq!(input.cursor_position(), 3);
        input.backspace();
        assert_eq!(input.value(), "z");
    }

    #[test]
    fn test_delete_to_start_and_end() {
        let mut input = typed("2024-10-05");
        for _ in 0..3 {
            input.cursor_left();
        }
        input.delete_to_end();
        assert_eq!(input.value(), "2024-10");
        input.cursor_left();
        input.delete_to_start();
        assert_eq!(input.value(), "0");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut input = TextInput::new("", 10);
        input.set_value("memory");
        assert_eq!(input.cursor_position(), 6);
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor_position(), 0);
    }
}

use crate::focus::FocusCommand;

/// Events that can occur in the application
/// Handlers return these events instead of mutating app state directly
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // Table navigation
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    JumpToStart,
    JumpToEnd,

    // Tab navigation
    NextTab,
    PrevTab,

    // Focus changes (see `focus::transition`)
    Focus(FocusCommand),

    // Editing of the focused input
    InputChar(char),
    InputBackspace,
    InputDelete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    DeleteToStart, // Ctrl+U
    DeleteToEnd,   // Ctrl+K

    // System events
    Resize { width: u16, height: u16 },
    Quit,
}

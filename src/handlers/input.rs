use crate::app::App;
use crate::event::AppEvent;
use crate::focus::{FocusCommand, FocusTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle keyboard input and return corresponding events
/// Does not mutate app state directly - returns events to be processed
pub fn handle_input_event(key: KeyEvent, app: &App) -> Vec<AppEvent> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Keys that behave the same regardless of focus
    match key.code {
        KeyCode::Tab => return vec![AppEvent::NextTab],
        KeyCode::BackTab => return vec![AppEvent::PrevTab],
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![AppEvent::Quit]
        }
        _ => {}
    }

    match app.focus {
        FocusTarget::LogTable => handle_table_mode(key),
        FocusTarget::SearchBox | FocusTarget::StartDateBox | FocusTarget::EndDateBox => {
            handle_text_input_mode(key)
        }
    }
}

/// Handle keyboard input while the log table has focus
fn handle_table_mode(key: KeyEvent) -> Vec<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => vec![AppEvent::Quit],
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::Char('q') => vec![AppEvent::Quit],
        KeyCode::Char('/') => vec![AppEvent::Focus(FocusCommand::FocusSearch)],
        KeyCode::Char('f') => vec![AppEvent::Focus(FocusCommand::FocusStartDate)],
        KeyCode::Char('e') => vec![AppEvent::Focus(FocusCommand::FocusEndDate)],
        KeyCode::Down | KeyCode::Char('j') => vec![AppEvent::ScrollDown],
        KeyCode::Up | KeyCode::Char('k') => vec![AppEvent::ScrollUp],
        KeyCode::PageDown | KeyCode::Char(' ') => vec![AppEvent::PageDown],
        KeyCode::PageUp | KeyCode::Char('b') => vec![AppEvent::PageUp],
        KeyCode::Home | KeyCode::Char('g') => vec![AppEvent::JumpToStart],
        KeyCode::End | KeyCode::Char('G') => vec![AppEvent::JumpToEnd],
        _ => vec![],
    }
}

/// Handle keyboard input while one of the filter inputs has focus
fn handle_text_input_mode(key: KeyEvent) -> Vec<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => vec![AppEvent::Focus(FocusCommand::Cancel)],
            KeyCode::Char('a') => vec![AppEvent::CursorHome],
            KeyCode::Char('e') => vec![AppEvent::CursorEnd],
            KeyCode::Char('u') => vec![AppEvent::DeleteToStart],
            KeyCode::Char('k') => vec![AppEvent::DeleteToEnd],
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::Esc => vec![AppEvent::Focus(FocusCommand::Cancel)],
        KeyCode::Enter => vec![AppEvent::Focus(FocusCommand::Commit)],
        KeyCode::Char(c) => vec![AppEvent::InputChar(c)],
        KeyCode::Backspace => vec![AppEvent::InputBackspace],
        KeyCode::Delete => vec![AppEvent::InputDelete],
        KeyCode::Left => vec![AppEvent::CursorLeft],
        KeyCode::Right => vec![AppEvent::CursorRight],
        KeyCode::Home => vec![AppEvent::CursorHome],
        KeyCode::End => vec![AppEvent::CursorEnd],
        _ => vec![],
    }
}

pub mod input;
pub mod table;

pub use input::TextInput;
pub use table::LogTable;

use crate::event::AppEvent;
use crate::filter::{filter_logs, FilterCriteria};
use crate::focus::{self, FocusEffect, FocusTarget};
use crate::log_store::{Category, LogRecord, LogStore};
use crate::theme::Theme;
use table::DEFAULT_TABLE_HEIGHT;

const SEARCH_PLACEHOLDER: &str = "Enter keyword";
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";
const SEARCH_INPUT_WIDTH: u16 = 30;
const DATE_INPUT_WIDTH: u16 = 12;

/// Startup settings resolved from config and command line
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub initial_tab: Category,
    /// Pre-filled filter fields, applied before the first frame
    pub criteria: FilterCriteria,
    pub table_height: u16,
    pub theme: Theme,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_tab: Category::default(),
            criteria: FilterCriteria::default(),
            table_height: DEFAULT_TABLE_HEIGHT,
            theme: Theme::default(),
        }
    }
}

/// Main application state
///
/// `filtered` always holds the active tab's records filtered by the last
/// applied criteria; every mutation of the tab or a committed field
/// recomputes it before returning.
pub struct App {
    store: LogStore,

    /// Currently displayed category
    pub active_tab: Category,

    /// Element owning keyboard input
    pub focus: FocusTarget,

    pub search: TextInput,
    pub start_date: TextInput,
    pub end_date: TextInput,

    /// Rows shown in the log table
    pub filtered: Vec<LogRecord>,

    /// Criteria that produced `filtered`
    applied: FilterCriteria,

    pub table: LogTable,
    table_height: u16,

    /// Terminal size from the last resize event
    pub width: u16,
    pub height: u16,

    /// Should the app quit
    pub should_quit: bool,

    /// Color theme for UI rendering
    pub theme: Theme,
}

impl App {
    pub fn new(store: LogStore, options: AppOptions) -> Self {
        let mut search = TextInput::new(SEARCH_PLACEHOLDER, SEARCH_INPUT_WIDTH);
        let mut start_date = TextInput::new(DATE_PLACEHOLDER, DATE_INPUT_WIDTH);
        let mut end_date = TextInput::new(DATE_PLACEHOLDER, DATE_INPUT_WIDTH);
        search.set_value(options.criteria.query);
        start_date.set_value(options.criteria.start_date);
        end_date.set_value(options.criteria.end_date);

        let mut app = Self {
            store,
            active_tab: options.initial_tab,
            focus: FocusTarget::LogTable,
            search,
            start_date,
            end_date,
            filtered: Vec::new(),
            applied: FilterCriteria::default(),
            table: LogTable::default(),
            table_height: options.table_height,
            width: 0,
            height: 0,
            should_quit: false,
            theme: options.theme,
        };
        app.recompute();
        app
    }

    /// Criteria built from the current field values
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.search.value(),
            self.start_date.value(),
            self.end_date.value(),
        )
    }

    /// Criteria that produced the visible rows
    pub fn applied_criteria(&self) -> &FilterCriteria {
        &self.applied
    }

    /// Number of records in the active tab before filtering
    pub fn total_in_tab(&self) -> usize {
        self.store.records(self.active_tab).len()
    }

    pub fn input(&self, target: FocusTarget) -> Option<&TextInput> {
        match target {
            FocusTarget::LogTable => None,
            FocusTarget::SearchBox => Some(&self.search),
            FocusTarget::StartDateBox => Some(&self.start_date),
            FocusTarget::EndDateBox => Some(&self.end_date),
        }
    }

    fn input_mut(&mut self, target: FocusTarget) -> Option<&mut TextInput> {
        match target {
            FocusTarget::LogTable => None,
            FocusTarget::SearchBox => Some(&mut self.search),
            FocusTarget::StartDateBox => Some(&mut self.start_date),
            FocusTarget::EndDateBox => Some(&mut self.end_date),
        }
    }

    /// The input currently receiving keystrokes, if any
    pub fn focused_input(&self) -> Option<&TextInput> {
        self.input(self.focus)
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        self.input_mut(self.focus)
    }

    /// Move focus and keep the inputs' focused flags in sync with it.
    fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target;
        for candidate in [
            FocusTarget::SearchBox,
            FocusTarget::StartDateBox,
            FocusTarget::EndDateBox,
        ] {
            if let Some(input) = self.input_mut(candidate) {
                if candidate == target {
                    input.focus();
                } else {
                    input.blur();
                }
            }
        }
    }

    /// Switch the displayed category and refilter.
    pub fn select_tab(&mut self, tab: Category) {
        self.active_tab = tab;
        self.recompute();
    }

    /// Re-run the filters for the active tab and rebuild the table.
    pub fn recompute(&mut self) {
        let criteria = self.criteria();
        self.filtered = filter_logs(
            self.store.records(self.active_tab),
            &criteria.query,
            &criteria.start_date,
            &criteria.end_date,
        );
        self.applied = criteria;
        self.reset_table();
    }

    fn reset_table(&mut self) {
        self.table = LogTable::new(self.filtered.len(), self.width, self.table_height);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.reset_table();
    }

    fn apply_focus(&mut self, command: focus::FocusCommand) {
        let Some(transition) = focus::transition(self.focus, command) else {
            return;
        };
        if let FocusEffect::ClearAndRecompute(target) = transition.effect {
            if let Some(input) = self.input_mut(target) {
                input.clear();
            }
        }
        self.set_focus(transition.next);
        if transition.effect != FocusEffect::None {
            self.recompute();
        }
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            // Table navigation only applies while the table has focus
            AppEvent::ScrollDown
            | AppEvent::ScrollUp
            | AppEvent::PageDown
            | AppEvent::PageUp
            | AppEvent::JumpToStart
            | AppEvent::JumpToEnd
                if self.focus != FocusTarget::LogTable => {}
            AppEvent::ScrollDown => self.table.scroll_down(),
            AppEvent::ScrollUp => self.table.scroll_up(),
            AppEvent::PageDown => self.table.page_down(),
            AppEvent::PageUp => self.table.page_up(),
            AppEvent::JumpToStart => self.table.jump_to_start(),
            AppEvent::JumpToEnd => self.table.jump_to_end(),

            AppEvent::NextTab => self.select_tab(self.active_tab.next()),
            AppEvent::PrevTab => self.select_tab(self.active_tab.prev()),

            AppEvent::Focus(command) => self.apply_focus(command),

            AppEvent::InputChar(c) => self.edit(|input| input.insert_char(c)),
            AppEvent::InputBackspace => self.edit(TextInput::backspace),
            AppEvent::InputDelete => self.edit(TextInput::delete),
            AppEvent::CursorLeft => self.edit(TextInput::cursor_left),
            AppEvent::CursorRight => self.edit(TextInput::cursor_right),
            AppEvent::CursorHome => self.edit(TextInput::cursor_home),
            AppEvent::CursorEnd => self.edit(TextInput::cursor_end),
            AppEvent::DeleteToStart => self.edit(TextInput::delete_to_start),
            AppEvent::DeleteToEnd => self.edit(TextInput::delete_to_end),

            AppEvent::Resize { width, height } => self.resize(width, height),
            AppEvent::Quit => self.should_quit = true,
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut TextInput)) {
        if let Some(input) = self.focused_input_mut() {
            f(input);
        }
    }
}

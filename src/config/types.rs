//! Config types for logscope.
//!
//! Defines structures for parsing and representing configuration files.

use std::path::PathBuf;

use serde::Deserialize;

use crate::app::table::DEFAULT_TABLE_HEIGHT;
use crate::log_store::Category;
use crate::theme::{RawThemeConfig, Theme};

/// Top-level keys accepted in a config file (used for typo suggestions).
pub const KNOWN_FIELDS: &[&str] = &["theme", "table_height", "initial_tab"];

/// Allowed range for `table_height`.
pub const TABLE_HEIGHT_RANGE: std::ops::RangeInclusive<u16> = 1..=100;

/// Raw config file structure (used for parsing).
///
/// This struct directly mirrors the YAML config file structure.
/// Unknown fields are rejected with an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Theme configuration (name or custom struct).
    #[serde(default)]
    pub theme: Option<RawThemeConfig>,
    /// Number of visible rows in the log table.
    #[serde(default)]
    pub table_height: Option<u16>,
    /// Tab shown at startup (`errors`, `warnings`, `information`).
    #[serde(default)]
    pub initial_tab: Option<String>,
}

impl RawConfig {
    /// Layer `overlay` on top of `self`; every key set in `overlay` wins.
    pub fn merge(self, overlay: RawConfig) -> RawConfig {
        RawConfig {
            theme: overlay.theme.or(self.theme),
            table_height: overlay.table_height.or(self.table_height),
            initial_tab: overlay.initial_tab.or(self.initial_tab),
        }
    }
}

/// Effective configuration after merging global and project files.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub theme: Theme,
    pub table_height: u16,
    pub initial_tab: Category,
    /// Files that contributed to this config, in load order.
    pub loaded_from: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            table_height: DEFAULT_TABLE_HEIGHT,
            initial_tab: Category::default(),
            loaded_from: Vec::new(),
        }
    }
}

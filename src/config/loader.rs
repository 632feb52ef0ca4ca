//! Config loading for logscope.
//!
//! Loads, validates and merges YAML config files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::discovery::DiscoveryResult;
use crate::config::error::ConfigError;
use crate::config::types::{Config, RawConfig, TABLE_HEIGHT_RANGE};
use crate::log_store::Category;
use crate::theme::loader::resolve_theme;

/// Load and parse a YAML config file.
///
/// Returns the parsed RawConfig or a ConfigError with location and suggestions.
fn load_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    // An empty file is a valid, empty config
    if content.trim().is_empty() {
        return Ok(RawConfig::default());
    }

    let raw: RawConfig = serde_saphyr::from_str(&content)
        .map_err(|e| ConfigError::from_parse_error(path.to_path_buf(), e))?;
    validate(&raw, path)?;
    Ok(raw)
}

/// Semantic checks that serde cannot express.
fn validate(raw: &RawConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(height) = raw.table_height {
        if !TABLE_HEIGHT_RANGE.contains(&height) {
            return Err(ConfigError::Validation {
                path: path.to_path_buf(),
                message: format!(
                    "table_height must be between {} and {}, got {}",
                    TABLE_HEIGHT_RANGE.start(),
                    TABLE_HEIGHT_RANGE.end(),
                    height
                ),
            });
        }
    }
    if let Some(tab) = &raw.initial_tab {
        tab.parse::<Category>()
            .map_err(|message| ConfigError::Validation {
                path: path.to_path_buf(),
                message,
            })?;
    }
    resolve_theme(raw.theme.as_ref()).map_err(|e| e.with_path(path.to_path_buf()))?;
    Ok(())
}

/// Turn a validated raw config into the effective config.
fn resolve(raw: RawConfig, loaded_from: Vec<PathBuf>) -> Result<Config, ConfigError> {
    let mut config = Config {
        theme: resolve_theme(raw.theme.as_ref())?,
        loaded_from,
        ..Config::default()
    };
    if let Some(height) = raw.table_height {
        config.table_height = height;
    }
    if let Some(tab) = raw.initial_tab {
        config.initial_tab = tab.parse().map_err(|message| ConfigError::Validation {
            path: PathBuf::new(),
            message,
        })?;
    }
    Ok(config)
}

/// Load config from a single file (closest-wins semantics for config commands).
pub fn load_single_file(path: &Path) -> Result<Config, ConfigError> {
    let raw = load_file(path)?;
    resolve(raw, vec![path.to_path_buf()])
}

/// Load config from discovered config files.
///
/// The global config is loaded first; keys set in the project config
/// override it. A project `theme` replaces the global one entirely.
///
/// Returns the default Config if no config files exist.
pub fn load(discovery: &DiscoveryResult) -> Result<Config, ConfigError> {
    let mut merged = RawConfig::default();
    let mut loaded_from = Vec::new();

    for path in [&discovery.global_config, &discovery.project_config]
        .into_iter()
        .flatten()
    {
        merged = merged.merge(load_file(path)?);
        loaded_from.push(path.clone());
    }

    resolve(merged, loaded_from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use ratatui::style::Color;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_empty_discovery() {
        let config = load(&DiscoveryResult::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.table_height, 10);
    }

    #[test]
    fn test_load_project_config() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "logscope.yaml",
            "theme: light\ntable_height: 15\ninitial_tab: warnings\n",
        );

        let config = load_single_file(&path).unwrap();

        assert_eq!(config.theme, Theme::light());
        assert_eq!(config.table_height, 15);
        assert_eq!(config.initial_tab, Category::Warnings);
        assert_eq!(config.loaded_from, vec![path]);
    }

    #[test]
    fn test_project_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = write(&temp, "global.yaml", "theme: light\ntable_height: 20\n");
        let project = write(&temp, "logscope.yaml", "table_height: 5\n");

        let config = load(&DiscoveryResult {
            project_config: Some(project.clone()),
            global_config: Some(global.clone()),
        })
        .unwrap();

        assert_eq!(config.table_height, 5);
        assert_eq!(config.theme, Theme::light());
        assert_eq!(config.loaded_from, vec![global, project]);
    }

    #[test]
    fn test_custom_theme() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "logscope.yaml",
            "theme:\n  base: dark\n  palette:\n    accent: \"#00ffff\"\n  ui:\n    help_key: yellow\n",
        );

        let config = load_single_file(&path).unwrap();

        assert_eq!(config.theme.ui.title, Color::Rgb(0, 255, 255));
        assert_eq!(config.theme.ui.help_key, Color::Yellow);
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "logscope.yaml", "\n");
        let config = load_single_file(&path).unwrap();
        assert_eq!(config.table_height, 10);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "logscope.yaml", "table_hieght: 5\n");
        let err = load_single_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("table_hieght"));
    }

    #[test]
    fn test_table_height_out_of_range() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "logscope.yaml", "table_height: 0\n");
        let err = load_single_file(&path).unwrap_err();
        assert!(err.to_string().contains("table_height must be between 1 and 100"));
        assert!(err.to_string().contains("logscope.yaml"));
    }

    #[test]
    fn test_unknown_initial_tab() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "logscope.yaml", "initial_tab: debug\n");
        let err = load_single_file(&path).unwrap_err();
        assert!(err.to_string().contains("unknown category 'debug'"));
    }

    #[test]
    fn test_unknown_theme_reports_file() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "logscope.yaml", "theme: drak\n");
        let err = load_single_file(&path).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("unknown theme 'drak'"));
        assert!(rendered.contains(&path.display().to_string()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_single_file(&temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

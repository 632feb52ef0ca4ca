//! `config validate` and `config show` for logscope.
//!
//! Both commands operate on the closest config file only: the project
//! `logscope.yaml` if one is found, otherwise the global file.

use crate::config::{self, Config};
use crate::theme::Theme;
use colored::Colorize;
use std::path::Path;

/// Validate the effective config file.
///
/// Quiet on success; prints the error to stderr and returns exit code 1
/// on failure.
pub fn validate() -> Result<(), i32> {
    let discovery = config::discover();
    let Some(path) = discovery.effective_config() else {
        eprintln!("error: No config found to validate");
        return Err(1);
    };

    match config::load_single_file(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{}", e);
            Err(1)
        }
    }
}

/// Print the effective configuration. Respects NO_COLOR via `colored`.
pub fn show() -> Result<(), i32> {
    let discovery = config::discover();
    match discovery.effective_config() {
        Some(path) => match config::load_single_file(path) {
            Ok(cfg) => {
                print!("{}", describe(&cfg, Some(path)));
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", e);
                Err(1)
            }
        },
        None => {
            print!("{}", describe(&Config::default(), None));
            Ok(())
        }
    }
}

fn theme_name(theme: &Theme) -> &'static str {
    if *theme == Theme::dark() {
        "dark"
    } else if *theme == Theme::light() {
        "light"
    } else {
        "custom"
    }
}

fn describe(cfg: &Config, path: Option<&Path>) -> String {
    let mut out = String::new();
    match path {
        Some(path) => {
            out.push_str(&format!("Using: {}\n", path.display().to_string().dimmed()));
        }
        None => {
            out.push_str(&format!("{}\n", "No config found. Using defaults.".dimmed()));
        }
    }
    out.push('\n');
    out.push_str(&format!(
        "{}: {}\n",
        "theme".cyan(),
        theme_name(&cfg.theme).green()
    ));
    out.push_str(&format!(
        "{}: {}\n",
        "table_height".cyan(),
        cfg.table_height.to_string().yellow()
    ));
    out.push_str(&format!(
        "{}: {}\n",
        "initial_tab".cyan(),
        cfg.initial_tab.title().to_lowercase().green()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_store::Category;
    use std::path::PathBuf;

    #[test]
    fn test_describe_defaults() {
        let out = describe(&Config::default(), None);
        assert!(out.contains("No config found. Using defaults."));
        assert!(out.contains("dark"));
        assert!(out.contains("10"));
        assert!(out.contains("errors"));
    }

    #[test]
    fn test_describe_loaded_config() {
        let cfg = Config {
            theme: Theme::light(),
            table_height: 25,
            initial_tab: Category::Information,
            loaded_from: vec![PathBuf::from("/tmp/logscope.yaml")],
        };
        let out = describe(&cfg, Some(Path::new("/tmp/logscope.yaml")));
        assert!(out.contains("/tmp/logscope.yaml"));
        assert!(out.contains("light"));
        assert!(out.contains("25"));
        assert!(out.contains("information"));
    }

    #[test]
    fn test_theme_name_custom() {
        let mut theme = Theme::dark();
        theme.ui.title = ratatui::style::Color::Blue;
        assert_eq!(theme_name(&theme), "custom");
    }
}

//! Command line definitions for logscope.

pub mod config;

use clap::{Parser, Subcommand};

use crate::app::AppOptions;
use crate::config::Config;
use crate::filter::FilterCriteria;
use crate::log_store::Category;

#[derive(Parser, Debug)]
#[command(name = "logscope", version)]
#[command(about = "Browse categorized system logs with search and date filters", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tab shown at startup (errors, warnings, information)
    #[arg(long, value_name = "CATEGORY")]
    pub tab: Option<Category>,

    /// Pre-fill the search field
    #[arg(short = 'q', long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Pre-fill the start date field
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<String>,

    /// Pre-fill the end date field
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<String>,

    /// Print config discovery details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Layer the command line flags over the loaded config.
    pub fn app_options(&self, cfg: Config) -> AppOptions {
        AppOptions {
            initial_tab: self.tab.unwrap_or(cfg.initial_tab),
            criteria: FilterCriteria::new(
                self.query.clone().unwrap_or_default(),
                self.from.clone().unwrap_or_default(),
                self.to.clone().unwrap_or_default(),
            ),
            table_height: cfg.table_height,
            theme: cfg.theme,
        }
    }
}

/// Available subcommands for logscope.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Config file commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the config file
    Validate,
    /// Show effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_prefill_flags() {
        let args = Args::try_parse_from([
            "logscope",
            "--tab",
            "warnings",
            "-q",
            "disk",
            "--from",
            "2024-10-01",
            "--to",
            "2024-10-05",
        ])
        .unwrap();
        assert_eq!(args.tab, Some(Category::Warnings));
        assert_eq!(args.query.as_deref(), Some("disk"));
        assert_eq!(args.from.as_deref(), Some("2024-10-01"));
        assert_eq!(args.to.as_deref(), Some("2024-10-05"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_unknown_tab_rejected() {
        assert!(Args::try_parse_from(["logscope", "--tab", "debug"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cfg = Config {
            initial_tab: Category::Information,
            table_height: 5,
            ..Config::default()
        };
        let args = Args::try_parse_from(["logscope", "--tab", "errors", "--to", "2024-10-03"]).unwrap();
        let options = args.app_options(cfg);
        assert_eq!(options.initial_tab, Category::Errors);
        assert_eq!(options.table_height, 5);
        assert_eq!(options.criteria, FilterCriteria::new("", "", "2024-10-03"));
    }

    #[test]
    fn test_config_tab_used_without_flag() {
        let cfg = Config {
            initial_tab: Category::Warnings,
            ..Config::default()
        };
        let args = Args::try_parse_from(["logscope"]).unwrap();
        assert_eq!(args.app_options(cfg).initial_tab, Category::Warnings);
    }

    #[test]
    fn test_config_subcommands() {
        let args = Args::try_parse_from(["logscope", "config", "validate"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Config {
                action: ConfigAction::Validate
            })
        ));
        let args = Args::try_parse_from(["logscope", "config", "show"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Config {
                action: ConfigAction::Show
            })
        ));
    }
}

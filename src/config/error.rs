//! Config error types for logscope.
//!
//! Provides rich error messages with file locations and typo suggestions.

use std::fmt;
use std::path::PathBuf;

use strsim::jaro_winkler;

use super::types::KNOWN_FIELDS;

const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Error loading or parsing a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the config file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error.
    Parse {
        path: PathBuf,
        message: String,
        line: Option<usize>,
        column: Option<usize>,
        suggestion: Option<String>,
    },

    /// Validation error (semantic errors after parsing).
    Validation { path: PathBuf, message: String },
}

impl ConfigError {
    /// Build a parse error from the YAML deserializer's message.
    ///
    /// Picks up `line N column M` locations when the message has them, and
    /// suggests the closest known key for `unknown field` errors.
    pub fn from_parse_error(path: PathBuf, err: impl fmt::Display) -> Self {
        let message = err.to_string();
        let (line, column) = parse_location(&message);
        let suggestion = unknown_field(&message).and_then(suggest_field);
        let first_line = message.lines().next().unwrap_or_default().to_string();

        ConfigError::Parse {
            path,
            message: first_line,
            line,
            column,
            suggestion,
        }
    }

    /// Attach the file path to errors raised before the path was known.
    pub fn with_path(self, path: PathBuf) -> Self {
        match self {
            ConfigError::Validation { message, .. } => ConfigError::Validation { path, message },
            other => other,
        }
    }

    /// Format error in Cargo-style format.
    pub fn format_cargo_style(&self) -> String {
        match self {
            ConfigError::Io { path, source } => {
                format!(
                    "error: cannot read config file\n  --> {}\n  |\n  = {}\n",
                    path.display(),
                    source
                )
            }
            ConfigError::Parse {
                path,
                message,
                line,
                column,
                suggestion,
            } => {
                let location = match (line, column) {
                    (Some(l), Some(c)) => format!("{}:{}:{}", path.display(), l, c),
                    (Some(l), None) => format!("{}:{}", path.display(), l),
                    _ => format!("{}", path.display()),
                };
                let mut output = format!("error: {}\n  --> {}\n  |\n", message, location);
                if let Some(suggestion) = suggestion {
                    output.push_str(&format!("  = help: did you mean `{}`?\n", suggestion));
                }
                output
            }
            ConfigError::Validation { path, message } => {
                format!("error: {}\n  --> {}\n  |\n", message, path.display())
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_cargo_style())
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Extract the number following `keyword` in `message`.
fn number_after(message: &str, keyword: &str) -> Option<usize> {
    let start = message.find(keyword)? + keyword.len();
    let digits: String = message[start..]
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn parse_location(message: &str) -> (Option<usize>, Option<usize>) {
    (
        number_after(message, "line"),
        number_after(message, "column"),
    )
}

/// Field name from serde's "unknown field `x`" message.
fn unknown_field(message: &str) -> Option<&str> {
    let rest = &message[message.find("unknown field")? + "unknown field".len()..];
    let start = rest.find('`')? + 1;
    let end = start + rest[start..].find('`')?;
    Some(&rest[start..end])
}

fn suggest_field(field: &str) -> Option<String> {
    KNOWN_FIELDS
        .iter()
        .map(|known| (known, jaro_winkler(field, known)))
        .filter(|(_, score)| *score >= SIMILARITY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(known, _)| known.to_string())
}

//! In-memory log collections, one per severity category.

use std::fmt;
use std::str::FromStr;

/// A single timestamped log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Sortable date (`YYYY-MM-DD`)
    pub timestamp: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }
}

/// Severity category. Each category is shown as one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Errors,
    Warnings,
    Information,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [Category::Errors, Category::Warnings, Category::Information];

    pub fn title(self) -> &'static str {
        match self {
            Category::Errors => "Errors",
            Category::Warnings => "Warnings",
            Category::Information => "Information",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Next tab, wrapping from Information back to Errors.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping from Errors back to Information.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "errors" | "error" => Ok(Category::Errors),
            "warnings" | "warning" => Ok(Category::Warnings),
            "information" | "info" => Ok(Category::Information),
            _ => Err(format!(
                "unknown category '{}'. Valid values: errors, warnings, information",
                s
            )),
        }
    }
}

/// Categorized log collections. Records never change after construction.
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    errors: Vec<LogRecord>,
    warnings: Vec<LogRecord>,
    info: Vec<LogRecord>,
}

impl LogStore {
    pub fn new(errors: Vec<LogRecord>, warnings: Vec<LogRecord>, info: Vec<LogRecord>) -> Self {
        Self {
            errors,
            warnings,
            info,
        }
    }

    /// The built-in sample data set.
    pub fn sample() -> Self {
        Self::new(
            vec![
                LogRecord::new("2024-10-01", "authentication failure"),
                LogRecord::new("2024-10-05", "out of memory"),
            ],
            vec![
                LogRecord::new("2024-10-02", "disk usage high"),
                LogRecord::new("2024-10-06", "CPU usage high"),
            ],
            vec![
                LogRecord::new("2024-10-01", "service started"),
                LogRecord::new("2024-10-04", "configuration loaded"),
            ],
        )
    }

    pub fn records(&self, category: Category) -> &[LogRecord] {
        match category {
            Category::Errors => &self.errors,
            Category::Warnings => &self.warnings,
            Category::Information => &self.info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_forward_cycles_is_identity() {
        for start in Category::ALL {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn test_next_then_prev_is_noop() {
        for start in Category::ALL {
            assert_eq!(start.next().prev(), start);
            assert_eq!(start.prev().next(), start);
        }
    }

    #[test]
    fn test_tab_order() {
        assert_eq!(Category::Errors.next(), Category::Warnings);
        assert_eq!(Category::Warnings.next(), Category::Information);
        assert_eq!(Category::Information.next(), Category::Errors);
        assert_eq!(Category::Errors.prev(), Category::Information);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("errors".parse::<Category>().unwrap(), Category::Errors);
        assert_eq!("Warnings".parse::<Category>().unwrap(), Category::Warnings);
        assert_eq!("info".parse::<Category>().unwrap(), Category::Information);
        assert!("debug".parse::<Category>().is_err());
    }

    #[test]
    fn test_sample_store_has_one_collection_per_category() {
        let store = LogStore::sample();
        assert_eq!(store.records(Category::Errors)[1].message, "out of memory");
        assert_eq!(store.records(Category::Warnings).len(), 2);
        assert_eq!(
            store.records(Category::Information)[0],
            LogRecord::new("2024-10-01", "service started")
        );
    }
}

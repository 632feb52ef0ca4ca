pub mod date_filter;
pub mod engine;
pub mod string_filter;

pub use engine::{filter_logs, FilterEngine};

use crate::log_store::LogRecord;

/// Trait for extensible record filtering
pub trait Filter {
    fn matches(&self, record: &LogRecord) -> bool;
}

/// The committed filter inputs. Empty fields are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub start_date: String,
    pub end_date: String,
}

impl FilterCriteria {
    pub fn new(
        query: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// True when no field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.start_date.is_empty() && self.end_date.is_empty()
    }
}

use super::date_filter::DateRangeFilter;
use super::string_filter::StringFilter;
use super::{Filter, FilterCriteria};
use crate::log_store::LogRecord;

/// Applies a set of filters to a record collection.
///
/// A record is kept when every filter accepts it. Input order is preserved.
pub struct FilterEngine {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterEngine {
    pub fn new(filters: Vec<Box<dyn Filter>>) -> Self {
        Self { filters }
    }

    /// Message search plus date range built from the criteria.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self::new(vec![
            Box::new(StringFilter::new(&criteria.query)),
            Box::new(DateRangeFilter::new(&criteria.start_date, &criteria.end_date)),
        ])
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    pub fn run(&self, records: &[LogRecord]) -> Vec<LogRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Filter `records` by message query and inclusive date bounds.
pub fn filter_logs(records: &[LogRecord], query: &str, start: &str, end: &str) -> Vec<LogRecord> {
    FilterEngine::from_criteria(&FilterCriteria::new(query, start, end)).run(records)
}

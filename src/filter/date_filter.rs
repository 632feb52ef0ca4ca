use super::Filter;
use crate::log_store::LogRecord;

/// Inclusive timestamp bounds, compared lexicographically.
///
/// Bounds are not validated: a malformed date such as `2024-1-5` is still
/// compared as a plain string.
pub struct DateRangeFilter {
    start: Option<String>,
    end: Option<String>,
}

impl DateRangeFilter {
    /// Empty bounds are treated as unconstrained.
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: (!start.is_empty()).then(|| start.to_string()),
            end: (!end.is_empty()).then(|| end.to_string()),
        }
    }
}

impl Filter for DateRangeFilter {
    fn matches(&self, record: &LogRecord) -> bool {
        let ts = record.timestamp.as_str();
        if let Some(start) = &self.start {
            if ts < start.as_str() {
                return false;
            }
        }
        if let Some(end) = &self.end {
            if ts > end.as_str() {
                return false;
            }
        }
        true
    }
}

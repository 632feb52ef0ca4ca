use super::Filter;
use crate::log_store::LogRecord;

/// Substring match against the record message (case-insensitive)
pub struct StringFilter {
    pattern: String,
}

impl StringFilter {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_lowercase(),
        }
    }
}

impl Filter for StringFilter {
    fn matches(&self, record: &LogRecord) -> bool {
        self.pattern.is_empty() || record.message.to_lowercase().contains(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let filter = StringFilter::new("CPU");
        assert!(filter.matches(&LogRecord::new("2024-10-06", "cpu usage high")));
        assert!(filter.matches(&LogRecord::new("2024-10-06", "CPU usage high")));
        assert!(!filter.matches(&LogRecord::new("2024-10-02", "disk usage high")));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let filter = StringFilter::new("");
        assert!(filter.matches(&LogRecord::new("", "")));
        assert!(filter.matches(&LogRecord::new("2024-10-01", "service started")));
    }

    #[test]
    fn test_only_message_is_searched() {
        let filter = StringFilter::new("2024");
        assert!(!filter.matches(&LogRecord::new("2024-10-01", "service started")));
    }

    #[test]
    fn test_unicode_case_folding() {
        let filter = StringFilter::new("ÜBER");
        assert!(filter.matches(&LogRecord::new("2024-10-01", "quota über limit")));
    }
}

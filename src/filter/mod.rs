//! Client-side filters for the list views.
//!
//! Each filter mirrors one screen: a free-text search over a fixed haystack
//! plus optional drop-down selectors.

pub mod course;
pub mod student;

pub use course::CourseFilter;
pub use student::StudentFilter;

/// A predicate over one record type
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;

    /// Records that pass, in their original order
    fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

/// Case-insensitive substring test; an empty or blank needle matches everything
pub(crate) fn search_matches(needle: &str, haystack: &str) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_matches_anything() {
        assert!(search_matches("", "anything"));
        assert!(search_matches("   ", ""));
    }

    #[test]
    fn search_ignores_case() {
        assert!(search_matches("LOVE", "ada lovelace"));
        assert!(!search_matches("babbage", "ada lovelace"));
    }
}

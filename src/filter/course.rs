use super::{search_matches, RecordFilter};
use crate::models::Course;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub search: String,
}

impl CourseFilter {
    pub fn new(search: impl Into<String>) -> Self {
        Self { search: search.into() }
    }
}

impl RecordFilter<Course> for CourseFilter {
    fn matches(&self, course: &Course) -> bool {
        search_matches(&self.search, &format!("{} {}", course.course_code, course.title))
    }
}

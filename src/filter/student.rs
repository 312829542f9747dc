use super::{search_matches, RecordFilter};
use crate::models::{Student, StudentStatus};
use crate::types::Selector;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    pub search: String,
    pub status: Selector<StudentStatus>,
}

impl StudentFilter {
    pub fn new(search: impl Into<String>, status: Selector<StudentStatus>) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    fn haystack(student: &Student) -> String {
        format!(
            "{} {} {} {} {}",
            student.first_name,
            student.middle_name.as_deref().unwrap_or(""),
            student.last_name,
            student.email,
            student.student_number
        )
    }
}

impl RecordFilter<Student> for StudentFilter {
    fn matches(&self, student: &Student) -> bool {
        search_matches(&self.search, &Self::haystack(student)) && self.status.accepts(student.status.as_ref())
    }
}

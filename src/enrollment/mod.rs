//! Bulk enrollment workflows.
//!
//! A [`BulkEnrollment`] is opened in one of two modes, collects a set of ids
//! against a single anchor, and is submitted as exactly one batched request.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::{info, warn};

use crate::api::RegistrarApi;
use crate::error::{ArmsError, ArmsResult};
use crate::models::{created_enrollments, BulkCoursesEnrollment, BulkStudentsEnrollment, Enrollment};
use crate::types::{EntityId, Term};

/// Academic years the enrollment forms accept
pub const YEAR_RANGE: RangeInclusive<i32> = 2020..=2030;
pub const DEFAULT_YEAR: i32 = 2025;
pub const DEFAULT_TERM: Term = Term::Spring;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkMode {
    /// Many students into one course
    StudentsIntoCourse,
    /// One student into many courses
    CoursesForStudent,
}

impl BulkMode {
    fn anchor_noun(&self) -> &'static str {
        match self {
            BulkMode::StudentsIntoCourse => "course",
            BulkMode::CoursesForStudent => "student",
        }
    }

    fn target_noun(&self) -> &'static str {
        match self {
            BulkMode::StudentsIntoCourse => "student",
            BulkMode::CoursesForStudent => "course",
        }
    }

    fn success_message(&self, count: usize) -> String {
        match self {
            BulkMode::StudentsIntoCourse => format!("Successfully enrolled {} students in the course!", count),
            BulkMode::CoursesForStudent => format!("Successfully enrolled student in {} courses!", count),
        }
    }
}

impl fmt::Display for BulkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkMode::StudentsIntoCourse => f.write_str("students into course"),
            BulkMode::CoursesForStudent => f.write_str("courses for student"),
        }
    }
}

/// Result of a successful bulk submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkOutcome {
    /// Size of the selection at submit time
    pub enrolled: usize,
    pub message: String,
    /// Enrollment records, when the backend echoes them
    pub created: Vec<Enrollment>,
}

/// An open bulk enrollment form
#[derive(Debug, Clone, PartialEq)]
pub struct BulkEnrollment {
    mode: BulkMode,
    anchor: Option<EntityId>,
    term: Term,
    year: i32,
    selected: BTreeSet<EntityId>,
}

impl BulkEnrollment {
    pub fn open(mode: BulkMode) -> Self {
        Self {
            mode,
            anchor: None,
            term: DEFAULT_TERM,
            year: DEFAULT_YEAR,
            selected: BTreeSet::new(),
        }
    }

    pub fn students_into_course(course_id: EntityId) -> Self {
        Self::open(BulkMode::StudentsIntoCourse).with_anchor(course_id)
    }

    pub fn courses_for_student(student_id: EntityId) -> Self {
        Self::open(BulkMode::CoursesForStudent).with_anchor(student_id)
    }

    pub fn with_anchor(mut self, anchor: EntityId) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_term(mut self, term: Term, year: i32) -> Self {
        self.term = term;
        self.year = year;
        self
    }

    pub fn mode(&self) -> BulkMode {
        self.mode
    }

    pub fn anchor(&self) -> Option<EntityId> {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: EntityId) {
        self.anchor = Some(anchor);
    }

    pub fn term(&self) -> Term {
        self.term
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_term(&mut self, term: Term) {
        self.term = term;
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Add the id if absent, remove it if present; returns whether it is now selected
    pub fn toggle(&mut self, id: EntityId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Add without toggling, for ids given up front
    pub fn select(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        self.selected.extend(ids);
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.selected.iter().copied()
    }

    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// Checks that need no network access
    pub fn validate(&self) -> ArmsResult<EntityId> {
        if self.selected.is_empty() {
            return Err(ArmsError::validation(format!(
                "Please select at least one {}",
                self.mode.target_noun()
            )));
        }
        let anchor = self
            .anchor
            .ok_or_else(|| ArmsError::validation(format!("Please select a {}", self.mode.anchor_noun())))?;
        if !YEAR_RANGE.contains(&self.year) {
            return Err(ArmsError::validation(format!(
                "Year must be between {} and {}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            )));
        }
        Ok(anchor)
    }

    /// Send the whole selection as one request.
    ///
    /// The selection is cleared only on success; after a failure it is left as
    /// it was so the caller can retry or adjust.
    pub async fn submit(&mut self, api: &RegistrarApi, token: &str) -> ArmsResult<BulkOutcome> {
        let anchor = self.validate()?;
        let ids: Vec<EntityId> = self.selected.iter().copied().collect();
        let count = ids.len();

        let result = match self.mode {
            BulkMode::StudentsIntoCourse => {
                let request = BulkStudentsEnrollment {
                    course_id: anchor,
                    year: self.year,
                    term: self.term,
                    student_ids: ids,
                };
                api.bulk_enroll_students(&request, token).await
            }
            BulkMode::CoursesForStudent => {
                let request = BulkCoursesEnrollment {
                    student_id: anchor,
                    year: self.year,
                    term: self.term,
                    course_ids: ids,
                };
                api.bulk_enroll_courses(&request, token).await
            }
        };

        match result {
            Ok(payload) => {
                self.selected.clear();
                info!(mode = %self.mode, anchor, count, term = %self.term, year = self.year, "bulk enrollment submitted");
                Ok(BulkOutcome {
                    enrolled: count,
                    message: self.mode.success_message(count),
                    created: created_enrollments(&payload),
                })
            }
            Err(err) => {
                warn!(mode = %self.mode, anchor, count, error = %err, "bulk enrollment failed");
                Err(err)
            }
        }
    }

    /// Close the form without submitting
    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiGateway;
    use crate::testing::RecordingTransport;
    use serde_json::json;

    fn registrar(transport: &std::sync::Arc<RecordingTransport>) -> RegistrarApi {
        RegistrarApi::new(ApiGateway::new(transport.clone()))
    }

    #[test]
    fn double_toggle_restores_selection() {
        let mut form = BulkEnrollment::students_into_course(7);
        form.select([1, 2]);
        let before = form.clone();

        assert!(form.toggle(3));
        assert!(!form.toggle(3));
        assert_eq!(form, before);

        assert!(!form.toggle(1));
        assert!(form.toggle(1));
        assert_eq!(form, before);
    }

    #[tokio::test]
    async fn empty_selection_is_rejected_without_a_request() {
        let transport = RecordingTransport::new();
        let mut form = BulkEnrollment::students_into_course(7);

        let err = form.submit(&registrar(&transport), "t").await.unwrap_err();
        assert_eq!(err, ArmsError::validation("Please select at least one student"));

        let mut form = BulkEnrollment::courses_for_student(3);
        let err = form.submit(&registrar(&transport), "t").await.unwrap_err();
        assert_eq!(err, ArmsError::validation("Please select at least one course"));

        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_anchor_and_bad_year_are_local_failures() {
        let transport = RecordingTransport::new();
        let mut form = BulkEnrollment::open(BulkMode::CoursesForStudent);
        form.toggle(4);
        let err = form.submit(&registrar(&transport), "t").await.unwrap_err();
        assert_eq!(err, ArmsError::validation("Please select a student"));

        form.set_anchor(9);
        form.set_year(2019);
        let err = form.submit(&registrar(&transport), "t").await.unwrap_err();
        assert!(matches!(err, ArmsError::Validation(_)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn students_into_course_sends_one_batched_request() {
        let transport = RecordingTransport::new();
        transport.respond_json(201, json!({ "success": true, "data": [] }));
        let mut form = BulkEnrollment::students_into_course(12).with_term(Term::Fall, 2026);
        form.select([3, 1, 2]);

        let outcome = form.submit(&registrar(&transport), "tok").await.unwrap();

        assert_eq!(outcome.enrolled, 3);
        assert_eq!(outcome.message, "Successfully enrolled 3 students in the course!");
        assert_eq!(form.selection_len(), 0);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].endpoint, "/registrar/enrollments/bulk-students");
        assert_eq!(sent[0].bearer_token.as_deref(), Some("tok"));
        assert_eq!(
            sent[0].body,
            Some(json!({ "courseId": 12, "year": 2026, "term": "FALL", "studentIds": [1, 2, 3] }))
        );
    }

    #[tokio::test]
    async fn courses_for_student_reports_echoed_enrollments() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            200,
            json!([
                { "id": 40, "studentId": 5, "courseId": 8, "year": 2025, "term": "SPRING" },
                { "id": 41, "studentId": 5, "courseId": 9, "year": 2025, "term": "SPRING" }
            ]),
        );
        let mut form = BulkEnrollment::courses_for_student(5);
        form.select([8, 9]);

        let outcome = form.submit(&registrar(&transport), "tok").await.unwrap();

        assert_eq!(outcome.message, "Successfully enrolled student in 2 courses!");
        assert_eq!(outcome.created.len(), 2);
        assert_eq!(transport.requests()[0].endpoint, "/registrar/enrollments/bulk");
    }

    #[tokio::test]
    async fn failed_submit_keeps_selection_for_retry() {
        let transport = RecordingTransport::new();
        transport.respond_json(409, json!({ "message": "Student 2 is already enrolled" }));
        let mut form = BulkEnrollment::students_into_course(12);
        form.select([1, 2]);

        let err = form.submit(&registrar(&transport), "tok").await.unwrap_err();

        assert_eq!(err.to_string(), "Student 2 is already enrolled");
        assert_eq!(form.selected().collect::<Vec<_>>(), vec![1, 2]);

        transport.respond_json(200, json!({}));
        let outcome = form.submit(&registrar(&transport), "tok").await.unwrap();
        assert_eq!(outcome.enrolled, 2);
        assert_eq!(transport.call_count(), 2);
    }
}

use tokio::sync::RwLock;
use tracing::debug;

use crate::api::RegistrarApi;
use crate::error::ArmsResult;
use crate::models::{Course, Student};
use crate::tracker::{RequestTicket, RequestTracker};
use crate::types::EntityId;

const STUDENTS: &str = "students";
const COURSES: &str = "courses";

/// Students and courses loaded side by side for the enrollment and management views
pub struct Roster {
    api: RegistrarApi,
    tracker: RequestTracker,
    students: RwLock<Vec<Student>>,
    courses: RwLock<Vec<Course>>,
}

impl Roster {
    pub fn new(api: RegistrarApi) -> Self {
        Self {
            api,
            tracker: RequestTracker::new(),
            students: RwLock::new(Vec::new()),
            courses: RwLock::new(Vec::new()),
        }
    }

    /// Load both lists concurrently; lists from a superseded refresh are dropped
    pub async fn refresh(&self, token: &str) -> ArmsResult<()> {
        let students_ticket = self.tracker.begin(STUDENTS);
        let courses_ticket = self.tracker.begin(COURSES);

        let (students, courses) =
            futures::try_join!(self.api.list_students(token), self.api.list_courses(token))?;

        self.apply_students(&students_ticket, students).await;
        self.apply_courses(&courses_ticket, courses).await;
        Ok(())
    }

    pub fn begin_students(&self) -> RequestTicket {
        self.tracker.begin(STUDENTS)
    }

    pub fn begin_courses(&self) -> RequestTicket {
        self.tracker.begin(COURSES)
    }

    /// Returns false when a newer student load has started since `ticket`
    pub async fn apply_students(&self, ticket: &RequestTicket, students: Vec<Student>) -> bool {
        if self.tracker.is_superseded(ticket) {
            debug!(generation = ticket.generation(), "discarding stale student list");
            return false;
        }
        *self.students.write().await = students;
        true
    }

    pub async fn apply_courses(&self, ticket: &RequestTicket, courses: Vec<Course>) -> bool {
        if self.tracker.is_superseded(ticket) {
            debug!(generation = ticket.generation(), "discarding stale course list");
            return false;
        }
        *self.courses.write().await = courses;
        true
    }

    pub async fn students(&self) -> Vec<Student> {
        self.students.read().await.clone()
    }

    pub async fn courses(&self) -> Vec<Course> {
        self.courses.read().await.clone()
    }

    pub async fn find_student(&self, id: EntityId) -> Option<Student> {
        self.students.read().await.iter().find(|s| s.id == Some(id)).cloned()
    }

    pub async fn find_course(&self, id: EntityId) -> Option<Course> {
        self.courses.read().await.iter().find(|c| c.id == Some(id)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiGateway;
    use crate::error::ArmsError;
    use crate::testing::RecordingTransport;
    use serde_json::json;

    fn student(id: EntityId, first: &str) -> Student {
        Student {
            id: Some(id),
            first_name: first.to_string(),
            ..Student::default()
        }
    }

    #[tokio::test]
    async fn refresh_loads_students_and_courses() {
        let transport = RecordingTransport::new();
        transport.respond_json(200, json!([{ "id": 1, "firstName": "Ada", "lastName": "Lovelace" }]));
        transport.respond_json(200, json!({ "data": [{ "id": 10, "courseCode": "CS401", "title": "MPP" }] }));
        let roster = Roster::new(RegistrarApi::new(ApiGateway::new(transport.clone())));

        roster.refresh("tok").await.unwrap();

        assert_eq!(roster.find_student(1).await.unwrap().first_name, "Ada");
        assert_eq!(roster.find_course(10).await.unwrap().credit_hours, 3);
        assert!(roster.find_course(11).await.is_none());

        let endpoints: Vec<String> = transport.requests().into_iter().map(|r| r.endpoint).collect();
        assert!(endpoints.contains(&"/registrar/students".to_string()));
        assert!(endpoints.contains(&"/registrar/courses".to_string()));
    }

    #[tokio::test]
    async fn stale_student_list_is_discarded() {
        let roster = Roster::new(RegistrarApi::new(ApiGateway::new(RecordingTransport::new())));

        let older = roster.begin_students();
        let newer = roster.begin_students();

        assert!(roster.apply_students(&newer, vec![student(2, "Grace")]).await);
        assert!(!roster.apply_students(&older, vec![student(1, "Ada")]).await);

        let students = roster.students().await;
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].first_name, "Grace");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_lists() {
        let transport = RecordingTransport::new();
        let roster = Roster::new(RegistrarApi::new(ApiGateway::new(transport.clone())));
        let ticket = roster.begin_students();
        roster.apply_students(&ticket, vec![student(1, "Ada")]).await;

        transport.respond_json(500, json!({ "message": "boom" }));
        transport.respond_json(200, json!([]));
        let err = roster.refresh("tok").await.unwrap_err();

        assert_eq!(err, ArmsError::api(500, "boom"));
        assert_eq!(roster.students().await.len(), 1);
    }
}

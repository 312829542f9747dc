use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{EntityId, Term};

/// A single enrollment as the backend reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub student_id: EntityId,
    pub course_id: EntityId,
    pub year: i32,
    pub term: Term,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /registrar/enrollments/bulk-students`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStudentsEnrollment {
    pub course_id: EntityId,
    pub year: i32,
    pub term: Term,
    pub student_ids: Vec<EntityId>,
}

/// Body of `POST /registrar/enrollments/bulk`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCoursesEnrollment {
    pub student_id: EntityId,
    pub year: i32,
    pub term: Term,
    pub course_ids: Vec<EntityId>,
}

/// Records created by a bulk call, when the backend echoes them
pub fn created_enrollments(payload: &Value) -> Vec<Enrollment> {
    serde_json::from_value(payload.clone()).unwrap_or_default()
}

use serde::{Deserialize, Serialize};

use crate::error::{ArmsError, ArmsResult};
use crate::types::{EntityId, Term};

/// Body of `POST /faculty/grade`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSubmission {
    pub student_id: EntityId,
    pub course_id: EntityId,
    pub year: i32,
    pub term: Term,
    pub grade: String,
}

impl GradeSubmission {
    pub fn validate(&self) -> ArmsResult<()> {
        if self.grade.trim().is_empty() {
            return Err(ArmsError::validation("Grade is required"));
        }
        Ok(())
    }
}

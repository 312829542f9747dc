use serde_json::Value;

use super::gateway::{ApiGateway, RequestOptions};
use crate::error::ArmsResult;
use crate::models::GradeSubmission;

#[derive(Clone)]
pub struct FacultyApi {
    gateway: ApiGateway,
}

impl FacultyApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn submit_grade(&self, grade: &GradeSubmission, token: &str) -> ArmsResult<Value> {
        grade.validate()?;
        self.gateway
            .send("/faculty/grade", RequestOptions::post(grade)?, Some(token))
            .await
    }
}

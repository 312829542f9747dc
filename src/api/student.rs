use super::gateway::{ApiGateway, RequestOptions};
use crate::error::ArmsResult;
use crate::models::{Student, Transcript};
use crate::types::EntityId;

/// Student self-service endpoints under `/student`
#[derive(Clone)]
pub struct StudentApi {
    gateway: ApiGateway,
}

impl StudentApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn get_profile(&self, id: EntityId, token: &str) -> ArmsResult<Student> {
        self.gateway
            .fetch(&format!("/student/{}", id), RequestOptions::get(), Some(token))
            .await
    }

    pub async fn get_transcript(&self, id: EntityId, token: &str) -> ArmsResult<Transcript> {
        self.gateway
            .send(&format!("/student/{}/transcript", id), RequestOptions::get(), Some(token))
            .await
    }
}

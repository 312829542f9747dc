use serde_json::{json, Value};

use super::gateway::{path_segment, ApiGateway, RequestOptions};
use crate::error::ArmsResult;
use crate::models::{NewUser, User};

/// `/admin/users` endpoints
#[derive(Clone)]
pub struct AdminApi {
    gateway: ApiGateway,
}

impl AdminApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn list_users(&self, token: &str) -> ArmsResult<Vec<User>> {
        self.gateway
            .fetch("/admin/users", RequestOptions::get(), Some(token))
            .await
    }

    pub async fn create_user(&self, user: &NewUser, token: &str) -> ArmsResult<Value> {
        user.validate()?;
        self.gateway
            .send("/admin/users", RequestOptions::post(user)?, Some(token))
            .await
    }

    pub async fn get_user(&self, username: &str, token: &str) -> ArmsResult<User> {
        self.gateway
            .fetch(
                &format!("/admin/users/{}", path_segment(username)),
                RequestOptions::get(),
                Some(token),
            )
            .await
    }

    /// Replace the user's roles; the body is the bare role list
    pub async fn update_user_roles(&self, username: &str, roles: &[String], token: &str) -> ArmsResult<Value> {
        self.gateway
            .send(
                &format!("/admin/users/{}/roles", path_segment(username)),
                RequestOptions::post(roles)?,
                Some(token),
            )
            .await
    }

    pub async fn set_user_enabled(&self, username: &str, enabled: bool, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send(
                &format!("/admin/users/{}/enabled", path_segment(username)),
                RequestOptions::patch(&json!({ "enabled": enabled }))?,
                Some(token),
            )
            .await
    }
}

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Path as UrlPath, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;

use arms_client::api::Credentials;
use arms_client::config::{ApiConfig, AppConfig, Environment, LoggingConfig, StorageConfig};
use arms_client::AppContext;

pub const REGISTRAR_TOKEN: &str = "reg-token";
pub const STUDENT_TOKEN: &str = "t1";

/// One request the stub backend received
#[derive(Debug, Clone, PartialEq)]
pub struct Captured {
    pub method: &'static str,
    pub path: String,
    pub body: Value,
}

#[derive(Clone, Default)]
struct StubState {
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl StubState {
    fn record(&self, method: &'static str, path: impl Into<String>, body: Value) {
        self.captured.lock().unwrap().push(Captured {
            method,
            path: path.into(),
            body,
        });
    }
}

/// In-process ARMS backend on a free port, plus a private config directory
pub struct StubBackend {
    pub base_url: String,
    state: StubState,
    config_dir: TempDir,
}

impl StubBackend {
    pub async fn start() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind stub backend")?;

        let state = StubState::default();
        let app = router(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}/api", port),
            state,
            config_dir: tempfile::tempdir()?,
        })
    }

    pub fn config_dir(&self) -> &Path {
        self.config_dir.path()
    }

    /// A context wired exactly as the CLI wires it, pointed at this backend
    pub fn context(&self) -> Result<AppContext> {
        Ok(AppContext::from_config(&app_config(&self.base_url, self.config_dir.path().to_path_buf()))?)
    }

    pub async fn logged_in_as(&self, username: &str) -> Result<AppContext> {
        let mut ctx = self.context()?;
        ctx.login(&Credentials::new(username, "pw")).await?;
        Ok(ctx)
    }

    pub fn captured(&self) -> Vec<Captured> {
        self.state.captured.lock().unwrap().clone()
    }

    pub fn captured_paths(&self) -> Vec<String> {
        self.captured().into_iter().map(|c| c.path).collect()
    }
}

pub fn app_config(base_url: &str, config_dir: PathBuf) -> AppConfig {
    AppConfig {
        environment: Environment::Development,
        api: ApiConfig::for_base_url(base_url),
        storage: StorageConfig {
            config_dir: Some(config_dir),
        },
        logging: LoggingConfig {
            filter: "warn".to_string(),
        },
    }
}

fn router(state: StubState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/registrar/students", get(list_students))
        .route("/api/registrar/students/:id", delete(soft_delete_student))
        .route("/api/registrar/students/:id/hard", delete(hard_delete_student))
        .route("/api/registrar/courses", get(list_courses))
        .route("/api/registrar/enrollments/bulk-students", post(bulk_students))
        .route("/api/registrar/enrollments/bulk", post(bulk_courses))
        .with_state(state)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response()
}

fn is_registrar(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", REGISTRAR_TOKEN))
}

async fn login(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state.record("POST", "/auth/login", body.clone());
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match (username, password) {
        ("stu1", "pw") => Json(json!({
            "data": {
                "accessToken": STUDENT_TOKEN,
                "tokenType": "Bearer",
                "expiresInMs": 3_600_000,
                "roles": ["STUDENT"]
            }
        }))
        .into_response(),
        ("registrar", "pw") => Json(json!({
            "token": REGISTRAR_TOKEN,
            "tokenType": "Bearer",
            "roles": ["ROLE_REGISTRAR"]
        }))
        .into_response(),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" }))).into_response(),
    }
}

async fn list_students(State(state): State<StubState>, headers: HeaderMap) -> Response {
    state.record("GET", "/registrar/students", Value::Null);
    if !is_registrar(&headers) {
        return unauthorized();
    }
    Json(json!({
        "success": true,
        "data": [
            { "id": 1, "studentNumber": "S-1001", "firstName": "Ada", "lastName": "Lovelace",
              "email": "ada@miu.edu", "status": "ACTIVE", "advisor": "Babbage" },
            { "id": 2, "studentNumber": "S-1002", "firstName": "Grace", "lastName": "Hopper",
              "email": "grace@miu.edu", "status": "GRADUATED" },
            { "id": 3, "studentNumber": "S-1003", "firstName": "Mary", "middleName": null,
              "lastName": "Jackson", "email": null, "status": "ON_LEAVE", "level": null }
        ]
    }))
    .into_response()
}

async fn list_courses(State(state): State<StubState>, headers: HeaderMap) -> Response {
    state.record("GET", "/registrar/courses", Value::Null);
    if !is_registrar(&headers) {
        return unauthorized();
    }
    Json(json!([
        { "id": 10, "courseCode": "CS401", "title": "Modern Programming Practices", "creditHours": 4 },
        { "id": 11, "courseCode": "CS472", "title": "Web Application Programming" },
        { "id": 12, "courseCode": "CS390", "title": "Fundamental Programming Practices", "creditHours": null }
    ]))
    .into_response()
}

async fn soft_delete_student(State(state): State<StubState>, headers: HeaderMap, UrlPath(id): UrlPath<i64>) -> Response {
    state.record("DELETE", format!("/registrar/students/{}", id), Value::Null);
    if !is_registrar(&headers) {
        return unauthorized();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn hard_delete_student(State(state): State<StubState>, headers: HeaderMap, UrlPath(id): UrlPath<i64>) -> Response {
    state.record("DELETE", format!("/registrar/students/{}/hard", id), Value::Null);
    if !is_registrar(&headers) {
        return unauthorized();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn bulk_students(State(state): State<StubState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST", "/registrar/enrollments/bulk-students", body.clone());
    if !is_registrar(&headers) {
        return unauthorized();
    }
    let created: Vec<Value> = body["studentIds"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, student_id)| {
            json!({
                "id": 100 + i as i64,
                "studentId": student_id,
                "courseId": body["courseId"],
                "year": body["year"],
                "term": body["term"],
                "status": "ENROLLED"
            })
        })
        .collect();
    (StatusCode::CREATED, Json(json!({ "success": true, "data": created }))).into_response()
}

async fn bulk_courses(State(state): State<StubState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST", "/registrar/enrollments/bulk", body);
    if !is_registrar(&headers) {
        return unauthorized();
    }
    // Bare failure without a JSON body
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

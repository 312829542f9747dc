use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::envelope;
use super::transport::{ApiRequest, HttpTransport, Transport};
use crate::config::ApiConfig;
use crate::error::{ArmsError, ArmsResult};

/// Method and body of a gateway call
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            body: None,
        }
    }

    /// POST without a body, used by the membership start/end actions
    pub fn post_empty() -> Self {
        Self {
            method: Method::POST,
            body: None,
        }
    }

    pub fn post<B: Serialize + ?Sized>(body: &B) -> ArmsResult<Self> {
        Self::with_body(Method::POST, body)
    }

    pub fn patch<B: Serialize + ?Sized>(body: &B) -> ArmsResult<Self> {
        Self::with_body(Method::PATCH, body)
    }

    fn with_body<B: Serialize + ?Sized>(method: Method, body: &B) -> ArmsResult<Self> {
        let body = serde_json::to_value(body)
            .map_err(|e| ArmsError::validation(format!("Could not serialize request body: {}", e)))?;
        Ok(Self {
            method,
            body: Some(body),
        })
    }
}

/// Issues API calls and normalizes every failure into an [`ArmsError`].
///
/// One attempt per call; there is no retry and no backoff.
#[derive(Clone)]
pub struct ApiGateway {
    transport: Arc<dyn Transport>,
}

impl ApiGateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn http(config: &ApiConfig) -> ArmsResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    /// Send a request and return the raw JSON payload (`Null` for an empty body)
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> ArmsResult<Value> {
        let request = ApiRequest {
            method: options.method,
            endpoint: endpoint.to_string(),
            body: options.body,
            bearer_token: token.map(str::to_string),
        };

        debug!(
            method = %request.method,
            endpoint = %request.endpoint,
            authenticated = request.bearer_token.is_some(),
            "API request"
        );

        let response = self.transport.execute(&request).await.map_err(|e| {
            warn!(endpoint = %request.endpoint, "Transport failure: {}", e);
            ArmsError::network(e.to_string())
        })?;

        let body = parse_body(&response.body);

        if !response.is_success() {
            let message = body
                .as_ref()
                .and_then(envelope::server_message)
                .unwrap_or_else(|| match &response.reason {
                    Some(reason) => format!("HTTP {}: {}", response.status, reason),
                    None => format!("HTTP {}", response.status),
                });
            debug!(status = response.status, endpoint = %request.endpoint, "API error: {}", message);
            return Err(ArmsError::api(response.status, message));
        }

        body.ok_or_else(|| {
            ArmsError::decode(format!("{} {} returned a non-JSON body", request.method, request.endpoint))
        })
    }

    /// Send a request and decode the (envelope-stripped) payload
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> ArmsResult<T> {
        let value = self.request(endpoint, options, token).await?;
        envelope::decode(value)
    }

    /// Send a request and return the envelope-stripped payload untyped
    pub async fn send(
        &self,
        endpoint: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> ArmsResult<Value> {
        let value = self.request(endpoint, options, token).await?;
        Ok(envelope::unwrap_envelope(value))
    }
}

fn parse_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return Some(Value::Null);
    }
    serde_json::from_str(body).ok()
}

/// Percent-encode a single path segment such as a username
pub fn path_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

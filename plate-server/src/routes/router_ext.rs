//! In-process API calls
//!
//! Drives the fully layered application router (request id, CORS, logging)
//! without a socket and decodes the JSON body. The integration tests talk
//! to every endpoint through [`ApiRouter`].

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::ErrorBody;
use tower::Service;

use super::REQUEST_ID_HEADER;
use crate::core::ServerState;

/// Decoded response of an in-process call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// `x-request-id` echoed by the request-id layer
    pub request_id: Option<String>,
    /// JSON body, `Null` when the body is empty
    pub body: Value,
}

impl ApiResponse {
    /// Body as the unified error shape, if it is one
    pub fn error_body(&self) -> Option<ErrorBody> {
        serde_json::from_value(self.body.clone()).ok()
    }
}

/// Call the API router in process
///
/// ```ignore
/// let state = ServerState::initialize(&Config::default()).await?;
/// let res = build_app().get_json(&state, "/api/restaurants?cuisine=Japanese").await?;
/// assert_eq!(res.status, StatusCode::OK);
/// ```
#[async_trait::async_trait]
pub trait ApiRouter {
    /// Send a prepared request
    async fn call(&self, state: &ServerState, request: Request<Body>) -> Result<ApiResponse>;

    /// GET `uri`
    async fn get_json(&self, state: &ServerState, uri: &str) -> Result<ApiResponse>;

    /// POST a JSON payload to `uri`
    async fn post_json(&self, state: &ServerState, uri: &str, payload: &Value)
    -> Result<ApiResponse>;

    /// POST a raw body labelled as JSON (malformed-body cases)
    async fn post_raw(&self, state: &ServerState, uri: &str, raw: String) -> Result<ApiResponse>;
}

#[async_trait::async_trait]
impl ApiRouter for Router<ServerState> {
    async fn call(&self, state: &ServerState, request: Request<Body>) -> Result<ApiResponse> {
        let mut svc: Router = self.clone().with_state(state.clone());
        let response = Service::call(&mut svc, request).await?;

        let status = response.status();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(ApiResponse {
            status,
            request_id,
            body,
        })
    }

    async fn get_json(&self, state: &ServerState, uri: &str) -> Result<ApiResponse> {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        self.call(state, request).await
    }

    async fn post_json(
        &self,
        state: &ServerState,
        uri: &str,
        payload: &Value,
    ) -> Result<ApiResponse> {
        self.post_raw(state, uri, payload.to_string()).await
    }

    async fn post_raw(&self, state: &ServerState, uri: &str, raw: String) -> Result<ApiResponse> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw))?;
        self.call(state, request).await
    }
}

//! 请求日志中间件
//!
//! 每个请求结束时记录一行：请求 ID、资源 (restaurants / orders / reservations)、
//! 路径中的记录键、状态码和延迟。`TraceLayer` 负责 span，这里只补充业务维度。

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::routes::REQUEST_ID_HEADER;

/// Resource and record key addressed by a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    /// First segment after `/api` ("root" for `/api/`)
    pub resource: String,
    /// Raw `{id}` path segment, if the route has one
    pub record_key: Option<String>,
}

impl RequestTarget {
    /// Resolve from the matched route template and the concrete path
    ///
    /// Unmatched requests (404 from the router) fall back to the raw path.
    pub fn resolve(matched: Option<&str>, path: &str) -> Self {
        let template = matched.unwrap_or(path);
        let mut template_segments = template.split('/').filter(|s| !s.is_empty());
        let resource = match (template_segments.next(), template_segments.next()) {
            (Some("api"), Some(resource)) => resource.to_string(),
            (Some("api"), None) => "root".to_string(),
            _ => "unknown".to_string(),
        };

        let record_key = matched.and_then(|template| {
            template
                .split('/')
                .zip(path.split('/'))
                .find(|(t, _)| *t == "{id}")
                .map(|(_, raw)| raw.to_string())
        });

        Self {
            resource,
            record_key,
        }
    }
}

/// 请求日志中间件
///
/// 5xx 记为 error，4xx 记为 warn，其余 info。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let method = req.method().clone();
    let target = RequestTarget::resolve(
        req.extensions().get::<MatchedPath>().map(MatchedPath::as_str),
        req.uri().path(),
    );

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;
    let record_key = target.record_key.as_deref().unwrap_or("-");

    if response.status().is_server_error() {
        error!(
            request_id = %request_id,
            method = %method,
            resource = %target.resource,
            record_key,
            status,
            latency_ms,
            "Request failed"
        );
    } else if response.status().is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            resource = %target.resource,
            record_key,
            status,
            latency_ms,
            "Request rejected"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            resource = %target.resource,
            record_key,
            status,
            latency_ms,
            "Request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_route() {
        let target = RequestTarget::resolve(Some("/api/orders"), "/api/orders");
        assert_eq!(target.resource, "orders");
        assert_eq!(target.record_key, None);
    }

    #[test]
    fn test_record_route_extracts_key() {
        let target = RequestTarget::resolve(
            Some("/api/restaurants/{id}/floor-plan"),
            "/api/restaurants/67e5504410b1426f9247bb680e5fe0c8/floor-plan",
        );
        assert_eq!(target.resource, "restaurants");
        assert_eq!(
            target.record_key.as_deref(),
            Some("67e5504410b1426f9247bb680e5fe0c8")
        );
    }

    #[test]
    fn test_root_and_unmatched() {
        assert_eq!(RequestTarget::resolve(Some("/api/"), "/api/").resource, "root");

        let target = RequestTarget::resolve(None, "/api/menus/42");
        assert_eq!(target.resource, "menus");
        assert_eq!(target.record_key, None);

        assert_eq!(RequestTarget::resolve(None, "/favicon.ico").resource, "unknown");
    }
}

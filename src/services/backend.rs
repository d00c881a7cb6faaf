//! Backend gateway
//!
//! Builds and executes one HTTP request per chat command against the club
//! management API: GET with a percent-encoded query string, POST/DELETE with
//! a JSON body. A single configured timeout bounds both the connect and read
//! phases. Outcomes are normalized so the rest of the pipeline never touches
//! transport errors directly.

use std::time::Duration;

use reqwest::{header, Client, Method};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::services::extract::{extract, Payload};
use crate::utils::errors::Result;

/// Reply for transport-level failures (DNS, refused connection, timeout)
pub const TRANSPORT_FAILURE_REPLY: &str = "요청 실패: 서버가 응답하지 않습니다.";

/// One outbound request, built by a command handler and consumed exactly once
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub endpoint: String,
    pub method: Method,
    pub params: Map<String, Value>,
}

impl RequestSpec {
    /// Build a request with the default method (POST)
    pub fn new(endpoint: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::POST,
            params,
        }
    }

    pub fn get(endpoint: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::GET,
            params,
        }
    }

    pub fn delete(endpoint: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::DELETE,
            params,
        }
    }
}

/// Normalized result of one backend call
#[derive(Debug, Clone)]
pub enum HttpOutcome {
    Success { status: u16, body: String },
    StreamUnavailable { status: u16 },
    TransportFailure { detail: String },
}

/// HTTP gateway to the club management backend
#[derive(Debug, Clone)]
pub struct BackendGateway {
    client: Client,
    base_url: String,
}

impl BackendGateway {
    /// Create a new gateway from server configuration
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent("HoopBuddy-Bot/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Execute one request and normalize the result
    pub async fn send(&self, spec: &RequestSpec) -> HttpOutcome {
        let url = self.request_url(spec);
        debug!(method = %spec.method, url = %url, "sending backend request");

        let mut request = self.client.request(spec.method.clone(), &url);
        if spec.method != Method::GET {
            request = request
                .header(header::CONTENT_TYPE, "application/json; charset=UTF-8")
                .body(Value::Object(spec.params.clone()).to_string());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, url = %url, "backend request failed");
                return HttpOutcome::TransportFailure {
                    detail: e.to_string(),
                };
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => HttpOutcome::Success { status, body },
            Err(e) => {
                warn!(error = %e, status = status, "failed to read response body");
                HttpOutcome::StreamUnavailable { status }
            }
        }
    }

    fn request_url(&self, spec: &RequestSpec) -> String {
        let mut url = format!("{}{}", self.base_url, spec.endpoint);
        if spec.method == Method::GET && !spec.params.is_empty() {
            url.push('?');
            url.push_str(&query_string(&spec.params));
        }
        url
    }
}

/// Render an outcome into the reply string for the user
///
/// 2xx-4xx bodies go through the extractor and the command's formatter (4xx
/// bodies may still carry a structured payload). 5xx bodies are never parsed.
pub fn render_outcome(outcome: &HttpOutcome, format: fn(&Payload) -> String) -> String {
    match outcome {
        HttpOutcome::TransportFailure { .. } => TRANSPORT_FAILURE_REPLY.to_string(),
        HttpOutcome::StreamUnavailable { status } => format!(
            "서버 응답 오류: 응답 스트림을 읽을 수 없습니다. (Status: {status})"
        ),
        HttpOutcome::Success { status, .. } if *status >= 500 => format!("서버 오류: {status}"),
        HttpOutcome::Success { body, .. } => format(&extract(body)),
    }
}

/// Encode a parameter map as a query string
///
/// Non-string scalars are stringified bare (no JSON quoting) before encoding.
fn query_string(params: &Map<String, Value>) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&scalar_text(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn params(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn default_method_is_post() {
        let spec = RequestSpec::new("/api/commands/echo/", Map::new());
        assert_eq!(spec.method, Method::POST);
    }

    #[test]
    fn query_string_encodes_and_stringifies_scalars() {
        // serde_json maps iterate in key order
        let query = query_string(&params(&[
            ("member", json!("홍 길동")),
            ("timestamp", json!(1700000000000u64)),
            ("active", json!(true)),
        ]));
        assert_eq!(
            query,
            "active=true&member=%ED%99%8D%20%EA%B8%B8%EB%8F%99&timestamp=1700000000000"
        );
    }

    #[test]
    fn connection_refused_maps_to_transport_failure() {
        // Nothing listens on the discard port
        let gateway = BackendGateway::new(&crate::config::ServerConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_ms: 200,
        })
        .unwrap();
        let spec = RequestSpec::get("/health/", Map::new());

        let outcome = tokio_test::block_on(gateway.send(&spec));
        assert_matches!(outcome, HttpOutcome::TransportFailure { .. });
    }

    #[test]
    fn server_errors_skip_body_parsing() {
        let outcome = HttpOutcome::Success {
            status: 503,
            body: r#"{"message": "should never appear"}"#.to_string(),
        };
        assert_eq!(
            render_outcome(&outcome, |_| "formatted".to_string()),
            "서버 오류: 503"
        );
    }

    #[test]
    fn stream_failure_reports_status() {
        let outcome = HttpOutcome::StreamUnavailable { status: 404 };
        assert_eq!(
            render_outcome(&outcome, |_| "formatted".to_string()),
            "서버 응답 오류: 응답 스트림을 읽을 수 없습니다. (Status: 404)"
        );
    }

    #[test]
    fn transport_failure_hides_detail_from_chat() {
        let outcome = HttpOutcome::TransportFailure {
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            render_outcome(&outcome, |_| "formatted".to_string()),
            TRANSPORT_FAILURE_REPLY
        );
    }

    #[test]
    fn client_errors_still_reach_the_formatter() {
        let outcome = HttpOutcome::Success {
            status: 404,
            body: r#"{"message": "회원을 찾을 수 없습니다."}"#.to_string(),
        };
        let rendered = render_outcome(&outcome, |payload| match payload {
            Payload::RawText(text) => text.clone(),
            Payload::Structured(_) => "unexpected".to_string(),
        });
        assert_eq!(rendered, "회원을 찾을 수 없습니다.");
    }
}

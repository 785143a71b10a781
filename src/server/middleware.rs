use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};

use super::AppState;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::result::CorsDecision;

/// Applies the CORS policy ahead of routing.
///
/// Preflights never reach a handler. Simple requests always do, whether the
/// origin was admitted or not; only the response headers differ.
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = state.cors.check(&owned_ctx.as_request_context());

    match decision {
        CorsDecision::PreflightAccepted { headers, status }
        | CorsDecision::PreflightRejected { headers, status } => {
            preflight_response(status, &headers)
        }
        CorsDecision::SimpleAccepted { headers } | CorsDecision::SimpleRejected { headers } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn preflight_response(status: u16, headers: &Headers) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            tracing::warn!(header = %name, "dropping CORS header that is not valid on the wire");
            continue;
        };

        if header_name == axum::http::header::VARY {
            append_vary(map, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}

/// Handlers may already have set `Vary`; keep their entries.
fn append_vary(map: &mut HeaderMap, value: HeaderValue) {
    let existing: Vec<&str> = map
        .get_all(axum::http::header::VARY)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    let Ok(incoming) = value.to_str() else {
        return;
    };
    let mut merged: Vec<String> = existing
        .iter()
        .flat_map(|value| value.split(','))
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect();
    for entry in incoming.split(',').map(str::trim) {
        if !entry.is_empty() && !merged.iter().any(|seen| seen.eq_ignore_ascii_case(entry)) {
            merged.push(entry.to_string());
        }
    }

    if let Ok(value) = HeaderValue::from_str(&merged.join(", ")) {
        map.insert(axum::http::header::VARY, value);
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

use std::error::Error as StdError;

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use tracing::{debug, warn};

pub(crate) const METHOD_FIELD: &str = "_method";

/// Lets HTML forms issue `PUT` and `DELETE`.
///
/// A `POST` carrying `_method=PUT` or `_method=DELETE` in its query string or
/// urlencoded form body is rewritten to that method before routing. The query
/// string is checked first. A buffered body is passed on unchanged.
pub(crate) async fn method_override(
    State(body_limit): State<usize>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();

    let mut overridden = parts
        .uri
        .query()
        .and_then(|query| override_from_pairs(query.as_bytes()));

    let body = if overridden.is_none() && is_urlencoded_form(&parts.headers) {
        let bytes = match to_bytes(body, body_limit).await {
            Ok(bytes) => bytes,
            Err(err) => return body_read_failure(&err),
        };
        overridden = override_from_pairs(&bytes);
        Body::from(bytes)
    } else {
        body
    };

    if let Some(method) = overridden {
        debug!(%method, uri = %parts.uri, "overriding POST method");
        parts.method = method;
    }

    next.run(Request::from_parts(parts, body)).await
}

fn body_read_failure(err: &axum::Error) -> Response {
    if is_length_limit(err) {
        warn!(error = %err, "form body over limit");
        return (StatusCode::PAYLOAD_TOO_LARGE, "request body too large").into_response();
    }
    warn!(error = %err, "failed to read form body");
    (StatusCode::BAD_REQUEST, "failed to read request body").into_response()
}

// The limit error can sit under several layers of boxing.
fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(err) = source {
        if err.is::<LengthLimitError>() {
            return true;
        }
        source = err.source();
    }
    false
}

fn is_urlencoded_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn override_from_pairs(input: &[u8]) -> Option<Method> {
    form_urlencoded::parse(input)
        .find(|(key, _)| key == METHOD_FIELD)
        .and_then(|(_, value)| parse_override(&value))
}

fn parse_override(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

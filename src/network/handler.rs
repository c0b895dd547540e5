//! Request Handler
//!
//! Converts between axum requests/responses and protocol descriptors.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::IntoResponse;

use crate::protocol::{Method, Request, Response};
use crate::router::Router;

/// Fallback handler: every path goes through `Router::handle`
pub(crate) async fn dispatch(
    State(router): State<Router>,
    method: axum::http::Method,
    uri: Uri,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> axum::response::Response {
    let query = match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            // Unparseable query strings behave like an absent one
            tracing::debug!("Ignoring malformed query string: {}", e);
            Vec::new()
        }
    };

    let request = Request {
        method: Method::parse(method.as_str()),
        path: uri.path().to_string(),
        query,
        body,
    };

    into_http(router.handle(request))
}

/// Convert a protocol response into an axum response
fn into_http(response: Response) -> axum::response::Response {
    let status =
        StatusCode::from_u16(response.status.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut http = (status, response.body).into_response();
    let headers = http.headers_mut();
    match response.content_type {
        Some(content_type) => {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        None => {
            headers.remove(header::CONTENT_TYPE);
        }
    }

    http
}

//! Response headers applied to every endpoint.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, header::ACCESS_CONTROL_ALLOW_ORIGIN},
    middleware::Next,
    response::Response,
};

/// Add permissive cross-origin headers to all responses.
///
/// The services sit behind a web front end on another origin, which must be
/// able to read both the responses and their resource timing:
/// - `Access-Control-Allow-Origin: *`
/// - `Timing-Allow-Origin: *`
pub async fn cross_origin_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        HeaderName::from_static("timing-allow-origin"),
        HeaderValue::from_static("*"),
    );

    response
}

//! Request forwarding and response relaying.

use axum::body::Body;
use axum::extract::Request;
use axum::response::Response;
use tracing::debug;

use crate::Result;

/// Forwards an inbound request to `target_url`.
///
/// The outbound request reuses the inbound method, copies the header set
/// verbatim, and streams the body through without buffering it. The
/// upstream response (or transport error) is returned as-is; pair with
/// [`relay_response`] to complete a proxy hop.
///
/// # Errors
///
/// Returns [`crate::Error::Upstream`] when the URL is invalid or the
/// outbound request fails.
///
/// # Examples
///
/// ```no_run
/// use axum::extract::Request;
/// use axum::response::Response;
/// use fileway_core::http::{forward_request, relay_response};
///
/// async fn proxy(request: Request) -> Response {
///     let client = reqwest::Client::new();
///     match forward_request(&client, request, "https://api.internal/v1/data").await {
///         Ok(upstream) => relay_response(upstream),
///         Err(err) => Response::builder()
///             .status(502)
///             .body(err.to_string().into())
///             .unwrap(),
///     }
/// }
/// ```
pub async fn forward_request(
    client: &reqwest::Client,
    request: Request,
    target_url: &str,
) -> Result<reqwest::Response> {
    let (parts, body) = request.into_parts();
    debug!(method = %parts.method, target = target_url, "forwarding request");

    let response = client
        .request(parts.method, target_url)
        .headers(parts.headers)
        .body(reqwest::Body::wrap_stream(body.into_data_stream()))
        .send()
        .await?;

    Ok(response)
}

/// Relays an upstream response to the client verbatim.
///
/// The status code and header set are copied and the body is streamed
/// through; the upstream connection is released when the returned body has
/// been fully read or dropped.
#[must_use]
pub fn relay_response(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = upstream.headers().clone();

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

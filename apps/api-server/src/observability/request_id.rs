//! Request ID middleware - tags every request with a correlation ID.

use actix_web::{
    Error,
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::middleware::error::AppError;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse the caller's `X-Request-ID` (from a client or load balancer) or mint
/// a new one. The rest of the chain runs inside a `request` span carrying the
/// ID, the ID is echoed on the response, and `AppError` bodies get it as
/// `request_id`.
///
/// Mount with `actix_web::middleware::from_fn(request_id)`.
pub async fn request_id(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!("request", request_id = %id);
    tracing::debug!(
        parent: &span,
        method = %req.method(),
        path = req.path(),
        "Request received"
    );

    let res = next.call(req).instrument(span).await?;

    let stamped = res
        .response()
        .error()
        .and_then(|e| e.as_error::<AppError>())
        .map(|e| e.response_for_request(&id));
    let mut res = match stamped {
        Some(response) => res.into_response(response),
        None => res.map_into_boxed_body(),
    };

    res.headers_mut().insert(
        HeaderName::from_static(REQUEST_ID_HEADER),
        HeaderValue::from_str(&id).unwrap_or_else(|_| HeaderValue::from_static("unknown")),
    );

    Ok(res)
}

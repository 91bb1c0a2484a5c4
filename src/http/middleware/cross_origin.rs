//! Cross-origin response headers.
//! Applied to every registered route.

use axum::extract::{Request, State};
use axum::http::header::{
    InvalidHeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::CrossOriginConfig;
use crate::http::server::AppState;

/// Pre-parsed header values attached to every response.
#[derive(Clone, Debug)]
pub struct CrossOrigin {
    allow_origin: HeaderValue,
    allow_headers: HeaderValue,
}

impl CrossOrigin {
    /// Parse the configured values once, at router construction.
    ///
    /// An invalid value is a startup fault, not a per-request one.
    pub fn from_config(config: &CrossOriginConfig) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allow_origin: config.allow_origin.parse()?,
            allow_headers: config.allow_headers.parse()?,
        })
    }
}

pub async fn cross_origin_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        state.cross_origin.allow_origin.clone(),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        state.cross_origin.allow_headers.clone(),
    );
    response
}

//! Route handlers for the address service.
//!
//! Every handler recovers its own faults: the response is always an empty
//! 204 or a JSON body, and the request completes normally at the transport
//! level. Only startup faults propagate out of this module's callers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::http::server::AppState;
use crate::store::AddressRecord;

/// Fallback echoed when no message is available.
const MESSAGE_NOT_PROVIDED: &str = "Message not provided";

/// Body of an error response. The conflicting record is attached only on
/// create conflicts.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressRecord>,
}

impl ErrorBody {
    fn new(error: String) -> Self {
        Self {
            error,
            address: None,
        }
    }
}

/// Body of a successful echo response.
#[derive(Debug, Serialize)]
pub struct EchoBody {
    pub result: String,
}

/// Create a record; the request body is the address value.
/// `PUT /address/{id}`
pub async fn create_address(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: String,
) -> Response {
    match state.store.insert(id, body) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(existing) => {
            let err = ErrorBody {
                error: format!("Address with id = {id} exists."),
                address: Some(existing),
            };
            (StatusCode::BAD_REQUEST, Json(err)).into_response()
        }
    }
}

/// Overwrite the address of an existing record.
/// `POST /address/{id}`
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: String,
) -> Response {
    if state.store.update(id, body) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(id).into_response()
    }
}

/// Remove a record.
/// `DELETE /address/{id}`
pub async fn delete_address(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    if state.store.remove(id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(id).into_response()
    }
}

/// Return every stored record, in unspecified order.
/// `GET /addresses`
pub async fn list_addresses(State(state): State<AppState>) -> Json<Vec<AddressRecord>> {
    Json(state.store.all())
}

/// Echo the message back, doubled.
/// `GET /echo/{msg}`
pub async fn echo(Path(msg): Path<String>) -> Response {
    match perform_echo(Some(&msg)) {
        Ok(result) => (StatusCode::OK, Json(EchoBody { result })).into_response(),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(err.to_string())),
        )
            .into_response(),
    }
}

fn not_found(id: u64) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(format!(
            "Address with id = {id} does not exist."
        ))),
    )
}

/// Error produced by the echo formatting step.
#[derive(Debug, Error)]
pub enum EchoError {
    /// The decoded segment contains characters that cannot be echoed.
    #[error("message contains unprintable characters")]
    Unprintable,
}

/// Format the echoed message.
///
/// A missing or empty message falls back to a fixed string; the route
/// pattern makes that case unreachable in normal operation, but it is kept
/// for robustness. Errors map to a 400 response in the handler.
fn perform_echo(msg: Option<&str>) -> Result<String, EchoError> {
    match msg {
        Some(msg) if !msg.is_empty() => {
            if msg.chars().any(char::is_control) {
                return Err(EchoError::Unprintable);
            }
            Ok(format!("{msg}...{msg}"))
        }
        _ => Ok(MESSAGE_NOT_PROVIDED.to_string()),
    }
}

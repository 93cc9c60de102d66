use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use common::auth::AuthGate;

use crate::ServiceState;

/// Readiness just proves the document is reachable; `load` recovers any
/// malformed content by contract, so reaching it at all is the signal.
#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<ServiceState>) -> Response {
    let document = state.store().load();
    let msg = serde_json::json!({
        "status": "ok",
        "scripts": document.scripts.len(),
        "needsSetup": AuthGate::needs_setup(&document),
    });
    (StatusCode::OK, Json(msg)).into_response()
}

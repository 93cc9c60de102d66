use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::auth::AuthError;

use crate::daemon::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordResponse {
    pub status: String,
    /// Bearer token for subsequent write operations.
    pub token: Uuid,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Json(req): Json<VerifyPasswordRequest>,
) -> Result<impl IntoResponse, VerifyPasswordError> {
    state.gate().verify(&req.password)?;
    let token = state.sessions().issue();

    Ok((
        http::StatusCode::OK,
        Json(VerifyPasswordResponse {
            status: "success".to_string(),
            token,
        }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyPasswordError {
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

impl IntoResponse for VerifyPasswordError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // One body for both: a failed login must not reveal whether a
            // credential exists beyond what init_check already discloses.
            VerifyPasswordError::Auth(AuthError::Mismatch)
            | VerifyPasswordError::Auth(AuthError::NoCredential) => (
                http::StatusCode::UNAUTHORIZED,
                "wrong password".to_string(),
            ),
            VerifyPasswordError::Auth(e) => {
                (http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (
            status,
            Json(serde_json::json!({"status": "error", "message": message})),
        )
            .into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for VerifyPasswordRequest {
    type Response = VerifyPasswordResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/vault/verify_password").unwrap();
        client.post(full_url).json(&self)
    }
}

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::auth::AuthError;

use crate::daemon::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupPasswordResponse {
    pub status: String,
    /// Bearer token for subsequent write operations.
    pub token: Uuid,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Json(req): Json<SetupPasswordRequest>,
) -> Result<impl IntoResponse, SetupPasswordError> {
    state.gate().bootstrap(&req.password)?;
    let token = state.sessions().issue();

    tracing::info!("credential bootstrapped, admin token issued");

    Ok((
        http::StatusCode::OK,
        Json(SetupPasswordResponse {
            status: "success".to_string(),
            token,
        }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum SetupPasswordError {
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

impl IntoResponse for SetupPasswordError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SetupPasswordError::Auth(AuthError::EmptyCredential) => (
                http::StatusCode::BAD_REQUEST,
                "password must not be empty".to_string(),
            ),
            SetupPasswordError::Auth(AuthError::AlreadyBootstrapped) => (
                http::StatusCode::CONFLICT,
                "a password has already been set".to_string(),
            ),
            SetupPasswordError::Auth(AuthError::Store(e)) => {
                // Deployment misconfiguration, not caller misuse: worth a log line.
                tracing::error!("failed to persist credential: {}", e);
                (http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            SetupPasswordError::Auth(e) => {
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
impl ApiRequest for SetupPasswordRequest {
    type Response = SetupPasswordResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/vault/setup_password").unwrap();
        client.post(full_url).json(&self)
    }
}

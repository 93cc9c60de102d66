use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::document::{validate_scripts, Snippet, ValidationError};
use common::store::StoreError;

use crate::daemon::http_server::api::client::ApiRequest;
use crate::ServiceState;

/// The full replacement collection. The whole document is the unit of
/// atomicity: whatever this carries entirely determines the post-state
/// (last-write-wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveDataRequest {
    pub scripts: Vec<Snippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveDataResponse {
    pub status: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Json(req): Json<SaveDataRequest>,
) -> Result<impl IntoResponse, SaveDataError> {
    let token = bearer
        .and_then(|TypedHeader(auth)| Uuid::parse_str(auth.token()).ok())
        .ok_or(SaveDataError::Unauthorized)?;
    if !state.sessions().validate(&token) {
        return Err(SaveDataError::Unauthorized);
    }

    // Reject before any persistence attempt.
    validate_scripts(&req.scripts, state.limits())?;

    let mut document = state.store().load();
    document.scripts = req.scripts;
    state.store().save(&document)?;

    tracing::debug!(scripts = document.scripts.len(), "collection replaced");

    Ok((
        http::StatusCode::OK,
        Json(SaveDataResponse {
            status: "success".to_string(),
        }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum SaveDataError {
    #[error("missing or invalid session token")]
    Unauthorized,
    #[error("invalid snippet collection: {0}")]
    Validation(#[from] ValidationError),
    #[error("persistence failure: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for SaveDataError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SaveDataError::Unauthorized => (http::StatusCode::UNAUTHORIZED, self.to_string()),
            SaveDataError::Validation(_) => (http::StatusCode::BAD_REQUEST, self.to_string()),
            SaveDataError::Store(ref e) => {
                // Deployment misconfiguration, not caller misuse: worth a log line.
                tracing::error!("failed to persist collection: {}", e);
                (http::StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };
        (
            status,
            Json(serde_json::json!({"status": "error", "message": message})),
        )
            .into_response()
    }
}

// Client implementation - builds request for this operation. The bearer
// token rides on the client's default headers.
impl ApiRequest for SaveDataRequest {
    type Response = SaveDataResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/vault/save_data").unwrap();
        client.post(full_url).json(&self)
    }
}

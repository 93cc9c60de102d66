use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::auth::AuthGate;

use crate::daemon::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitCheckRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitCheckResponse {
    pub status: String,
    /// True until the one-time credential bootstrap has run.
    pub needs_setup: bool,
}

pub async fn handler(State(state): State<ServiceState>) -> Response {
    let document = state.store().load();
    (
        http::StatusCode::OK,
        Json(InitCheckResponse {
            status: "success".to_string(),
            needs_setup: AuthGate::needs_setup(&document),
        }),
    )
        .into_response()
}

// Client implementation - builds request for this operation
impl ApiRequest for InitCheckRequest {
    type Response = InitCheckResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/vault/init_check").unwrap();
        client.get(full_url)
    }
}

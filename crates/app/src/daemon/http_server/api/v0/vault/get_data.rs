use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::document::Snippet;

use crate::daemon::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDataRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDataResponse {
    pub status: String,
    pub scripts: Vec<Snippet>,
}

/// Returns the full collection; capability filtering happens client-side
/// against the share ids carried by the link.
pub async fn handler(State(state): State<ServiceState>) -> Response {
    let document = state.store().load();
    (
        http::StatusCode::OK,
        Json(GetDataResponse {
            status: "success".to_string(),
            scripts: document.scripts,
        }),
    )
        .into_response()
}

// Client implementation - builds request for this operation
impl ApiRequest for GetDataRequest {
    type Response = GetDataResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/vault/get_data").unwrap();
        client.get(full_url)
    }
}

use reqwest::{header::HeaderMap, header::HeaderValue, Client};
use url::Url;
use uuid::Uuid;

use super::error::ApiError;
use super::ApiRequest;

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub remote: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(Self::default_headers(None))
            .build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    /// Attach a bearer token to every subsequent request. Write
    /// operations require one; reads work without it.
    pub fn with_bearer(mut self, token: Uuid) -> Result<Self, ApiError> {
        self.client = Client::builder()
            .default_headers(Self::default_headers(Some(token)))
            .build()?;
        Ok(self)
    }

    fn default_headers(token: Option<Uuid>) -> HeaderMap {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .expect("uuid is a valid header value");
            default_headers.insert(reqwest::header::AUTHORIZATION, value);
        }
        default_headers
    }

    pub async fn call<T: ApiRequest>(&mut self, request: T) -> Result<T::Response, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client);
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }
}

use std::collections::HashSet;

use clap::Args;
use url::Url;

use crate::daemon::http_server::api::client::ApiError;
use crate::daemon::http_server::api::v0::vault::get_data::{GetDataRequest, GetDataResponse};

#[derive(Args, Debug, Clone)]
pub struct Share {
    /// Snippet ids to include in the link
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Base URL for the link (defaults to the remote)
    #[arg(long)]
    pub base: Option<Url>,
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("no snippet with id '{0}'")]
    UnknownId(String),
}

#[async_trait::async_trait]
impl crate::op::Op for Share {
    type Error = ShareError;
    type Output = String;

    /// Share links are pure capability URLs: a comma-separated id set in a
    /// query parameter. There is no server endpoint behind them; viewers
    /// fetch the collection and filter client-side.
    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();
        let data: GetDataResponse = client.call(GetDataRequest).await?;

        let known: HashSet<&str> = data.scripts.iter().map(|s| s.id.as_str()).collect();
        if let Some(missing) = self.ids.iter().find(|id| !known.contains(id.as_str())) {
            return Err(ShareError::UnknownId(missing.clone()));
        }

        let mut link = self
            .base
            .clone()
            .unwrap_or_else(|| ctx.client.base_url().clone());
        link.set_query(Some(&format!("ids={}", self.ids.join(","))));

        Ok(format!("Share link: {}", link))
    }
}

use clap::Args;

use common::document::{validate_scripts, Snippet, SnippetLimits, Source, ValidationError};

use crate::daemon::http_server::api::client::ApiError;
use crate::daemon::http_server::api::v0::vault::get_data::{GetDataRequest, GetDataResponse};
use crate::daemon::http_server::api::v0::vault::save_data::SaveDataRequest;
use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Add {
    /// Display name
    #[arg(long)]
    pub title: String,

    /// The command text itself
    #[arg(long)]
    pub command: String,

    /// Optional free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Up to the configured tag limit, comma separated
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Optional cover image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Attribution name
    #[arg(long)]
    pub source_name: Option<String>,

    /// Attribution URL
    #[arg(long)]
    pub source_url: Option<String>,

    /// Render the command with soft wrapping
    #[arg(long)]
    pub wrap: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AddError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("state error: {0}")]
    State(#[from] crate::state::StateError),
    #[error("not logged in. Run 'snip login' first")]
    NotLoggedIn,
    #[error("invalid snippet: {0}")]
    Validation(#[from] ValidationError),
}

#[async_trait::async_trait]
impl crate::op::Op for Add {
    type Error = AddError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load(ctx.config_path.clone())?;
        let session = state.load_session().ok_or(AddError::NotLoggedIn)?;
        let mut client = ctx.client.clone().with_bearer(session.token)?;

        let mut snippet = Snippet::new(&self.title, &self.command);
        snippet.description = self.description.clone();
        snippet.tags = self
            .tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        snippet.image = self.image.clone();
        if self.source_name.is_some() || self.source_url.is_some() {
            snippet.source = Some(Source {
                name: self.source_name.clone(),
                url: self.source_url.clone(),
            });
        }
        snippet.wrap_code = self.wrap;

        // Edits are whole-document: fetch, prepend, save everything back.
        let data: GetDataResponse = client.call(GetDataRequest).await?;
        let mut scripts = data.scripts;
        scripts.insert(0, snippet.clone());

        // Mirror the server-side check so obvious mistakes fail before the
        // round trip.
        let limits = SnippetLimits {
            max_tags: state.config.max_tags,
        };
        validate_scripts(&scripts, &limits)?;

        client.call(SaveDataRequest { scripts }).await?;

        Ok(format!("Added '{}' (id: {})", snippet.title, snippet.id))
    }
}

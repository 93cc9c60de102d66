use clap::Args;

use common::document::Snippet;
use common::session::{SessionState, ViewMode};
use common::view;

use crate::daemon::http_server::api::client::ApiError;
use crate::daemon::http_server::api::v0::vault::get_data::{GetDataRequest, GetDataResponse};
use crate::daemon::http_server::api::v0::vault::init_check::{
    InitCheckRequest, InitCheckResponse,
};
use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Ls {
    /// Comma-separated snippet ids from a share link (viewer mode)
    #[arg(long, value_delimiter = ',')]
    pub ids: Option<Vec<String>>,

    /// Case-insensitive filter over titles, descriptions, and tags
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LsError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

fn format_snippet(snippet: &Snippet) -> String {
    let tags = if snippet.tags.is_empty() {
        String::new()
    } else {
        format!("  #{}", snippet.tags.join(" #"))
    };
    format!(
        "{}  {}{}\n    $ {}",
        snippet.id, snippet.title, tags, snippet.command
    )
}

#[async_trait::async_trait]
impl crate::op::Op for Ls {
    type Error = LsError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();

        // Resolve the session once from {server setup report, local trust
        // flag, share ids on this invocation}.
        let check: InitCheckResponse = client.call(InitCheckRequest).await?;
        let trusted = AppState::load(ctx.config_path.clone())
            .ok()
            .and_then(|state| state.load_session())
            .is_some();
        let session = SessionState::resolve(check.needs_setup, trusted, self.ids.clone());

        match session.mode() {
            ViewMode::Bootstrapping => Ok(
                "No password set yet. Run 'snip setup --password <password>' first.".to_string(),
            ),
            ViewMode::Locked => {
                Ok("Locked. Log in with 'snip login' or pass --ids from a share link.".to_string())
            }
            ViewMode::Shared | ViewMode::Admin => {
                let data: GetDataResponse = client.call(GetDataRequest).await?;
                let requested = session.requested_ids();
                let visible = view::visible(
                    &data.scripts,
                    requested.as_ref(),
                    session.is_authenticated(),
                );
                let visible = match &self.query {
                    Some(query) => view::narrow(visible, query),
                    None => visible,
                };

                if visible.is_empty() {
                    return Ok("No snippets visible.".to_string());
                }

                let mut lines: Vec<String> = visible.iter().map(|s| format_snippet(s)).collect();
                if session.mode() == ViewMode::Shared && session.is_authenticated() {
                    lines.push(
                        "(shared view; omit --ids to browse the full collection)".to_string(),
                    );
                }
                Ok(lines.join("\n"))
            }
        }
    }
}

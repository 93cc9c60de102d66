use clap::Args;

use crate::daemon::http_server::api::client::ApiError;
use crate::daemon::http_server::api::v0::vault::get_data::{GetDataRequest, GetDataResponse};
use crate::daemon::http_server::api::v0::vault::save_data::SaveDataRequest;
use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Rm {
    /// Id of the snippet to remove
    #[arg(long)]
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RmError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("state error: {0}")]
    State(#[from] crate::state::StateError),
    #[error("not logged in. Run 'snip login' first")]
    NotLoggedIn,
    #[error("no snippet with id '{0}'")]
    UnknownId(String),
}

#[async_trait::async_trait]
impl crate::op::Op for Rm {
    type Error = RmError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load(ctx.config_path.clone())?;
        let session = state.load_session().ok_or(RmError::NotLoggedIn)?;
        let mut client = ctx.client.clone().with_bearer(session.token)?;

        let data: GetDataResponse = client.call(GetDataRequest).await?;
        if !data.scripts.iter().any(|s| s.id == self.id) {
            return Err(RmError::UnknownId(self.id.clone()));
        }

        let scripts = data
            .scripts
            .into_iter()
            .filter(|s| s.id != self.id)
            .collect();
        client.call(SaveDataRequest { scripts }).await?;

        Ok(format!("Removed snippet {}", self.id))
    }
}

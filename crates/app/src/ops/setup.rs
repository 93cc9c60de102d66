use clap::Args;

use crate::daemon::http_server::api::client::ApiError;
use crate::daemon::http_server::api::v0::vault::setup_password::{
    SetupPasswordRequest, SetupPasswordResponse,
};
use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Setup {
    /// Admin password to establish (first run only)
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("state error: {0}")]
    State(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Setup {
    type Error = SetupError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();
        let response: SetupPasswordResponse = client
            .call(SetupPasswordRequest {
                password: self.password.clone(),
            })
            .await?;

        // Persist the trust flag so it survives across invocations.
        let state = AppState::load(ctx.config_path.clone())?;
        state.store_session(response.token)?;

        Ok("Password set. You are now logged in as admin.".to_string())
    }
}

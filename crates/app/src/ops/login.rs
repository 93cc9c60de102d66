use clap::Args;

use crate::daemon::http_server::api::client::ApiError;
use crate::daemon::http_server::api::v0::vault::verify_password::{
    VerifyPasswordRequest, VerifyPasswordResponse,
};
use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Login {
    /// Admin password
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("state error: {0}")]
    State(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Login {
    type Error = LoginError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut client = ctx.client.clone();
        let response: VerifyPasswordResponse = client
            .call(VerifyPasswordRequest {
                password: self.password.clone(),
            })
            .await?;

        // Persist the trust flag so it survives across invocations.
        let state = AppState::load(ctx.config_path.clone())?;
        state.store_session(response.token)?;

        Ok("Logged in as admin.".to_string())
    }
}

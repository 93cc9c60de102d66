use clap::Args;

use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Logout;

#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("state error: {0}")]
    State(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Logout {
    type Error = LogoutError;
    type Output = String;

    /// Clears the local trust flag. No server call: tokens expire on their
    /// own and the daemon holds no per-client state worth tearing down.
    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load(ctx.config_path.clone())?;
        if state.clear_session()? {
            Ok("Logged out.".to_string())
        } else {
            Ok("No active session.".to_string())
        }
    }
}

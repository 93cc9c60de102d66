use std::path::PathBuf;

use clap::Args;

use common::document::SnippetLimits;

use crate::daemon::{spawn_service, ServiceConfig};
use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Daemon {
    /// Override the API port from config.toml
    #[arg(long)]
    pub port: Option<u16>,

    /// Data file path (overrides config.toml)
    #[arg(long, env = "SNIP_DATA_PATH")]
    pub data_path: Option<PathBuf>,

    /// Skip creation of the .htaccess access guard next to the data file
    #[arg(long, env = "SNIP_SKIP_ACCESS_GUARD")]
    pub skip_access_guard: bool,

    /// Directory for log files (stdout only if unset)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("state error: {0}")]
    StateError(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Daemon {
    type Error = DaemonError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        // Load state from config path (or default ~/.snip)
        let state = AppState::load(ctx.config_path.clone())?;

        let data_path = self
            .data_path
            .clone()
            .or_else(|| state.config.data_path.clone())
            .unwrap_or_else(|| state.default_data_path());

        // The guard is only laid down when the data file sits in its
        // default directory, and the operator can always opt out.
        let skip_guard = self.skip_access_guard || state.config.skip_access_guard;
        let write_access_guard =
            !skip_guard && data_path.parent() == Some(state.snip_dir.as_path());

        let config = ServiceConfig {
            data_path,
            write_access_guard,
            limits: SnippetLimits {
                max_tags: state.config.max_tags,
            },
            api_port: self.port.unwrap_or(state.config.app_port),
            log_level: if self.verbose {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            },
            log_dir: self.log_dir.clone(),
        };

        spawn_service(&config).await;
        Ok("daemon ended".to_string())
    }
}

use std::path::PathBuf;

use clap::Args;

use crate::state::{AppConfig, AppState};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// API server port (default: 8080)
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Data file path (default: <config dir>/data.json)
    #[arg(long)]
    pub data_path: Option<PathBuf>,

    /// Don't create the .htaccess access guard next to the data file
    #[arg(long)]
    pub skip_access_guard: bool,

    /// Maximum number of tags a snippet may carry (default: 3)
    #[arg(long, default_value_t = common::document::DEFAULT_MAX_TAGS)]
    pub max_tags: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = AppConfig {
            app_port: self.port,
            data_path: self.data_path.clone(),
            skip_access_guard: self.skip_access_guard,
            max_tags: self.max_tags,
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        let data_path = state
            .config
            .data_path
            .clone()
            .unwrap_or_else(|| state.default_data_path());

        let output = format!(
            "Initialized snip directory at: {}\n\
             - Config: {}\n\
             - Data file: {}\n\
             - API port: {}\n\
             - Tag limit: {}",
            state.snip_dir.display(),
            state.config_path.display(),
            data_path.display(),
            state.config.app_port,
            state.config.max_tags,
        );

        Ok(output)
    }
}

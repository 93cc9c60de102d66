use std::path::PathBuf;

use common::document::SnippetLimits;

#[derive(Debug, Clone)]
pub struct Config {
    // document store configuration
    /// Path of the persisted document
    pub data_path: PathBuf,
    /// Whether to lay down the .htaccess access guard next to the data
    /// file. Only set when the file sits in its default directory; always
    /// skippable via config/env.
    pub write_access_guard: bool,
    /// Validation limits applied to replacement collections
    pub limits: SnippetLimits,

    // http server configuration
    /// Port for the API server
    pub api_port: u16,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}

pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "snip")]
#[command(about = "Self-hosted command snippet vault")]
pub struct Args {
    /// Remote API URL (defaults to the locally configured daemon)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the snip config directory (defaults to ~/.snip)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}

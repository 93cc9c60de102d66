// CLI modules
mod args;
mod op;
mod ops;
mod state;

// Daemon/service modules (HTTP server, document store, auth gate)
mod daemon;

// Re-export types that daemon modules need
pub use daemon::ServiceState;

use args::Args;
use clap::{Parser, Subcommand};
use op::Op;
use ops::{Daemon, Init, Login, Logout, Setup, Snips, Version};

command_enum! {
    (Daemon, Daemon),
    (Init, Init),
    (Login, Login),
    (Logout, Logout),
    (Setup, Setup),
    (Snips, Snips),
    (Version, Version),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let remote = op::resolve_remote(args.remote.clone(), args.config_path.clone());

    // Build context - always has API client initialized
    let ctx = match op::OpContext::new(remote, args.config_path) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

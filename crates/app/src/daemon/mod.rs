mod config;
pub mod http_server;
pub mod process;
mod sessions;
mod state;

pub use config::Config as ServiceConfig;
pub use process::spawn_service;
pub use state::State as ServiceState;

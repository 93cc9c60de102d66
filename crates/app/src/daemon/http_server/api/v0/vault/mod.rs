use axum::routing::{get, post};
use axum::Router;

use crate::ServiceState;

pub mod get_data;
pub mod init_check;
pub mod save_data;
pub mod setup_password;
pub mod verify_password;

// Re-export for convenience
pub use get_data::GetDataRequest;
pub use init_check::InitCheckRequest;
pub use save_data::SaveDataRequest;
pub use setup_password::SetupPasswordRequest;
pub use verify_password::VerifyPasswordRequest;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/init_check", get(init_check::handler))
        .route("/setup_password", post(setup_password::handler))
        .route("/verify_password", post(verify_password::handler))
        .route("/get_data", get(get_data::handler))
        .route("/save_data", post(save_data::handler))
        .with_state(state)
}

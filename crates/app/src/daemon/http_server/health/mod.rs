use axum::routing::get;
use axum::Router;

mod readiness;
mod version;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/version", get(version::handler))
        .route("/readiness", get(readiness::handler))
        .with_state(state)
}

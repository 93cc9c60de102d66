use axum::Router;

pub mod vault;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .nest("/vault", vault::router(state.clone()))
        .with_state(state)
}

use axum::Router;

use super::{AppState, http::routes};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .with_state(state)
}

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::http::handlers::colors::three_colors;
use crate::presentation::http::middleware::colors::sample_color;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(
        "/three-colors",
        get(three_colors)
            .layer(middleware::from_fn(sample_color))
            .layer(middleware::from_fn(sample_color))
            .layer(middleware::from_fn(sample_color)),
    )
}

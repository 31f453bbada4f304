use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::http::handlers::posts::{
    create_post, delete_post, edit_post, list_posts, new_post, show_post, update_post,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/new", get(new_post))
        .route(
            "/{id}",
            get(show_post).put(update_post).delete(delete_post),
        )
        .route("/{id}/edit", get(edit_post))
}

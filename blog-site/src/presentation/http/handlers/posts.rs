use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::post::{NewPostFields, PostFields};
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, AppResult};

/// Body of the new and edit forms. The textarea is named `blog_body`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostForm {
    pub(crate) author: Option<String>,
    pub(crate) title: Option<String>,
    #[serde(rename = "blog_body")]
    pub(crate) body: Option<String>,
}

impl From<PostForm> for NewPostFields {
    fn from(form: PostForm) -> Self {
        Self {
            author: form.author,
            title: form.title,
            body: form.body,
        }
    }
}

impl From<PostForm> for PostFields {
    fn from(form: PostForm) -> Self {
        Self {
            author: form.author.unwrap_or_default(),
            title: form.title.unwrap_or_default(),
            body: form.body.unwrap_or_default(),
        }
    }
}

pub(crate) async fn list_posts(State(state): State<AppState>) -> AppResult<Html<String>> {
    let posts = state
        .blog_service
        .list_posts()
        .await
        .map_err(AppError::SomethingWentWrong)?;

    Ok(state.views.index(posts)?)
}

pub(crate) async fn new_post(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(state.views.new_post()?)
}

pub(crate) async fn show_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let post = state
        .blog_service
        .get_post(&id)
        .await
        .map_err(AppError::BlogNotFound)?;

    Ok(state.views.show(post)?)
}

pub(crate) async fn edit_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let post = state
        .blog_service
        .get_post(&id)
        .await
        .map_err(AppError::BlogNotFound)?;

    Ok(state.views.edit(post)?)
}

pub(crate) async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> AppResult<Redirect> {
    let post = state
        .blog_service
        .create_post(form.into())
        .await
        .map_err(AppError::SomethingWentWrong)?;

    info!(post_id = %post.id, "post created");
    Ok(Redirect::to("/"))
}

pub(crate) async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<PostForm>,
) -> AppResult<Redirect> {
    state
        .blog_service
        .update_post(&id, form.into())
        .await
        .map_err(AppError::BlogNotFound)?;

    info!(post_id = %id, "post updated");
    Ok(Redirect::to("/"))
}

/// Always redirects; a failed delete is only logged.
pub(crate) async fn delete_post(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    match state.blog_service.delete_post(&id).await {
        Ok(()) => info!(post_id = %id, "post deleted"),
        Err(err) => error!(post_id = %id, error = %err, "failed to delete post"),
    }
    Redirect::to("/")
}

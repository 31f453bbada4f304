use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::error::DomainError;

/// Failures surfaced to the browser.
///
/// Both `DomainError::NotFound` and `DomainError::Store` become a 404 with a
/// fixed plain-text body. The variant only selects which body is sent; an
/// unreachable database is indistinguishable from a missing post to clients
/// and is only told apart in the logs.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("blog not found")]
    BlogNotFound(#[source] DomainError),

    #[error("something went wrong")]
    SomethingWentWrong(#[source] DomainError),

    #[error("failed to render view")]
    Render(#[from] minijinja::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::BlogNotFound(err) => {
                log_domain_error(err);
                (StatusCode::NOT_FOUND, "Blog not found")
            }
            AppError::SomethingWentWrong(err) => {
                log_domain_error(err);
                (StatusCode::NOT_FOUND, "something went wrong")
            }
            AppError::Render(err) => {
                error!(error = %err, "view rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        (status, msg).into_response()
    }
}

fn log_domain_error(err: &DomainError) {
    match err {
        DomainError::NotFound(_) => debug!(error = %err, "request for missing post"),
        DomainError::Store(_) => error!(error = %err, "post store failure"),
    }
}

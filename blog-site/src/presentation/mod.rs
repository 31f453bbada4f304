use std::sync::Arc;

use crate::application::blog_service::BlogService;

pub(crate) mod http;
pub(crate) mod http_handlers;

use http::views::Views;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) blog_service: Arc<BlogService>,
    pub(crate) views: Arc<Views>,
}

impl AppState {
    pub(crate) fn new(blog_service: Arc<BlogService>, views: Arc<Views>) -> Self {
        Self {
            blog_service,
            views,
        }
    }
}

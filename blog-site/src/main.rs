use std::sync::Arc;

use anyhow::{Context, Result};

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::blog_service::BlogService;
use data::repositories::mongo::post_repository::MongoPostRepository;
use infrastructure::database::connect;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;
use presentation::http::views::Views;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let database = connect(&settings.database_url).await?;
    let repo = MongoPostRepository::new(&database);
    let blog_service = Arc::new(BlogService::new(Arc::new(repo)));
    let views = Arc::new(Views::new().context("failed to compile templates")?);

    let state = AppState::new(blog_service, views);
    server::run_http(&settings, state).await
}

use anyhow::{Context, Result, bail};
use bson::doc;
use mongodb::{Client, Database};
use tracing::{debug, info};

/// Connects to the database named in `database_url` and checks it answers.
pub async fn connect(database_url: &str) -> Result<Database> {
    debug!("setting up mongo client");

    let client = Client::with_uri_str(database_url)
        .await
        .context("failed to create mongodb client")?;
    let Some(database) = client.default_database() else {
        bail!("DATABASE_URL must name a default database, e.g. mongodb://localhost:27017/app");
    };

    database
        .run_command(doc! { "ping": 1 }, None)
        .await
        .context("mongodb did not answer ping")?;

    info!(database = database.name(), "connected to mongodb");
    Ok(database)
}

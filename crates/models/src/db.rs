use mongodb::{Client, Database};
use tracing::info;

use crate::errors::ModelError;

/// Open the process-wide MongoDB handle. Called once at startup; the returned
/// `Database` is cheap to clone and shared across all requests.
pub async fn connect(cfg: &configs::DatabaseConfig) -> Result<Database, ModelError> {
    let client = Client::with_uri_str(&cfg.mongo_url)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    let db = client.database(&cfg.db_name);
    info!(db_name = %cfg.db_name, "connected to mongodb");
    Ok(db)
}

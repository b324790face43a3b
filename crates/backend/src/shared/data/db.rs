//! MongoDB bootstrap for the incident store.
//!
//! Connection happens once at startup. A failed connect does not abort the
//! process: the returned store is `Unavailable` and every operation on it
//! short-circuits until a restart.

use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::domain::a001_incident::repository::IncidentStore;
use crate::shared::config::Config;

pub const COLLECTION_NAME: &str = "incidents";

/// Build the incident store from configuration. Never fails; downgrade to
/// `Unavailable` on any connection-setup error.
pub async fn initialize_store(config: &Config) -> IncidentStore {
    match connect(config).await {
        Ok(collection) => {
            tracing::info!(
                db_name = %config.database.db_name.trim(),
                "Connected to MongoDB successfully"
            );
            IncidentStore::ready(collection)
        }
        Err(e) => {
            tracing::error!("Error initializing database: {e}");
            IncidentStore::unavailable()
        }
    }
}

async fn connect(config: &Config) -> anyhow::Result<Collection<Document>> {
    let mongo_uri = config.database.mongo_uri.trim();
    let db_name = config.database.db_name.trim();

    if mongo_uri.is_empty() || db_name.is_empty() {
        anyhow::bail!("invalid MongoDB URI or database name");
    }

    let client = Client::with_uri_str(mongo_uri).await?;
    let collection = client.database(db_name).collection::<Document>(COLLECTION_NAME);

    // Uniqueness of the business identifier is enforced here, not in code.
    let index = IndexModel::builder()
        .keys(doc! { "Incident_Id": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    collection.create_index(index, None).await?;

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{Config, DatabaseConfig};

    fn config(mongo_uri: &str, db_name: &str) -> Config {
        Config {
            database: DatabaseConfig {
                mongo_uri: mongo_uri.into(),
                db_name: db_name.into(),
            },
        }
    }

    #[tokio::test]
    async fn blank_uri_yields_unavailable_store() {
        let store = initialize_store(&config("", "drs")).await;
        assert!(!store.is_ready());
    }

    #[tokio::test]
    async fn blank_db_name_yields_unavailable_store() {
        let store = initialize_store(&config("mongodb://127.0.0.1:27017", "  ")).await;
        assert!(!store.is_ready());
    }
}

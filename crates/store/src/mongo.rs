//! MongoDB-backed store.

use crate::convert::document_to_json;
use crate::traits::RecordStore;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::{Client, Collection, Database};
use nlq_core::{AppError, AppResult, Filter};
use serde_json::Value;

/// One client for the whole process; the driver pools connections internally.
pub struct MongoStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Create the client. The driver connects lazily, so an unreachable
    /// server only shows up on the first query or [`RecordStore::ping`].
    pub async fn connect(uri: &str, database: &str, collection: &str) -> AppResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| AppError::Store(format!("Failed to create MongoDB client: {}", e)))?;

        let database = client.database(database);
        let collection = database.collection::<Document>(collection);
        tracing::info!(
            database = %database.name(),
            collection = %collection.name(),
            "MongoDB store ready"
        );

        Ok(Self {
            database,
            collection,
        })
    }
}

#[async_trait::async_trait]
impl RecordStore for MongoStore {
    fn backend_name(&self) -> &str {
        "mongo"
    }

    async fn find(&self, filter: &Filter) -> AppResult<Vec<Value>> {
        let query = bson::to_document(filter.as_map())
            .map_err(|e| AppError::Store(format!("Filter is not valid BSON: {}", e)))?;

        let cursor = self
            .collection
            .find(query)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        tracing::debug!("MongoDB returned {} documents", documents.len());
        Ok(documents.into_iter().map(document_to_json).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Store(format!("MongoDB ping failed: {}", e)))?;
        Ok(())
    }
}

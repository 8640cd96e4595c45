use async_trait::async_trait;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Database, options::ClientOptions};

use crate::types::StorageError;

/// A schema-flexible store of documents grouped into named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts one document and returns the identifier assigned by the store.
    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StorageError>;

    /// Lists the collection names of the database.
    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError>;

    /// Round-trips a no-op command to check the store is reachable.
    async fn ping(&self) -> Result<(), StorageError>;

    /// Name of the database the store writes to.
    fn database_name(&self) -> &str;
}

/// MongoDB-backed document store.
///
/// The driver keeps its own connection pool, so one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Builds a client for `url` and selects database `name`.
    ///
    /// The driver connects lazily: an unreachable server surfaces on the first operation,
    /// while a malformed connection string fails here.
    pub async fn connect(url: &str, name: &str) -> Result<Self, StorageError> {
        let client = Client::with_options(client_options(url).await?)?;

        Ok(Self {
            database: client.database(name),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StorageError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        Ok(identifier_to_string(result.inserted_id))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.database.list_collection_names().await?)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn database_name(&self) -> &str {
        self.database.name()
    }
}

/// Parses a connection string; timeouts and pool sizes stay at the driver's defaults.
async fn client_options(url: &str) -> Result<ClientOptions, StorageError> {
    Ok(ClientOptions::parse(url).await?)
}

/// Renders an inserted `_id` as text; ObjectIds become their 24-digit hex form.
fn identifier_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(value) => value,
        other => other.to_string(),
    }
}

use std::sync::Arc;

use serde::Serialize;

use crate::database::{DocumentStore, MongoStore};
use crate::types::{DatabaseSettings, StorageError};

/// Process-wide storage handle, built once at startup and shared by every request.
///
/// A gateway without a store is "uninitialized": every write fails with
/// [`StorageError::NotInitialized`].
#[derive(Clone)]
pub struct StorageGateway {
    settings: DatabaseSettings,
    store: Option<Arc<dyn DocumentStore>>,
}

impl StorageGateway {
    /// Connects using `DATABASE_URL` and `DATABASE_NAME` from the environment.
    pub async fn connect_from_env() -> Self {
        Self::connect(DatabaseSettings::from_env()).await
    }

    /// Connects to MongoDB when both settings are present.
    ///
    /// Missing settings or a malformed connection string leave the gateway uninitialized.
    pub async fn connect(settings: DatabaseSettings) -> Self {
        let store = match (settings.url.as_deref(), settings.name.as_deref()) {
            (Some(url), Some(name)) => match MongoStore::connect(url, name).await {
                Ok(store) => {
                    log::info!("🗃️ MongoDB client created for database '{}'", name);
                    Some(Arc::new(store) as Arc<dyn DocumentStore>)
                }
                Err(e) => {
                    log::error!("❌ Failed to create MongoDB client: {}", e);
                    None
                }
            },
            _ => {
                log::warn!("⚠️ DATABASE_URL or DATABASE_NAME not set, storage disabled");
                None
            }
        };

        Self { settings, store }
    }

    /// Gateway without a store.
    pub fn uninitialized(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            store: None,
        }
    }

    /// Gateway over an existing store.
    pub fn with_store(settings: DatabaseSettings, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            settings,
            store: Some(store),
        }
    }

    /// Settings the gateway was configured with.
    pub fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }

    /// Whether a storage client exists.
    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// Name of the database in use, if initialized.
    pub fn database_name(&self) -> Option<&str> {
        self.store.as_deref().map(|store| store.database_name())
    }

    fn store(&self) -> Result<&dyn DocumentStore, StorageError> {
        self.store.as_deref().ok_or(StorageError::NotInitialized)
    }

    /// Inserts `record` into `collection` and returns the assigned identifier.
    ///
    /// The stored document holds exactly the fields `record` serializes.
    pub async fn create_document<T>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, StorageError>
    where
        T: Serialize + ?Sized,
    {
        let store = self.store()?;
        let document = mongodb::bson::to_document(record)?;

        let id = store.insert_document(collection, document).await?;
        log::info!("📝 Stored document {} in '{}'", id, collection);

        Ok(id)
    }

    /// Lists the collection names of the configured database.
    pub async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        self.store()?.list_collection_names().await
    }

    /// Checks the store is reachable.
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.store()?.ping().await
    }
}

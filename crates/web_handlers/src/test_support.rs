//! Test doubles for the document store and app construction helpers.

use std::sync::{Arc, Mutex};

use actix_web::{App, web};
use async_trait::async_trait;
use document_store::{DatabaseSettings, DocumentStore, StorageError, StorageGateway};
use mongodb::bson::Document;

use crate::configure;

/// Store that keeps inserted documents in memory.
pub struct MemoryStore {
    pub inserted: Mutex<Vec<(String, Document)>>,
    pub collections: Vec<String>,
}

impl MemoryStore {
    pub fn new(collections: &[&str]) -> Self {
        Self {
            inserted: Mutex::new(Vec::new()),
            collections: collections.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn inserted(&self) -> Vec<(String, Document)> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StorageError> {
        let mut inserted = self.inserted.lock().unwrap();
        inserted.push((collection.to_string(), document));
        Ok(format!("{:024x}", inserted.len()))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.collections.clone())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn database_name(&self) -> &str {
        "hoelderlin"
    }
}

/// Store whose every operation fails with the given message.
pub struct FailingStore(pub &'static str);

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_document(
        &self,
        _collection: &str,
        _document: Document,
    ) -> Result<String, StorageError> {
        Err(StorageError::Other(self.0.to_string()))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Other(self.0.to_string()))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Err(StorageError::Other(self.0.to_string()))
    }

    fn database_name(&self) -> &str {
        "hoelderlin"
    }
}

pub fn configured_settings() -> DatabaseSettings {
    DatabaseSettings::new(
        Some("mongodb://localhost:27017".to_string()),
        Some("hoelderlin".to_string()),
    )
}

pub fn gateway_with(store: Arc<dyn DocumentStore>) -> StorageGateway {
    StorageGateway::with_store(configured_settings(), store)
}

pub fn test_app(
    gateway: StorageGateway,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(gateway))
        .configure(configure)
}

/// Environment variable holding the MongoDB connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable holding the database name.
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Connection parameters read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// MongoDB connection string, if configured
    pub url: Option<String>,
    /// Database name, if configured
    pub name: Option<String>,
}

impl DatabaseSettings {
    /// Creates settings, treating empty values as unset.
    pub fn new(url: Option<String>, name: Option<String>) -> Self {
        Self {
            url: url.filter(|value| !value.is_empty()),
            name: name.filter(|value| !value.is_empty()),
        }
    }

    /// Reads `DATABASE_URL` and `DATABASE_NAME` from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(DATABASE_URL_VAR).ok(),
            std::env::var(DATABASE_NAME_VAR).ok(),
        )
    }

    /// Whether a connection string is configured.
    pub fn url_is_set(&self) -> bool {
        self.url.is_some()
    }

    /// Whether a database name is configured.
    pub fn name_is_set(&self) -> bool {
        self.name.is_some()
    }
}

/// Errors returned by the storage gateway
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage client exists because the environment did not configure one
    #[error(
        "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables"
    )]
    NotInitialized,

    /// The record could not be converted into a document
    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// The driver reported a failure (network, authentication, rejected write)
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Any other store failure, carrying its message
    #[error("{0}")]
    Other(String),
}

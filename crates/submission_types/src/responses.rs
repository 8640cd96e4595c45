use serde::{Deserialize, Serialize};

/// Maximum number of collection names listed in a diagnostic report.
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Maximum number of characters of a storage error shown in a diagnostic report.
pub const MAX_ERROR_PREVIEW_CHARS: usize = 50;

/// Response structure for the root liveness endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct RootMessage {
    /// Human readable liveness message
    pub message: String,
}

/// Response structure for the health endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// Always "ok" while the process serves requests
    pub status: String,
}

impl HealthStatus {
    /// Healthy status body.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Response structure for an accepted form submission
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionAccepted {
    /// Always true for an accepted submission
    pub ok: bool,
    /// Identifier assigned by the document store
    pub id: String,
}

impl SubmissionAccepted {
    /// Builds the body for a stored submission.
    pub fn new(id: String) -> Self {
        Self { ok: true, id }
    }
}

/// Diagnostic snapshot of the backend and its storage connection
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Backend liveness
    pub backend: String,
    /// Storage state, including a short error preview when listing collections fails
    pub database: String,
    /// Whether `DATABASE_URL` is configured
    pub database_url: String,
    /// Whether `DATABASE_NAME` is configured
    pub database_name: String,
    /// "Connected" when a storage client exists, "Not Connected" otherwise
    pub connection_status: String,
    /// First collection names of the database
    pub collections: Vec<String>,
}

impl DiagnosticReport {
    /// Report for a running backend without a storage client.
    pub fn new(database_url_set: bool, database_name_set: bool) -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "⚠️  Available but not initialized".to_string(),
            database_url: set_marker(database_url_set),
            database_name: set_marker(database_name_set),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }

    /// Records a storage client that listed its collections.
    pub fn connected(&mut self, mut collections: Vec<String>) {
        collections.truncate(MAX_LISTED_COLLECTIONS);
        self.connection_status = "Connected".to_string();
        self.database = "✅ Connected & Working".to_string();
        self.collections = collections;
    }

    /// Records a storage client that failed to list its collections.
    pub fn connected_with_error(&mut self, error: &str) {
        let preview: String = error.chars().take(MAX_ERROR_PREVIEW_CHARS).collect();
        self.connection_status = "Connected".to_string();
        self.database = format!("⚠️  Connected but Error: {}", preview);
        self.collections = Vec::new();
    }
}

fn set_marker(is_set: bool) -> String {
    if is_set {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

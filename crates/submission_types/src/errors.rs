use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// Error raised when a request body does not match the declared record shape
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The body is not well-formed JSON
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    /// A required field is absent
    #[error("Missing field `{0}`")]
    MissingField(String),

    /// A field holds a value of the wrong primitive type
    #[error("Invalid field `{field}`: {message}")]
    InvalidField {
        /// Path of the offending field
        field: String,
        /// Decoder message describing the mismatch
        message: String,
    },

    /// The body itself has the wrong shape (not an object)
    #[error("Invalid body: {0}")]
    InvalidType(String),
}

impl SchemaError {
    /// Name of the offending field, when known.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::MissingField(field) => Some(field),
            SchemaError::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Decodes an already parsed JSON body into record `T`, tracking the path of a failing field.
pub fn parse_submission<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, SchemaError> {
    serde_path_to_error::deserialize(body).map_err(SchemaError::from)
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SchemaError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let inner = err.into_inner();
        let message = inner.to_string();

        if let Some(field) = missing_field_name(&message) {
            return match path.as_str() {
                "." => SchemaError::MissingField(field.to_string()),
                parent => SchemaError::MissingField(format!("{}.{}", parent, field)),
            };
        }

        match inner.classify() {
            Category::Syntax | Category::Eof | Category::Io => SchemaError::Malformed(message),
            Category::Data if path == "." => SchemaError::InvalidType(message),
            Category::Data => SchemaError::InvalidField {
                field: path,
                message,
            },
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => SchemaError::Malformed(message),
            Category::Data => match missing_field_name(&message) {
                Some(field) => SchemaError::MissingField(field.to_string()),
                None => SchemaError::InvalidType(message),
            },
        }
    }
}

/// Extracts `x` from serde's "missing field `x`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

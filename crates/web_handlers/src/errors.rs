use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use document_store::StorageError;
use submission_types::SchemaError;

/// Error returned by the API handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body does not match the record shape
    #[error("Validation error: {0}")]
    Validation(#[from] SchemaError),

    /// The request body is not declared as JSON
    #[error("Content type must be application/json")]
    UnsupportedMediaType,

    /// The request body could not be read
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Storing the submission failed
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::UnsupportedMediaType => "unsupported_media_type",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Storage(_) => "storage_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        });

        if let ApiError::Validation(schema_error) = self
            && let Some(field) = schema_error.field()
        {
            body["field"] = serde_json::Value::from(field);
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

use actix_web::{error::JsonPayloadError, web};

use crate::{
    ApiError, create_contact_message, create_reservation, database_diagnostics, health, read_root,
};

/// Registers every route of the backend and the JSON body configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(read_root))
        .route("/health", web::get().to(health))
        .route("/test", web::get().to(database_diagnostics))
        .service(
            web::scope("/api")
                .route("/reservations", web::post().to(create_reservation))
                .route("/contact", web::post().to(create_contact_message)),
        );
}

/// JSON extractor settings: body shape errors become 422 validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let api_error = match err {
            JsonPayloadError::Deserialize(e) => ApiError::Validation(e.into()),
            JsonPayloadError::ContentType => ApiError::UnsupportedMediaType,
            other => ApiError::BadRequest(other.to_string()),
        };
        log::debug!("Rejected request body: {}", api_error);
        api_error.into()
    })
}

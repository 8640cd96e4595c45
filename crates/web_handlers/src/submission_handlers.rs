use actix_web::{HttpResponse, web};
use document_store::StorageGateway;
use submission_types::{
    ContactMessage, Reservation, Submission, SubmissionAccepted, parse_submission,
};

use crate::ApiError;

/// Stores a table reservation submitted from the website.
/// Returns `{ok: true, id}` with the identifier of the stored document.
pub async fn create_reservation(
    gateway: web::Data<StorageGateway>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, ApiError> {
    let reservation: Reservation = parse_submission(payload.into_inner())?;
    store_submission(&gateway, &reservation).await
}

/// Stores a message sent through the contact form.
pub async fn create_contact_message(
    gateway: web::Data<StorageGateway>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, ApiError> {
    let message: ContactMessage = parse_submission(payload.into_inner())?;
    store_submission(&gateway, &message).await
}

async fn store_submission<T: Submission>(
    gateway: &StorageGateway,
    record: &T,
) -> Result<HttpResponse, ApiError> {
    let id = gateway
        .create_document(T::COLLECTION, record)
        .await
        .inspect_err(|e| log::error!("❌ Failed to store {} submission: {}", T::COLLECTION, e))?;

    Ok(HttpResponse::Ok().json(SubmissionAccepted::new(id)))
}

//! # Web Handlers for the Caffebar Hölderlin Backend
//!
//! This crate provides the HTTP handlers of the backend: liveness and diagnostic endpoints,
//! and the public form submissions for reservations and contact messages.

/// Error type shared by the handlers
mod errors;
pub use errors::*;

/// Liveness, health and storage diagnostic handlers
mod status_handlers;
pub use status_handlers::*;

/// Reservation and contact form handlers
mod submission_handlers;
pub use submission_handlers::*;

/// Route table and request body configuration
mod routes;
pub use routes::*;

#[cfg(test)]
mod test_support;

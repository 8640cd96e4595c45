//! # Submission Types
//!
//! This crate defines the public form submissions accepted by the Caffebar Hölderlin backend
//! (table reservations and contact messages) together with the JSON bodies the API returns.

/// Record shapes for reservations and contact messages.
mod records;
pub use records::*;

/// Response bodies returned by the HTTP endpoints.
mod responses;
pub use responses::*;

/// Errors raised when a request body does not match a record shape.
mod errors;
pub use errors::*;

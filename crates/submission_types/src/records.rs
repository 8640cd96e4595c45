use serde::{Deserialize, Serialize};

/// Collection holding table reservations.
pub const RESERVATION_COLLECTION: &str = "reservation";

/// Collection holding contact form messages.
pub const CONTACT_MESSAGE_COLLECTION: &str = "contactmessage";

/// A record that can be submitted through a public form and stored as one document.
pub trait Submission: Serialize {
    /// Name of the collection the record is stored in.
    const COLLECTION: &'static str;
}

/// Table reservation request sent from the website
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Name the reservation is made under
    pub name: String,

    /// Phone number or email address of the guest
    pub contact: String,

    /// Requested date and time, as entered in the form
    pub date_time: String,

    /// Number of guests
    pub party_size: i32,

    /// Free-text note (allergies, occasion, seating wishes)
    #[serde(default)]
    pub note: Option<String>,
}

impl Submission for Reservation {
    const COLLECTION: &'static str = RESERVATION_COLLECTION;
}

/// Message sent through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Name of the sender
    pub name: String,

    /// Email address to reply to
    pub email: String,

    /// Message body
    pub message: String,
}

impl Submission for ContactMessage {
    const COLLECTION: &'static str = CONTACT_MESSAGE_COLLECTION;
}

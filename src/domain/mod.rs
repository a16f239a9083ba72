//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact details a visitor submits. These value
//! objects validate at construction time and back the form validator's rules.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::{format_phone_number, PhoneNumber};

//! Domain value objects.
//!
//! Type-safe wrappers for the two field kinds a contact record is built
//! from: the contact's name and a phone number. Both are thin newtypes over
//! the raw string the user typed; the only phone validation in the system
//! is the dispatcher's format gate, not the type itself.

pub mod contact_name;
pub mod phone;

pub use contact_name::ContactName;
pub use phone::PhoneNumber;

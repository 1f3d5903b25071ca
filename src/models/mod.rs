//! Data models for the address book.
//!
//! This module contains the data structures the assistant operates on: a
//! single contact record and the insertion-ordered book that owns them.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;

//! Contact Assistant - an interactive console assistant for a personal address book.
//!
//! This library implements a line-oriented contact manager: free-text
//! commands arrive on stdin, an in-memory address book is read or mutated,
//! and textual responses go to stdout. Nothing is persisted and nothing
//! leaves the process.
//!
//! # Architecture
//!
//! - **domain**: value objects for contact names and phone numbers
//! - **models**: the contact record and the insertion-ordered address book
//! - **commands**: the declared command table and one handler per operation
//! - **repl**: the session loop — match, split, dispatch, translate errors
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use commands::{CommandKind, CommandSpec, COMMAND_TABLE, GOODBYE};
pub use config::Config;
pub use domain::{ContactName, PhoneNumber};
pub use error::{CommandError, ConfigError};
pub use models::{AddressBook, Record};
pub use repl::{process_line, Repl};

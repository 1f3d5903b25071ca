//! The in-memory address book.

use crate::models::Record;
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered mapping from contact name to [`Record`].
///
/// The book lives for the process lifetime and is never persisted. It is
/// constructed once in `main` and passed by reference into the dispatcher
/// and every handler — no global state.
///
/// `add_record` overwrites blindly; rejecting duplicate names is the
/// handler's responsibility, so the book stays a plain keyed collection.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name string. Overwrites any existing
    /// entry for that name.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Whether a contact with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .records
            .values()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", rendered)
    }
}

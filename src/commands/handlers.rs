//! Command handler functions.
//!
//! One function per user-facing operation. Each is a pure function over its
//! arguments and the shared [`AddressBook`], returning the response string
//! or a [`CommandError`] the session loop translates for display.

use crate::commands::GOODBYE;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::{record::render_phone_list, AddressBook, Record};

/// `hello` — fixed greeting.
pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// Exit family (`exit`, `goodbye`, `good bye`, `close`) — the sentinel.
pub fn exit() -> String {
    GOODBYE.to_string()
}

/// `add contact <name>[, <phone>]` — create a new contact.
///
/// Rejects a name already in the book without mutating it. The phone is
/// optional; a missing phone leaves the sequence empty.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: Option<&str>) -> CommandResult<String> {
    if book.contains(name) {
        return Ok(format!("Contact Name: {} already exists", name));
    }

    let mut record = Record::new(ContactName::new(name));
    if let Some(phone) = phone {
        record.add_phone(PhoneNumber::new(phone));
    }

    let response = format!(
        "Added contact Name: {} with Phone: {}",
        record.name(),
        record.phones_display()
    );
    book.add_record(record);

    Ok(response)
}

/// `add phone <name>, <phone>` — append a phone to an existing contact.
///
/// A phone value already on file for that name is reported without
/// mutation.
pub fn add_phone(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let record = book
        .get_mut(name)
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))?;

    if record.has_phone(phone) {
        return Ok(format!(
            "Phone: {} for contact Name: {} already exists",
            phone,
            record.name()
        ));
    }

    record.add_phone(PhoneNumber::new(phone));

    Ok(format!(
        "Contact Name: {} new Phones: {}",
        record.name(),
        render_phone_list(record.phones())
    ))
}

/// `change <name> <phone>` — replace the whole phone sequence with one phone.
pub fn change_phones(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let record = book
        .get_mut(name)
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))?;

    record.change_phones(PhoneNumber::new(phone));

    Ok(format!(
        "Contact Name: {} has new Phone: {}",
        record.name(),
        render_phone_list(record.phones())
    ))
}

/// `remove phones <name>` — clear the phone sequence.
pub fn remove_phones(book: &mut AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .get_mut(name)
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))?;

    record.remove_phones();
    Ok(record.to_string())
}

/// `phone <name>` — show one contact.
pub fn show_contact(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .get(name)
        .ok_or_else(|| CommandError::NameNotFound(name.to_string()))?;

    Ok(record.to_string())
}

/// `show all` — every contact in insertion order, or the empty-book notice.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        "No contacts, please add".to_string()
    } else {
        format!("Showing all contacts\n{}", book)
    }
}

//! Behavior tests for the command set.
//!
//! These drive full command lines through the public dispatch entry point
//! and assert on the exact response strings, including the edge cases the
//! handlers are responsible for.

use contact_assistant::{process_line, AddressBook};

#[test]
fn test_phones_reflect_adds_in_order() {
    let mut book = AddressBook::new();

    process_line(&mut book, "add contact Alice, 5551212");
    process_line(&mut book, "add phone Alice, 5550000");
    process_line(&mut book, "add phone Alice, 5559999");

    assert_eq!(
        process_line(&mut book, "phone Alice"),
        "Contact Name: Alice with Phones: [5551212, 5550000, 5559999]"
    );
}

#[test]
fn test_duplicate_contact_never_mutates() {
    let mut book = AddressBook::new();

    process_line(&mut book, "add contact Alice, 5551212");
    let response = process_line(&mut book, "add contact Alice, 5550000");

    assert_eq!(response, "Contact Name: Alice already exists");
    assert_eq!(
        process_line(&mut book, "phone Alice"),
        "Contact Name: Alice with Phones: [5551212]"
    );
}

#[test]
fn test_duplicate_phone_never_mutates() {
    let mut book = AddressBook::new();

    process_line(&mut book, "add contact Alice, 5551212");
    let response = process_line(&mut book, "add phone Alice, 5551212");

    assert_eq!(
        response,
        "Phone: 5551212 for contact Name: Alice already exists"
    );
    assert_eq!(
        process_line(&mut book, "phone Alice"),
        "Contact Name: Alice with Phones: [5551212]"
    );
}

#[test]
fn test_change_always_leaves_exactly_one_phone() {
    let mut book = AddressBook::new();

    process_line(&mut book, "add contact Alice, 5551212");
    process_line(&mut book, "add phone Alice, 5550000");

    assert_eq!(
        process_line(&mut book, "change Alice 5559999"),
        "Contact Name: Alice has new Phone: [5559999]"
    );

    // And again from a single-phone state.
    assert_eq!(
        process_line(&mut book, "change Alice 5551111"),
        "Contact Name: Alice has new Phone: [5551111]"
    );
}

#[test]
fn test_remove_phones_always_leaves_zero() {
    let mut book = AddressBook::new();

    process_line(&mut book, "add contact Alice, 5551212");
    process_line(&mut book, "add phone Alice, 5550000");

    assert_eq!(
        process_line(&mut book, "remove phones Alice"),
        "Contact Name: Alice with Phones: None"
    );
}

#[test]
fn test_lookups_with_absent_name_report_and_do_not_mutate() {
    let mut book = AddressBook::new();

    for line in [
        "phone Ghost",
        "remove phones Ghost",
        "change Ghost 5551212",
        "add phone Ghost, 5551212",
    ] {
        assert_eq!(
            process_line(&mut book, line),
            "Name: Ghost not in address book",
            "line: {}",
            line
        );
    }

    assert!(book.is_empty());
}

#[test]
fn test_show_all_empty_and_populated() {
    let mut book = AddressBook::new();

    assert_eq!(process_line(&mut book, "show all"), "No contacts, please add");

    process_line(&mut book, "add contact Bob");
    process_line(&mut book, "add contact Alice, 5551212");

    assert_eq!(
        process_line(&mut book, "show all"),
        "Showing all contacts\n\
         Contact Name: Bob with Phones: None\n\
         Contact Name: Alice with Phones: [5551212]"
    );
}

#[test]
fn test_add_contact_without_phone_leaves_empty_list() {
    let mut book = AddressBook::new();

    assert_eq!(
        process_line(&mut book, "add contact Bob"),
        "Added contact Name: Bob with Phone: None"
    );
}

#[test]
fn test_two_word_name_splits_on_last_space() {
    let mut book = AddressBook::new();

    // Without the comma separator, the split is on the last space, so the
    // final token must parse as an integer.
    assert_eq!(
        process_line(&mut book, "add contact Mary Jane"),
        "Wrong phone format"
    );

    // With the comma separator the full name stays intact.
    assert_eq!(
        process_line(&mut book, "add contact Mary Jane, 5551212"),
        "Added contact Name: Mary Jane with Phone: [5551212]"
    );
}

#[test]
fn test_wrong_arity_reported() {
    let mut book = AddressBook::new();

    // One argument where two are required.
    process_line(&mut book, "add contact Alice");
    assert_eq!(process_line(&mut book, "add phone Alice"), "Wrong name or phone");

    // Arguments where none are declared.
    assert_eq!(process_line(&mut book, "hello there"), "Wrong name or phone");
}

#[test]
fn test_scripted_scenario() {
    let mut book = AddressBook::new();

    // add contact Alice, 5551212
    let response = process_line(&mut book, "add contact Alice, 5551212");
    assert!(response.contains("Added contact Name: Alice with Phone: [5551212]"));

    // phone Alice
    assert_eq!(
        process_line(&mut book, "phone Alice"),
        "Contact Name: Alice with Phones: [5551212]"
    );

    // change Alice 5550000
    assert_eq!(
        process_line(&mut book, "change Alice 5550000"),
        "Contact Name: Alice has new Phone: [5550000]"
    );

    // remove phones Alice
    assert_eq!(
        process_line(&mut book, "remove phones Alice"),
        "Contact Name: Alice with Phones: None"
    );

    // exit
    assert_eq!(process_line(&mut book, "exit"), "Goodbye!");
}

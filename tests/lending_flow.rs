//! End-to-end exercise of the resolve-then-act flow the shell performs:
//! validate and reserve an ISBN, register a member, resolve both handles
//! through the stores, and drive a loan through checkout and an overdue
//! return with an injected clock.

use chrono::NaiveDate;
use library_lending_manager::{
    check_out, isbn, return_book, BookStatus, Catalog, LendingError, MemberRoster,
    LATE_FEE_PER_DAY,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_checkout_and_overdue_return_flow() {
    let mut catalog = Catalog::new();
    let mut roster = MemberRoster::new();

    // Intake: format check, uniqueness reservation, then construction.
    let raw = "978-0-7475-3269-9";
    assert!(isbn::validate(raw));
    assert!(catalog.reserve_isbn(raw));
    catalog.create("Harry Potter and the Philosopher's Stone", "J. K. Rowling", raw);

    assert!(roster.create("Jane", "Doe", "jane@example.com", "555-0101", "1 Elm St"));

    // Checkout on June 1st; due July 1st.
    let receipt = check_out(
        roster.find_by_email_mut("jane@example.com"),
        catalog.find_by_isbn_mut("9780747532699"),
        day(2024, 6, 1),
    )
    .unwrap();
    assert_eq!(receipt.due_date, day(2024, 7, 1));

    let book = catalog.find_by_isbn("9780747532699").unwrap();
    assert_eq!(book.status, BookStatus::Unavailable);

    // A second member cannot take the same copy.
    assert!(roster.create("John", "Smith", "john@example.com", "555-0102", "2 Oak Ave"));
    let err = check_out(
        roster.find_by_email_mut("john@example.com"),
        catalog.find_by_isbn_mut(raw),
        day(2024, 6, 2),
    )
    .unwrap_err();
    assert!(matches!(err, LendingError::AlreadyCheckedOut { .. }));

    // Returned July 8th: a week past due at five per day.
    let receipt = return_book(
        catalog.find_by_isbn_mut(raw),
        roster.find_by_email_mut("jane@example.com"),
        day(2024, 7, 8),
    )
    .unwrap();
    assert_eq!(receipt.late_days, 7);
    assert_eq!(receipt.fee, 7 * LATE_FEE_PER_DAY);

    let book = catalog.find_by_isbn(raw).unwrap();
    assert_eq!(book.status, BookStatus::Available);

    let member = roster.find_by_email("jane@example.com").unwrap();
    assert_eq!(member.debt, 35);
    assert_eq!(member.loans.len(), 1);
    assert_eq!(member.loans[0].return_date, Some(day(2024, 7, 8)));
}

#[test]
fn unresolved_lookups_decline_instead_of_panicking() {
    let mut catalog = Catalog::new();
    let mut roster = MemberRoster::new();
    catalog.reserve_isbn("9780261103344");
    catalog.create("The Hobbit", "J. R. R. Tolkien", "9780261103344");

    // Member lookup misses: the shell passes the miss straight through.
    let err = check_out(
        roster.find_by_email_mut("nobody@example.com"),
        catalog.find_by_isbn_mut("9780261103344"),
        day(2024, 6, 1),
    )
    .unwrap_err();
    assert_eq!(err, LendingError::UnresolvedParty);

    let book = catalog.find_by_isbn("9780261103344").unwrap();
    assert_eq!(book.status, BookStatus::Available);
}

#[test]
fn duplicate_intake_is_rejected_before_construction() {
    let mut catalog = Catalog::new();
    assert!(catalog.reserve_isbn("0-306-40615-2"));
    catalog.create("Numerical Recipes", "W. H. Press", "0-306-40615-2");

    // Any variant of the same ISBN fails the reservation, so no second
    // create happens and the catalog holds one book.
    assert!(!catalog.reserve_isbn("0306406152"));
    assert_eq!(catalog.list().len(), 1);
}

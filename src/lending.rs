//! The checkout/return state machine and late-fee calculation. The engine
//! never looks anything up: both operations take handles the caller already
//! resolved through the stores, plus an explicit `today` so due dates and
//! fees are deterministic under test. Book status moves `Available` ->
//! `Unavailable` only through [`check_out`] and back only through
//! [`return_book`]; there are no other transitions.

use chrono::NaiveDate;
use tracing::info;

use crate::error::LendingError;
use crate::models::{Book, BookStatus, Member};

/// Late fee charged per overdue day, in whole currency units.
pub const LATE_FEE_PER_DAY: i64 = 5;

/// Outcome of a successful checkout, ready for the shell to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    /// Email of the borrowing member.
    pub member_email: String,
    /// Normalized ISBN of the borrowed book.
    pub isbn: String,
    /// One calendar month after the checkout day.
    pub due_date: NaiveDate,
}

/// Outcome of a successful return. `late_days` and `fee` are zero for an
/// on-time return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    /// Email of the returning member.
    pub member_email: String,
    /// Normalized ISBN of the returned book.
    pub isbn: String,
    /// The injected "today" the return was processed with.
    pub returned_on: NaiveDate,
    /// Whole days past the due date, never negative.
    pub late_days: i64,
    /// `late_days * LATE_FEE_PER_DAY`.
    pub fee: i64,
}

impl ReturnReceipt {
    /// True when the return incurred a fee.
    pub fn was_late(&self) -> bool {
        self.fee > 0
    }
}

/// Lend `book` to `member` effective `today`.
///
/// Either handle may be `None` when the caller's lookup came up empty; that
/// is reported as [`LendingError::UnresolvedParty`] without touching any
/// state. A book that is not `Available` is likewise declined. On success
/// the book goes `Unavailable` and a fresh active loan (due one month out)
/// is appended to the member's loan list.
pub fn check_out(
    member: Option<&mut Member>,
    book: Option<&mut Book>,
    today: NaiveDate,
) -> Result<CheckoutReceipt, LendingError> {
    let (member, book) = match (member, book) {
        (Some(member), Some(book)) => (member, book),
        _ => return Err(LendingError::UnresolvedParty),
    };

    if book.status != BookStatus::Available {
        return Err(LendingError::AlreadyCheckedOut {
            isbn: book.isbn.clone(),
        });
    }

    book.status = BookStatus::Unavailable;
    let loan = crate::models::Loan::new(&member.email, &book.isbn, today);
    let due_date = loan.due_date;
    member.loans.push(loan);

    info!(member = %member.email, isbn = %book.isbn, %due_date, "book checked out");
    Ok(CheckoutReceipt {
        member_email: member.email.clone(),
        isbn: book.isbn.clone(),
        due_date,
    })
}

/// Process the return of `book` by `member` effective `today`.
///
/// Declines, without mutating anything, when a handle is missing, when the
/// book is not currently out, or when the member holds no active loan for
/// the book despite its `Unavailable` status (a consistency anomaly the
/// caller should hear about). Otherwise the active loan is closed with
/// `return_date = today`, the book goes back to `Available`, and an overdue
/// return overwrites the member's debt with `late_days * LATE_FEE_PER_DAY`.
/// An on-time return leaves the debt field alone.
pub fn return_book(
    book: Option<&mut Book>,
    member: Option<&mut Member>,
    today: NaiveDate,
) -> Result<ReturnReceipt, LendingError> {
    let (book, member) = match (book, member) {
        (Some(book), Some(member)) => (book, member),
        _ => return Err(LendingError::UnresolvedParty),
    };

    if book.status != BookStatus::Unavailable {
        return Err(LendingError::NotCheckedOut {
            isbn: book.isbn.clone(),
        });
    }

    let loan = member
        .loans
        .iter_mut()
        .find(|loan| loan.isbn == book.isbn && loan.is_active())
        .ok_or_else(|| LendingError::NoActiveLoan {
            isbn: book.isbn.clone(),
        })?;

    let late_days = (today - loan.due_date).num_days().max(0);
    let fee = late_days * LATE_FEE_PER_DAY;
    loan.return_date = Some(today);

    if fee > 0 {
        // Replacement, not accumulation: the latest overdue return owns the
        // debt field.
        member.debt = fee;
    }
    book.status = BookStatus::Available;

    info!(member = %member.email, isbn = %book.isbn, late_days, fee, "book returned");
    Ok(ReturnReceipt {
        member_email: member.email.clone(),
        isbn: book.isbn.clone(),
        returned_on: today,
        late_days,
        fee,
    })
}

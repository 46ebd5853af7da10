//! Domain models shared by the record stores and the lending engine. The
//! intent is that these types stay light-weight data holders so other layers
//! can focus on lookup policy and lending rules. Keeping the commentary here
//! means later refactors can reconstruct the assumptions even if other
//! context is lost.

use std::fmt;

use chrono::{Months, NaiveDate};

/// Lending availability of a catalog entry. A book is `Unavailable` exactly
/// while one active loan references it anywhere in the system; the lending
/// engine is the only writer of this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookStatus {
    /// On the shelf and eligible for checkout.
    Available,
    /// Currently out on loan.
    Unavailable,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "AVAILABLE"),
            Self::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

#[derive(Debug, Clone)]
/// A single catalog entry. Identity is the normalized ISBN; the catalog
/// guarantees at most one book per normalized ISBN.
pub struct Book {
    /// Title displayed in listings and matched by the substring search.
    pub title: String,
    /// Author field, display-only.
    pub author: String,
    /// Normalized ISBN (hyphens and spaces stripped, uppercased). The
    /// catalog stores it pre-normalized so lookups never have to touch the
    /// stored side again.
    pub isbn: String,
    /// Current lending state. New books start `Available`.
    pub status: BookStatus,
}

impl Book {
    /// Build a fresh entry. The caller is expected to pass an already
    /// normalized ISBN; `Catalog::create` takes care of that.
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status: BookStatus::Available,
        }
    }
}

impl fmt::Display for Book {
    /// Multi-line card used by the shell's listing and search screens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\nAuthor: {}\nISBN: {}\nStatus: {}\n-----------------------------",
            self.title, self.author, self.isbn, self.status
        )
    }
}

#[derive(Debug, Clone)]
/// A registered borrower. Identity is the email address, compared exactly
/// (case-sensitive) by the roster.
pub struct Member {
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Unique identifier within the roster.
    pub email: String,
    /// Mobile phone number, kept as raw text.
    pub phone: String,
    /// Postal address, display-only.
    pub address: String,
    /// Every loan this member ever took, in checkout order. Append-only:
    /// returned loans stay here with their `return_date` filled in.
    pub loans: Vec<Loan>,
    /// Outstanding late fee in whole currency units. Written only by the
    /// lending engine, and overwritten (not accumulated) by the most recent
    /// overdue return.
    pub debt: i64,
}

impl Member {
    /// Register-time constructor: no loans, no debt.
    pub fn new(name: &str, surname: &str, email: &str, phone: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            loans: Vec::new(),
            debt: 0,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " Name: {}\nSurname: {}\nEmail: {}\nMobile Phone Number: {}\nAddress: {}\nDebt: {}\n-----------------------------",
            self.name, self.surname, self.email, self.phone, self.address, self.debt
        )
    }
}

#[derive(Debug, Clone)]
/// One lending transaction. Loans reference both parties by key (email and
/// normalized ISBN) rather than holding the records themselves, so a loan
/// can never dangle; resolution always goes back through the owning store.
pub struct Loan {
    /// Email of the borrowing member.
    pub member_email: String,
    /// Normalized ISBN of the borrowed book.
    pub isbn: String,
    /// Day the checkout happened.
    pub loan_date: NaiveDate,
    /// `loan_date` plus one calendar month, clamped to the end of the month
    /// when the same day does not exist (Jan 31 -> Feb 28/29).
    pub due_date: NaiveDate,
    /// Set once, when the book comes back. `None` marks the loan active.
    pub return_date: Option<NaiveDate>,
}

impl Loan {
    /// Open a loan starting on `loan_date`. Only the lending engine creates
    /// loans, as part of a successful checkout.
    pub(crate) fn new(member_email: &str, isbn: &str, loan_date: NaiveDate) -> Self {
        Self {
            member_email: member_email.to_string(),
            isbn: isbn.to_string(),
            loan_date,
            due_date: loan_date + Months::new(1),
            return_date: None,
        }
    }

    /// A loan is active until its return date is recorded.
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }
}

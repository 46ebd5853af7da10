use thiserror::Error;

/// Declined lending operations. Every variant is an expected business
/// outcome returned as a value: the entity state is unchanged and the caller
/// may retry after correcting its input. Nothing here is fatal to the
/// process, so the shell just prints the message and goes back to the menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// The caller failed to resolve one of the two parties and passed `None`
    /// through. Lookup policy lives outside the engine, so this is the only
    /// shape "not found" takes in here.
    #[error("invalid member or book")]
    UnresolvedParty,

    /// Checkout requested for a book that is not on the shelf.
    #[error("book {isbn} is already checked out")]
    AlreadyCheckedOut {
        /// Normalized ISBN of the contested book.
        isbn: String,
    },

    /// Return requested for a book that is not out on loan.
    #[error("book {isbn} is not checked out")]
    NotCheckedOut {
        /// Normalized ISBN of the book.
        isbn: String,
    },

    /// The book claims `Unavailable` but the member holds no active loan for
    /// it. This is a data-consistency anomaly; it is surfaced to the caller
    /// rather than silently repaired.
    #[error("no active loan found for book {isbn}")]
    NoActiveLoan {
        /// Normalized ISBN of the book.
        isbn: String,
    },
}

//! Core library surface for the library lending manager.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces: the record stores, the pure ISBN validator, and the lending
//! engine. Keeping the glue logic documented makes it easy to recall why
//! each re-export exists when revisiting the project.

pub mod error;
pub mod isbn;
pub mod lending;
pub mod models;
pub mod shell;
pub mod store;

/// The typed business-failure values the lending engine reports.
pub use error::LendingError;

/// The lending state machine and its receipt types.
pub use lending::{check_out, return_book, CheckoutReceipt, ReturnReceipt, LATE_FEE_PER_DAY};

/// The domain types other layers manipulate.
pub use models::{Book, BookStatus, Loan, Member};

/// The interactive application entry point and state container.
pub use shell::Shell;

/// The two record stores; whoever composes the system owns them explicitly.
pub use store::{Catalog, MemberRoster};

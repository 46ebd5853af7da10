//! In-memory record stores split across logical submodules. Each store is a
//! plain owned collection with no interior locking; the composition root
//! constructs them explicitly and the lending engine only ever sees handles
//! the caller resolved through them.

mod catalog;
mod members;

pub use catalog::Catalog;
pub use members::MemberRoster;

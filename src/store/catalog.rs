use std::collections::HashSet;

use tracing::debug;

use crate::isbn;
use crate::models::Book;

/// Owns every book record in the system, in insertion order, plus the set of
/// normalized ISBNs backing the uniqueness reservation. Books are never
/// deleted; the only field that changes after insertion is `status`, and
/// only through the mutable handle the lending engine receives.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    isbns: HashSet<String>,
}

impl Catalog {
    /// An empty catalog. Stores are built by whoever composes the system;
    /// there is no ambient instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a normalized ISBN before the book itself exists. Returns true
    /// iff the ISBN was not already reserved, regardless of how the raw
    /// input was hyphenated or cased. Callers validate the format first,
    /// then reserve, then `create`.
    pub fn reserve_isbn(&mut self, raw: &str) -> bool {
        let normalized = isbn::normalize(raw);
        if self.isbns.contains(&normalized) {
            debug!(isbn = %normalized, "isbn already reserved");
            return false;
        }
        self.isbns.insert(normalized);
        true
    }

    /// Store a new book with status `Available`. Format validation and the
    /// uniqueness reservation already happened on the caller's side; this
    /// does not re-check either.
    pub fn create(&mut self, title: &str, author: &str, raw_isbn: &str) {
        let book = Book::new(title, author, &isbn::normalize(raw_isbn));
        debug!(isbn = %book.isbn, title = %book.title, "book added to catalog");
        self.books.push(book);
    }

    /// Exact lookup by normalized ISBN.
    pub fn find_by_isbn(&self, raw: &str) -> Option<&Book> {
        let needle = isbn::normalize(raw);
        self.books.iter().find(|book| book.isbn == needle)
    }

    /// Mutable variant of [`find_by_isbn`](Self::find_by_isbn), used by the
    /// shell to hand the lending engine a book it can flip the status on.
    pub fn find_by_isbn_mut(&mut self, raw: &str) -> Option<&mut Book> {
        let needle = isbn::normalize(raw);
        self.books.iter_mut().find(|book| book.isbn == needle)
    }

    /// Case-insensitive substring search over titles, preserving insertion
    /// order. An empty result is a normal outcome, not an error.
    pub fn find_by_title(&self, title: &str) -> Vec<&Book> {
        let needle = title.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Every book, in insertion order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }
}

//! Line-oriented menu shell. This layer owns all console I/O and nothing
//! else: it validates and uppercases ISBNs on the way in, resolves book and
//! member handles through the stores, hands those handles to the lending
//! engine, and translates receipts and declined operations back to text.
//! None of the lending invariants live here.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};

use crate::isbn;
use crate::lending;
use crate::store::{Catalog, MemberRoster};

/// Owns the two stores and drives the menu loop. Constructed once in `main`;
/// there is no ambient or global instance of anything.
#[derive(Debug, Default)]
pub struct Shell {
    catalog: Catalog,
    roster: MemberRoster,
}

impl Shell {
    /// A shell over freshly constructed, empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the menu until the user picks exit. Only I/O faults (stdin
    /// closing, stdout failing) escape as errors; every business outcome is
    /// printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        println!("Welcome to the Library Management System!");

        loop {
            print_menu();
            match prompt("Enter your choice: ")?.as_str() {
                "1" => self.add_book()?,
                "2" => self.display_books(),
                "3" => self.search_book_by_title()?,
                "4" => self.search_book_by_isbn()?,
                "5" => self.add_member()?,
                "6" => self.display_members(),
                "7" => self.search_member_by_email()?,
                "8" => self.check_out_book()?,
                "9" => self.return_book()?,
                "10" => {
                    println!("Thank you for using the Library Management System!");
                    return Ok(());
                }
                _ => println!("Invalid selection. Please enter a number between 1 and 10."),
            }
        }
    }

    /// Validate format, reserve the ISBN, then construct: the ordering is
    /// deliberate so a duplicate or malformed ISBN never mutates the catalog.
    fn add_book(&mut self) -> Result<()> {
        let title = prompt("Enter book title: ")?;
        let author = prompt("Enter author name: ")?;
        let raw_isbn = prompt("Enter ISBN: ")?.to_uppercase();

        if !isbn::validate(&raw_isbn) {
            println!("Invalid ISBN format!");
        } else if !self.catalog.reserve_isbn(&raw_isbn) {
            println!("This ISBN is already registered!");
        } else {
            self.catalog.create(&title, &author, &raw_isbn);
            println!("Book added successfully!");
        }
        Ok(())
    }

    fn display_books(&self) {
        println!("\n ******** All Books ********");
        println!("-----------------------------");
        if self.catalog.list().is_empty() {
            println!("No books are currently available in the library.");
            return;
        }
        for book in self.catalog.list() {
            println!("{book}");
        }
    }

    fn search_book_by_title(&self) -> Result<()> {
        let title = prompt("Enter book title to search: ")?;

        println!("\nFound Books: ");
        println!("-----------------------------");
        let matches = self.catalog.find_by_title(&title);
        if matches.is_empty() {
            println!("No books found containing the title: {title}");
        } else {
            for book in matches {
                println!("{book}");
            }
        }
        Ok(())
    }

    fn search_book_by_isbn(&self) -> Result<()> {
        let raw_isbn = prompt("Enter the ISBN of the book to search: ")?.to_uppercase();

        if !isbn::validate(&raw_isbn) {
            println!("Invalid ISBN format!");
            return Ok(());
        }

        println!("\nFound Books: ");
        println!("-----------------------------");
        match self.catalog.find_by_isbn(&raw_isbn) {
            Some(book) => println!("{book}"),
            None => println!("No book found with the ISBN: {}", isbn::normalize(&raw_isbn)),
        }
        Ok(())
    }

    fn add_member(&mut self) -> Result<()> {
        let name = prompt("Enter name: ")?;
        let surname = prompt("Enter surname: ")?;
        let email = prompt("Enter email: ")?;
        let phone = prompt("Enter mobile phone number: ")?;
        let address = prompt("Enter address: ")?;

        if self.roster.create(&name, &surname, &email, &phone, &address) {
            println!("Member successfully added!");
        } else {
            println!("Email already registered!");
        }
        Ok(())
    }

    fn display_members(&self) {
        println!("\n******** All Members ********");
        println!("-----------------------------");
        if self.roster.list().is_empty() {
            println!("No members found.");
            return;
        }
        for member in self.roster.list() {
            println!("{member}");
        }
    }

    fn search_member_by_email(&self) -> Result<()> {
        let email = prompt("Enter email to search: ")?;

        println!("\nFound Member: ");
        println!("-----------------------------");
        match self.roster.find_by_email(&email) {
            Some(member) => println!("{member}"),
            None => println!("No members found with email: {email}"),
        }
        Ok(())
    }

    /// Resolve-then-act: both lookups happen here, and the engine only ever
    /// sees the resolved handles (or `None` when a lookup missed).
    fn check_out_book(&mut self) -> Result<()> {
        let email = prompt("Enter the email of member: ")?;
        let raw_isbn = prompt("Enter the ISBN of the book you want to check out: ")?.to_uppercase();

        if !isbn::validate(&raw_isbn) {
            println!("Invalid ISBN format!");
            return Ok(());
        }

        let book = self.catalog.find_by_isbn_mut(&raw_isbn);
        let member = self.roster.find_by_email_mut(&email);
        match lending::check_out(member, book, today()) {
            Ok(receipt) => println!(
                "Book successfully checked out to member: {}",
                receipt.member_email
            ),
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    fn return_book(&mut self) -> Result<()> {
        let email = prompt("Enter the email of member: ")?;
        let raw_isbn = prompt("Enter the ISBN of the book you want to return: ")?.to_uppercase();

        if !isbn::validate(&raw_isbn) {
            println!("Invalid ISBN format!");
            return Ok(());
        }

        let book = self.catalog.find_by_isbn_mut(&raw_isbn);
        let member = self.roster.find_by_email_mut(&email);
        match lending::return_book(book, member, today()) {
            Ok(receipt) => {
                if receipt.was_late() {
                    println!(
                        "You are late by {} days. Your debt is: {}",
                        receipt.late_days, receipt.fee
                    );
                }
                println!("Book returned successfully!");
            }
            Err(err) => println!("{err}"),
        }
        Ok(())
    }
}

/// The system clock is read once per operation, right before the engine
/// call; the engine itself only ever sees the value.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_menu() {
    print!(
        "\nPlease select an option: \
         \n1. Add a new book\
         \n2. Display all books\
         \n3. Search for a book by title\
         \n4. Search for a book by ISBN\
         \n5. Add a new member\
         \n6. Display all members\
         \n7. Search for a member by email\
         \n8. Check out a book\
         \n9. Return a book\
         \n10. Exit\n"
    );
}

/// Print a prompt and read one trimmed line. A closed stdin is a fault, not
/// a menu choice, so it bubbles up and ends the program.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

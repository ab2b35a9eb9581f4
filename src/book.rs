use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    edition::{Edition, EditionKind, Nameable, Paginated, Printable},
    error::LibraryError,
    observers::{PrintChannel, PrintObserver},
};

/// A book: a print edition with an optional author
#[derive(Debug, Deserialize, Serialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    /// Title of the book
    name: Option<String>,
    /// Page count, validated at construction
    pages: u32,
    /// Author of the book
    author: Option<String>,
    /// Observers of print notifications
    #[serde(skip)]
    prints: PrintChannel,
}

/// Unvalidated book fields as they appear in a snapshot
#[derive(Debug, Deserialize)]
struct BookRecord {
    /// Title of the book
    name: Option<String>,
    /// Raw page count
    pages: i32,
    /// Author of the book
    author: Option<String>,
}

impl Book {
    /// Create a book
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidArgument` if `pages < 1`.
    pub fn new(name: Option<String>, pages: i32, author: Option<String>) -> Result<Self, LibraryError> {
        let pages = LibraryError::require_positive("pages", pages)?;
        Ok(Self { name, pages, author, prints: PrintChannel::default() })
    }

    /// The author, if known
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = LibraryError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.pages, record.author)
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pages == other.pages && self.author == other.author
    }
}

impl Nameable for Book {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

impl Paginated for Book {
    fn pages(&self) -> u32 {
        self.pages
    }
}

impl Printable for Book {
    fn print(&self) {
        self.prints.notify(self);
    }

    fn subscribe_print(&mut self, observer: Box<dyn PrintObserver>) {
        self.prints.subscribe(observer);
    }
}

impl Edition for Book {
    fn kind(&self) -> EditionKind {
        EditionKind::Book
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}; pages={}; author={}",
            self.name.as_deref().unwrap_or_default(),
            self.pages,
            self.author.as_deref().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::*;

    #[test]
    fn test_valid_pages_read_back() -> Result<(), LibraryError> {
        for pages in [1, 2, 99, 100, 5000] {
            let book = Book::new(Some("Alpha".to_string()), pages, None)?;
            assert_eq!(i64::from(book.pages()), i64::from(pages));
        }
        Ok(())
    }

    #[test]
    fn test_invalid_pages_rejected() {
        for pages in [0, -1, -10] {
            let result = Book::new(Some("Alpha".to_string()), pages, Some("Anon".to_string()));
            assert!(matches!(
                result,
                Err(LibraryError::InvalidArgument { field: "pages", value }) if value == pages
            ));
        }
    }

    #[test]
    fn test_display() -> Result<(), LibraryError> {
        let book = Book::new(Some("Alpha".to_string()), 5, Some("Zed".to_string()))?;
        assert_eq!(book.to_string(), "name=Alpha; pages=5; author=Zed");

        let anonymous = Book::new(None, 7, None)?;
        assert_eq!(anonymous.to_string(), "name=; pages=7; author=");
        Ok(())
    }

    #[test]
    fn test_name_is_mutable() -> Result<(), LibraryError> {
        let mut book = Book::new(Some("Draft".to_string()), 10, Some("Kim".to_string()))?;
        book.set_name(Some("Final".to_string()));

        assert_eq!(book.name(), Some("Final"));
        assert_eq!(book.author(), Some("Kim"));
        Ok(())
    }

    #[test]
    fn test_print_notifies_each_observer_once() -> Result<(), LibraryError> {
        let count = Rc::new(Cell::new(0_u32));
        let mut book = Book::new(Some("Alpha".to_string()), 5, None)?;

        for _ in 0..3 {
            let count = Rc::clone(&count);
            book.subscribe_print(Box::new(move |_: &dyn Edition| count.set(count.get().saturating_add(1))));
        }
        book.print();

        assert_eq!(count.get(), 3);
        Ok(())
    }

    #[test]
    fn test_print_notifies_in_registration_order() -> Result<(), LibraryError> {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut book = Book::new(Some("Alpha".to_string()), 5, None)?;

        for id in 0..3_u8 {
            let order = Rc::clone(&order);
            book.subscribe_print(Box::new(move |edition: &dyn Edition| {
                order.borrow_mut().push((id, edition.name().map(str::to_string)));
            }));
        }
        book.print();

        let alpha = Some("Alpha".to_string());
        assert_eq!(*order.borrow(), vec![(0, alpha.clone()), (1, alpha.clone()), (2, alpha)]);
        Ok(())
    }

    #[test]
    fn test_equality_ignores_observers() -> Result<(), LibraryError> {
        let plain = Book::new(Some("Alpha".to_string()), 5, None)?;
        let mut observed = Book::new(Some("Alpha".to_string()), 5, None)?;
        observed.subscribe_print(Box::new(|_: &dyn Edition| {}));

        assert_eq!(plain, observed);
        Ok(())
    }

    #[test]
    fn test_deserialize_validates_pages() {
        let result: Result<Book, _> = serde_json::from_str(r#"{"name":"Alpha","pages":0,"author":null}"#);
        assert!(result.is_err());

        let result: Result<Book, _> = serde_json::from_str(r#"{"name":"Alpha","pages":3}"#);
        assert!(matches!(result, Ok(ref book) if book.pages() == 3 && book.author().is_none()));
    }
}

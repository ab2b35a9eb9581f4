use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{book::Book, magazine::Magazine, observers::PrintObserver};

/// Which variant an edition is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditionKind {
    /// A book with an author
    Book,
    /// A periodical with a publication period
    Magazine,
}

/// Something that carries an optional name
pub trait Nameable {
    /// The name, if one was given
    fn name(&self) -> Option<&str>;

    /// Replace the name
    fn set_name(&mut self, name: Option<String>);

    /// First character of the name, if the name is present and non-empty
    fn first_letter(&self) -> Option<char> {
        self.name().and_then(|name| name.chars().next())
    }
}

/// Something with a validated page count
pub trait Paginated {
    /// Number of pages, always at least 1
    fn pages(&self) -> u32;
}

/// Something that can be printed, notifying its observers
pub trait Printable {
    /// Notify every print observer, in registration order
    fn print(&self);

    /// Register an observer for print notifications
    fn subscribe_print(&mut self, observer: Box<dyn PrintObserver>);
}

/// The full capability set an item needs to be held by a [`Library`](crate::Library)
pub trait Edition: Nameable + Paginated + Printable + fmt::Display {
    /// The variant of this edition
    fn kind(&self) -> EditionKind;

    /// Whether this edition is a book
    fn is_book(&self) -> bool {
        self.kind() == EditionKind::Book
    }
}

/// A book or a magazine
#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum PrintEdition {
    /// A book
    Book(Book),
    /// A magazine
    Magazine(Magazine),
}

impl PrintEdition {
    /// The inner book, if this is one
    #[must_use]
    pub fn as_book(&self) -> Option<&Book> {
        match self {
            Self::Book(book) => Some(book),
            Self::Magazine(_) => None,
        }
    }

    /// The inner magazine, if this is one
    #[must_use]
    pub fn as_magazine(&self) -> Option<&Magazine> {
        match self {
            Self::Book(_) => None,
            Self::Magazine(magazine) => Some(magazine),
        }
    }
}

impl From<Book> for PrintEdition {
    fn from(book: Book) -> Self {
        Self::Book(book)
    }
}

impl From<Magazine> for PrintEdition {
    fn from(magazine: Magazine) -> Self {
        Self::Magazine(magazine)
    }
}

impl Nameable for PrintEdition {
    fn name(&self) -> Option<&str> {
        match self {
            Self::Book(book) => book.name(),
            Self::Magazine(magazine) => magazine.name(),
        }
    }

    fn set_name(&mut self, name: Option<String>) {
        match self {
            Self::Book(book) => book.set_name(name),
            Self::Magazine(magazine) => magazine.set_name(name),
        }
    }
}

impl Paginated for PrintEdition {
    fn pages(&self) -> u32 {
        match self {
            Self::Book(book) => book.pages(),
            Self::Magazine(magazine) => magazine.pages(),
        }
    }
}

impl Printable for PrintEdition {
    fn print(&self) {
        match self {
            Self::Book(book) => book.print(),
            Self::Magazine(magazine) => magazine.print(),
        }
    }

    fn subscribe_print(&mut self, observer: Box<dyn PrintObserver>) {
        match self {
            Self::Book(book) => book.subscribe_print(observer),
            Self::Magazine(magazine) => magazine.subscribe_print(observer),
        }
    }
}

impl Edition for PrintEdition {
    fn kind(&self) -> EditionKind {
        match self {
            Self::Book(_) => EditionKind::Book,
            Self::Magazine(_) => EditionKind::Magazine,
        }
    }
}

impl fmt::Display for PrintEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book(book) => fmt::Display::fmt(book, f),
            Self::Magazine(magazine) => fmt::Display::fmt(magazine, f),
        }
    }
}

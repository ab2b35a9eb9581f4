use std::fmt;

use crate::{
    cursor::LibraryCursor,
    edition::{Edition, EditionKind},
    observers::{TakeChannel, TakeObserver},
};

/// An ordered collection of print editions
///
/// Alongside its items the library keeps the first letter of every book it
/// holds, in insertion order. Books without a name (or with an empty one)
/// contribute `None`, so there is exactly one entry per book. The index is
/// updated by every mutating operation and cannot be written directly.
pub struct Library<T> {
    /// Held editions in insertion order
    items: Vec<T>,
    /// First letter of each held book, in insertion order
    first_letters_of_books: Vec<Option<char>>,
    /// Observers notified after books are taken
    takes: TakeChannel,
}

// Manual implementation of Debug for Library
impl<T: fmt::Debug> fmt::Debug for Library<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("items", &self.items)
            .field("first_letters_of_books", &self.first_letters_of_books)
            .field("takes", &self.takes)
            .finish()
    }
}

impl<T: Edition> Default for Library<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Edition> Library<T> {
    /// Create an empty library
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty library with room for `capacity` editions
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            first_letters_of_books: Vec::with_capacity(capacity.div_ceil(2)),
            takes: TakeChannel::default(),
        }
    }

    /// Append an edition, indexing its first letter if it is a book
    pub fn add(&mut self, item: T) {
        if item.is_book() {
            self.first_letters_of_books.push(item.first_letter());
        }
        tracing::debug!(kind = ?item.kind(), %item, "edition added");
        self.items.push(item);
    }

    /// Remove every book whose name starts with `start`
    ///
    /// Matching entries are dropped from the first-letter index as well, then
    /// take observers are notified with `start`, even when nothing matched.
    /// Returns the number of books removed.
    pub fn take_books(&mut self, start: char) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !(item.is_book() && item.first_letter() == Some(start)));
        self.first_letters_of_books.retain(|letter| *letter != Some(start));

        let taken = before.saturating_sub(self.items.len());
        tracing::info!(%start, taken, remaining = self.items.len(), "took books");

        self.takes.notify(start);
        taken
    }

    /// Register an observer for take notifications
    pub fn subscribe_take(&mut self, observer: Box<dyn TakeObserver>) {
        self.takes.subscribe(observer);
    }

    /// Mean page count of the held books, `0.0` if there are none
    #[must_use]
    pub fn average_book_pages(&self) -> f64 {
        self.average_pages_of(EditionKind::Book)
    }

    /// Mean page count of the held magazines, `0.0` if there are none
    #[must_use]
    pub fn average_magazine_pages(&self) -> f64 {
        self.average_pages_of(EditionKind::Magazine)
    }

    /// Mean page count over editions of one kind
    #[allow(clippy::arithmetic_side_effects)]
    fn average_pages_of(&self, kind: EditionKind) -> f64 {
        let (total, count) = self
            .items
            .iter()
            .filter(|item| item.kind() == kind)
            .fold((0.0_f64, 0_u32), |(total, count), item| {
                (total + f64::from(item.pages()), count.saturating_add(1))
            });

        if count == 0 { 0.0 } else { total / f64::from(count) }
    }

    /// Sum of the page counts of all held editions
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.pages())).sum()
    }

    /// First letters of the held books, one entry per book
    #[must_use]
    pub fn first_letters_of_books(&self) -> &[Option<char>] {
        &self.first_letters_of_books
    }

    /// The held editions in insertion order
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The edition at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of held editions
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the library holds no editions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A fresh cursor positioned before the first edition
    #[must_use]
    pub fn iter(&self) -> LibraryCursor<'_, T> {
        LibraryCursor::new(&self.items)
    }
}

impl<T: Edition> Extend<T> for Library<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Edition> FromIterator<T> for Library<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut library = Self::new();
        library.extend(iter);
        library
    }
}

impl<'a, T: Edition> IntoIterator for &'a Library<T> {
    type Item = &'a T;
    type IntoIter = LibraryCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// `Overall pages = <sum>` header, then one line per item
impl<T: Edition> fmt::Display for Library<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Overall pages = {}", self.total_pages())?;
        for item in self {
            write!(f, "\n{item}")?;
        }
        Ok(())
    }
}

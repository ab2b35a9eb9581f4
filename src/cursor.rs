//! Sequential, restartable cursor over the items of a library.

use std::iter::FusedIterator;

/// Position of a [`LibraryCursor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// `move_next` has not been called since creation or the last reset
    NotStarted,
    /// Positioned on the item at this index
    InProgress(usize),
    /// Walked past the last item
    Exhausted,
}

/// Forward-only cursor over a library's items in insertion order
///
/// The cursor starts before the first item. Each [`move_next`](Self::move_next)
/// advances it by one, and [`reset`](Self::reset) puts it back at the start.
/// It also works as a plain [`Iterator`].
#[derive(Debug, Clone)]
pub struct LibraryCursor<'a, T> {
    /// The items being walked
    items: &'a [T],
    /// Current position
    state: CursorState,
}

impl<'a, T> LibraryCursor<'a, T> {
    /// Create a cursor positioned before the first item
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self { items, state: CursorState::NotStarted }
    }

    /// Advance to the next item
    ///
    /// Returns `true` if the cursor now sits on an item and `false` once the
    /// items are used up. After `false` the cursor stays exhausted until reset.
    pub fn move_next(&mut self) -> bool {
        let next = match self.state {
            CursorState::NotStarted => Some(0),
            CursorState::InProgress(index) => index.checked_add(1),
            CursorState::Exhausted => None,
        };

        self.state = match next {
            Some(index) if index < self.items.len() => CursorState::InProgress(index),
            _ => CursorState::Exhausted,
        };

        matches!(self.state, CursorState::InProgress(_))
    }

    /// The item under the cursor, defined only while in progress
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        match self.state {
            CursorState::InProgress(index) => self.items.get(index),
            CursorState::NotStarted | CursorState::Exhausted => None,
        }
    }

    /// Move back before the first item
    pub fn reset(&mut self) {
        self.state = CursorState::NotStarted;
    }

    /// Current position
    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }
}

impl<'a, T> Iterator for LibraryCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.move_next() { self.current() } else { None }
    }
}

impl<T> FusedIterator for LibraryCursor<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_undefined_before_first_move() {
        let items = [1, 2, 3];
        let cursor = LibraryCursor::new(&items);

        assert_eq!(cursor.state(), CursorState::NotStarted);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_n_moves_then_exhausted() {
        let items = ['a', 'b', 'c'];
        let mut cursor = LibraryCursor::new(&items);

        for expected in &items {
            assert!(cursor.move_next());
            assert_eq!(cursor.current(), Some(expected));
        }

        assert!(!cursor.move_next());
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert_eq!(cursor.current(), None);

        // Stays exhausted
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_reset_restarts_from_first_item() {
        let items = [10, 20];
        let mut cursor = LibraryCursor::new(&items);

        assert!(cursor.move_next());
        assert!(cursor.move_next());
        assert!(!cursor.move_next());

        cursor.reset();
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&10));
    }

    #[test]
    fn test_empty_items() {
        let items: [u8; 0] = [];
        let mut cursor = LibraryCursor::new(&items);

        assert!(!cursor.move_next());
        assert_eq!(cursor.state(), CursorState::Exhausted);
    }

    #[test]
    fn test_iterator_adapter() {
        let items = [1, 2, 3];
        let collected: Vec<_> = LibraryCursor::new(&items).copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}

//! Random print editions.
//!
//! Pages and periods are drawn from a range that includes zero and negative
//! values, so some draws fail validation. Callers decide whether to retry.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{book::Book, edition::PrintEdition, error::LibraryError, magazine::Magazine};

/// Range of raw page counts and periods
pub const NUMBER_RANGE: RangeInclusive<i32> = -10..=100;

/// Range of generated name lengths
pub const NAME_LENGTH: RangeInclusive<usize> = 1..=10;

/// Produces random names and editions
#[derive(Debug)]
pub struct EditionGenerator<R> {
    /// Source of randomness
    rng: R,
}

impl EditionGenerator<StdRng> {
    /// Generator with a fixed seed, for reproducible runs
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> EditionGenerator<R> {
    /// Wrap an existing random source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A capitalised name: one uppercase ASCII letter, then lowercase ones
    pub fn random_name(&mut self) -> String {
        let length = self.rng.random_range(NAME_LENGTH);
        let mut name = String::with_capacity(length);

        name.push(char::from(self.rng.random_range(b'A'..=b'Z')));
        for _ in 1..length {
            name.push(char::from(self.rng.random_range(b'a'..=b'z')));
        }

        name
    }

    /// A raw page count or period, possibly invalid
    pub fn random_number(&mut self) -> i32 {
        self.rng.random_range(NUMBER_RANGE)
    }

    /// Draw one edition, a book or a magazine with equal odds
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidArgument` when the drawn page count or
    /// period is below 1.
    pub fn try_edition(&mut self) -> Result<PrintEdition, LibraryError> {
        let pages = self.random_number();
        let name = Some(self.random_name());

        if self.rng.random_bool(0.5) {
            let author = Some(self.random_name());
            Ok(Book::new(name, pages, author)?.into())
        } else {
            let period = self.random_number();
            Ok(Magazine::new(name, pages, period)?.into())
        }
    }

    /// Pick one element of `choices` uniformly
    pub fn choose<T: Copy>(&mut self, choices: &[T]) -> Option<T> {
        if choices.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..choices.len());
        choices.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edition::{Nameable, Paginated};

    #[test]
    fn test_random_name_shape() {
        let mut generator = EditionGenerator::seeded(7);

        for _ in 0..200 {
            let name = generator.random_name();
            let mut chars = name.chars();

            assert!(NAME_LENGTH.contains(&name.len()), "bad length: {name}");
            assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()), "bad head: {name}");
            assert!(chars.all(|c| c.is_ascii_lowercase()), "bad tail: {name}");
        }
    }

    #[test]
    fn test_numbers_stay_in_range() {
        let mut generator = EditionGenerator::seeded(11);
        for _ in 0..500 {
            assert!(NUMBER_RANGE.contains(&generator.random_number()));
        }
    }

    #[test]
    fn test_same_seed_same_names() {
        let mut first = EditionGenerator::seeded(42);
        let mut second = EditionGenerator::seeded(42);

        for _ in 0..20 {
            assert_eq!(first.random_name(), second.random_name());
        }
    }

    #[test]
    #[allow(clippy::panic)]
    fn test_editions_are_valid_or_rejected() {
        let mut generator = EditionGenerator::seeded(3);
        let (mut built, mut rejected) = (0_u32, 0_u32);

        for _ in 0..500 {
            match generator.try_edition() {
                Ok(edition) => {
                    assert!(edition.pages() >= 1);
                    assert!(edition.name().is_some());
                    if let Some(magazine) = edition.as_magazine() {
                        assert!(magazine.period() >= 1);
                    }
                    built = built.saturating_add(1);
                }
                Err(LibraryError::InvalidArgument { value, .. }) => {
                    assert!(value < 1);
                    rejected = rejected.saturating_add(1);
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert!(built > 0);
        assert!(rejected > 0);
    }

    #[test]
    fn test_choose() {
        let mut generator = EditionGenerator::seeded(5);

        assert_eq!(generator.choose::<char>(&[]), None);
        assert_eq!(generator.choose(&['X']), Some('X'));

        let letters = ['A', 'B', 'C'];
        for _ in 0..50 {
            assert!(generator.choose(&letters).is_some_and(|c| letters.contains(&c)));
        }
    }
}

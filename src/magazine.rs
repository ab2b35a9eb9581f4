use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    edition::{Edition, EditionKind, Nameable, Paginated, Printable},
    error::LibraryError,
    observers::{PrintChannel, PrintObserver},
};

/// A magazine: a print edition published every `period` units
#[derive(Debug, Deserialize, Serialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    /// Title of the magazine
    name: Option<String>,
    /// Page count, validated at construction
    pages: u32,
    /// Publication period, validated at construction
    period: u32,
    /// Observers of print notifications
    #[serde(skip)]
    prints: PrintChannel,
}

/// Unvalidated magazine fields as they appear in a snapshot
#[derive(Debug, Deserialize)]
struct MagazineRecord {
    /// Title of the magazine
    name: Option<String>,
    /// Raw page count
    pages: i32,
    /// Raw publication period
    period: i32,
}

impl Magazine {
    /// Create a magazine
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidArgument` if `pages < 1` or `period < 1`.
    pub fn new(name: Option<String>, pages: i32, period: i32) -> Result<Self, LibraryError> {
        let pages = LibraryError::require_positive("pages", pages)?;
        let period = LibraryError::require_positive("period", period)?;
        Ok(Self { name, pages, period, prints: PrintChannel::default() })
    }

    /// Publication period
    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = LibraryError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.pages, record.period)
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pages == other.pages && self.period == other.period
    }
}

impl Nameable for Magazine {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

impl Paginated for Magazine {
    fn pages(&self) -> u32 {
        self.pages
    }
}

impl Printable for Magazine {
    fn print(&self) {
        self.prints.notify(self);
    }

    fn subscribe_print(&mut self, observer: Box<dyn PrintObserver>) {
        self.prints.subscribe(observer);
    }
}

impl Edition for Magazine {
    fn kind(&self) -> EditionKind {
        EditionKind::Magazine
    }
}

impl fmt::Display for Magazine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}; pages={}; period={}",
            self.name.as_deref().unwrap_or_default(),
            self.pages,
            self.period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_read_back() -> Result<(), LibraryError> {
        let magazine = Magazine::new(Some("Any".to_string()), 5, 2)?;
        assert_eq!(magazine.pages(), 5);
        assert_eq!(magazine.period(), 2);
        assert_eq!(magazine.name(), Some("Any"));
        Ok(())
    }

    #[test]
    fn test_invalid_period_rejected() {
        for period in [0, -1, -10] {
            let result = Magazine::new(Some("Any".to_string()), 5, period);
            assert!(matches!(
                result,
                Err(LibraryError::InvalidArgument { field: "period", value }) if value == period
            ));
        }
    }

    #[test]
    fn test_pages_checked_before_period() {
        let result = Magazine::new(None, 0, 0);
        assert!(matches!(result, Err(LibraryError::InvalidArgument { field: "pages", .. })));
    }

    #[test]
    fn test_display() -> Result<(), LibraryError> {
        let magazine = Magazine::new(Some("Any".to_string()), 5, 2)?;
        assert_eq!(magazine.to_string(), "name=Any; pages=5; period=2");
        Ok(())
    }

    #[test]
    fn test_deserialize_validates_period() {
        let result: Result<Magazine, _> = serde_json::from_str(r#"{"name":"Any","pages":5,"period":-4}"#);
        assert!(result.is_err());
    }
}

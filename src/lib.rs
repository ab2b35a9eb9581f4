//! A library of print editions.
//!
//! This crate models books and magazines held in an ordered, typed
//! collection. The collection keeps a derived index of the first letters of
//! its books, answers a few aggregate queries, removes books by first letter
//! and notifies observers when editions are printed or books are taken.
//! Libraries can be snapshotted to JSON and restored.

pub mod app;
pub mod book;
pub mod config;
pub mod cursor;
pub mod edition;
pub mod error;
pub mod generator;
pub mod library;
pub mod magazine;
pub mod observers;
pub mod persistence;

pub use book::Book;
pub use config::Config;
pub use cursor::{CursorState, LibraryCursor};
pub use edition::{Edition, EditionKind, Nameable, Paginated, PrintEdition, Printable};
pub use error::LibraryError;
pub use library::Library;
pub use magazine::Magazine;
pub use observers::{NoticeBoard, PrintLogger, PrintObserver, TakeLogger, TakeObserver};

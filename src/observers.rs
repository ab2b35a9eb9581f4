use std::{cell::RefCell, fmt, rc::Rc};

use crate::edition::Edition;

/// Trait for print notification observers
pub trait PrintObserver {
    /// Called when an edition is printed
    fn on_print(&self, edition: &dyn Edition);
}

impl<F> PrintObserver for F
where
    F: Fn(&dyn Edition),
{
    fn on_print(&self, edition: &dyn Edition) {
        self(edition);
    }
}

/// Trait for observers of books being taken from a library
pub trait TakeObserver {
    /// Called after books starting with `start` were removed
    fn on_take(&self, start: char);
}

impl<F> TakeObserver for F
where
    F: Fn(char),
{
    fn on_take(&self, start: char) {
        self(start);
    }
}

/// Registered print observers of a single edition
#[derive(Default)]
pub struct PrintChannel {
    /// Observers in registration order
    observers: Vec<Box<dyn PrintObserver>>,
}

impl PrintChannel {
    /// Register an observer
    pub fn subscribe(&mut self, observer: Box<dyn PrintObserver>) {
        self.observers.push(observer);
    }

    /// Notify every observer, in registration order
    pub fn notify(&self, edition: &dyn Edition) {
        for observer in &self.observers {
            observer.on_print(edition);
        }
    }

    /// Number of registered observers
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for PrintChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintChannel").field("observers_count", &self.len()).finish()
    }
}

/// Registered take observers of a single library
#[derive(Default)]
pub struct TakeChannel {
    /// Observers in registration order
    observers: Vec<Box<dyn TakeObserver>>,
}

impl TakeChannel {
    /// Register an observer
    pub fn subscribe(&mut self, observer: Box<dyn TakeObserver>) {
        self.observers.push(observer);
    }

    /// Notify every observer, in registration order
    pub fn notify(&self, start: char) {
        for observer in &self.observers {
            observer.on_take(start);
        }
    }

    /// Number of registered observers
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for TakeChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeChannel").field("observers_count", &self.len()).finish()
    }
}

/// Logs every printed edition
#[derive(Debug)]
pub struct PrintLogger;

impl PrintObserver for PrintLogger {
    fn on_print(&self, edition: &dyn Edition) {
        tracing::info!(kind = ?edition.kind(), %edition, "edition printed");
    }
}

/// Logs every take from a library
#[derive(Debug)]
pub struct TakeLogger;

impl TakeObserver for TakeLogger {
    fn on_take(&self, start: char) {
        tracing::info!(%start, "books taken");
    }
}

/// Collects human-readable notices for later display
///
/// Clones share the same board, so one clone can be registered as an
/// observer while another drains the notices.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    /// Pending notices, oldest first
    notices: Rc<RefCell<Vec<String>>>,
}

impl NoticeBoard {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice
    pub fn post(&self, notice: String) {
        self.notices.borrow_mut().push(notice);
    }

    /// Remove and return all pending notices
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }

    /// Number of pending notices
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    /// Whether there are no pending notices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }
}

impl PrintObserver for NoticeBoard {
    fn on_print(&self, edition: &dyn Edition) {
        self.post(format!("PRINTED!\n{edition}"));
    }
}

impl TakeObserver for NoticeBoard {
    fn on_take(&self, start: char) {
        self.post(format!("ATTENTION! Books starting with {start} were taken!"));
    }
}

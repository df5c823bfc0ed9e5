//! The source of "now".
//!
//! Nothing in this crate reads the system clock directly. Operations anchored
//! on the current moment take a [`Clock`], so tests can pin time with
//! [`FixedClock`] while applications pass [`SystemClock`].

use chrono::{Local, NaiveDateTime};

/// A source of the current civil wall-clock time.
pub trait Clock {
    /// The current moment as host-local civil time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host clock in the host's local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

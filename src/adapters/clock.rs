//! Clock adapters.

use chrono::{Local, NaiveDate};
use std::sync::RwLock;

use crate::ports::Clock;

/// Reads the local calendar day from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a settable day, for tests and replays.
#[derive(Debug)]
pub struct FixedClock {
    today: RwLock<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: RwLock::new(today),
        }
    }

    /// Moves the clock to another day.
    pub fn set(&self, today: NaiveDate) {
        if let Ok(mut guard) = self.today.write() {
            *guard = today;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.today.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

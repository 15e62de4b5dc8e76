//! Analytics clock — a single consistently-sourced "today".
//!
//! RULE: every run captures the current date exactly once. Due-day math
//! never re-reads the wall clock mid-run, so one run's output is
//! self-consistent and reproducible under a fixed clock.

use chrono::{NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsClock {
    today: NaiveDate,
}

impl AnalyticsClock {
    /// Capture the wall-clock date, once.
    pub fn system() -> Self {
        Self {
            today: Utc::now().date_naive(),
        }
    }

    /// Fixed date — used in tests and replay tooling.
    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

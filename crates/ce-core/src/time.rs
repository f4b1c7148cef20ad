//! Simulation time model.
//!
//! Time advances in whole days.  `Day` is the canonical unit for every
//! timestamp stored on an agent or a partnership, so all progression
//! arithmetic (`current - infection_day >= period`) is exact integer math.

use std::fmt;

// ── Day ──────────────────────────────────────────────────────────────────────

/// An absolute simulated day, counted from day 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Return the day `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Day {
        Day(self.0 + n)
    }

    /// Days elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Day) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current day and the configured horizon of one run.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// The day about to be processed; advanced by [`SimClock::advance`].
    pub current_day: Day,
    /// Exclusive upper bound: days `0 .. total_days` are simulated.
    pub total_days: u32,
}

impl SimClock {
    pub fn new(total_days: u32) -> Self {
        Self { current_day: Day::ZERO, total_days }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_day = Day(self.current_day.0 + 1);
    }

    /// The first day that will not be simulated.
    #[inline]
    pub fn end_day(&self) -> Day {
        Day(self.total_days)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_day >= self.end_day()
    }

    /// Days left before the horizon.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.total_days.saturating_sub(self.current_day.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current_day, self.total_days)
    }
}

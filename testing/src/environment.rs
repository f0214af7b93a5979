//! Deterministic environment doubles.
//!
//! Production code injects [`SystemClock`](tasklist_core::environment::SystemClock)
//! and [`SequentialIds`](tasklist_core::environment::SequentialIds); tests use
//! these fixed doubles so that timestamps and identities are predictable.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tasklist_core::environment::{Clock, SequentialIds};
use tasklist_core::screen::ScreenEnvironment;

/// A clock frozen at a fixed instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `time`.
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }

    /// Creates a clock frozen at an arbitrary but stable instant.
    #[must_use]
    pub fn stable() -> Self {
        // 2023-11-14T22:13:20Z; the value only needs to be reproducible.
        let time = Utc.timestamp_opt(1_700_000_000, 0).single();
        Self {
            time: time.unwrap_or_default(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// A ready-made screen environment with a frozen clock and ids issued from 1.
#[must_use]
pub fn screen_environment() -> ScreenEnvironment {
    screen_environment_from(1)
}

/// A screen environment with a frozen clock and ids issued from `origin`.
///
/// Use this when the initial state already holds tasks with low ids, so the
/// ids minted during the test cannot collide with them.
#[must_use]
pub fn screen_environment_from(origin: u64) -> ScreenEnvironment {
    ScreenEnvironment::new(
        Arc::new(FixedClock::stable()),
        Arc::new(SequentialIds::starting_at(origin)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_always_returns_the_same_instant() {
        let clock = FixedClock::stable();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn screen_environment_issues_ids_from_one() {
        let env = screen_environment();
        assert_eq!(env.ids.next_id().as_u64(), 1);
        assert_eq!(env.ids.next_id().as_u64(), 2);
    }
}

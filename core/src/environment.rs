//! Dependency injection traits.
//!
//! All external dependencies are abstracted behind traits and injected via
//! the Environment parameter of a reducer. Production implementations live
//! here; deterministic test doubles live in the `tasklist-testing` crate.

use crate::task::TaskId;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// Clock trait - abstracts time operations for testability
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of task identities.
///
/// Every call returns an id never handed out before by this source. The
/// original application derived ids from the wall clock, which can collide
/// within one timestamp tick; identity generation is therefore kept behind a
/// trait with a collision-free default.
pub trait IdSource: Send + Sync {
    /// Issue the next unused id.
    fn next_id(&self) -> TaskId;
}

/// Monotonic counter id source.
///
/// Ids start at 1 and increase by one per call for the lifetime of the
/// process. The task collection dies with the screen, so there is no need to
/// survive restarts.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a source issuing ids from 1 upward.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a source issuing ids from `origin` upward.
    #[must_use]
    pub const fn starting_at(origin: u64) -> Self {
        Self {
            next: AtomicU64::new(origin),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> TaskId {
        TaskId::from_u64(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

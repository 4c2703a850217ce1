//! Time sources for the value transition presenter
//!
//! The presenter never reads wall-clock time directly. It asks a [`Clock`]
//! for the elapsed time since the clock's own origin, which lets the same
//! state machine run against a real monotonic timer or against a manually
//! advanced clock in tests and headless replays.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Real monotonic clock backed by [`Instant`]
///
/// # Example
/// ```
/// use trip_estimator_core::{Clock, SystemClock};
///
/// let clock = SystemClock::new();
/// let a = clock.now();
/// let b = clock.now();
/// assert!(b >= a);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock
///
/// Clones share the same underlying time, so a test can keep one handle
/// while the presenter owns another.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use trip_estimator_core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// assert_eq!(clock.now(), Duration::ZERO);
///
/// handle.advance(Duration::from_millis(200));
/// assert_eq!(clock.now(), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    /// Nanoseconds since origin
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock positioned at its origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `delta`
    pub fn advance(&self, delta: Duration) {
        let delta = u64::try_from(delta.as_nanos()).unwrap_or(u64::MAX);
        // fetch_update never fails when the closure always returns Some
        let _ = self
            .nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(delta))
            });
    }

    /// Jump to an absolute position. Moving backwards is ignored.
    pub fn set(&self, at: Duration) {
        let at = u64::try_from(at.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_max(at, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_never_moves_backwards() {
        let clock = ManualClock::new();
        clock.set(Duration::from_millis(500));
        clock.set(Duration::from_millis(100));
        assert_eq!(clock.now(), Duration::from_millis(500));
    }

    #[test]
    fn test_manual_clock_saturates() {
        let clock = ManualClock::new();
        clock.advance(Duration::MAX);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_nanos(u64::MAX));
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(16));
        fn read<C: Clock>(clock: C) -> Duration {
            clock.now()
        }
        assert_eq!(read(&clock), Duration::from_millis(16));
    }
}

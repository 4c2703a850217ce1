//! A single in-flight transition and its cancellation token

use crate::presenter::easing::{lerp, Easing};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cancellation handle for one transition
///
/// The presenter invalidates the token when the transition is superseded
/// or the presenter is disposed. Clones observe the same flag, so a timer
/// on another thread can stop scheduling ticks for a dead transition.
#[derive(Debug, Clone)]
pub struct TransitionToken {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

impl TransitionToken {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sequence number of the transition this token belongs to
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

/// One emission of the presenter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Transition that produced this frame
    pub transition_id: u64,
    /// Unrounded interpolated value
    pub value: f64,
    /// Value rounded to the nearest rupee, for display
    pub display: i64,
    /// Linear progress through the duration, in [0, 1]
    pub progress: f64,
    /// True for the last frame, whose value equals the target
    pub finished: bool,
}

/// Interpolation from one value to another over a time window
#[derive(Debug, Clone)]
pub(crate) struct Transition {
    pub(crate) from: f64,
    pub(crate) to: i64,
    pub(crate) started_at: Duration,
    pub(crate) token: TransitionToken,
}

impl Transition {
    pub(crate) fn new(from: f64, to: i64, started_at: Duration, id: u64) -> Self {
        Self {
            from,
            to,
            started_at,
            token: TransitionToken::new(id),
        }
    }

    /// Linear progress at `now`, clamped to [0, 1]
    pub(crate) fn progress(&self, now: Duration, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }

    /// Sample the transition at `now`
    pub(crate) fn sample(&self, now: Duration, duration: Duration, easing: Easing) -> Frame {
        let progress = self.progress(now, duration);
        let finished = progress >= 1.0;
        let value = if finished {
            self.to as f64
        } else {
            lerp(self.from, self.to as f64, easing.apply(progress))
        };
        Frame {
            transition_id: self.token.id(),
            value,
            display: value.round() as i64,
            progress,
            finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_clones_share_state() {
        let token = TransitionToken::new(7);
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
        assert_eq!(observer.id(), 7);
    }

    #[test]
    fn test_sample_midway_linear() {
        let transition = Transition::new(0.0, 1_000, Duration::from_millis(100), 1);
        let frame = transition.sample(
            Duration::from_millis(500),
            Duration::from_millis(800),
            Easing::Linear,
        );
        assert_eq!(frame.progress, 0.5);
        assert_eq!(frame.value, 500.0);
        assert!(!frame.finished);
    }

    #[test]
    fn test_sample_after_duration_lands_on_target() {
        let transition = Transition::new(12.3, 88_000, Duration::ZERO, 1);
        let frame = transition.sample(Duration::from_secs(5), Duration::from_millis(800), Easing::EaseOut);
        assert!(frame.finished);
        assert_eq!(frame.value, 88_000.0);
        assert_eq!(frame.display, 88_000);
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let transition = Transition::new(0.0, 3, Duration::ZERO, 1);
        let frame = transition.sample(Duration::from_millis(50), Duration::from_millis(100), Easing::Linear);
        assert_eq!(frame.value, 1.5);
        assert_eq!(frame.display, 2);
    }
}

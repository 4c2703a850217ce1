//! Value Transition Presenter
//!
//! Eases the displayed total from the last committed value to each new
//! target over a fixed duration.
//!
//! # State Machine
//!
//! ```text
//!            present_transition              tick (elapsed < duration)
//!   Idle ───────────────────────▶ Animating ◀──────────────────────┐
//!    ▲                              │   │                          │
//!    │  tick (elapsed >= duration)  │   └──────────────────────────┘
//!    └──────── commit target ───────┘
//!
//!   Animating ── present_transition ──▶ Animating (restart from last emitted value)
//!   any ── dispose ──▶ Disposed
//! ```
//!
//! # Critical Invariants
//!
//! - The baseline only changes when a transition runs to completion
//! - A superseded transition's token is cancelled before the new one starts
//! - A restart begins at the last emitted (unrounded) value, never at the
//!   superseded transition's start
//! - Nothing is emitted after disposal

use crate::config::PresenterConfig;
use crate::core::clock::Clock;
use crate::presenter::easing::Easing;
use crate::presenter::transition::{Frame, Transition, TransitionToken};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors driving the presenter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresenterError {
    #[error("Presenter has been disposed")]
    Disposed,
}

/// Observable presenter state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterState {
    /// No transition in flight; display shows the baseline
    Idle,
    /// A transition is in flight
    Animating,
    /// Torn down; no further emissions
    Disposed,
}

/// Animated display of a changing total
///
/// # Example
/// ```
/// use std::time::Duration;
/// use trip_estimator_core::{ManualClock, PresenterConfig, ValueTransitionPresenter};
///
/// let clock = ManualClock::new();
/// let mut presenter =
///     ValueTransitionPresenter::new(0, clock.clone(), &PresenterConfig::default());
///
/// presenter.present_transition(88_000).unwrap();
/// clock.advance(Duration::from_millis(400));
/// let midway = presenter.tick().unwrap();
/// assert!(midway.display > 0 && midway.display < 88_000);
///
/// clock.advance(Duration::from_millis(400));
/// let last = presenter.tick().unwrap();
/// assert!(last.finished);
/// assert_eq!(presenter.baseline(), 88_000);
/// ```
#[derive(Debug)]
pub struct ValueTransitionPresenter<C: Clock> {
    clock: C,
    duration: Duration,
    easing: Easing,

    /// Last fully committed total
    baseline: i64,

    /// Last emitted unrounded value (baseline when nothing is in flight)
    last_emitted: f64,

    /// In-flight transition, if any
    active: Option<Transition>,

    /// Sequence number for the next transition
    next_id: u64,

    disposed: bool,
}

impl<C: Clock> ValueTransitionPresenter<C> {
    /// Create an idle presenter showing `initial`
    pub fn new(initial: i64, clock: C, config: &PresenterConfig) -> Self {
        Self::with_settings(initial, clock, config.duration(), config.easing)
    }

    pub fn with_settings(initial: i64, clock: C, duration: Duration, easing: Easing) -> Self {
        Self {
            clock,
            duration,
            easing,
            baseline: initial,
            last_emitted: initial as f64,
            active: None,
            next_id: 1,
            disposed: false,
        }
    }

    /// Start easing toward `target`
    ///
    /// From idle the transition starts at the baseline. If a transition is
    /// already in flight it is cancelled without committing, and the new
    /// one starts at the last emitted value.
    pub fn present_transition(&mut self, target: i64) -> Result<TransitionToken, PresenterError> {
        if self.disposed {
            return Err(PresenterError::Disposed);
        }

        let from = match self.active.take() {
            Some(superseded) => {
                superseded.token.cancel();
                debug!(
                    cancelled = superseded.token.id(),
                    from = self.last_emitted,
                    target,
                    "restarting transition before completion"
                );
                self.last_emitted
            }
            None => self.baseline as f64,
        };

        let id = self.next_id;
        self.next_id += 1;

        let transition = Transition::new(from, target, self.clock.now(), id);
        let token = transition.token.clone();
        self.last_emitted = from;
        self.active = Some(transition);

        debug!(id, from, target, "transition started");
        Ok(token)
    }

    /// Sample the in-flight transition
    ///
    /// Returns `None` when idle or disposed. The frame that reaches the
    /// end of the duration carries `finished = true` and commits the target
    /// as the new baseline.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.disposed {
            return None;
        }
        let transition = self.active.as_ref()?;
        if transition.token.is_cancelled() {
            self.active = None;
            return None;
        }

        let frame = transition.sample(self.clock.now(), self.duration, self.easing);
        self.last_emitted = frame.value;

        if frame.finished {
            self.baseline = transition.to;
            self.active = None;
            debug!(id = frame.transition_id, baseline = self.baseline, "transition committed");
        } else {
            trace!(id = frame.transition_id, value = frame.value, progress = frame.progress, "frame");
        }

        Some(frame)
    }

    /// Iterator over emissions, sampling the clock on each `next()`
    ///
    /// Ends after the finishing frame. The caller paces iteration (one
    /// `next()` per display refresh); with a clock that never advances the
    /// iterator keeps yielding the same in-progress frame.
    pub fn frames(&mut self) -> Frames<'_, C> {
        Frames { presenter: self }
    }

    /// Cancel any in-flight transition and stop emitting
    ///
    /// The baseline is left as it was; an interrupted transition never
    /// commits. Calling this more than once is harmless.
    pub fn dispose(&mut self) {
        if let Some(active) = self.active.take() {
            active.token.cancel();
            debug!(id = active.token.id(), "transition cancelled on dispose");
        }
        self.disposed = true;
    }

    pub fn state(&self) -> PresenterState {
        if self.disposed {
            PresenterState::Disposed
        } else if self.active.is_some() {
            PresenterState::Animating
        } else {
            PresenterState::Idle
        }
    }

    /// Last fully committed total
    pub fn baseline(&self) -> i64 {
        self.baseline
    }

    /// Target of the in-flight transition
    pub fn target(&self) -> Option<i64> {
        self.active.as_ref().map(|t| t.to)
    }

    /// Last emitted value, unrounded
    pub fn current_value(&self) -> f64 {
        self.last_emitted
    }

    /// Last emitted value rounded for display
    pub fn displayed(&self) -> i64 {
        self.last_emitted.round() as i64
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> Drop for ValueTransitionPresenter<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Emission sequence of a presenter; see [`ValueTransitionPresenter::frames`]
pub struct Frames<'a, C: Clock> {
    presenter: &'a mut ValueTransitionPresenter<C>,
}

impl<C: Clock> Iterator for Frames<'_, C> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.presenter.tick()
    }
}

//! Value Transition Presenter
//!
//! Turns a stream of totals into an animated display sequence.
//!
//! See `value.rs` for the state machine.

pub mod easing;
pub mod transition;
pub mod value;

// Re-export main types for convenience
pub use easing::Easing;
pub use transition::{Frame, TransitionToken};
pub use value::{Frames, PresenterError, PresenterState, ValueTransitionPresenter};

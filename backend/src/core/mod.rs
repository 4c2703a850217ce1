//! Core infrastructure shared by the pricing engine and the presenter

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

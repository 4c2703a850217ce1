//! Trip Estimator Core
//!
//! Itemized trip pricing with an animated running total.
//!
//! # Architecture
//!
//! - **models**: Domain types (TripParameters, CostBreakdown)
//! - **pricing**: Price table and the pure pricing engine
//! - **presenter**: Eased transitions between successive totals
//! - **session**: Recompute-on-change glue for an open estimator view
//! - **core**: Clocks driving the presenter
//! - **config**: JSON configuration and validation
//! - **format**: Rupee display formatting
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole rupees)
//! 2. `compute_cost` is pure: same inputs, same breakdown
//! 3. A breakdown's total is always the sum of its line items
//! 4. A superseded transition never emits again

// Module declarations
pub mod config;
pub mod core;
pub mod format;
pub mod models;
pub mod presenter;
pub mod pricing;
pub mod session;

// Re-exports for convenience
pub use config::{ConfigError, EstimatorConfig, PresenterConfig, DEFAULT_TRANSITION_MS};
pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use format::format_inr;
pub use models::{
    breakdown::{CostBreakdown, LineItem, LineItemKind},
    trip::{CatalogParseError, DateRange, Destination, TransportMode, TripParameters},
};
pub use presenter::{
    Easing, Frame, Frames, PresenterError, PresenterState, TransitionToken,
    ValueTransitionPresenter,
};
pub use pricing::{compute_cost, day_count, night_count, PriceTable};
pub use session::{EstimatorSession, SessionUpdate};

//! Domain models for the trip estimator

pub mod breakdown;
pub mod trip;

// Re-exports
pub use breakdown::{CostBreakdown, LineItem, LineItemKind};
pub use trip::{CatalogParseError, DateRange, Destination, TransportMode, TripParameters};

//! Trip Pricing
//!
//! This module provides:
//! - Price table configuration (`PriceTable`)
//! - The pricing engine (`compute_cost`)

pub mod engine;
pub mod table;

// Re-exports
pub use engine::{compute_cost, day_count, night_count, rooms_needed, TRAVELERS_PER_ROOM};
pub use table::PriceTable;

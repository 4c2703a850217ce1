//! Pricing Engine
//!
//! Pure derivation of an itemized trip cost from the trip parameters and a
//! price table. No state is carried between calls.
//!
//! # Derivation
//!
//! 1. Night count from the date range. Missing or non-positive → empty breakdown.
//! 2. Flights (if requested): flight price × travelers.
//! 3. Accommodation: nightly price × nights × rooms, two travelers per room.
//! 4. Local Transport: daily price × (nights + 1).
//!
//! The engine never rejects input. Unknown lookups price at zero and the
//! traveler count is trusted to be within the caller's bounds.

use crate::models::breakdown::{CostBreakdown, LineItemKind};
use crate::models::trip::{DateRange, TripParameters};
use crate::pricing::table::PriceTable;
use tracing::trace;

/// Travelers sharing one hotel room
pub const TRAVELERS_PER_ROOM: u32 = 2;

/// Nights covered by the date range, if it is a valid trip
///
/// `None` when a bound is missing or the range is empty or inverted.
pub fn night_count(range: &DateRange) -> Option<i64> {
    range.nights().filter(|nights| *nights > 0)
}

/// Days of local transport for a number of nights
///
/// A trip always needs transport on both the arrival and departure day.
pub fn day_count(nights: i64) -> i64 {
    nights.saturating_add(1)
}

/// Hotel rooms needed, rounding odd parties up
pub fn rooms_needed(travelers: u32) -> i64 {
    i64::from(travelers.div_ceil(TRAVELERS_PER_ROOM))
}

/// Price a trip
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use trip_estimator_core::{
///     compute_cost, DateRange, Destination, PriceTable, TransportMode, TripParameters,
/// };
///
/// let start = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// let params = TripParameters {
///     destination: Destination::Andamans,
///     date_range: DateRange::between(start, end),
///     traveler_count: 2,
///     include_flights: true,
///     hotel_tier: 3,
///     transport_mode: TransportMode::PrivateCab,
/// };
///
/// let breakdown = compute_cost(&params, &PriceTable::default());
/// assert_eq!(breakdown.total(), 88_000);
/// ```
pub fn compute_cost(params: &TripParameters, table: &PriceTable) -> CostBreakdown {
    let Some(nights) = night_count(&params.date_range) else {
        trace!(range = ?params.date_range, "incomplete or invalid dates; empty breakdown");
        return CostBreakdown::empty();
    };
    let days = day_count(nights);
    let travelers = i64::from(params.traveler_count);

    let mut breakdown = CostBreakdown::empty();

    if params.include_flights {
        let flights = table
            .flight_price(params.destination)
            .saturating_mul(travelers);
        breakdown.push(LineItemKind::Flights, flights);
    }

    let accommodation = table
        .hotel_nightly(params.hotel_tier)
        .saturating_mul(nights)
        .saturating_mul(rooms_needed(params.traveler_count));
    breakdown.push(LineItemKind::Accommodation, accommodation);

    let transport = table
        .transport_daily(params.transport_mode)
        .saturating_mul(days);
    breakdown.push(LineItemKind::LocalTransport, transport);

    trace!(
        nights,
        days,
        travelers,
        total = breakdown.total(),
        "priced trip"
    );

    breakdown
}

//! Tests for the pricing engine
//!
//! Covers the derivation rules end to end: night/day counts, the zero-state
//! short circuit, room rounding, flight omission and fail-open lookups.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use trip_estimator_core::{
    compute_cost, DateRange, Destination, LineItemKind, PriceTable, TransportMode,
    TripParameters,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Helper to create the estimator's opening selection for a 5-night trip
fn andamans_trip() -> TripParameters {
    TripParameters {
        destination: Destination::Andamans,
        date_range: DateRange::between(date(2026, 12, 20), date(2026, 12, 25)),
        traveler_count: 2,
        include_flights: true,
        hotel_tier: 3,
        transport_mode: TransportMode::PrivateCab,
    }
}

// ============================================================================
// End-to-end reference estimate
// ============================================================================

#[test]
fn test_reference_estimate() {
    let breakdown = compute_cost(&andamans_trip(), &PriceTable::default());

    assert_eq!(breakdown.get(LineItemKind::Flights), Some(40_000));
    assert_eq!(breakdown.get(LineItemKind::Accommodation), Some(30_000)); // 6000 × 5 × 1
    assert_eq!(breakdown.get(LineItemKind::LocalTransport), Some(18_000)); // 3000 × 6
    assert_eq!(breakdown.total(), 88_000);
    assert_eq!(
        breakdown.labels().collect::<Vec<_>>(),
        vec!["Flights", "Accommodation", "Local Transport"]
    );
}

// ============================================================================
// Zero state
// ============================================================================

#[test]
fn test_missing_dates_yield_empty_breakdown() {
    let table = PriceTable::default();
    let mut params = andamans_trip();

    params.date_range = DateRange::empty();
    assert!(compute_cost(&params, &table).is_empty());

    params.date_range = DateRange::starting(date(2026, 12, 20));
    let breakdown = compute_cost(&params, &table);
    assert!(breakdown.is_empty());
    assert_eq!(breakdown.total(), 0);
}

#[test]
fn test_same_day_return_is_zero_state() {
    let mut params = andamans_trip();
    params.date_range = DateRange::between(date(2026, 12, 20), date(2026, 12, 20));

    let breakdown = compute_cost(&params, &PriceTable::default());
    assert!(breakdown.is_empty());
    assert_eq!(breakdown.total(), 0);
}

#[test]
fn test_inverted_dates_yield_empty_breakdown() {
    let mut params = andamans_trip();
    params.date_range = DateRange::between(date(2026, 12, 25), date(2026, 12, 20));

    let breakdown = compute_cost(&params, &PriceTable::default());
    assert!(breakdown.is_empty());
    assert_eq!(breakdown.total(), 0);
}

// ============================================================================
// Line item rules
// ============================================================================

#[test]
fn test_odd_party_rounds_rooms_up() {
    let table = PriceTable::default();
    let nightly = table.hotel_nightly(1);
    let params = TripParameters {
        destination: Destination::Goa,
        date_range: DateRange::between(date(2027, 1, 1), date(2027, 1, 3)),
        traveler_count: 3,
        include_flights: false,
        hotel_tier: 1,
        transport_mode: TransportMode::None,
    };

    let breakdown = compute_cost(&params, &table);
    assert_eq!(breakdown.get(LineItemKind::Accommodation), Some(nightly * 2 * 2));
}

#[test]
fn test_flights_omitted_when_excluded() {
    let table = PriceTable::default();
    for destination in Destination::ALL {
        let mut params = andamans_trip();
        params.destination = destination;
        params.include_flights = false;

        let breakdown = compute_cost(&params, &table);
        assert_eq!(breakdown.get(LineItemKind::Flights), None);
        assert!(!breakdown.labels().any(|label| label == "Flights"));
        assert_eq!(breakdown.total(), 48_000);
    }
}

#[test]
fn test_flights_scale_per_traveler() {
    let table = PriceTable::default();
    let mut params = andamans_trip();
    params.destination = Destination::Kerala;
    params.traveler_count = 7;

    let breakdown = compute_cost(&params, &table);
    assert_eq!(breakdown.get(LineItemKind::Flights), Some(12_000 * 7));
}

#[test]
fn test_no_transport_is_present_at_zero() {
    let mut params = andamans_trip();
    params.transport_mode = TransportMode::None;

    let breakdown = compute_cost(&params, &PriceTable::default());
    assert_eq!(breakdown.get(LineItemKind::LocalTransport), Some(0));
    assert_eq!(breakdown.total(), 70_000);
}

#[test]
fn test_scooter_charged_per_day() {
    let mut params = andamans_trip();
    params.transport_mode = TransportMode::Scooter;

    let breakdown = compute_cost(&params, &PriceTable::default());
    assert_eq!(breakdown.get(LineItemKind::LocalTransport), Some(800 * 6));
}

// ============================================================================
// Fail-open lookups
// ============================================================================

#[test]
fn test_out_of_range_tier_prices_at_zero() {
    let table = PriceTable::default();
    for tier in [0u8, 6, 255] {
        let mut params = andamans_trip();
        params.hotel_tier = tier;

        let breakdown = compute_cost(&params, &table);
        assert_eq!(breakdown.get(LineItemKind::Accommodation), Some(0));
        assert_eq!(breakdown.total(), 58_000);
    }
}

#[test]
fn test_unlisted_destination_and_mode_price_at_zero() {
    let table = PriceTable {
        flights: BTreeMap::from([(Destination::Goa, 8_000)]),
        hotel_per_night: vec![2_000, 3_500, 6_000],
        transport_per_day: BTreeMap::from([(TransportMode::Scooter, 800)]),
    };

    let breakdown = compute_cost(&andamans_trip(), &table);
    assert_eq!(breakdown.get(LineItemKind::Flights), Some(0));
    assert_eq!(breakdown.get(LineItemKind::Accommodation), Some(30_000));
    assert_eq!(breakdown.get(LineItemKind::LocalTransport), Some(0));
    assert_eq!(breakdown.total(), 30_000);
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_recomputation_is_idempotent() {
    let table = PriceTable::default();
    let params = andamans_trip();

    let first = compute_cost(&params, &table);
    let second = compute_cost(&params, &table);
    assert_eq!(first, second);
}

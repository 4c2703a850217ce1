//! Property tests for the pricing engine
//!
//! These hold for every parameter combination the input controls can
//! produce, plus out-of-range tiers.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use trip_estimator_core::{
    compute_cost, DateRange, Destination, LineItemKind, PriceTable, TransportMode,
    TripParameters,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn destination() -> impl Strategy<Value = Destination> {
    prop::sample::select(Destination::ALL.to_vec())
}

fn transport_mode() -> impl Strategy<Value = TransportMode> {
    prop::sample::select(TransportMode::ALL.to_vec())
}

/// Date range starting within a year of the base date, `nights` long
fn range_with_nights(offset: u64, nights: i64) -> DateRange {
    let start = base_date() + Days::new(offset);
    let end = if nights >= 0 {
        start + Days::new(nights as u64)
    } else {
        start - Days::new(nights.unsigned_abs())
    };
    DateRange::between(start, end)
}

prop_compose! {
    fn trip_parameters(night_range: std::ops::Range<i64>)(
        destination in destination(),
        offset in 0u64..365,
        nights in night_range,
        traveler_count in 1u32..=10,
        include_flights in any::<bool>(),
        hotel_tier in 0u8..=7,
        transport_mode in transport_mode(),
    ) -> TripParameters {
        TripParameters {
            destination,
            date_range: range_with_nights(offset, nights),
            traveler_count,
            include_flights,
            hotel_tier,
            transport_mode,
        }
    }
}

proptest! {
    #[test]
    fn total_equals_sum_of_items(params in trip_parameters(1..60)) {
        let breakdown = compute_cost(&params, &PriceTable::default());
        let sum: i64 = breakdown.items().iter().map(|item| item.amount).sum();
        prop_assert_eq!(breakdown.total(), sum);
        prop_assert!(!breakdown.is_empty());
    }

    #[test]
    fn items_are_never_negative(params in trip_parameters(-30..60)) {
        let breakdown = compute_cost(&params, &PriceTable::default());
        for item in breakdown.items() {
            prop_assert!(item.amount >= 0, "{:?}", item);
        }
    }

    #[test]
    fn non_positive_nights_yield_zero_state(params in trip_parameters(-60..1)) {
        let breakdown = compute_cost(&params, &PriceTable::default());
        prop_assert!(breakdown.is_empty());
        prop_assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn absent_dates_yield_zero_state(mut params in trip_parameters(1..60), keep_start in any::<bool>()) {
        params.date_range = if keep_start {
            DateRange { start: params.date_range.start, end: None }
        } else {
            DateRange { start: None, end: params.date_range.end }
        };
        let breakdown = compute_cost(&params, &PriceTable::default());
        prop_assert!(breakdown.is_empty());
    }

    #[test]
    fn adding_a_traveler_never_lowers_total(params in trip_parameters(-5..60)) {
        prop_assume!(params.traveler_count < 10);
        let table = PriceTable::default();
        let mut more = params.clone();
        more.traveler_count += 1;
        prop_assert!(compute_cost(&more, &table).total() >= compute_cost(&params, &table).total());
    }

    #[test]
    fn excluded_flights_never_listed(mut params in trip_parameters(-5..60)) {
        params.include_flights = false;
        let breakdown = compute_cost(&params, &PriceTable::default());
        prop_assert_eq!(breakdown.get(LineItemKind::Flights), None);
    }

    #[test]
    fn recomputation_is_deterministic(params in trip_parameters(-5..60)) {
        let table = PriceTable::default();
        prop_assert_eq!(compute_cost(&params, &table), compute_cost(&params, &table));
    }
}

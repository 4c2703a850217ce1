//! Price Table
//!
//! Static pricing configuration consulted by the engine.
//! All monetary values in whole rupees.
//!
//! Lookups are fail-open: a destination, tier or transport mode with no
//! entry prices at zero instead of producing an error.

use crate::config::ConfigError;
use crate::models::trip::{Destination, TransportMode, MAX_HOTEL_TIER};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Price Table Configuration
///
/// # Example
/// ```
/// use trip_estimator_core::{Destination, PriceTable, TransportMode};
///
/// let table = PriceTable::default();
/// assert_eq!(table.flight_price(Destination::Andamans), 20_000);
/// assert_eq!(table.hotel_nightly(3), 6_000);
/// assert_eq!(table.hotel_nightly(9), 0); // out of range: fail-open
/// assert_eq!(table.transport_daily(TransportMode::Scooter), 800);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Return flight price per traveler, by destination
    #[serde(default)]
    pub flights: BTreeMap<Destination, i64>,

    /// Nightly room price by hotel tier (index = tier - 1)
    ///
    /// One room sleeps two travelers.
    #[serde(default)]
    pub hotel_per_night: Vec<i64>,

    /// Daily local transport price, by mode
    #[serde(default)]
    pub transport_per_day: BTreeMap<TransportMode, i64>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            flights: BTreeMap::from([
                (Destination::Goa, 8_000),
                (Destination::Kerala, 12_000),
                (Destination::Andamans, 20_000),
            ]),
            hotel_per_night: vec![2_000, 3_500, 6_000, 10_000, 18_000], // 1 to 5 stars
            transport_per_day: BTreeMap::from([
                (TransportMode::None, 0),
                (TransportMode::Scooter, 800),
                (TransportMode::PrivateCab, 3_000),
            ]),
        }
    }
}

impl PriceTable {
    /// Per-traveler flight price for a destination (0 if not listed)
    pub fn flight_price(&self, destination: Destination) -> i64 {
        match self.flights.get(&destination) {
            Some(price) => *price,
            None => {
                warn!(%destination, "no flight price configured; pricing at 0");
                0
            }
        }
    }

    /// Nightly room price for a star rating (0 if out of range)
    pub fn hotel_nightly(&self, tier: u8) -> i64 {
        let price = usize::from(tier)
            .checked_sub(1)
            .and_then(|index| self.hotel_per_night.get(index))
            .copied();
        match price {
            Some(price) => price,
            None => {
                warn!(tier, "no hotel price for tier; pricing at 0");
                0
            }
        }
    }

    /// Daily price for a transport mode (0 if not listed)
    pub fn transport_daily(&self, mode: TransportMode) -> i64 {
        match self.transport_per_day.get(&mode) {
            Some(price) => *price,
            None => {
                warn!(%mode, "no transport price configured; pricing at 0");
                0
            }
        }
    }

    /// Check the table for values the engine cannot price with
    ///
    /// Missing entries are fine (they price at zero); negative prices and
    /// more tiers than star ratings exist are not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (destination, price) in &self.flights {
            if *price < 0 {
                return Err(ConfigError::Invalid(format!(
                    "flight price for {} must be >= 0 (got {})",
                    destination, price
                )));
            }
        }

        if self.hotel_per_night.len() > usize::from(MAX_HOTEL_TIER) {
            return Err(ConfigError::Invalid(format!(
                "hotel_per_night has {} entries; at most {} tiers exist",
                self.hotel_per_night.len(),
                MAX_HOTEL_TIER
            )));
        }

        for (index, price) in self.hotel_per_night.iter().enumerate() {
            if *price < 0 {
                return Err(ConfigError::Invalid(format!(
                    "hotel price for tier {} must be >= 0 (got {})",
                    index + 1,
                    price
                )));
            }
        }

        for (mode, price) in &self.transport_per_day {
            if *price < 0 {
                return Err(ConfigError::Invalid(format!(
                    "transport price for {} must be >= 0 (got {})",
                    mode, price
                )));
            }
        }

        Ok(())
    }
}

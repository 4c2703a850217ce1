//! Trip parameters
//!
//! The full set of user selections the pricing engine consumes. The caller
//! replaces the whole value on every change; nothing here is mutated
//! piecemeal by the core.
//!
//! Domain bounds (traveler count 1-10, hotel tier 1-5) are enforced by the
//! caller's input controls. The engine does not re-validate them.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest traveler count the input controls allow
pub const MIN_TRAVELERS: u32 = 1;
/// Largest traveler count the input controls allow
pub const MAX_TRAVELERS: u32 = 10;
/// Lowest hotel star rating
pub const MIN_HOTEL_TIER: u8 = 1;
/// Highest hotel star rating
pub const MAX_HOTEL_TIER: u8 = 5;

/// Error parsing a catalog value from text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogParseError {
    #[error("Unknown destination: '{0}' (expected one of goa, kerala, andamans)")]
    UnknownDestination(String),

    #[error("Unknown transport mode: '{0}' (expected one of none, scooter, private-cab)")]
    UnknownTransportMode(String),
}

/// Supported destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    Goa,
    Kerala,
    Andamans,
}

impl Destination {
    /// Every destination in catalog order
    pub const ALL: [Destination; 3] = [Destination::Goa, Destination::Kerala, Destination::Andamans];

    /// Catalog key, as used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Goa => "goa",
            Destination::Kerala => "kerala",
            Destination::Andamans => "andamans",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Destination::Goa => "Goa",
            Destination::Kerala => "Kerala",
            Destination::Andamans => "Andamans",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = CatalogParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogParseError::UnknownDestination(s.to_string()))
    }
}

/// Local transport options
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    /// No local transport. Priced at zero by the default table.
    None,
    /// Scooter or bike rental
    Scooter,
    /// Private cab
    PrivateCab,
}

impl TransportMode {
    /// Every mode in catalog order
    pub const ALL: [TransportMode; 3] = [
        TransportMode::None,
        TransportMode::Scooter,
        TransportMode::PrivateCab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::None => "none",
            TransportMode::Scooter => "scooter",
            TransportMode::PrivateCab => "private-cab",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransportMode::None => "None",
            TransportMode::Scooter => "Scooter/Bike Rental",
            TransportMode::PrivateCab => "Private Cab",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = CatalogParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogParseError::UnknownTransportMode(s.to_string()))
    }
}

/// Travel date selection
///
/// Either bound may be missing while the user is still picking dates.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use trip_estimator_core::DateRange;
///
/// let start = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// assert_eq!(DateRange::between(start, end).nights(), Some(5));
/// assert_eq!(DateRange::starting(start).nights(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// No dates picked yet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Only the first date picked
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Both bounds picked
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Calendar-day difference between end and start
    ///
    /// `None` when either bound is missing. Inverted ranges yield a
    /// negative count; callers treat anything non-positive as invalid.
    pub fn nights(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end.signed_duration_since(start).num_days()),
            _ => None,
        }
    }
}

/// Everything the pricing engine needs to price a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    pub destination: Destination,

    #[serde(default)]
    pub date_range: DateRange,

    /// Number of travelers (caller keeps this within 1-10)
    pub traveler_count: u32,

    pub include_flights: bool,

    /// Hotel star rating (1-5). Values outside the table price at zero.
    pub hotel_tier: u8,

    pub transport_mode: TransportMode,
}

impl TripParameters {
    /// Selections shown when the estimator first opens
    ///
    /// Andamans, five nights from `today`, two travelers, flights included,
    /// a 3-star hotel and a private cab.
    pub fn initial(today: NaiveDate) -> Self {
        let end = today.checked_add_days(Days::new(5)).unwrap_or(today);
        Self {
            destination: Destination::Andamans,
            date_range: DateRange::between(today, end),
            traveler_count: 2,
            include_flights: true,
            hotel_tier: 3,
            transport_mode: TransportMode::PrivateCab,
        }
    }
}

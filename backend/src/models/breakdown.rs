//! Itemized trip cost
//!
//! CRITICAL: All money values are i64 (whole rupees). The total is always
//! derived from the line items, never stored separately.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Line item categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LineItemKind {
    #[serde(rename = "Flights")]
    Flights,
    #[serde(rename = "Accommodation")]
    Accommodation,
    #[serde(rename = "Local Transport")]
    LocalTransport,
}

impl LineItemKind {
    /// Label shown next to the amount
    pub fn label(&self) -> &'static str {
        match self {
            LineItemKind::Flights => "Flights",
            LineItemKind::Accommodation => "Accommodation",
            LineItemKind::LocalTransport => "Local Transport",
        }
    }
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One priced component of the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind: LineItemKind,
    /// Amount in whole rupees (never negative)
    pub amount: i64,
}

/// Itemized cost of a trip
///
/// Items appear in the order they were priced. A category that does not
/// apply (flights not requested) is absent rather than zero.
///
/// # Example
/// ```
/// use trip_estimator_core::{CostBreakdown, LineItemKind};
///
/// let breakdown = CostBreakdown::empty();
/// assert!(breakdown.is_empty());
/// assert_eq!(breakdown.total(), 0);
/// assert_eq!(breakdown.get(LineItemKind::Flights), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    items: Vec<LineItem>,
}

impl CostBreakdown {
    /// Breakdown with no line items (total 0)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a line item. Negative amounts are clamped to zero.
    pub(crate) fn push(&mut self, kind: LineItemKind, amount: i64) {
        debug_assert!(self.get(kind).is_none(), "duplicate line item {kind}");
        self.items.push(LineItem {
            kind,
            amount: amount.max(0),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Line items in display order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Amount for a category, if present
    pub fn get(&self, kind: LineItemKind) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item.kind == kind)
            .map(|item| item.amount)
    }

    /// Amount for a display label ("Flights", "Accommodation", "Local Transport")
    pub fn get_by_label(&self, label: &str) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item.kind.label() == label)
            .map(|item| item.amount)
    }

    /// Labels of present line items, in display order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|item| item.kind.label())
    }

    /// Sum of all present line items
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.amount))
    }
}

//! Estimator Session
//!
//! Recompute-on-every-change glue between the input controls and the two
//! core components. The caller hands over a complete parameter set whenever
//! any control changes; the session reprices the trip and, when the total
//! moved, starts a new presenter transition.

use crate::config::EstimatorConfig;
use crate::core::clock::Clock;
use crate::models::breakdown::CostBreakdown;
use crate::models::trip::TripParameters;
use crate::presenter::transition::{Frame, TransitionToken};
use crate::presenter::value::{PresenterError, ValueTransitionPresenter};
use crate::pricing::engine::{compute_cost, night_count};
use crate::pricing::table::PriceTable;
use tracing::debug;

/// Outcome of one parameter update
#[derive(Debug, Clone)]
pub struct SessionUpdate {
    pub previous_total: i64,
    pub total: i64,
    /// Token of the transition started by this update, if the total moved
    pub transition: Option<TransitionToken>,
}

impl SessionUpdate {
    pub fn total_changed(&self) -> bool {
        self.previous_total != self.total
    }
}

/// Live estimator state for one open view
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use trip_estimator_core::{EstimatorConfig, EstimatorSession, ManualClock, TripParameters};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let mut session = EstimatorSession::new(
///     &EstimatorConfig::default(),
///     TripParameters::initial(today),
///     ManualClock::new(),
/// );
/// assert_eq!(session.total(), 88_000);
/// assert_eq!(session.caption(), "Based on 5 nights.");
///
/// let mut params = session.params().clone();
/// params.include_flights = false;
/// let update = session.update(params).unwrap();
/// assert_eq!(update.total, 48_000);
/// assert!(update.transition.is_some());
/// ```
#[derive(Debug)]
pub struct EstimatorSession<C: Clock> {
    table: PriceTable,
    params: TripParameters,
    breakdown: CostBreakdown,
    presenter: ValueTransitionPresenter<C>,
}

impl<C: Clock> EstimatorSession<C> {
    /// Price the initial parameters and show their total without animating
    pub fn new(config: &EstimatorConfig, params: TripParameters, clock: C) -> Self {
        let table = config.price_table.clone();
        let breakdown = compute_cost(&params, &table);
        let presenter = ValueTransitionPresenter::new(breakdown.total(), clock, &config.presenter);
        debug!(total = breakdown.total(), "estimator session opened");
        Self {
            table,
            params,
            breakdown,
            presenter,
        }
    }

    /// Replace the parameters and reprice
    ///
    /// A transition is started only when the total differs from the
    /// previous computation.
    pub fn update(&mut self, params: TripParameters) -> Result<SessionUpdate, PresenterError> {
        let previous_total = self.breakdown.total();
        let breakdown = compute_cost(&params, &self.table);
        let total = breakdown.total();

        let transition = if total != previous_total {
            Some(self.presenter.present_transition(total)?)
        } else {
            None
        };

        debug!(previous_total, total, ?params, "estimate recomputed");
        self.params = params;
        self.breakdown = breakdown;

        Ok(SessionUpdate {
            previous_total,
            total,
            transition,
        })
    }

    /// Advance the animated total
    pub fn tick(&mut self) -> Option<Frame> {
        self.presenter.tick()
    }

    /// Tear down the view; the animated total stops immediately
    pub fn dispose(&mut self) {
        self.presenter.dispose();
    }

    pub fn params(&self) -> &TripParameters {
        &self.params
    }

    pub fn breakdown(&self) -> &CostBreakdown {
        &self.breakdown
    }

    pub fn total(&self) -> i64 {
        self.breakdown.total()
    }

    pub fn price_table(&self) -> &PriceTable {
        &self.table
    }

    pub fn presenter(&self) -> &ValueTransitionPresenter<C> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut ValueTransitionPresenter<C> {
        &mut self.presenter
    }

    /// Nights in the current selection, if valid
    pub fn nights(&self) -> Option<i64> {
        night_count(&self.params.date_range)
    }

    /// Caption under the estimate heading
    pub fn caption(&self) -> String {
        match self.nights() {
            Some(nights) => format!("Based on {} nights.", nights),
            None => "Based on your selections.".to_string(),
        }
    }

    /// Booking is offered only for a priced trip
    pub fn can_proceed_to_booking(&self) -> bool {
        self.total() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::models::trip::DateRange;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_unchanged_total_starts_no_transition() {
        let mut session = EstimatorSession::new(
            &EstimatorConfig::default(),
            TripParameters::initial(today()),
            ManualClock::new(),
        );
        let update = session.update(TripParameters::initial(today())).unwrap();
        assert!(!update.total_changed());
        assert!(update.transition.is_none());
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn test_cleared_dates_disable_booking() {
        let mut session = EstimatorSession::new(
            &EstimatorConfig::default(),
            TripParameters::initial(today()),
            ManualClock::new(),
        );
        assert!(session.can_proceed_to_booking());

        let mut params = session.params().clone();
        params.date_range = DateRange::starting(today());
        let update = session.update(params).unwrap();

        assert_eq!(update.total, 0);
        assert!(session.breakdown().is_empty());
        assert!(!session.can_proceed_to_booking());
        assert_eq!(session.caption(), "Based on your selections.");
    }

    #[test]
    fn test_update_after_dispose_fails() {
        let mut session = EstimatorSession::new(
            &EstimatorConfig::default(),
            TripParameters::initial(today()),
            ManualClock::new(),
        );
        session.dispose();
        let mut params = session.params().clone();
        params.traveler_count = 4;
        assert_eq!(session.update(params).unwrap_err(), PresenterError::Disposed);
        // The rejected update leaves the previous estimate in place
        assert_eq!(session.total(), 88_000);
    }
}

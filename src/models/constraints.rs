//! Caller-supplied routing constraints.

use serde::{Deserialize, Serialize};

/// Constraints passed with an optimization request.
///
/// Only `return_to_start` changes the routes that are built. Every other
/// field is advisory: the optimizer checks the finished routes against it
/// and reports breaches as [`Advisory`](super::Advisory) entries, but never
/// reshapes a route to satisfy it.
///
/// # Examples
///
/// ```
/// use u_searoute::models::Constraints;
///
/// let c = Constraints::default().with_return_to_start(true).with_max_days_per_trip(14.0);
/// assert!(c.return_to_start);
/// assert_eq!(c.max_days_per_trip, Some(14.0));
/// assert!(c.min_vessel_utilization.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraints {
    /// Close every multi-stop route with a leg back to its first port.
    pub return_to_start: bool,
    /// Longest acceptable trip, in days.
    pub max_days_per_trip: Option<f64>,
    /// Lowest acceptable fleet utilization, in percent.
    pub min_vessel_utilization: Option<f64>,
    /// Lowest acceptable cargo fill per route, in percent.
    pub min_cargo_fill_rate: Option<f64>,
    /// Budget for the whole plan, in USD.
    pub max_total_cost: Option<f64>,
    /// Budget for fuel across the plan, in USD.
    pub max_fuel_cost: Option<f64>,
}

impl Constraints {
    /// Sets whether routes close back to their first port.
    pub fn with_return_to_start(mut self, value: bool) -> Self {
        self.return_to_start = value;
        self
    }

    /// Sets the advisory trip length limit in days.
    pub fn with_max_days_per_trip(mut self, days: f64) -> Self {
        self.max_days_per_trip = Some(days);
        self
    }

    /// Sets the advisory fleet utilization floor in percent.
    pub fn with_min_vessel_utilization(mut self, percent: f64) -> Self {
        self.min_vessel_utilization = Some(percent);
        self
    }

    /// Sets the advisory cargo fill floor in percent.
    pub fn with_min_cargo_fill_rate(mut self, percent: f64) -> Self {
        self.min_cargo_fill_rate = Some(percent);
        self
    }

    /// Sets the advisory total budget in USD.
    pub fn with_max_total_cost(mut self, usd: f64) -> Self {
        self.max_total_cost = Some(usd);
        self
    }

    /// Sets the advisory fuel budget in USD.
    pub fn with_max_fuel_cost(mut self, usd: f64) -> Self {
        self.max_fuel_cost = Some(usd);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_open_loop_without_limits() {
        let c = Constraints::default();
        assert!(!c.return_to_start);
        assert!(c.max_days_per_trip.is_none());
        assert!(c.min_cargo_fill_rate.is_none());
        assert!(c.max_total_cost.is_none());
        assert!(c.max_fuel_cost.is_none());
    }

    #[test]
    fn test_builder() {
        let c = Constraints::default()
            .with_min_vessel_utilization(70.0)
            .with_min_cargo_fill_rate(80.0)
            .with_max_total_cost(250_000.0)
            .with_max_fuel_cost(50_000.0);
        assert_eq!(c.min_vessel_utilization, Some(70.0));
        assert_eq!(c.min_cargo_fill_rate, Some(80.0));
        assert_eq!(c.max_total_cost, Some(250_000.0));
        assert_eq!(c.max_fuel_cost, Some(50_000.0));
    }
}

//! Optimization result and advisory types.

use serde::{Deserialize, Serialize};

use super::Route;

/// A breach of an advisory constraint.
///
/// Advisories are reported alongside a result; they never cause routes to
/// be rejected or rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A route takes longer than the trip limit.
    TripTooLong {
        /// Vessel sailing the route.
        vessel_id: String,
        /// Route duration in days.
        days: f64,
        /// Configured limit in days.
        max_days: f64,
    },
    /// Fleet utilization is below the configured floor.
    LowUtilization {
        /// Achieved utilization in percent.
        percent: f64,
        /// Configured floor in percent.
        minimum: f64,
    },
    /// A route carries less demand than the fill floor of its vessel.
    LowCargoFill {
        /// Vessel sailing the route.
        vessel_id: String,
        /// Demand served over capacity, capped at 100, in percent.
        percent: f64,
        /// Configured floor in percent.
        minimum: f64,
    },
    /// The plan costs more than the total budget.
    OverBudget {
        /// Plan cost in USD.
        total_cost: f64,
        /// Budget in USD.
        budget: f64,
    },
    /// Fuel across the plan costs more than the fuel budget.
    OverFuelBudget {
        /// Fuel cost in USD.
        fuel_cost: f64,
        /// Budget in USD.
        budget: f64,
    },
}

/// Routes for the whole fleet plus fleet-level totals.
///
/// `total_cost` and `total_distance` are the sums of the per-route values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    routes: Vec<Route>,
    total_cost: f64,
    total_distance: f64,
    total_time_days: f64,
    vessel_utilization_percent: f64,
    advisories: Vec<Advisory>,
}

impl OptimizationResult {
    /// Builds a result, deriving the totals from `routes`.
    pub fn from_routes(routes: Vec<Route>, vessel_utilization_percent: f64) -> Self {
        let total_cost = routes.iter().map(|r| r.total_cost()).sum();
        let total_distance = routes.iter().map(|r| r.total_distance()).sum();
        let total_hours: f64 = routes.iter().map(|r| r.total_time()).sum();
        Self {
            routes,
            total_cost,
            total_distance,
            total_time_days: total_hours / 24.0,
            vessel_utilization_percent,
            advisories: Vec::new(),
        }
    }

    /// Attaches advisory findings.
    pub fn with_advisories(mut self, advisories: Vec<Advisory>) -> Self {
        self.advisories = advisories;
        self
    }

    /// Routes in assignment order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Sum of route costs in USD.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Sum of route distances in nautical miles.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of route times in days.
    pub fn total_time_days(&self) -> f64 {
        self.total_time_days
    }

    /// Share of fleet capacity that received at least one route, in percent.
    pub fn vessel_utilization_percent(&self) -> f64 {
        self.vessel_utilization_percent
    }

    /// Advisory constraint breaches.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Total number of port calls across all routes.
    pub fn num_port_calls(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}

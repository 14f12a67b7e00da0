//! Fleet cost report for downstream cost dashboards.
//!
//! Everything here is derived from a finished [`OptimizationResult`] and
//! never feeds back into route construction.

use serde::{Deserialize, Serialize};

use super::CostModel;
use crate::models::{CostBreakdown, OptimizationResult};

/// Fuel share above which slow steaming is suggested.
const FUEL_SHARE_THRESHOLD: f64 = 35.0;
/// Port charge share above which rate negotiation is suggested.
const PORT_SHARE_THRESHOLD: f64 = 25.0;
/// Utilization below which route consolidation is suggested.
const UTILIZATION_THRESHOLD: f64 = 70.0;

/// Percentage of the fleet total per category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostShares {
    /// Fuel share.
    pub fuel: f64,
    /// Port charge share.
    pub port_charges: f64,
    /// Operating share.
    pub operating: f64,
    /// Crew share.
    pub crew: f64,
    /// Maintenance share.
    pub maintenance: f64,
}

/// Cost figures for one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselCostRow {
    /// Vessel sailing the route.
    pub vessel_id: String,
    /// Route cost split.
    pub breakdown: CostBreakdown,
    /// Maintenance accrued over the route distance.
    pub maintenance: f64,
    /// Route cost plus maintenance.
    pub total: f64,
    /// Route distance in NM.
    pub distance: f64,
    /// Number of port calls.
    pub port_calls: usize,
}

/// A cost-saving hint with its estimated saving in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Fuel dominates; reduce speed to cut consumption.
    SlowSteaming {
        /// Estimated saving.
        savings: f64,
    },
    /// Port charges dominate; negotiate or consolidate calls.
    PortChargeNegotiation {
        /// Estimated saving.
        savings: f64,
    },
    /// Much of the fleet is idle; consolidate routes.
    RouteConsolidation {
        /// Estimated saving.
        savings: f64,
    },
}

/// Fleet-wide cost totals by category.
///
/// Fuel, port charges, operating and crew are the sums of the route
/// breakdowns, so they add up to the result's `total_cost`. Maintenance is
/// accrued on top from the distance sailed.
///
/// # Examples
///
/// ```
/// use u_searoute::distance::LatLng;
/// use u_searoute::evaluation::{CostModel, FleetCostReport};
/// use u_searoute::models::{Constraints, Port, TimeWindows, Vessel};
/// use u_searoute::optimizer::optimize;
///
/// let vessels = vec![Vessel::new("V1", "V1", 5000.0, 14.0)];
/// let ports = vec![
///     Port::new("A", "A", LatLng::new(-6.10, 106.80)),
///     Port::new("B", "B", LatLng::new(-7.25, 112.75)),
/// ];
/// let result = optimize(&vessels, &ports, &TimeWindows::new(), &Constraints::default()).unwrap();
/// let report = FleetCostReport::from_result(&result, &CostModel::default());
/// assert!((report.route_total() - result.total_cost()).abs() < 1e-6);
/// assert!(report.maintenance > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetCostReport {
    /// Fuel across the fleet.
    pub fuel: f64,
    /// Port charges across the fleet.
    pub port_charges: f64,
    /// Operating cost across the fleet.
    pub operating: f64,
    /// Crew cost across the fleet.
    pub crew: f64,
    /// Maintenance across the fleet.
    pub maintenance: f64,
    /// All categories, maintenance included.
    pub total: f64,
    /// Fleet utilization carried over from the result.
    pub utilization_percent: f64,
    /// One row per route.
    pub vessels: Vec<VesselCostRow>,
}

impl FleetCostReport {
    /// Aggregates route costs and accrues maintenance.
    pub fn from_result(result: &OptimizationResult, model: &CostModel) -> Self {
        let vessels: Vec<VesselCostRow> = result
            .routes()
            .iter()
            .map(|route| {
                let breakdown = route.cost_breakdown();
                let maintenance = model.maintenance(route.total_distance());
                VesselCostRow {
                    vessel_id: route.vessel_id().to_string(),
                    breakdown,
                    maintenance,
                    total: breakdown.total() + maintenance,
                    distance: route.total_distance(),
                    port_calls: route.len(),
                }
            })
            .collect();

        let sum = vessels
            .iter()
            .fold(CostBreakdown::default(), |acc, row| acc + row.breakdown);
        let maintenance: f64 = vessels.iter().map(|row| row.maintenance).sum();

        Self {
            fuel: sum.fuel,
            port_charges: sum.port_charges,
            operating: sum.operating,
            crew: sum.crew,
            maintenance,
            total: sum.total() + maintenance,
            utilization_percent: result.vessel_utilization_percent(),
            vessels,
        }
    }

    /// Total without maintenance; equals the result's `total_cost`.
    pub fn route_total(&self) -> f64 {
        self.fuel + self.port_charges + self.operating + self.crew
    }

    /// Category shares of `total` in percent; all zero when `total` is zero.
    pub fn shares(&self) -> CostShares {
        if self.total <= 0.0 {
            return CostShares::default();
        }
        let pct = |v: f64| v / self.total * 100.0;
        CostShares {
            fuel: pct(self.fuel),
            port_charges: pct(self.port_charges),
            operating: pct(self.operating),
            crew: pct(self.crew),
            maintenance: pct(self.maintenance),
        }
    }

    /// Indicative saving: 15% of fuel, 10% of port charges, 8% of total.
    pub fn savings_potential(&self) -> f64 {
        0.15 * self.fuel + 0.10 * self.port_charges + 0.08 * self.total
    }

    /// Hints triggered by the category shares and fleet utilization.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        let shares = self.shares();
        let mut out = Vec::new();
        if shares.fuel > FUEL_SHARE_THRESHOLD {
            out.push(Suggestion::SlowSteaming {
                savings: 0.15 * self.fuel,
            });
        }
        if shares.port_charges > PORT_SHARE_THRESHOLD {
            out.push(Suggestion::PortChargeNegotiation {
                savings: 0.20 * self.port_charges,
            });
        }
        if self.utilization_percent < UTILIZATION_THRESHOLD {
            out.push(Suggestion::RouteConsolidation {
                savings: 0.08 * self.total,
            });
        }
        out
    }
}

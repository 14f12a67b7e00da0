//! Route pricing, fleet metrics, and cost reporting.
//!
//! - [`CostModel`] — per-route cost and fuel figures
//! - [`vessel_utilization`], [`check_advisories`] — fleet-level checks run after routing
//! - [`FleetCostReport`] — category totals, shares, and saving hints

mod cost;
mod fleet;
mod report;

pub use cost::{CostModel, CostRates, FuelEstimate};
pub use fleet::{cargo_fill_percent, check_advisories, vessel_utilization};
pub use report::{CostShares, FleetCostReport, Suggestion, VesselCostRow};

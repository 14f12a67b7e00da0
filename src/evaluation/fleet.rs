//! Fleet-level metrics and advisory constraint checks.

use tracing::warn;

use crate::models::{Advisory, Constraints, Route, Vessel};

/// Share of fleet capacity that received at least one route, in percent.
///
/// Each vessel counts once no matter how many routes it sails. Returns 0
/// when total capacity is not positive or no vessel has a route. This
/// measures activated capacity, not cargo delivered against demand.
///
/// # Examples
///
/// ```
/// use u_searoute::evaluation::vessel_utilization;
/// use u_searoute::models::{Route, Vessel};
///
/// let vessels = vec![
///     Vessel::new("V1", "V1", 3000.0, 12.0),
///     Vessel::new("V2", "V2", 1000.0, 12.0),
/// ];
/// let routes = vec![Route::new("V1")];
/// assert_eq!(vessel_utilization(&routes, &vessels), 75.0);
/// ```
pub fn vessel_utilization(routes: &[Route], vessels: &[Vessel]) -> f64 {
    let total: f64 = vessels.iter().map(|v| v.capacity()).sum();
    if total.is_nan() || total <= 0.0 {
        return 0.0;
    }
    let used: f64 = vessels
        .iter()
        .filter(|v| routes.iter().any(|r| r.vessel_id() == v.id()))
        .map(|v| v.capacity())
        .sum();
    (used / total * 100.0).clamp(0.0, 100.0)
}

/// Demand served by a route over its vessel's capacity, capped at 100.
///
/// `None` when the vessel has no positive capacity.
pub fn cargo_fill_percent(route: &Route, vessel: &Vessel) -> Option<f64> {
    let capacity = vessel.capacity();
    if capacity.is_nan() || capacity <= 0.0 {
        return None;
    }
    Some((route.demand() / capacity).min(1.0) * 100.0)
}

/// Checks finished routes against the advisory constraints.
///
/// Routes are never changed; every breach is returned and logged.
pub fn check_advisories(
    routes: &[Route],
    vessels: &[Vessel],
    utilization_percent: f64,
    constraints: &Constraints,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    for route in routes {
        let days = route.total_time() / 24.0;
        if let Some(max_days) = constraints.max_days_per_trip {
            if days > max_days {
                advisories.push(Advisory::TripTooLong {
                    vessel_id: route.vessel_id().to_string(),
                    days,
                    max_days,
                });
            }
        }

        if let Some(minimum) = constraints.min_cargo_fill_rate {
            let fill = vessels
                .iter()
                .find(|v| v.id() == route.vessel_id())
                .and_then(|v| cargo_fill_percent(route, v));
            if let Some(percent) = fill.filter(|&p| p < minimum) {
                advisories.push(Advisory::LowCargoFill {
                    vessel_id: route.vessel_id().to_string(),
                    percent,
                    minimum,
                });
            }
        }
    }

    if let Some(minimum) = constraints.min_vessel_utilization {
        if utilization_percent < minimum {
            advisories.push(Advisory::LowUtilization {
                percent: utilization_percent,
                minimum,
            });
        }
    }

    if let Some(budget) = constraints.max_total_cost {
        let total_cost: f64 = routes.iter().map(|r| r.total_cost()).sum();
        if total_cost > budget {
            advisories.push(Advisory::OverBudget { total_cost, budget });
        }
    }

    if let Some(budget) = constraints.max_fuel_cost {
        let fuel_cost: f64 = routes.iter().map(|r| r.cost_breakdown().fuel).sum();
        if fuel_cost > budget {
            advisories.push(Advisory::OverFuelBudget { fuel_cost, budget });
        }
    }

    for advisory in &advisories {
        warn!(?advisory, "advisory constraint not met");
    }
    advisories
}

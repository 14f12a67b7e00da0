//! Time-window-aware nearest-neighbor route builder.
//!
//! # Algorithm
//!
//! Starts at the first port of the cluster in input order. At each step the
//! projected arrival hour is `(sailed distance / speed) mod 24`; a candidate
//! is eligible when that hour falls inside its window. The nearest eligible
//! port is chosen. When no port is eligible the nearest unvisited port is
//! taken regardless of windows, so every port is always visited.
//!
//! Windows are soft: they steer the visiting order but never drop a port.
//!
//! # Complexity
//!
//! O(n²) where n = ports in the cluster.
//!
//! # Reference
//!
//! Solomon, M.M. (1987). "Algorithms for the Vehicle Routing and Scheduling
//! Problems with Time Window Constraints", *Operations Research* 35(2), 254-265.

use tracing::{debug, warn};

use crate::distance::DistanceMatrix;
use crate::error::InvalidCoordinateError;
use crate::evaluation::CostModel;
use crate::models::{Constraints, Port, Route, TimeWindows, Vessel};

/// Builds one route for `vessel` through every port in `ports`.
///
/// - No ports: an empty route with all totals zero.
/// - One port: no sailing; cost is the port's berthing fee plus one day of
///   operating and crew cost.
/// - Otherwise: nearest-neighbor order under soft time windows. With
///   `constraints.return_to_start` the leg back to the first port is added
///   to the distance but the first port is not repeated.
///
/// Time is distance over `max(speed, 1)` hours. Fuel and cost come from
/// `costs`.
///
/// # Errors
///
/// Returns [`InvalidCoordinateError`] if any port has a non-finite coordinate.
///
/// # Examples
///
/// ```
/// use u_searoute::constructive::solve_route;
/// use u_searoute::distance::LatLng;
/// use u_searoute::evaluation::CostModel;
/// use u_searoute::models::{Constraints, Port, TimeWindow, TimeWindows, Vessel};
///
/// let ports = vec![
///     Port::new("A", "A", LatLng::new(0.0, 0.0)),
///     Port::new("B", "B", LatLng::new(0.0, 1.0)),
///     Port::new("C", "C", LatLng::new(0.0, 3.0)),
/// ];
/// let refs: Vec<&Port> = ports.iter().collect();
/// let vessel = Vessel::new("V1", "V1", 5000.0, 10.0);
/// // B only opens later in the day, so C is visited first
/// let windows = TimeWindows::new().with("B", TimeWindow::new(5.0, 10.0).unwrap());
///
/// let route = solve_route(&vessel, &refs, &windows, &Constraints::default(), &CostModel::default())
///     .unwrap();
/// assert_eq!(route.port_ids(), vec!["A", "C", "B"]);
/// ```
pub fn solve_route(
    vessel: &Vessel,
    ports: &[&Port],
    windows: &TimeWindows,
    constraints: &Constraints,
    costs: &CostModel,
) -> Result<Route, InvalidCoordinateError> {
    let mut route = Route::new(vessel.id());

    match ports {
        [] => return Ok(route),
        [only] => {
            only.location().validate()?;
            route.push_port((*only).clone());
            route.set_cost(costs.single_port_breakdown(vessel, only));
            return Ok(route);
        }
        _ => {}
    }

    let n = ports.len();
    let dm = DistanceMatrix::from_ports(ports)?;

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    let mut distance = 0.0;
    visited[0] = true;
    order.push(0);

    while order.len() < n {
        let hour = arrival_hour(distance, vessel.speed());
        let seen = &visited;
        let unvisited = move || (0..n).filter(move |&i| !seen[i]);

        let next = match dm.nearest_neighbor(
            current,
            unvisited().filter(|&i| windows.get(ports[i].id()).contains(hour)),
        ) {
            Some(i) => i,
            None => {
                let Some(i) = dm.nearest_neighbor(current, unvisited()) else {
                    break;
                };
                warn!(
                    vessel = vessel.id(),
                    port = ports[i].id(),
                    hour,
                    "no port open at arrival, taking nearest"
                );
                i
            }
        };

        distance += dm.get(current, next);
        visited[next] = true;
        order.push(next);
        current = next;
    }

    if constraints.return_to_start {
        distance += dm.get(current, 0);
        route.set_closes_loop(true);
    }

    if vessel.speed().is_nan() || vessel.speed() <= 0.0 {
        warn!(
            vessel = vessel.id(),
            speed = vessel.speed(),
            "non-positive speed, timing at 1 knot"
        );
    }
    let time = distance / vessel.effective_speed();

    for &i in &order {
        route.push_port(ports[i].clone());
    }
    route.set_totals(distance, time, costs.sea_fuel(vessel, time));
    route.set_cost(costs.route_breakdown(vessel, time, n));

    debug!(
        vessel = vessel.id(),
        stops = n,
        distance,
        time,
        cost = route.total_cost(),
        "route built"
    );
    Ok(route)
}

/// Hour of day on arrival after sailing `distance` NM from departure at 00:00.
fn arrival_hour(distance: f64, speed: f64) -> f64 {
    if speed.is_nan() || speed <= 0.0 {
        return 0.0;
    }
    (distance / speed).rem_euclid(24.0)
}

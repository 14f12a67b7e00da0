//! End-to-end fleet optimization pipeline.
//!
//! # Pipeline
//!
//! 1. Validate the input (nothing is computed before this passes)
//! 2. Cluster ports, one cluster per vessel at most
//! 3. Pair vessels with clusters by capacity and demand rank
//! 4. Build one route per pair
//! 5. Aggregate totals, utilization, and advisories
//!
//! The [`Deadline`] is checked before clustering, after each clustering
//! round, and before each route. Any failure aborts the call without a
//! partial result.

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;

use tracing::{debug, info};

use super::{Deadline, OptimizerConfig};
use crate::assignment::assign_vessels;
use crate::clustering::cluster_ports_until;
use crate::constructive::solve_route;
use crate::error::{InputError, RoutingError};
use crate::evaluation::{check_advisories, vessel_utilization, CostModel};
use crate::models::{Constraints, OptimizationResult, Port, Route, TimeWindows, Vessel};

/// Runs the fleet routing pipeline with a fixed configuration.
///
/// Holds no state between calls; one optimizer can serve many requests.
///
/// # Examples
///
/// ```
/// use u_searoute::distance::LatLng;
/// use u_searoute::models::{Constraints, Port, TimeWindows, Vessel};
/// use u_searoute::optimizer::{Optimizer, OptimizerConfig};
///
/// let vessels = vec![Vessel::new("V1", "Nusantara", 5000.0, 14.0)];
/// let ports = vec![
///     Port::new("A", "Tanjung Priok", LatLng::new(-6.10, 106.80)),
///     Port::new("B", "Tanjung Perak", LatLng::new(-7.25, 112.75)),
/// ];
/// let optimizer = Optimizer::new(OptimizerConfig::default());
/// let result = optimizer
///     .optimize(&vessels, &ports, &TimeWindows::new(), &Constraints::default())
///     .unwrap();
/// assert_eq!(result.num_routes(), 1);
/// assert_eq!(result.vessel_utilization_percent(), 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Plans routes for `vessels` over `ports`.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::Input`] for empty, duplicated, or malformed input
    /// - [`RoutingError::InvalidCoordinate`] for a non-finite port position
    /// - [`RoutingError::Timeout`] when the configured time limit runs out
    pub fn optimize(
        &self,
        vessels: &[Vessel],
        ports: &[Port],
        windows: &TimeWindows,
        constraints: &Constraints,
    ) -> Result<OptimizationResult, RoutingError> {
        let deadline = Deadline::new(self.config.time_limit);
        self.run(vessels, ports, windows, constraints, &deadline)
    }

    /// Like [`optimize`](Self::optimize), also returning
    /// [`RoutingError::Cancelled`] once `stop` is raised.
    pub fn optimize_with_stop_flag(
        &self,
        vessels: &[Vessel],
        ports: &[Port],
        windows: &TimeWindows,
        constraints: &Constraints,
        stop: &AtomicBool,
    ) -> Result<OptimizationResult, RoutingError> {
        let deadline = Deadline::new(self.config.time_limit).with_stop_flag(stop);
        self.run(vessels, ports, windows, constraints, &deadline)
    }

    fn run(
        &self,
        vessels: &[Vessel],
        ports: &[Port],
        windows: &TimeWindows,
        constraints: &Constraints,
        deadline: &Deadline<'_>,
    ) -> Result<OptimizationResult, RoutingError> {
        validate(vessels, ports, windows)?;
        info!(
            vessels = vessels.len(),
            ports = ports.len(),
            return_to_start = constraints.return_to_start,
            "optimization started"
        );

        deadline.check()?;
        let clustering =
            cluster_ports_until(ports, vessels.len(), self.config.max_cluster_rounds, deadline)?;
        debug!(
            clusters = clustering.clusters.len(),
            rounds = clustering.rounds,
            "ports clustered"
        );

        let costs = CostModel::new(self.config.cost_rates);
        let assignments = assign_vessels(vessels, clustering.clusters);
        let mut routes = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            deadline.check()?;
            routes.push(solve_route(
                assignment.vessel,
                assignment.cluster.ports(),
                windows,
                constraints,
                &costs,
            )?);
        }

        if self.config.merge_shared_vessel_routes {
            routes = merge_shared_vessel_routes(routes);
        }

        let utilization = vessel_utilization(&routes, vessels);
        let advisories = check_advisories(&routes, vessels, utilization, constraints);
        let result = OptimizationResult::from_routes(routes, utilization).with_advisories(advisories);

        info!(
            routes = result.num_routes(),
            total_cost = result.total_cost(),
            total_distance = result.total_distance(),
            total_days = result.total_time_days(),
            utilization = result.vessel_utilization_percent(),
            elapsed_ms = u64::try_from(deadline.elapsed().as_millis()).unwrap_or(u64::MAX),
            "optimization finished"
        );
        Ok(result)
    }
}

/// Plans routes with the default configuration.
///
/// Shorthand for `Optimizer::default().optimize(..)`.
pub fn optimize(
    vessels: &[Vessel],
    ports: &[Port],
    windows: &TimeWindows,
    constraints: &Constraints,
) -> Result<OptimizationResult, RoutingError> {
    Optimizer::default().optimize(vessels, ports, windows, constraints)
}

/// Rejects input the pipeline cannot plan for.
fn validate(vessels: &[Vessel], ports: &[Port], windows: &TimeWindows) -> Result<(), RoutingError> {
    if vessels.is_empty() {
        return Err(InputError::NoVessels.into());
    }
    if ports.is_empty() {
        return Err(InputError::NoPorts.into());
    }

    let mut seen = HashSet::new();
    for vessel in vessels {
        if !seen.insert(vessel.id()) {
            return Err(InputError::DuplicateVesselId(vessel.id().to_string()).into());
        }
    }
    let mut seen = HashSet::new();
    for port in ports {
        if !seen.insert(port.id()) {
            return Err(InputError::DuplicatePortId(port.id().to_string()).into());
        }
    }

    for vessel in vessels {
        if !is_non_negative(vessel.capacity()) {
            return Err(InputError::InvalidCapacity {
                vessel_id: vessel.id().to_string(),
            }
            .into());
        }
        let fuel = vessel.fuel_consumption();
        let figures = [
            ("daily operating cost", vessel.daily_operating_cost()),
            ("fuel consumption at sea", fuel.at_sea),
            ("fuel consumption in port", fuel.at_port),
        ];
        if let Some((field, _)) = figures.iter().find(|(_, v)| !is_non_negative(*v)) {
            return Err(InputError::InvalidVesselCost {
                vessel_id: vessel.id().to_string(),
                field: *field,
            }
            .into());
        }
    }
    for port in ports {
        if !is_non_negative(port.berthing_fee()) {
            return Err(InputError::InvalidBerthingFee {
                port_id: port.id().to_string(),
            }
            .into());
        }
    }

    // Windows for ports outside this request are never read
    for (port_id, tw) in windows.iter() {
        if !tw.is_valid() && seen.contains(port_id) {
            return Err(InputError::InvalidTimeWindow {
                port_id: port_id.to_string(),
                open: tw.open(),
                close: tw.close(),
            }
            .into());
        }
    }

    for port in ports {
        port.location().validate()?;
    }
    Ok(())
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Folds routes sharing a vessel into the first route of that vessel.
fn merge_shared_vessel_routes(routes: Vec<Route>) -> Vec<Route> {
    let mut merged: Vec<Route> = Vec::with_capacity(routes.len());
    for route in routes {
        match merged.iter_mut().find(|r| r.vessel_id() == route.vessel_id()) {
            Some(existing) => existing.absorb(route),
            None => merged.push(route),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::LatLng;
    use crate::error::InvalidCoordinateError;
    use crate::models::{Advisory, TimeWindow};
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn port(id: &str, lat: f64, lng: f64) -> Port {
        Port::new(id, id, LatLng::new(lat, lng)).with_demand(500.0)
    }

    fn java_sea() -> Vec<Port> {
        vec![
            port("A", -6.10, 106.80),
            port("B", -7.25, 112.75),
            port("C", -1.27, 116.83),
            port("D", -5.13, 119.41),
            port("E", -0.95, 100.35),
        ]
    }

    fn fleet() -> Vec<Vessel> {
        vec![
            Vessel::new("V1", "V1", 5000.0, 14.0),
            Vessel::new("V2", "V2", 3000.0, 12.0),
        ]
    }

    fn run(vessels: &[Vessel], ports: &[Port]) -> Result<OptimizationResult, RoutingError> {
        optimize(vessels, ports, &TimeWindows::new(), &Constraints::default())
    }

    #[test]
    fn test_no_vessels() {
        let err = run(&[], &java_sea()).unwrap_err();
        assert_eq!(err, RoutingError::Input(InputError::NoVessels));
    }

    #[test]
    fn test_no_ports() {
        let err = run(&fleet(), &[]).unwrap_err();
        assert_eq!(err, RoutingError::Input(InputError::NoPorts));
    }

    #[test]
    fn test_empty_vessels_checked_first() {
        let err = run(&[], &[]).unwrap_err();
        assert_eq!(err, RoutingError::Input(InputError::NoVessels));
    }

    #[test]
    fn test_duplicate_ids() {
        let mut ports = java_sea();
        ports.push(port("A", 0.0, 0.0));
        assert_eq!(
            run(&fleet(), &ports).unwrap_err(),
            RoutingError::Input(InputError::DuplicatePortId("A".into()))
        );

        let vessels = vec![
            Vessel::new("V1", "V1", 5000.0, 14.0),
            Vessel::new("V1", "V1b", 3000.0, 12.0),
        ];
        assert_eq!(
            run(&vessels, &java_sea()).unwrap_err(),
            RoutingError::Input(InputError::DuplicateVesselId("V1".into()))
        );
    }

    #[test]
    fn test_invalid_capacity() {
        let vessels = vec![Vessel::new("V1", "V1", f64::NAN, 14.0)];
        assert!(matches!(
            run(&vessels, &java_sea()),
            Err(RoutingError::Input(InputError::InvalidCapacity { .. }))
        ));
    }

    #[test]
    fn test_invalid_time_window() {
        let windows: TimeWindows =
            serde_json::from_str(r#"{"B": {"open": 6.0, "close": 30.0}}"#).expect("valid json");
        let err = optimize(&fleet(), &java_sea(), &windows, &Constraints::default()).unwrap_err();
        assert_eq!(
            err,
            RoutingError::Input(InputError::InvalidTimeWindow {
                port_id: "B".into(),
                open: 6.0,
                close: 30.0,
            })
        );
    }

    #[test]
    fn test_overnight_window_accepted() {
        let windows: TimeWindows =
            serde_json::from_str(r#"{"B": {"open": 22.0, "close": 6.0}}"#).expect("valid json");
        let result = optimize(&fleet(), &java_sea(), &windows, &Constraints::default()).expect("valid");
        assert_eq!(result.num_port_calls(), 5);
    }

    #[test]
    fn test_invalid_vessel_cost() {
        let vessels = vec![Vessel::new("V1", "V1", 5000.0, 14.0).with_daily_operating_cost(-1e7)];
        assert_eq!(
            run(&vessels, &java_sea()).unwrap_err(),
            RoutingError::Input(InputError::InvalidVesselCost {
                vessel_id: "V1".into(),
                field: "daily operating cost",
            })
        );

        let vessels = vec![Vessel::new("V1", "V1", 5000.0, 14.0).with_fuel_consumption(f64::NAN, 2.0)];
        assert_eq!(
            run(&vessels, &java_sea()).unwrap_err(),
            RoutingError::Input(InputError::InvalidVesselCost {
                vessel_id: "V1".into(),
                field: "fuel consumption at sea",
            })
        );

        let vessels = vec![Vessel::new("V1", "V1", 5000.0, 14.0).with_fuel_consumption(20.0, -1.0)];
        assert!(matches!(
            run(&vessels, &java_sea()),
            Err(RoutingError::Input(InputError::InvalidVesselCost { field: "fuel consumption in port", .. }))
        ));
    }

    #[test]
    fn test_invalid_berthing_fee() {
        let mut ports = java_sea();
        ports[2] = port("C", -1.27, 116.83).with_berthing_fee(-100.0);
        assert_eq!(
            run(&fleet(), &ports).unwrap_err(),
            RoutingError::Input(InputError::InvalidBerthingFee { port_id: "C".into() })
        );

        ports[2] = port("C", -1.27, 116.83).with_berthing_fee(f64::INFINITY);
        assert!(matches!(
            run(&fleet(), &ports),
            Err(RoutingError::Input(InputError::InvalidBerthingFee { .. }))
        ));
    }

    #[test]
    fn test_zero_cluster_rounds_still_plans() {
        let vessels = vec![Vessel::new("V1", "V1", 5000.0, 14.0)];
        let ports = &java_sea()[..3];
        let optimizer = Optimizer::new(OptimizerConfig::default().with_max_cluster_rounds(0));
        let result = optimizer
            .optimize(&vessels, ports, &TimeWindows::new(), &Constraints::default())
            .expect("valid");
        assert_eq!(result.num_routes(), 1);
        assert_eq!(result.num_port_calls(), 3);
    }

    #[test]
    fn test_window_for_unknown_port_ignored() {
        let windows: TimeWindows =
            serde_json::from_str(r#"{"Z": {"open": 30.0, "close": 6.0}}"#).expect("valid json");
        assert!(optimize(&fleet(), &java_sea(), &windows, &Constraints::default()).is_ok());
    }

    #[test]
    fn test_invalid_coordinate() {
        let mut ports = java_sea();
        ports.push(port("X", f64::NAN, 100.0));
        assert!(matches!(
            run(&fleet(), &ports),
            Err(RoutingError::InvalidCoordinate(InvalidCoordinateError { .. }))
        ));
    }

    #[test]
    fn test_totals_are_route_sums() {
        let result = run(&fleet(), &java_sea()).expect("valid");
        let cost: f64 = result.routes().iter().map(|r| r.total_cost()).sum();
        let distance: f64 = result.routes().iter().map(|r| r.total_distance()).sum();
        let hours: f64 = result.routes().iter().map(|r| r.total_time()).sum();
        assert!((result.total_cost() - cost).abs() < 1e-6);
        assert!((result.total_distance() - distance).abs() < 1e-6);
        assert!((result.total_time_days() - hours / 24.0).abs() < 1e-9);
        assert_eq!(result.num_port_calls(), 5);
        assert!(result.advisories().is_empty());
    }

    #[test]
    fn test_every_port_served_once() {
        let result = run(&fleet(), &java_sea()).expect("valid");
        let mut ids: Vec<&str> = result
            .routes()
            .iter()
            .flat_map(|r| r.port_ids())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_more_vessels_than_ports() {
        let vessels = vec![
            Vessel::new("V1", "V1", 3000.0, 12.0),
            Vessel::new("V2", "V2", 1000.0, 12.0),
            Vessel::new("V3", "V3", 6000.0, 12.0),
        ];
        let ports = vec![port("A", -6.10, 106.80)];
        let result = run(&vessels, &ports).expect("valid");
        assert_eq!(result.num_routes(), 1);
        assert_eq!(result.routes()[0].vessel_id(), "V3");
        assert!((result.vessel_utilization_percent() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_timeout() {
        let optimizer = Optimizer::new(OptimizerConfig::default().with_time_limit(Duration::ZERO));
        let err = optimizer
            .optimize(&fleet(), &java_sea(), &TimeWindows::new(), &Constraints::default())
            .unwrap_err();
        assert!(matches!(err, RoutingError::Timeout { .. }));
    }

    #[test]
    fn test_cancelled() {
        let stop = AtomicBool::new(false);
        stop.store(true, Ordering::Relaxed);
        let err = Optimizer::default()
            .optimize_with_stop_flag(
                &fleet(),
                &java_sea(),
                &TimeWindows::new(),
                &Constraints::default(),
                &stop,
            )
            .unwrap_err();
        assert_eq!(err, RoutingError::Cancelled);
    }

    #[test]
    fn test_validation_precedes_deadline() {
        let optimizer = Optimizer::new(OptimizerConfig::default().with_time_limit(Duration::ZERO));
        let err = optimizer
            .optimize(&[], &java_sea(), &TimeWindows::new(), &Constraints::default())
            .unwrap_err();
        assert_eq!(err, RoutingError::Input(InputError::NoVessels));
    }

    #[test]
    fn test_advisories_reported() {
        let vessels = vec![
            Vessel::new("V1", "V1", 5000.0, 14.0),
            Vessel::new("V2", "V2", 5000.0, 14.0),
        ];
        let ports = vec![port("A", -6.10, 106.80)];
        let constraints = Constraints::default().with_min_vessel_utilization(80.0);
        let result = optimize(&vessels, &ports, &TimeWindows::new(), &constraints).expect("valid");
        assert_eq!(
            result.advisories(),
            &[Advisory::LowUtilization {
                percent: 50.0,
                minimum: 80.0,
            }]
        );
    }

    #[test]
    fn test_windows_change_order_not_coverage() {
        let vessels = vec![Vessel::new("V1", "V1", 5000.0, 14.0)];
        let windows = TimeWindows::new()
            .with("B", TimeWindow::new(20.0, 21.0).expect("valid"))
            .with("C", TimeWindow::new(20.0, 21.0).expect("valid"));
        let result = optimize(&vessels, &java_sea(), &windows, &Constraints::default()).expect("valid");
        assert_eq!(result.num_routes(), 1);
        assert_eq!(result.routes()[0].len(), 5);
    }

    #[test]
    fn test_merge_shared_vessel_routes() {
        let vessel = Vessel::new("V1", "V1", 5000.0, 14.0);
        let other = Vessel::new("V2", "V2", 3000.0, 12.0);
        let ports = java_sea();
        fn leg(v: &Vessel, p: &[&Port]) -> Route {
            solve_route(v, p, &TimeWindows::new(), &Constraints::default(), &CostModel::default())
                .expect("valid")
        }
        let routes = vec![
            leg(&vessel, &[&ports[0], &ports[1]]),
            leg(&other, &[&ports[2]]),
            leg(&vessel, &[&ports[3], &ports[4]]),
        ];
        let cost: f64 = routes.iter().map(|r| r.total_cost()).sum();
        let distance: f64 = routes.iter().map(|r| r.total_distance()).sum();

        let merged = merge_shared_vessel_routes(routes);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].vessel_id(), "V1");
        assert_eq!(merged[0].port_ids(), vec!["A", "B", "D", "E"]);
        assert_eq!(merged[1].vessel_id(), "V2");

        let merged_cost: f64 = merged.iter().map(|r| r.total_cost()).sum();
        let merged_distance: f64 = merged.iter().map(|r| r.total_distance()).sum();
        assert!((merged_cost - cost).abs() < 1e-6);
        assert!((merged_distance - distance).abs() < 1e-6);
    }

    #[test]
    fn test_merge_flag_keeps_one_route_per_vessel() {
        let optimizer =
            Optimizer::new(OptimizerConfig::default().with_merge_shared_vessel_routes(true));
        let result = optimizer
            .optimize(&fleet(), &java_sea(), &TimeWindows::new(), &Constraints::default())
            .expect("valid");
        let mut ids: Vec<&str> = result.routes().iter().map(|r| r.vessel_id()).collect();
        let n = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);
        assert_eq!(result.num_port_calls(), 5);
    }

    #[test]
    fn test_deterministic() {
        let a = run(&fleet(), &java_sea()).expect("valid");
        let b = run(&fleet(), &java_sea()).expect("valid");
        assert_eq!(a, b);
    }
}

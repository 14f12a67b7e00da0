use proptest::prelude::*;
use u_searoute::distance::LatLng;
use u_searoute::models::{Constraints, Port, TimeWindow, TimeWindows, Vessel};
use u_searoute::optimizer::optimize;

fn coord() -> impl Strategy<Value = (f64, f64)> {
    (-70.0f64..70.0, -180.0f64..180.0)
}

proptest! {
    #[test]
    fn prop_plan_invariants(
        fleet in prop::collection::vec((0.0f64..20_000.0, 0.0f64..25.0), 1..5),
        coords in prop::collection::vec(coord(), 1..20),
        open in 0.0f64..20.0,
        back in any::<bool>(),
    ) {
        let vessels: Vec<Vessel> = fleet
            .iter()
            .enumerate()
            .map(|(i, &(cap, speed))| Vessel::new(format!("V{i}"), "v", cap, speed))
            .collect();
        let ports: Vec<Port> = coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lng))| {
                Port::new(format!("P{i}"), "p", LatLng::new(lat, lng)).with_demand(i as f64 * 10.0)
            })
            .collect();
        let tw = TimeWindow::new(open, open + 4.0).expect("valid");
        let windows = ports
            .iter()
            .step_by(3)
            .fold(TimeWindows::new(), |w, p| w.with(p.id(), tw));
        let constraints = Constraints::default().with_return_to_start(back);

        let result = optimize(&vessels, &ports, &windows, &constraints).expect("valid input");

        prop_assert!(result.num_routes() <= vessels.len());
        prop_assert_eq!(result.num_port_calls(), ports.len());

        let cost: f64 = result.routes().iter().map(|r| r.total_cost()).sum();
        let distance: f64 = result.routes().iter().map(|r| r.total_distance()).sum();
        prop_assert!((result.total_cost() - cost).abs() < 1e-6 * cost.max(1.0));
        prop_assert!((result.total_distance() - distance).abs() < 1e-6 * distance.max(1.0));

        let u = result.vessel_utilization_percent();
        prop_assert!((0.0..=100.0).contains(&u));
        let capacity: f64 = vessels.iter().map(|v| v.capacity()).sum();
        if capacity <= 0.0 {
            prop_assert_eq!(u, 0.0);
        }
    }
}

//! # u-searoute
//!
//! Maritime fleet routing: groups ports into regional clusters, pairs each
//! cluster with a vessel, and builds a time-window-aware route per pair with
//! fuel and cost figures.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Port, Vessel, TimeWindow, Constraints, Route, OptimizationResult)
//! - [`distance`] — Haversine distance in nautical miles, great-circle paths, distance matrix
//! - [`clustering`] — k-means-style port clustering with real-port representatives
//! - [`assignment`] — Capacity/demand rank pairing of vessels and clusters
//! - [`constructive`] — Nearest-neighbor route builder with soft time windows
//! - [`evaluation`] — Cost model, fleet utilization, advisories, cost report
//! - [`optimizer`] — Validated end-to-end pipeline with time limit and cancellation
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_searoute::distance::LatLng;
//! use u_searoute::models::{Constraints, Port, TimeWindows, Vessel};
//! use u_searoute::optimizer::optimize;
//!
//! let vessels = vec![Vessel::new("V1", "V1", 5000.0, 14.0)];
//! let ports = vec![
//!     Port::new("A", "A", LatLng::new(-6.10, 106.80)),
//!     Port::new("B", "B", LatLng::new(-7.25, 112.75)),
//!     Port::new("C", "C", LatLng::new(-1.27, 116.83)),
//! ];
//! let constraints = Constraints::default().with_return_to_start(true);
//! let result = optimize(&vessels, &ports, &TimeWindows::new(), &constraints).unwrap();
//!
//! let route = &result.routes()[0];
//! assert_eq!(route.len(), 3);
//! assert_eq!(route.port_ids()[0], "A");
//! ```

pub mod assignment;
pub mod clustering;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod optimizer;

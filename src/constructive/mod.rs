//! Route construction for one vessel over one cluster.
//!
//! - [`solve_route`] — Time-window-aware nearest-neighbor (Solomon, 1987), O(n²)

mod nn_tw;

pub use nn_tw::solve_route;

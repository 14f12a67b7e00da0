//! Proximity-based grouping of ports.
//!
//! - [`cluster_ports`] — k-means-style clustering seeded by input order, O(r·n·k)

mod kmeans;

pub use kmeans::{cluster_ports, cluster_ports_until, Cluster, Clustering, DEFAULT_MAX_ROUNDS};

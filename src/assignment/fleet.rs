//! Vessel-to-cluster assignment by capacity and demand rank.
//!
//! # Algorithm
//!
//! Vessels are ranked by capacity and clusters by aggregate solar demand,
//! both descending. Rank `i` vessel serves rank `i` cluster. Clusters beyond
//! the fleet size all go to the largest vessel, which then appears in more
//! than one assignment.
//!
//! Both sorts are stable, so equal capacities and equal demands keep their
//! input order.

use crate::clustering::Cluster;
use crate::models::Vessel;

/// A cluster paired with the vessel that will serve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<'a> {
    /// Serving vessel.
    pub vessel: &'a Vessel,
    /// Ports to visit.
    pub cluster: Cluster<'a>,
    /// Position of the cluster in the clustering output.
    pub cluster_index: usize,
}

/// Pairs vessels with clusters, largest with most demanding.
///
/// Returns one assignment per cluster, ordered by descending cluster
/// demand. Returns nothing when `vessels` is empty.
///
/// # Examples
///
/// ```
/// use u_searoute::assignment::assign_vessels;
/// use u_searoute::clustering::cluster_ports;
/// use u_searoute::distance::LatLng;
/// use u_searoute::models::{Port, Vessel};
///
/// let ports = vec![
///     Port::new("A", "A", LatLng::new(0.0, 0.0)).with_demand(100.0),
///     Port::new("B", "B", LatLng::new(5.0, 5.0)).with_demand(900.0),
/// ];
/// let vessels = vec![
///     Vessel::new("small", "Small", 3000.0, 12.0),
///     Vessel::new("large", "Large", 15000.0, 13.0),
/// ];
/// let clusters = cluster_ports(&ports, vessels.len()).unwrap().clusters;
/// let assignments = assign_vessels(&vessels, clusters);
/// assert_eq!(assignments[0].vessel.id(), "large");
/// assert_eq!(assignments[0].cluster.ports()[0].id(), "B");
/// ```
pub fn assign_vessels<'a>(vessels: &'a [Vessel], clusters: Vec<Cluster<'a>>) -> Vec<Assignment<'a>> {
    let mut ranked_vessels: Vec<&Vessel> = vessels.iter().collect();
    ranked_vessels.sort_by(|a, b| b.capacity().total_cmp(&a.capacity()));

    let Some(&largest) = ranked_vessels.first() else {
        return Vec::new();
    };

    let mut ranked_clusters: Vec<(usize, f64, Cluster<'a>)> = clusters
        .into_iter()
        .enumerate()
        .map(|(i, c)| (i, c.demand(), c))
        .collect();
    ranked_clusters.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked_clusters
        .into_iter()
        .enumerate()
        .map(|(rank, (cluster_index, _, cluster))| Assignment {
            vessel: ranked_vessels.get(rank).copied().unwrap_or(largest),
            cluster,
            cluster_index,
        })
        .collect()
}

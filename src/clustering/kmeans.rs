//! Port clustering with real-port representatives.
//!
//! # Algorithm
//!
//! A k-means variant over geographic positions. The first `k` ports seed the
//! representatives. Each round assigns every port to the representative at
//! the smallest haversine distance, then replaces each representative with
//! the member port closest (in degree space) to the mean position of its
//! cluster. Representatives are always real ports, never synthetic points.
//! The loop stops when no representative changes or the round limit is hit.
//!
//! # Complexity
//!
//! O(r · n · k) where r = rounds (≤ `max_rounds`), n = ports, k = clusters.
//!
//! # Determinism
//!
//! No randomness: seeding follows input order, and distance ties go to the
//! lowest-indexed representative.

use tracing::debug;

use crate::distance::{haversine_distance, LatLng};
use crate::error::RoutingError;
use crate::models::Port;
use crate::optimizer::Deadline;

/// Round limit applied by [`cluster_ports`].
pub const DEFAULT_MAX_ROUNDS: usize = 100;

/// A non-empty group of ports served by one route.
///
/// Members keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<'a> {
    ports: Vec<&'a Port>,
    representative: &'a Port,
}

impl<'a> Cluster<'a> {
    /// Member ports in input order.
    pub fn ports(&self) -> &[&'a Port] {
        &self.ports
    }

    /// The member that stood in for the cluster centre.
    pub fn representative(&self) -> &'a Port {
        self.representative
    }

    /// Number of member ports.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Always `false` for clusters produced by this module.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Monthly solar demand summed over the members.
    pub fn demand(&self) -> f64 {
        self.ports.iter().map(|p| p.solar_demand()).sum()
    }
}

/// Clusters together with the number of rounds it took to produce them.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering<'a> {
    /// Non-empty clusters in representative order.
    pub clusters: Vec<Cluster<'a>>,
    /// Assignment rounds executed (0 when every port is its own cluster).
    pub rounds: usize,
}

/// Groups `ports` into at most `k` non-empty clusters.
///
/// With `ports.len() <= k` every port becomes its own cluster. Otherwise
/// runs up to [`DEFAULT_MAX_ROUNDS`] rounds. With `k == 0` no clusters are
/// produced.
///
/// # Examples
///
/// ```
/// use u_searoute::clustering::cluster_ports;
/// use u_searoute::distance::LatLng;
/// use u_searoute::models::Port;
///
/// let ports = vec![
///     Port::new("A", "A", LatLng::new(0.0, 0.0)),
///     Port::new("B", "B", LatLng::new(0.0, 0.5)),
///     Port::new("C", "C", LatLng::new(10.0, 10.0)),
/// ];
/// let clustering = cluster_ports(&ports, 2).unwrap();
/// assert_eq!(clustering.clusters.len(), 2);
/// assert_eq!(clustering.clusters.iter().map(|c| c.len()).sum::<usize>(), 3);
/// ```
pub fn cluster_ports(ports: &[Port], k: usize) -> Result<Clustering<'_>, RoutingError> {
    cluster_ports_until(ports, k, DEFAULT_MAX_ROUNDS, &Deadline::unbounded())
}

/// Like [`cluster_ports`], with an explicit round limit and a deadline
/// checked before every round. At least one assignment round always runs,
/// so a limit of 0 behaves like 1.
pub fn cluster_ports_until<'a>(
    ports: &'a [Port],
    k: usize,
    max_rounds: usize,
    deadline: &Deadline<'_>,
) -> Result<Clustering<'a>, RoutingError> {
    for port in ports {
        port.location().validate()?;
    }

    if ports.len() <= k {
        let clusters = ports
            .iter()
            .map(|p| Cluster {
                ports: vec![p],
                representative: p,
            })
            .collect();
        return Ok(Clustering {
            clusters,
            rounds: 0,
        });
    }
    if k == 0 {
        return Ok(Clustering {
            clusters: Vec::new(),
            rounds: 0,
        });
    }

    let mut representatives: Vec<usize> = (0..k).collect();
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
    let max_rounds = max_rounds.max(1);
    let mut rounds = 0;

    while rounds < max_rounds {
        deadline.check()?;
        rounds += 1;

        members = vec![Vec::new(); k];
        for (i, port) in ports.iter().enumerate() {
            let mut best = (0, f64::INFINITY);
            for (c, &rep) in representatives.iter().enumerate() {
                let d = haversine_distance(port.location(), ports[rep].location())?;
                if d < best.1 {
                    best = (c, d);
                }
            }
            members[best.0].push(i);
        }

        let mut changed = false;
        for (c, group) in members.iter().enumerate() {
            if let Some(rep) = closest_to_mean(ports, group) {
                if rep != representatives[c] {
                    representatives[c] = rep;
                    changed = true;
                }
            }
        }

        debug!(round = rounds, changed, "clustering round");
        if !changed {
            break;
        }
    }

    let clusters = members
        .into_iter()
        .zip(representatives)
        .filter(|(group, _)| !group.is_empty())
        .map(|(group, rep)| Cluster {
            ports: group.into_iter().map(|i| &ports[i]).collect(),
            representative: &ports[rep],
        })
        .collect();

    Ok(Clustering { clusters, rounds })
}

/// Index of the member nearest to the group's mean position.
fn closest_to_mean(ports: &[Port], group: &[usize]) -> Option<usize> {
    if group.is_empty() {
        return None;
    }
    let n = group.len() as f64;
    let mean = LatLng::new(
        group.iter().map(|&i| ports[i].location().lat).sum::<f64>() / n,
        group.iter().map(|&i| ports[i].location().lng).sum::<f64>() / n,
    );

    let mut best = (group[0], f64::INFINITY);
    for &i in group {
        let d = ports[i].location().degree_distance(&mean);
        if d < best.1 {
            best = (i, d);
        }
    }
    Some(best.0)
}

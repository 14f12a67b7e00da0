//! Dense distance matrix over a set of ports.

use super::haversine_distance;
use crate::error::InvalidCoordinateError;
use crate::models::Port;

/// A dense n×n matrix of haversine distances (NM), stored in row-major order.
///
/// Built once per cluster so the route builder never recomputes a leg.
///
/// # Examples
///
/// ```
/// use u_searoute::distance::{DistanceMatrix, LatLng};
/// use u_searoute::models::Port;
///
/// let ports = vec![
///     Port::new("A", "A", LatLng::new(0.0, 0.0)),
///     Port::new("B", "B", LatLng::new(1.0, 0.0)),
/// ];
/// let refs: Vec<&Port> = ports.iter().collect();
/// let dm = DistanceMatrix::from_ports(&refs).unwrap();
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(0, 1) - 60.04).abs() < 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the haversine matrix for the given ports.
    ///
    /// Fails on the first port with a non-finite coordinate.
    pub fn from_ports(ports: &[&Port]) -> Result<Self, InvalidCoordinateError> {
        let n = ports.len();
        let mut dm = Self::new(n);
        for port in ports {
            port.location().validate()?;
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_distance(ports[i].location(), ports[j].location())?;
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(
        &self,
        from: usize,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let d = self.get(from, c);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::LatLng;

    fn sample_ports() -> Vec<Port> {
        vec![
            Port::new("A", "A", LatLng::new(0.0, 0.0)),
            Port::new("B", "B", LatLng::new(1.0, 0.0)),
            Port::new("C", "C", LatLng::new(0.0, 2.0)),
        ]
    }

    #[test]
    fn test_from_ports() {
        let ports = sample_ports();
        let refs: Vec<&Port> = ports.iter().collect();
        let dm = DistanceMatrix::from_ports(&refs).expect("valid");
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!(dm.get(0, 2) > dm.get(0, 1));
    }

    #[test]
    fn test_symmetric() {
        let ports = sample_ports();
        let refs: Vec<&Port> = ports.iter().collect();
        let dm = DistanceMatrix::from_ports(&refs).expect("valid");
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_ports_invalid_coordinate() {
        let ports = [
            Port::new("A", "A", LatLng::new(0.0, 0.0)),
            Port::new("X", "X", LatLng::new(f64::NAN, 0.0)),
        ];
        let refs: Vec<&Port> = ports.iter().collect();
        assert!(DistanceMatrix::from_ports(&refs).is_err());
    }

    #[test]
    fn test_single_port_invalid_coordinate() {
        let ports = [Port::new("X", "X", LatLng::new(0.0, f64::INFINITY))];
        let refs: Vec<&Port> = ports.iter().collect();
        assert!(DistanceMatrix::from_ports(&refs).is_err());
    }

    #[test]
    fn test_nearest_neighbor() {
        let ports = sample_ports();
        let refs: Vec<&Port> = ports.iter().collect();
        let dm = DistanceMatrix::from_ports(&refs).expect("valid");
        assert_eq!(dm.nearest_neighbor(0, [1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, [2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, Vec::<usize>::new()), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_prefers_first() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 5.0);
        dm.set(0, 2, 5.0);
        assert_eq!(dm.nearest_neighbor(0, [2, 1]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, [1, 2]), Some(1));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}

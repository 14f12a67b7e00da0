//! Great-circle geometry on a spherical Earth.
//!
//! # Algorithm
//!
//! Distances use the haversine formula on a sphere of radius 6371 km,
//! converted to nautical miles. Interpolated paths use spherical linear
//! interpolation along the same geodesic.
//!
//! Every operation rejects non-finite coordinates with
//! [`InvalidCoordinateError`] instead of producing a silent zero.

use serde::{Deserialize, Serialize};

use crate::error::InvalidCoordinateError;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres to nautical miles.
pub const KM_TO_NM: f64 = 0.539957;

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_searoute::distance::LatLng;
///
/// let p = LatLng::new(-6.10, 106.80);
/// assert!(p.validate().is_ok());
/// assert!(LatLng::new(f64::NAN, 0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Fails if either component is NaN or infinite.
    pub fn validate(&self) -> Result<(), InvalidCoordinateError> {
        if self.lat.is_finite() && self.lng.is_finite() {
            Ok(())
        } else {
            Err(InvalidCoordinateError {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }

    /// Euclidean distance in degree space.
    ///
    /// Only meaningful for picking the member nearest to a mean position.
    pub fn degree_distance(&self, other: &LatLng) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

/// Central angle between two validated points, in radians.
fn central_angle(a: &LatLng, b: &LatLng) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lng - a.lng).to_radians();

    let s_phi = (dphi / 2.0).sin();
    let s_lambda = (dlambda / 2.0).sin();
    let h = s_phi * s_phi + phi1.cos() * phi2.cos() * s_lambda * s_lambda;
    let h = h.clamp(0.0, 1.0);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance between two points in nautical miles.
///
/// Symmetric, and exactly zero for identical points.
///
/// # Examples
///
/// ```
/// use u_searoute::distance::{haversine_distance, LatLng};
///
/// let jakarta = LatLng::new(-6.10, 106.80);
/// let surabaya = LatLng::new(-7.25, 112.75);
/// let d = haversine_distance(jakarta, surabaya).unwrap();
/// assert!(d > 350.0 && d < 370.0);
/// assert_eq!(haversine_distance(jakarta, jakarta).unwrap(), 0.0);
/// ```
pub fn haversine_distance(a: LatLng, b: LatLng) -> Result<f64, InvalidCoordinateError> {
    a.validate()?;
    b.validate()?;
    Ok(EARTH_RADIUS_KM * central_angle(&a, &b) * KM_TO_NM)
}

/// Interpolates `segments + 1` points along the geodesic from `a` to `b`.
///
/// The first point is `a` and the last is `b`. Coincident endpoints yield
/// `segments + 1` copies of `a`. With `segments == 0` only `a` is returned.
/// Used for drawing paths, never for routing decisions.
pub fn great_circle_points(
    a: LatLng,
    b: LatLng,
    segments: usize,
) -> Result<Vec<LatLng>, InvalidCoordinateError> {
    a.validate()?;
    b.validate()?;

    if segments == 0 {
        return Ok(vec![a]);
    }

    let delta = central_angle(&a, &b);
    if delta == 0.0 {
        return Ok(vec![a; segments + 1]);
    }

    let (phi1, lambda1) = (a.lat.to_radians(), a.lng.to_radians());
    let (phi2, lambda2) = (b.lat.to_radians(), b.lng.to_radians());
    let sin_delta = delta.sin();

    let points = (0..=segments)
        .map(|i| {
            let f = i as f64 / segments as f64;
            let wa = ((1.0 - f) * delta).sin() / sin_delta;
            let wb = (f * delta).sin() / sin_delta;

            let x = wa * phi1.cos() * lambda1.cos() + wb * phi2.cos() * lambda2.cos();
            let y = wa * phi1.cos() * lambda1.sin() + wb * phi2.cos() * lambda2.sin();
            let z = wa * phi1.sin() + wb * phi2.sin();

            LatLng::new(
                z.atan2((x * x + y * y).sqrt()).to_degrees(),
                y.atan2(x).to_degrees(),
            )
        })
        .collect();

    Ok(points)
}

/// Sum of consecutive haversine legs along `points`, in nautical miles.
///
/// Zero for fewer than two points.
pub fn route_distance(points: &[LatLng]) -> Result<f64, InvalidCoordinateError> {
    points
        .windows(2)
        .try_fold(0.0, |acc, leg| haversine_distance(leg[0], leg[1]).map(|d| acc + d))
}

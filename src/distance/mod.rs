//! Geodesic distances and per-cluster distance matrices.
//!
//! Provides haversine distance in nautical miles, great-circle interpolation
//! for path rendering, and a dense distance matrix over a set of ports.

mod geo;
mod matrix;

pub use geo::{
    great_circle_points, haversine_distance, route_distance, LatLng, EARTH_RADIUS_KM, KM_TO_NM,
};
pub use matrix::DistanceMatrix;

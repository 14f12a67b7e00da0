//! Error types for the routing engine.

use std::time::Duration;

use thiserror::Error;

/// A coordinate that cannot take part in a geodesic computation.
///
/// Raised when latitude or longitude is NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid coordinate (lat={lat}, lng={lng}): values must be finite")]
pub struct InvalidCoordinateError {
    /// Offending latitude.
    pub lat: f64,
    /// Offending longitude.
    pub lng: f64,
}

/// Input rejected at the optimizer boundary, before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The vessel list is empty.
    #[error("no vessels provided")]
    NoVessels,
    /// The port list is empty.
    #[error("no ports provided")]
    NoPorts,
    /// Two ports share an id.
    #[error("duplicate port id `{0}`")]
    DuplicatePortId(String),
    /// Two vessels share an id.
    #[error("duplicate vessel id `{0}`")]
    DuplicateVesselId(String),
    /// A vessel capacity is negative or non-finite.
    #[error("vessel `{vessel_id}` has an invalid capacity")]
    InvalidCapacity {
        /// Vessel with the bad capacity.
        vessel_id: String,
    },
    /// A vessel's daily operating cost or fuel consumption is negative or
    /// non-finite.
    #[error("vessel `{vessel_id}` has an invalid {field}")]
    InvalidVesselCost {
        /// Vessel with the bad figure.
        vessel_id: String,
        /// Which figure failed.
        field: &'static str,
    },
    /// A port berthing fee is negative or non-finite.
    #[error("port `{port_id}` has an invalid berthing fee")]
    InvalidBerthingFee {
        /// Port with the bad fee.
        port_id: String,
    },
    /// A time window bound is non-finite or outside the 24-hour cycle.
    #[error("port `{port_id}` has an invalid time window [{open}, {close}]")]
    InvalidTimeWindow {
        /// Port the window belongs to.
        port_id: String,
        /// Opening hour.
        open: f64,
        /// Closing hour.
        close: f64,
    },
}

/// Crate-level error returned by the optimizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Input validation failed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// A port carries a non-finite coordinate.
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinateError),
    /// The caller-supplied time limit was exceeded.
    #[error("optimization exceeded its time limit after {elapsed:?}")]
    Timeout {
        /// Time spent when the limit was detected.
        elapsed: Duration,
    },
    /// The caller raised the stop flag.
    #[error("optimization cancelled")]
    Cancelled,
}

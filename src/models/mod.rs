//! Domain model types for fleet routing.
//!
//! Provides the caller-owned inputs (ports with demand and charges, vessels
//! with capacity and cost figures, time windows, constraints) and the
//! engine's outputs (routes and the fleet-level result).

mod constraints;
mod port;
mod result;
mod route;
mod vessel;

pub use constraints::Constraints;
pub use port::{
    Port, PortCapacity, PortCharges, PortDemand, PortType, TimeWindow, TimeWindows,
    DEFAULT_BERTHING_FEE,
};
pub use result::{Advisory, OptimizationResult};
pub use route::{CostBreakdown, Route};
pub use vessel::{
    FuelConsumption, Vessel, VesselStatus, DEFAULT_CREW, DEFAULT_DAILY_OPERATING_COST,
    DEFAULT_FUEL_AT_PORT, DEFAULT_FUEL_AT_SEA,
};

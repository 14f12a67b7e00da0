//! Vessel type with capacity, speed, and cost parameters.

use serde::{Deserialize, Serialize};

/// Daily operating cost applied when a vessel does not specify one (USD/day).
pub const DEFAULT_DAILY_OPERATING_COST: f64 = 10_000.0;

/// Crew headcount applied when a vessel does not specify one.
pub const DEFAULT_CREW: u32 = 15;

/// Fuel burned at sea when unspecified (tons/day).
pub const DEFAULT_FUEL_AT_SEA: f64 = 20.0;

/// Fuel burned alongside when unspecified (tons/day).
pub const DEFAULT_FUEL_AT_PORT: f64 = 2.0;

/// Fuel burn rates in tons per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelConsumption {
    /// Burn while sailing.
    #[serde(default = "default_fuel_at_sea")]
    pub at_sea: f64,
    /// Burn while in port.
    #[serde(default = "default_fuel_at_port")]
    pub at_port: f64,
}

fn default_fuel_at_sea() -> f64 {
    DEFAULT_FUEL_AT_SEA
}

fn default_fuel_at_port() -> f64 {
    DEFAULT_FUEL_AT_PORT
}

fn default_daily_operating_cost() -> f64 {
    DEFAULT_DAILY_OPERATING_COST
}

fn default_crew() -> u32 {
    DEFAULT_CREW
}

impl Default for FuelConsumption {
    fn default() -> Self {
        Self {
            at_sea: DEFAULT_FUEL_AT_SEA,
            at_port: DEFAULT_FUEL_AT_PORT,
        }
    }
}

/// Operational status of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VesselStatus {
    /// Idle and ready for assignment.
    #[default]
    Available,
    /// Currently loading cargo.
    Loading,
    /// Under way.
    InTransit,
}

/// A tanker in the fleet. Read-only input to the optimizer.
///
/// # Examples
///
/// ```
/// use u_searoute::models::Vessel;
///
/// let v = Vessel::new("V1", "MT Solar Express", 5000.0, 14.0);
/// assert_eq!(v.id(), "V1");
/// assert_eq!(v.capacity(), 5000.0);
/// assert_eq!(v.crew(), 15);
/// assert_eq!(v.daily_operating_cost(), 10_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    id: String,
    name: String,
    capacity: f64,
    speed: f64,
    #[serde(default)]
    fuel_consumption: FuelConsumption,
    #[serde(default = "default_daily_operating_cost")]
    daily_operating_cost: f64,
    #[serde(default = "default_crew")]
    crew: u32,
    #[serde(default)]
    status: VesselStatus,
}

impl Vessel {
    /// Creates an available vessel with default fuel, cost, and crew figures.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: f64, speed: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            speed,
            fuel_consumption: FuelConsumption::default(),
            daily_operating_cost: DEFAULT_DAILY_OPERATING_COST,
            crew: DEFAULT_CREW,
            status: VesselStatus::default(),
        }
    }

    /// Sets fuel burn rates (tons/day).
    pub fn with_fuel_consumption(mut self, at_sea: f64, at_port: f64) -> Self {
        self.fuel_consumption = FuelConsumption { at_sea, at_port };
        self
    }

    /// Sets daily operating cost (USD/day).
    pub fn with_daily_operating_cost(mut self, cost: f64) -> Self {
        self.daily_operating_cost = cost;
        self
    }

    /// Sets crew headcount.
    pub fn with_crew(mut self, crew: u32) -> Self {
        self.crew = crew;
        self
    }

    /// Sets operational status.
    pub fn with_status(mut self, status: VesselStatus) -> Self {
        self.status = status;
        self
    }

    /// Unique vessel id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cargo capacity in tons.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Service speed in knots.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Speed used as a divisor: never below one knot.
    pub fn effective_speed(&self) -> f64 {
        self.speed.max(1.0)
    }

    /// Fuel burn rates.
    pub fn fuel_consumption(&self) -> FuelConsumption {
        self.fuel_consumption
    }

    /// Daily operating cost in USD.
    pub fn daily_operating_cost(&self) -> f64 {
        self.daily_operating_cost
    }

    /// Crew headcount.
    pub fn crew(&self) -> u32 {
        self.crew
    }

    /// Operational status.
    pub fn status(&self) -> VesselStatus {
        self.status
    }
}

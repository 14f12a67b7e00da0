//! Route cost and fuel model.

use serde::{Deserialize, Serialize};

use crate::models::{CostBreakdown, Port, Vessel};

/// Unit rates used to price a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostRates {
    /// Bunker price in USD per ton. Default 600.
    pub fuel_price_per_ton: f64,
    /// Flat charge per port call on multi-stop routes, in USD. Default 5000.
    pub avg_port_charge: f64,
    /// Wage per crew member per day, in USD. Default 150.
    pub crew_daily_rate: f64,
    /// Maintenance accrual per nautical mile, in USD. Default 0.8.
    pub maintenance_per_nm: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            fuel_price_per_ton: 600.0,
            avg_port_charge: 5000.0,
            crew_daily_rate: 150.0,
            maintenance_per_nm: 0.8,
        }
    }
}

/// Fuel burned over a voyage, in tons.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelEstimate {
    /// Burn while sailing.
    pub at_sea: f64,
    /// Burn alongside, one day per voyage.
    pub at_port: f64,
    /// Sum of both.
    pub total: f64,
}

/// Prices routes from their duration, stop count, and vessel figures.
///
/// | component | formula |
/// |---|---|
/// | fuel | days × fuel at sea × fuel price |
/// | port charges | stops × average port charge |
/// | operating | days × daily operating cost |
/// | crew | days × crew × crew daily rate |
///
/// # Examples
///
/// ```
/// use u_searoute::evaluation::CostModel;
/// use u_searoute::models::Vessel;
///
/// let model = CostModel::default();
/// let vessel = Vessel::new("V1", "V1", 5000.0, 14.0);
/// let b = model.route_breakdown(&vessel, 48.0, 3);
/// assert_eq!(b.fuel, 2.0 * 20.0 * 600.0);
/// assert_eq!(b.port_charges, 15_000.0);
/// assert_eq!(b.operating, 20_000.0);
/// assert_eq!(b.crew, 2.0 * 15.0 * 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostModel {
    rates: CostRates,
}

impl CostModel {
    /// Creates a model with the given rates.
    pub fn new(rates: CostRates) -> Self {
        Self { rates }
    }

    /// Unit rates in use.
    pub fn rates(&self) -> &CostRates {
        &self.rates
    }

    /// Cost split for a route sailed for `time_hours` with `stops` port calls.
    pub fn route_breakdown(&self, vessel: &Vessel, time_hours: f64, stops: usize) -> CostBreakdown {
        let days = time_hours / 24.0;
        CostBreakdown {
            fuel: days * vessel.fuel_consumption().at_sea * self.rates.fuel_price_per_ton,
            port_charges: stops as f64 * self.rates.avg_port_charge,
            operating: days * vessel.daily_operating_cost(),
            crew: days * f64::from(vessel.crew()) * self.rates.crew_daily_rate,
        }
    }

    /// Total cost for a route sailed for `time_hours` with `stops` port calls.
    pub fn route_cost(&self, vessel: &Vessel, time_hours: f64, stops: usize) -> f64 {
        self.route_breakdown(vessel, time_hours, stops).total()
    }

    /// Cost split for a single call without sailing.
    ///
    /// Charges the port's own berthing fee plus one day of operating and
    /// crew cost.
    pub fn single_port_breakdown(&self, vessel: &Vessel, port: &Port) -> CostBreakdown {
        CostBreakdown {
            fuel: 0.0,
            port_charges: port.berthing_fee(),
            operating: vessel.daily_operating_cost(),
            crew: f64::from(vessel.crew()) * self.rates.crew_daily_rate,
        }
    }

    /// Fuel burned at sea over `time_hours` of sailing, in tons.
    pub fn sea_fuel(&self, vessel: &Vessel, time_hours: f64) -> f64 {
        time_hours / 24.0 * vessel.fuel_consumption().at_sea
    }

    /// Fuel estimate for sailing `distance` NM plus one day alongside.
    ///
    /// All zero when the vessel has no usable speed.
    pub fn fuel_estimate(&self, vessel: &Vessel, distance: f64) -> FuelEstimate {
        let speed = vessel.speed();
        if speed.is_nan() || speed <= 0.0 {
            return FuelEstimate::default();
        }
        let at_sea = self.sea_fuel(vessel, distance / speed);
        let at_port = vessel.fuel_consumption().at_port;
        FuelEstimate {
            at_sea,
            at_port,
            total: at_sea + at_port,
        }
    }

    /// Maintenance accrued over `distance` NM, in USD.
    pub fn maintenance(&self, distance: f64) -> f64 {
        distance * self.rates.maintenance_per_nm
    }
}

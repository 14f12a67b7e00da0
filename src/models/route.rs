//! Route and cost breakdown types.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::Port;
use crate::distance::{great_circle_points, LatLng};
use crate::error::InvalidCoordinateError;

/// Route cost split by category, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Bunker fuel.
    pub fuel: f64,
    /// Berthing and port dues.
    pub port_charges: f64,
    /// Vessel running cost.
    pub operating: f64,
    /// Crew wages.
    pub crew: f64,
}

impl CostBreakdown {
    /// Sum of all categories.
    pub fn total(&self) -> f64 {
        self.fuel + self.port_charges + self.operating + self.crew
    }
}

impl Add for CostBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            fuel: self.fuel + rhs.fuel,
            port_charges: self.port_charges + rhs.port_charges,
            operating: self.operating + rhs.operating,
            crew: self.crew + rhs.crew,
        }
    }
}

/// An ordered sequence of port calls sailed by one vessel.
///
/// `ports` is the visiting order. When the route closes its loop, the leg
/// back to the first port is counted in `total_distance` but the first port
/// is not repeated in `ports`.
///
/// # Examples
///
/// ```
/// use u_searoute::distance::LatLng;
/// use u_searoute::models::{Port, Route};
///
/// let mut route = Route::new("V1");
/// route.push_port(Port::new("A", "Alpha", LatLng::new(-6.1, 106.8)));
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.vessel_id(), "V1");
/// assert_eq!(route.total_distance(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    vessel_id: String,
    ports: Vec<Port>,
    total_distance: f64,
    total_time: f64,
    total_cost: f64,
    fuel_consumption: f64,
    cost_breakdown: CostBreakdown,
    closes_loop: bool,
}

impl Route {
    /// Creates an empty, zero-valued route for the given vessel.
    pub fn new(vessel_id: impl Into<String>) -> Self {
        Self {
            vessel_id: vessel_id.into(),
            ports: Vec::new(),
            total_distance: 0.0,
            total_time: 0.0,
            total_cost: 0.0,
            fuel_consumption: 0.0,
            cost_breakdown: CostBreakdown::default(),
            closes_loop: false,
        }
    }

    /// Appends a port call.
    pub fn push_port(&mut self, port: Port) {
        self.ports.push(port);
    }

    /// Vessel sailing this route.
    pub fn vessel_id(&self) -> &str {
        &self.vessel_id
    }

    /// Port calls in visiting order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Number of port calls.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Returns `true` if the route has no port calls.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Port ids in visiting order.
    pub fn port_ids(&self) -> Vec<&str> {
        self.ports.iter().map(|p| p.id()).collect()
    }

    /// Distance sailed in nautical miles, including any closing leg.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sailing time in hours.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Total cost in USD.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Fuel burned at sea in tons.
    pub fn fuel_consumption(&self) -> f64 {
        self.fuel_consumption
    }

    /// Cost split that sums to `total_cost`.
    pub fn cost_breakdown(&self) -> CostBreakdown {
        self.cost_breakdown
    }

    /// Returns `true` if the distance includes a leg back to the first port.
    pub fn closes_loop(&self) -> bool {
        self.closes_loop
    }

    /// Monthly solar demand summed over the port calls, in tons.
    pub fn demand(&self) -> f64 {
        self.ports.iter().map(|p| p.solar_demand()).sum()
    }

    /// Stop coordinates in visiting order.
    pub fn path(&self) -> Vec<LatLng> {
        self.ports.iter().map(|p| p.location()).collect()
    }

    /// Interpolated geodesic path through every stop.
    ///
    /// Each leg contributes `segments_per_leg` points after its start; a
    /// closing leg is included when the route closes its loop. With
    /// `segments_per_leg == 0` the stops themselves are returned, plus the
    /// first stop again for a closed loop.
    pub fn great_circle_path(
        &self,
        segments_per_leg: usize,
    ) -> Result<Vec<LatLng>, InvalidCoordinateError> {
        let mut stops = self.path();
        if self.closes_loop {
            if let Some(&first) = stops.first() {
                stops.push(first);
            }
        }
        if segments_per_leg == 0 {
            return Ok(stops);
        }

        let mut points = Vec::new();
        for (i, leg) in stops.windows(2).enumerate() {
            let leg_points = great_circle_points(leg[0], leg[1], segments_per_leg)?;
            // Every leg after the first starts where the previous one ended.
            let skip = usize::from(i > 0);
            points.extend(leg_points.into_iter().skip(skip));
        }
        if points.is_empty() {
            points = stops;
        }
        Ok(points)
    }

    pub(crate) fn set_totals(&mut self, distance: f64, time: f64, fuel: f64) {
        self.total_distance = distance;
        self.total_time = time;
        self.fuel_consumption = fuel;
    }

    pub(crate) fn set_cost(&mut self, breakdown: CostBreakdown) {
        self.cost_breakdown = breakdown;
        self.total_cost = breakdown.total();
    }

    pub(crate) fn set_closes_loop(&mut self, value: bool) {
        self.closes_loop = value;
    }

    /// Appends another leg sailed by the same vessel.
    pub(crate) fn absorb(&mut self, other: Route) {
        self.ports.extend(other.ports);
        self.total_distance += other.total_distance;
        self.total_time += other.total_time;
        self.fuel_consumption += other.fuel_consumption;
        self.set_cost(self.cost_breakdown + other.cost_breakdown);
        // A merged itinerary cannot be redrawn as a single loop.
        self.closes_loop = false;
    }
}

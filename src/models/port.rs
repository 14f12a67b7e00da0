//! Port and time window types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::distance::LatLng;

/// Berthing fee charged when a port does not specify one (USD).
pub const DEFAULT_BERTHING_FEE: f64 = 5000.0;

/// A recurring daily visiting interval, in hours on a 24-hour cycle.
///
/// Arrivals are projected onto the cycle (`hours mod 24`) before being
/// checked against the window. The default window `[0, 24]` accepts any
/// arrival. A window with `open > close` runs overnight, from `open` past
/// midnight to `close`.
///
/// # Examples
///
/// ```
/// use u_searoute::models::TimeWindow;
///
/// let tw = TimeWindow::new(6.0, 18.0).unwrap();
/// assert!(tw.contains(12.0));
/// assert!(!tw.contains(20.0));
///
/// let night = TimeWindow::new(22.0, 6.0).unwrap();
/// assert!(night.contains(23.0) && night.contains(2.0));
/// assert!(!night.contains(12.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    open: f64,
    close: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if either bound is non-finite or lies outside `0..=24`.
    pub fn new(open: f64, close: f64) -> Option<Self> {
        let tw = Self { open, close };
        tw.is_valid().then_some(tw)
    }

    /// Opening hour.
    pub fn open(&self) -> f64 {
        self.open
    }

    /// Closing hour.
    pub fn close(&self) -> f64 {
        self.close
    }

    /// Returns `true` if the hour falls within `[open, close]`, wrapping past
    /// midnight when `open > close`.
    pub fn contains(&self, hour: f64) -> bool {
        if self.open <= self.close {
            hour >= self.open && hour <= self.close
        } else {
            hour >= self.open || hour <= self.close
        }
    }

    /// Returns `true` if both bounds are finite and on the cycle.
    ///
    /// Deserialised windows bypass [`TimeWindow::new`], so the optimizer
    /// checks this at its boundary.
    pub fn is_valid(&self) -> bool {
        self.open.is_finite()
            && self.close.is_finite()
            && (0.0..=24.0).contains(&self.open)
            && (0.0..=24.0).contains(&self.close)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            open: 0.0,
            close: 24.0,
        }
    }
}

/// Time windows keyed by port id.
///
/// Ports without an entry get the unconstrained default window.
///
/// # Examples
///
/// ```
/// use u_searoute::models::{TimeWindow, TimeWindows};
///
/// let windows = TimeWindows::new().with("P1", TimeWindow::new(8.0, 16.0).unwrap());
/// assert_eq!(windows.get("P1").open(), 8.0);
/// assert_eq!(windows.get("other"), TimeWindow::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeWindows(BTreeMap<String, TimeWindow>);

impl TimeWindows {
    /// Creates an empty map (every port unconstrained).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the window for a port.
    pub fn with(mut self, port_id: impl Into<String>, tw: TimeWindow) -> Self {
        self.insert(port_id, tw);
        self
    }

    /// Adds or replaces the window for a port.
    pub fn insert(&mut self, port_id: impl Into<String>, tw: TimeWindow) {
        self.0.insert(port_id.into(), tw);
    }

    /// Window for a port, or the default when none was given.
    pub fn get(&self, port_id: &str) -> TimeWindow {
        self.0.get(port_id).copied().unwrap_or_default()
    }

    /// Iterates over explicit windows in port-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimeWindow)> {
        self.0.iter().map(|(id, tw)| (id.as_str(), tw))
    }

    /// Number of explicit windows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no explicit window was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Kind of facility a port represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortType {
    /// General cargo port.
    #[default]
    MainPort,
    /// Oil or fuel terminal.
    OilTerminal,
    /// Transit or transshipment port.
    TransitPort,
    /// Inland river port.
    RiverPort,
}

/// Monthly demand at a port.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortDemand {
    /// Solar (diesel) demand in tons per month.
    #[serde(default)]
    pub solar: f64,
}

/// Physical handling capacity of a port.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCapacity {
    /// Channel depth in metres.
    #[serde(default)]
    pub depth: f64,
    /// Berth loading rate in tons per hour.
    #[serde(default)]
    pub loading_rate: f64,
}

/// Charges levied per port call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortCharges {
    /// Berthing fee in USD.
    #[serde(default = "default_berthing_fee")]
    pub berthing: f64,
}

fn default_berthing_fee() -> f64 {
    DEFAULT_BERTHING_FEE
}

impl Default for PortCharges {
    fn default() -> Self {
        Self {
            berthing: DEFAULT_BERTHING_FEE,
        }
    }
}

/// A demand port. Read-only input to the optimizer.
///
/// # Examples
///
/// ```
/// use u_searoute::distance::LatLng;
/// use u_searoute::models::{Port, PortType};
///
/// let p = Port::new("TPK", "Tanjung Priok", LatLng::new(-6.10, 106.80))
///     .with_demand(1200.0)
///     .with_type(PortType::MainPort);
/// assert_eq!(p.id(), "TPK");
/// assert_eq!(p.solar_demand(), 1200.0);
/// assert_eq!(p.berthing_fee(), 5000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    id: String,
    #[serde(default)]
    code: String,
    name: String,
    location: LatLng,
    #[serde(default)]
    demand: PortDemand,
    #[serde(default)]
    capacity: PortCapacity,
    #[serde(default)]
    charges: PortCharges,
    #[serde(default)]
    operating_hours: String,
    #[serde(default, rename = "type")]
    port_type: PortType,
}

impl Port {
    /// Creates a main port with no demand and default charges.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: LatLng) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: name.into(),
            location,
            demand: PortDemand::default(),
            capacity: PortCapacity::default(),
            charges: PortCharges::default(),
            operating_hours: String::new(),
            port_type: PortType::default(),
        }
    }

    /// Sets the port code (e.g. UN/LOCODE).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets monthly solar demand in tons.
    pub fn with_demand(mut self, solar: f64) -> Self {
        self.demand.solar = solar;
        self
    }

    /// Sets depth and loading rate.
    pub fn with_capacity(mut self, depth: f64, loading_rate: f64) -> Self {
        self.capacity = PortCapacity {
            depth,
            loading_rate,
        };
        self
    }

    /// Sets the berthing fee in USD.
    pub fn with_berthing_fee(mut self, fee: f64) -> Self {
        self.charges.berthing = fee;
        self
    }

    /// Sets the free-text operating hours.
    pub fn with_operating_hours(mut self, hours: impl Into<String>) -> Self {
        self.operating_hours = hours.into();
        self
    }

    /// Sets the port type.
    pub fn with_type(mut self, port_type: PortType) -> Self {
        self.port_type = port_type;
        self
    }

    /// Unique port id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Port code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position.
    pub fn location(&self) -> LatLng {
        self.location
    }

    /// Monthly solar demand in tons.
    pub fn solar_demand(&self) -> f64 {
        self.demand.solar
    }

    /// Depth and loading rate.
    pub fn capacity(&self) -> PortCapacity {
        self.capacity
    }

    /// Berthing fee in USD.
    pub fn berthing_fee(&self) -> f64 {
        self.charges.berthing
    }

    /// Free-text operating hours.
    pub fn operating_hours(&self) -> &str {
        &self.operating_hours
    }

    /// Facility type.
    pub fn port_type(&self) -> PortType {
        self.port_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_valid() {
        let tw = TimeWindow::new(6.0, 18.0).expect("valid");
        assert_eq!(tw.open(), 6.0);
        assert_eq!(tw.close(), 18.0);
    }

    #[test]
    fn test_time_window_invalid() {
        assert!(TimeWindow::new(f64::NAN, 10.0).is_none());
        assert!(TimeWindow::new(0.0, f64::INFINITY).is_none());
        assert!(TimeWindow::new(-1.0, 10.0).is_none());
        assert!(TimeWindow::new(0.0, 25.0).is_none());
    }

    #[test]
    fn test_time_window_contains_bounds() {
        let tw = TimeWindow::new(6.0, 18.0).expect("valid");
        assert!(tw.contains(6.0));
        assert!(tw.contains(18.0));
        assert!(!tw.contains(5.9));
        assert!(!tw.contains(18.1));
    }

    #[test]
    fn test_time_window_overnight() {
        let tw = TimeWindow::new(22.0, 6.0).expect("valid");
        assert!(tw.is_valid());
        assert!(tw.contains(22.0));
        assert!(tw.contains(23.5));
        assert!(tw.contains(0.0));
        assert!(tw.contains(6.0));
        assert!(!tw.contains(6.1));
        assert!(!tw.contains(21.9));
    }

    #[test]
    fn test_time_window_default_is_unconstrained() {
        let tw = TimeWindow::default();
        assert!(tw.contains(0.0));
        assert!(tw.contains(23.99));
        assert!(tw.is_valid());
    }

    #[test]
    fn test_time_windows_lookup() {
        let mut windows = TimeWindows::new();
        assert!(windows.is_empty());
        windows.insert("A", TimeWindow::new(1.0, 2.0).expect("valid"));
        assert_eq!(windows.len(), 1);
        assert_eq!(windows.get("A").close(), 2.0);
        assert_eq!(windows.get("B"), TimeWindow::default());
    }

    #[test]
    fn test_port_defaults() {
        let p = Port::new("A", "Alpha", LatLng::new(1.0, 2.0));
        assert_eq!(p.code(), "");
        assert_eq!(p.solar_demand(), 0.0);
        assert_eq!(p.berthing_fee(), DEFAULT_BERTHING_FEE);
        assert_eq!(p.port_type(), PortType::MainPort);
        assert_eq!(p.location(), LatLng::new(1.0, 2.0));
    }

    #[test]
    fn test_port_builder() {
        let p = Port::new("B", "Bravo", LatLng::new(0.0, 0.0))
            .with_code("IDBRV")
            .with_demand(300.0)
            .with_capacity(12.0, 450.0)
            .with_berthing_fee(7000.0)
            .with_operating_hours("06:00-22:00")
            .with_type(PortType::OilTerminal);
        assert_eq!(p.code(), "IDBRV");
        assert_eq!(p.solar_demand(), 300.0);
        assert_eq!(p.capacity().depth, 12.0);
        assert_eq!(p.capacity().loading_rate, 450.0);
        assert_eq!(p.berthing_fee(), 7000.0);
        assert_eq!(p.operating_hours(), "06:00-22:00");
        assert_eq!(p.port_type(), PortType::OilTerminal);
    }
}

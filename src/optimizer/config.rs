//! Optimizer settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clustering::DEFAULT_MAX_ROUNDS;
use crate::evaluation::CostRates;

/// Settings for one [`Optimizer`](super::Optimizer).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_searoute::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_time_limit(Duration::from_secs(5))
///     .with_merge_shared_vessel_routes(true);
/// assert_eq!(config.max_cluster_rounds, 100);
/// assert!(config.merge_shared_vessel_routes);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerConfig {
    /// Clustering round limit. Default 100.
    pub max_cluster_rounds: usize,
    /// Fold routes that share a vessel into one itinerary. Default `false`.
    pub merge_shared_vessel_routes: bool,
    /// Unit rates for the cost model.
    pub cost_rates: CostRates,
    /// Wall-clock limit for one call. Default none.
    pub time_limit: Option<Duration>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_cluster_rounds: DEFAULT_MAX_ROUNDS,
            merge_shared_vessel_routes: false,
            cost_rates: CostRates::default(),
            time_limit: None,
        }
    }
}

impl OptimizerConfig {
    /// Sets the clustering round limit.
    pub fn with_max_cluster_rounds(mut self, rounds: usize) -> Self {
        self.max_cluster_rounds = rounds;
        self
    }

    /// Sets whether routes sharing a vessel are merged.
    pub fn with_merge_shared_vessel_routes(mut self, merge: bool) -> Self {
        self.merge_shared_vessel_routes = merge;
        self
    }

    /// Sets the cost rates.
    pub fn with_cost_rates(mut self, rates: CostRates) -> Self {
        self.cost_rates = rates;
        self
    }

    /// Sets the wall-clock limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

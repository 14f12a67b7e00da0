//! Fleet optimization entry point.
//!
//! - [`Optimizer`] — validates input and runs cluster, assign, route, aggregate
//! - [`OptimizerConfig`] — round limit, cost rates, time limit, merge policy
//! - [`Deadline`] — time limit and stop flag checked between steps

mod config;
mod deadline;
mod runner;

pub use config::OptimizerConfig;
pub use deadline::Deadline;
pub use runner::{optimize, Optimizer};

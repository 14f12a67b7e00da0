//! Fleet assignment: which vessel serves which cluster.

mod fleet;

pub use fleet::{assign_vessels, Assignment};

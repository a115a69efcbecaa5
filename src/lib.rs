//! Hohmann transfer calculator.
//!
//! The physics lives in the workspace crates; this library re-exports them under one roof so
//! front-ends (the CLI today, a plotting tool later) depend on a single crate.

pub use hohmann_config as config;
pub use hohmann_core as physics;
pub use hohmann_export as export;
pub use hohmann_impulsive as impulsive;
pub use hohmann_orbits as orbits;
pub use hohmann_transfer as transfer;

pub use hohmann_orbits::OrbitalBody;
pub use hohmann_transfer::{Catalog, TransferCalculator, TransferPlan, plan_transfer};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Re-exported APIs for consumers of the transfer crate.

pub use crate::calculator::TransferCalculator;
pub use crate::plan::{TransferError, TransferPlan, plan_transfer, plan_transfer_with};
pub use hohmann_config::Catalog;
pub use hohmann_core::primary::Primary;
pub use hohmann_impulsive::{HohmannResult, TransferGeometry};
pub use hohmann_orbits::OrbitalBody;

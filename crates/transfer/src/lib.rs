//! Transfer façade crate: a calculator bound to one primary and the catalog-driven planner.

pub mod calculator;
pub mod plan;

pub use facade::*;
pub use hohmann_impulsive as impulsive;
pub use hohmann_orbits as orbits;

mod facade;

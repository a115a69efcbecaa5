//! Impulsive transfer utilities: Hohmann transfer orbits, Kepler periods and departure delta-v.

pub mod transfers;

pub use transfers::{
    HohmannResult, TransferGeometry, calculate_delta_v, calculate_period, derive_transfer_orbit,
    hohmann, transfer_geometry,
};

//! Analytic estimators for impulsive transfers in the coplanar limit.
//!
//! Element-based operations take [`OrbitalBody`] values in astronomical units and a central
//! gravitational parameter in m³/s²; everything they return is in SI units unless the name
//! says otherwise.

use std::f64::consts::PI;

use hohmann_core::units::au_to_m;
use hohmann_orbits::{OrbitalBody, TRANSFER_NAME};
use serde::Serialize;

const TRANSFER_COLOR: &str = "gray";

/// Closest and farthest points of the transfer ellipse (AU).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferGeometry {
    pub perihelion_au: f64,
    pub aphelion_au: f64,
}

impl TransferGeometry {
    pub fn semi_major_axis_au(&self) -> f64 {
        (self.perihelion_au + self.aphelion_au) / 2.0
    }

    pub fn eccentricity(&self) -> f64 {
        (self.aphelion_au - self.perihelion_au) / (self.aphelion_au + self.perihelion_au)
    }
}

/// Transfer ellipse touching the mean radius of each body.
pub fn transfer_geometry(origin: &OrbitalBody, target: &OrbitalBody) -> TransferGeometry {
    let origin_radius = origin.mean_radius_au();
    let target_radius = target.mean_radius_au();
    TransferGeometry {
        perihelion_au: origin_radius.min(target_radius),
        aphelion_au: origin_radius.max(target_radius),
    }
}

/// Build the coplanar Hohmann transfer orbit between two bodies.
///
/// Each body's radius is the mean of its perihelion and aphelion. The result is a body named
/// [`TRANSFER_NAME`] with zero inclination and orientation angles.
///
/// The returned `perihelion_au` is the *origin's* mean radius, not the ellipse's true perihelion;
/// the two only agree for outward transfers. Earlier outputs were produced this way, so the
/// field is kept as is. Use [`transfer_geometry`] for the true extremes.
///
/// No validation is performed: elements outside `0 ≤ e < 1` produce meaningless numbers.
pub fn derive_transfer_orbit(origin: &OrbitalBody, target: &OrbitalBody) -> OrbitalBody {
    let origin_radius = origin.mean_radius_au();
    let geometry = transfer_geometry(origin, target);

    OrbitalBody {
        name: TRANSFER_NAME.to_string(),
        semi_major_axis_au: geometry.semi_major_axis_au(),
        perihelion_au: origin_radius,
        eccentricity: geometry.eccentricity(),
        inclination: 0.0,
        longitude_of_ascending_node_deg: 0.0,
        argument_of_perihelion_deg: 0.0,
        display_color: TRANSFER_COLOR.to_string(),
    }
}

/// Orbital period from Kepler's third law, `2π·sqrt(a³/μ)` (seconds).
pub fn calculate_period(body: &OrbitalBody, mu_m3_s2: f64) -> f64 {
    let a = au_to_m(body.semi_major_axis_au);
    2.0 * PI * (a.powi(3) / mu_m3_s2).sqrt()
}

/// Departure burn of a Hohmann transfer (m/s), truncated toward zero.
///
/// Radii are taken at each body's *aphelion*, unlike [`derive_transfer_orbit`] which uses the
/// mean radius; the aphelion basis reproduces previously published figures.
///
/// Only the departure burn is returned. The arrival (circularisation) burn is not included,
/// so this is not the total cost of the transfer; see [`hohmann`] for both burns. Inward
/// transfers give a negative value (retrograde burn).
///
/// Returns `None` when the burn is not finite (e.g. a non-positive semi-major axis), so an
/// out-of-domain element set can never be mistaken for a same-orbit `0`.
pub fn calculate_delta_v(
    origin: &OrbitalBody,
    target: &OrbitalBody,
    mu_m3_s2: f64,
) -> Option<i64> {
    let r1 = origin.aphelion_m();
    let r2 = target.aphelion_m();
    let a = (mu_m3_s2 / r1).sqrt();
    let b = (2.0 * r2 / (r1 + r2)).sqrt() - 1.0;
    let dv = a * b;
    dv.is_finite().then(|| dv.trunc() as i64)
}

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HohmannResult {
    pub dv1_m_s: f64,      // signed: negative for inward (retro) burn
    pub dv2_m_s: f64,      // signed: negative for retro capture when arriving inward
    pub dv_total_m_s: f64, // |dv1| + |dv2|
    pub tof_seconds: f64,
}

/// Compute the classical two-burn Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1_m`: initial circular orbit radius (m)
/// - `r2_m`: target circular orbit radius (m)
/// - `mu_m3_s2`: gravitational parameter of central body (m^3/s^2)
///
/// Returns `None` unless all three inputs are positive and finite.
pub fn hohmann(r1_m: f64, r2_m: f64, mu_m3_s2: f64) -> Option<HohmannResult> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !(valid(r1_m) && valid(r2_m) && valid(mu_m3_s2)) {
        return None;
    }

    let v1 = (mu_m3_s2 / r1_m).sqrt();
    let v2 = (mu_m3_s2 / r2_m).sqrt();
    let a_t = 0.5 * (r1_m + r2_m);
    let tof = PI * (a_t.powi(3) / mu_m3_s2).sqrt();

    // Transfer periapsis speed (at r1) and apoapsis speed (at r2)
    let v_t1 = (mu_m3_s2 * (2.0 / r1_m - 1.0 / a_t)).sqrt();
    let v_t2 = (mu_m3_s2 * (2.0 / r2_m - 1.0 / a_t)).sqrt();

    let dv1 = v_t1 - v1;
    let dv2 = v2 - v_t2;

    Some(HohmannResult {
        dv1_m_s: dv1,
        dv2_m_s: dv2,
        dv_total_m_s: dv1.abs() + dv2.abs(),
        tof_seconds: tof,
    })
}

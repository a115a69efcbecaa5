//! Stateless transfer calculator bound to a single primary body.

use hohmann_core::primary::Primary;
use hohmann_core::units::au_to_m;
use hohmann_impulsive::{self as impulsive, HohmannResult};
use hohmann_orbits::OrbitalBody;

/// Transfer operations evaluated around one primary (the Sun by default).
///
/// Holds nothing but the primary's gravitational parameter, so it is `Copy` and can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransferCalculator {
    primary: Primary,
}

impl TransferCalculator {
    pub fn new(primary: Primary) -> Self {
        Self { primary }
    }

    pub fn primary(&self) -> Primary {
        self.primary
    }

    pub fn mu_m3_s2(&self) -> f64 {
        self.primary.mu_m3_s2
    }

    /// See [`impulsive::derive_transfer_orbit`].
    pub fn derive_transfer_orbit(&self, origin: &OrbitalBody, target: &OrbitalBody) -> OrbitalBody {
        impulsive::derive_transfer_orbit(origin, target)
    }

    /// Orbital period of `body` in seconds.
    pub fn period_seconds(&self, body: &OrbitalBody) -> f64 {
        impulsive::calculate_period(body, self.mu_m3_s2())
    }

    /// Departure-burn delta-v in m/s, `None` if not finite; see [`impulsive::calculate_delta_v`].
    pub fn delta_v_m_s(&self, origin: &OrbitalBody, target: &OrbitalBody) -> Option<i64> {
        impulsive::calculate_delta_v(origin, target, self.mu_m3_s2())
    }

    /// Half a revolution of the transfer orbit between the two bodies.
    pub fn time_of_flight_seconds(&self, origin: &OrbitalBody, target: &OrbitalBody) -> f64 {
        self.period_seconds(&self.derive_transfer_orbit(origin, target)) / 2.0
    }

    /// Circular two-burn estimate between the bodies' mean radii.
    pub fn hohmann_estimate(
        &self,
        origin: &OrbitalBody,
        target: &OrbitalBody,
    ) -> Option<HohmannResult> {
        impulsive::hohmann(
            au_to_m(origin.mean_radius_au()),
            au_to_m(target.mean_radius_au()),
            self.mu_m3_s2(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hohmann_core::time::seconds_to_days;

    fn circular(name: &str, radius_au: f64) -> OrbitalBody {
        OrbitalBody::new(name, radius_au, radius_au, 0.0, 0.0, 0.0, 0.0, "white")
    }

    #[test]
    fn one_au_circle_has_a_one_year_period() {
        let calc = TransferCalculator::default();
        let days = seconds_to_days(calc.period_seconds(&circular("x", 1.0)));
        assert!((days - 365.25).abs() < 0.1, "days = {days}");
    }

    #[test]
    fn time_of_flight_matches_two_burn_estimate() {
        let calc = TransferCalculator::default();
        let (a, b) = (circular("a", 1.0), circular("b", 1.5));
        let tof = calc.time_of_flight_seconds(&a, &b);
        let estimate = calc.hohmann_estimate(&a, &b).expect("estimate");
        assert!((tof - estimate.tof_seconds).abs() / tof < 1e-12);
    }

    #[test]
    fn heavier_primary_shortens_periods() {
        let sun = TransferCalculator::default();
        let heavy = TransferCalculator::new(Primary {
            name: "Heavy",
            mu_m3_s2: 4.0 * Primary::SUN.mu_m3_s2,
        });
        let body = circular("x", 2.0);
        let ratio = sun.period_seconds(&body) / heavy.period_seconds(&body);
        assert!((ratio - 2.0).abs() < 1e-12);
    }
}

//! Core units, constants, and shared primitives for the Hohmann calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²), CODATA 2018.
    pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;
    /// Mass of the Sun (kg).
    pub const SOLAR_MASS_KG: f64 = 1.9885e30;
    /// Heliocentric gravitational parameter G·M☉ (m³/s²).
    pub const STANDARD_GRAVITY_PARAMETER: f64 = GRAVITATIONAL_CONSTANT * SOLAR_MASS_KG;
    /// Metres per astronomical unit.
    pub const AU_M: f64 = 149_597_870_691.0;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::AU_M;

    /// Convert astronomical units to metres.
    #[inline]
    pub fn au_to_m(v: f64) -> f64 {
        v * AU_M
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }
}

/// The central body every transfer is computed around.
pub mod primary {
    use super::constants::STANDARD_GRAVITY_PARAMETER;

    /// Gravitational parameters of the body being orbited.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Primary {
        pub name: &'static str,
        pub mu_m3_s2: f64,
    }

    impl Primary {
        /// The Sun, using the workspace-wide [`STANDARD_GRAVITY_PARAMETER`].
        pub const SUN: Primary = Primary {
            name: "Sun",
            mu_m3_s2: STANDARD_GRAVITY_PARAMETER,
        };
    }

    impl Default for Primary {
        fn default() -> Self {
            Self::SUN
        }
    }
}

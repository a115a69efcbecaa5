//! Keplerian element records shared by catalog bodies and synthetic transfer orbits.
use hohmann_core::units::au_to_m;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name given to every synthesized transfer orbit.
pub const TRANSFER_NAME: &str = "transfer";

/// Keplerian elements identifying one body orbiting the primary.
///
/// Real bodies and transfer orbits share this shape and differ only by `name`.
/// Inclination and the two orientation angles are carried for display and are not
/// consumed by any transfer computation, which assumes coplanar orbits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalBody {
    pub name: String,
    pub semi_major_axis_au: f64,
    pub perihelion_au: f64,
    pub eccentricity: f64,
    /// Orbital-plane tilt (radians).
    pub inclination: f64,
    pub longitude_of_ascending_node_deg: f64,
    pub argument_of_perihelion_deg: f64,
    /// Cosmetic tag for plotting front-ends.
    pub display_color: String,
}

/// Reasons an element set cannot describe an elliptical orbit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("semi-major axis must be positive (got {0})")]
    NonPositiveSemiMajorAxis(f64),
    #[error("perihelion must be positive (got {0})")]
    NonPositivePerihelion(f64),
    #[error("perihelion {perihelion} AU exceeds semi-major axis {semi_major_axis} AU")]
    PerihelionExceedsSemiMajorAxis {
        perihelion: f64,
        semi_major_axis: f64,
    },
    #[error("eccentricity {0} outside [0, 1); only elliptical orbits are supported")]
    UnsupportedEccentricity(f64),
}

impl OrbitalBody {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        semi_major_axis_au: f64,
        perihelion_au: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node_deg: f64,
        argument_of_perihelion_deg: f64,
        display_color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            semi_major_axis_au,
            perihelion_au,
            eccentricity,
            inclination,
            longitude_of_ascending_node_deg,
            argument_of_perihelion_deg,
            display_color: display_color.into(),
        }
    }

    /// Farthest distance from the primary, `a·(1 + e)` (AU).
    #[inline]
    pub fn aphelion_au(&self) -> f64 {
        self.semi_major_axis_au * (1.0 + self.eccentricity)
    }

    /// Aphelion distance in metres.
    #[inline]
    pub fn aphelion_m(&self) -> f64 {
        au_to_m(self.aphelion_au())
    }

    /// Mean of the stored perihelion and the computed aphelion (AU).
    #[inline]
    pub fn mean_radius_au(&self) -> f64 {
        (self.perihelion_au + self.aphelion_au()) / 2.0
    }

    pub fn is_transfer(&self) -> bool {
        self.name == TRANSFER_NAME
    }

    /// Check the element set describes a finite elliptical orbit.
    ///
    /// Transfer computations never call this; catalogs do before handing bodies out.
    pub fn validate(&self) -> Result<(), BodyError> {
        let fields = [
            ("semi_major_axis_au", self.semi_major_axis_au),
            ("perihelion_au", self.perihelion_au),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            (
                "longitude_of_ascending_node_deg",
                self.longitude_of_ascending_node_deg,
            ),
            ("argument_of_perihelion_deg", self.argument_of_perihelion_deg),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BodyError::NonFinite { field });
        }
        if self.semi_major_axis_au <= 0.0 {
            return Err(BodyError::NonPositiveSemiMajorAxis(self.semi_major_axis_au));
        }
        if self.perihelion_au <= 0.0 {
            return Err(BodyError::NonPositivePerihelion(self.perihelion_au));
        }
        if self.perihelion_au > self.semi_major_axis_au {
            return Err(BodyError::PerihelionExceedsSemiMajorAxis {
                perihelion: self.perihelion_au,
                semi_major_axis: self.semi_major_axis_au,
            });
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(BodyError::UnsupportedEccentricity(self.eccentricity));
        }
        Ok(())
    }
}

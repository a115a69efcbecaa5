//! Catalog-driven transfer planning: look up two bodies and run every transfer computation.

use hohmann_config::Catalog;
use hohmann_core::primary::Primary;
use hohmann_export::{EstimateRecord, PlanRecord};
use hohmann_impulsive::{HohmannResult, TransferGeometry, transfer_geometry};
use hohmann_orbits::OrbitalBody;
use thiserror::Error;
use tracing::{debug, info};

use crate::calculator::TransferCalculator;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("body '{0}' not found in catalog")]
    UnknownBody(String),
    #[error("origin and target are both '{0}'")]
    SameBody(String),
    #[error("transfer {origin} -> {target} has no finite solution")]
    NonFinite { origin: String, target: String },
}

/// Everything computed for one origin → target transfer.
#[derive(Debug, Clone)]
pub struct TransferPlan {
    pub primary: Primary,
    pub origin: OrbitalBody,
    pub target: OrbitalBody,
    pub transfer: OrbitalBody,
    pub geometry: TransferGeometry,
    /// Departure burn only (m/s).
    pub departure_delta_v_m_s: i64,
    pub transfer_period_s: f64,
    pub time_of_flight_s: f64,
    pub origin_period_s: f64,
    pub target_period_s: f64,
    pub estimate: Option<HohmannResult>,
}

impl TransferPlan {
    /// Borrowed view used by the report and JSON exporters.
    pub fn record(&self) -> PlanRecord<'_> {
        PlanRecord {
            primary: self.primary.name,
            origin: &self.origin,
            target: &self.target,
            transfer: &self.transfer,
            true_perihelion_au: self.geometry.perihelion_au,
            aphelion_au: self.geometry.aphelion_au,
            departure_delta_v_m_s: self.departure_delta_v_m_s,
            transfer_period_s: self.transfer_period_s,
            time_of_flight_s: self.time_of_flight_s,
            origin_period_s: self.origin_period_s,
            target_period_s: self.target_period_s,
            estimate: self.estimate.map(|h| EstimateRecord {
                dv1_m_s: h.dv1_m_s,
                dv2_m_s: h.dv2_m_s,
                dv_total_m_s: h.dv_total_m_s,
                tof_seconds: h.tof_seconds,
            }),
        }
    }
}

impl TransferCalculator {
    /// Run every transfer computation for two already-resolved bodies.
    ///
    /// Fails with [`TransferError::NonFinite`] when the elements are outside the elliptical
    /// domain and the burn or any period comes out non-finite.
    pub fn plan(
        &self,
        origin: &OrbitalBody,
        target: &OrbitalBody,
    ) -> Result<TransferPlan, TransferError> {
        let non_finite = || TransferError::NonFinite {
            origin: origin.name.clone(),
            target: target.name.clone(),
        };
        let transfer = self.derive_transfer_orbit(origin, target);
        let geometry = transfer_geometry(origin, target);
        debug!(
            primary = self.primary().name,
            origin = %origin.name,
            target = %target.name,
            a_au = transfer.semi_major_axis_au,
            e = transfer.eccentricity,
            "derived transfer orbit"
        );

        let departure_delta_v_m_s = self.delta_v_m_s(origin, target).ok_or_else(non_finite)?;
        let transfer_period_s = self.period_seconds(&transfer);
        let origin_period_s = self.period_seconds(origin);
        let target_period_s = self.period_seconds(target);
        if ![transfer_period_s, origin_period_s, target_period_s]
            .iter()
            .all(|p| p.is_finite())
        {
            return Err(non_finite());
        }

        let plan = TransferPlan {
            primary: self.primary(),
            departure_delta_v_m_s,
            transfer_period_s,
            time_of_flight_s: transfer_period_s / 2.0,
            origin_period_s,
            target_period_s,
            estimate: self.hohmann_estimate(origin, target),
            geometry,
            transfer,
            origin: origin.clone(),
            target: target.clone(),
        };
        info!(
            primary = plan.primary.name,
            origin = %plan.origin.name,
            target = %plan.target.name,
            delta_v_m_s = plan.departure_delta_v_m_s,
            "transfer planned"
        );
        Ok(plan)
    }
}

/// Resolve `origin` and `target` in `catalog` and plan the transfer around the Sun.
pub fn plan_transfer(
    catalog: &Catalog,
    origin: &str,
    target: &str,
) -> Result<TransferPlan, TransferError> {
    plan_transfer_with(&TransferCalculator::default(), catalog, origin, target)
}

/// As [`plan_transfer`], around the calculator's primary.
pub fn plan_transfer_with(
    calculator: &TransferCalculator,
    catalog: &Catalog,
    origin: &str,
    target: &str,
) -> Result<TransferPlan, TransferError> {
    let lookup = |name: &str| {
        catalog
            .get(name)
            .ok_or_else(|| TransferError::UnknownBody(name.to_string()))
    };
    let origin_body = lookup(origin)?;
    let target_body = lookup(target)?;
    if origin_body.name == target_body.name {
        return Err(TransferError::SameBody(origin_body.name.clone()));
    }
    calculator.plan(origin_body, target_body)
}

//! Export helpers for transfer plans: a plain-text report and a JSON document.

use hohmann_orbits::OrbitalBody;
use serde::Serialize;

/// Two-burn estimate section of an exported plan.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EstimateRecord {
    pub dv1_m_s: f64,
    pub dv2_m_s: f64,
    pub dv_total_m_s: f64,
    pub tof_seconds: f64,
}

/// Borrowed view of a transfer plan, shared by the text and JSON writers.
#[derive(Debug, Clone)]
pub struct PlanRecord<'a> {
    pub primary: &'a str,
    pub origin: &'a OrbitalBody,
    pub target: &'a OrbitalBody,
    pub transfer: &'a OrbitalBody,
    pub true_perihelion_au: f64,
    pub aphelion_au: f64,
    pub departure_delta_v_m_s: i64,
    pub transfer_period_s: f64,
    pub time_of_flight_s: f64,
    pub origin_period_s: f64,
    pub target_period_s: f64,
    pub estimate: Option<EstimateRecord>,
}

pub mod report {
    use std::fmt::{self, Write as _};

    use hohmann_core::time::seconds_to_days;

    use super::PlanRecord;

    impl PlanRecord<'_> {
        /// Write the multi-line summary, one `key: value` per line.
        pub fn write_to(&self, writer: &mut dyn fmt::Write) -> fmt::Result {
            let transfer = self.transfer;
            writeln!(writer, "origin: {}", self.origin.name)?;
            writeln!(writer, "target: {}", self.target.name)?;
            writeln!(writer, "primary: {}", self.primary)?;
            writeln!(writer, "semi_major_axis_au: {}", transfer.semi_major_axis_au)?;
            writeln!(writer, "perihelion_au: {}", transfer.perihelion_au)?;
            writeln!(writer, "eccentricity: {}", transfer.eccentricity)?;
            writeln!(writer, "inclination: {}", transfer.inclination)?;
            writeln!(
                writer,
                "longitude_of_ascending_node_deg: {}",
                transfer.longitude_of_ascending_node_deg
            )?;
            writeln!(
                writer,
                "argument_of_perihelion_deg: {}",
                transfer.argument_of_perihelion_deg
            )?;
            writeln!(writer, "true_perihelion_au: {}", self.true_perihelion_au)?;
            writeln!(writer, "aphelion_au: {}", self.aphelion_au)?;
            writeln!(
                writer,
                "period_days: {:.2}",
                seconds_to_days(self.transfer_period_s)
            )?;
            writeln!(
                writer,
                "time_of_flight_days: {:.2}",
                seconds_to_days(self.time_of_flight_s)
            )?;
            writeln!(writer, "Δv: {} m/s", self.departure_delta_v_m_s)?;

            if let Some(estimate) = self.estimate {
                writeln!(
                    writer,
                    "Hohmann est.: Δv_total = {:.1} m/s (dv1={:.1}, dv2={:.1}), TOF = {:.2} days",
                    estimate.dv_total_m_s,
                    estimate.dv1_m_s,
                    estimate.dv2_m_s,
                    seconds_to_days(estimate.tof_seconds)
                )?;
            }
            Ok(())
        }
    }

    impl fmt::Display for PlanRecord<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.write_to(f)
        }
    }

    /// Render the multi-line summary shown to users after a calculation.
    pub fn render(plan: &PlanRecord<'_>) -> String {
        plan.to_string()
    }
}

pub mod json {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use hohmann_orbits::OrbitalBody;
    use serde::Serialize;
    use thiserror::Error;

    use super::{EstimateRecord, PlanRecord};

    #[derive(Debug, Error)]
    pub enum ExportError {
        #[error("failed to write export: {0}")]
        Io(#[from] io::Error),
        #[error("failed to encode JSON: {0}")]
        Json(#[from] serde_json::Error),
    }

    #[derive(Serialize)]
    struct PlanDocument<'a> {
        primary: &'a str,
        origin: &'a str,
        target: &'a str,
        departure_delta_v_m_s: i64,
        transfer_period_s: f64,
        time_of_flight_s: f64,
        origin_period_s: f64,
        target_period_s: f64,
        true_perihelion_au: f64,
        aphelion_au: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        hohmann_estimate: Option<EstimateRecord>,
        /// Origin, target and transfer, in the order plotting tools draw them.
        bodies: [&'a OrbitalBody; 3],
    }

    impl<'a> From<&PlanRecord<'a>> for PlanDocument<'a> {
        fn from(plan: &PlanRecord<'a>) -> Self {
            Self {
                primary: plan.primary,
                origin: &plan.origin.name,
                target: &plan.target.name,
                departure_delta_v_m_s: plan.departure_delta_v_m_s,
                transfer_period_s: plan.transfer_period_s,
                time_of_flight_s: plan.time_of_flight_s,
                origin_period_s: plan.origin_period_s,
                target_period_s: plan.target_period_s,
                true_perihelion_au: plan.true_perihelion_au,
                aphelion_au: plan.aphelion_au,
                hohmann_estimate: plan.estimate,
                bodies: [plan.origin, plan.target, plan.transfer],
            }
        }
    }

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Serialize a plan as pretty-printed JSON into any writer.
    pub fn write_plan_to(writer: &mut dyn Write, plan: &PlanRecord<'_>) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *writer, &PlanDocument::from(plan))?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a plan to `path` (or stdout for `-`).
    pub fn write_plan(path: &Path, plan: &PlanRecord<'_>) -> Result<(), ExportError> {
        let mut writer = writer_for_path(path)?;
        write_plan_to(writer.as_mut(), plan)
    }
}

// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Batch Evaluation
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Per-specimen evaluation over the irradiation matrix.
//!
//! Specimens are independent: result *i* is a pure function of specimen
//! *i* and the configuration, never of processing order. The parallel
//! path is therefore bit-identical to the sequential one. A failure for
//! one (specimen, correlation) pair is recorded in its slot and never
//! aborts the batch.

use crate::correlation::{kelvin_to_celsius, Correlation, EvaluationPoint};
use crate::propagation::{propagate_variance, SensitivityBreakdown};
use fgr_types::config::SensitivityConfig;
use fgr_types::error::FgrResult;
use fgr_types::specimen::Specimen;
use rayon::prelude::*;

/// Coarse grouping of specimens by design temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureRegime {
    /// ~873 K targets.
    Low,
    /// ~1173 K targets.
    Intermediate,
    /// ~1473 K targets.
    High,
}

impl TemperatureRegime {
    pub fn classify(temperature_k: f64) -> Self {
        if temperature_k < 1000.0 {
            TemperatureRegime::Low
        } else if temperature_k < 1350.0 {
            TemperatureRegime::Intermediate
        } else {
            TemperatureRegime::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureRegime::Low => "Low (~873 K)",
            TemperatureRegime::Intermediate => "Intermediate (~1,173 K)",
            TemperatureRegime::High => "High (~1,473 K)",
        }
    }
}

/// Both correlations evaluated for one specimen. Failed pairs carry
/// their error; the other correlation's result is unaffected.
#[derive(Debug)]
pub struct SpecimenSensitivity {
    pub specimen: Specimen,
    pub storms: FgrResult<SensitivityBreakdown>,
    pub rogozkin: FgrResult<SensitivityBreakdown>,
}

impl SpecimenSensitivity {
    /// |FGR_Storms − FGR_Rogozkin|, when both correlations evaluated.
    pub fn discrepancy_pct(&self) -> Option<f64> {
        match (&self.storms, &self.rogozkin) {
            (Ok(s), Ok(r)) => Some((s.fgr_pct - r.fgr_pct).abs()),
            _ => None,
        }
    }

    pub fn regime(&self) -> TemperatureRegime {
        TemperatureRegime::classify(self.specimen.temperature_k)
    }
}

/// Stateless evaluation engine: a validated configuration plus the
/// correlation set. Invocations share nothing mutable.
#[derive(Debug, Clone)]
pub struct SensitivityEngine {
    config: SensitivityConfig,
}

impl SensitivityEngine {
    pub fn new(config: SensitivityConfig) -> FgrResult<Self> {
        config.validate()?;
        Ok(SensitivityEngine { config })
    }

    pub fn with_defaults() -> Self {
        SensitivityEngine {
            config: SensitivityConfig::default(),
        }
    }

    pub fn config(&self) -> &SensitivityConfig {
        &self.config
    }

    /// Evaluate one correlation for one specimen.
    ///
    /// Owns the unit boundary: the matrix stores kelvin, and Rogozkin's
    /// native unit is degrees Celsius, so the conversion happens here and
    /// nowhere else.
    pub fn evaluate_specimen(
        &self,
        specimen: &Specimen,
        correlation: Correlation,
    ) -> FgrResult<SensitivityBreakdown> {
        let temperature = match correlation {
            Correlation::Storms => specimen.temperature_k,
            Correlation::Rogozkin => kelvin_to_celsius(specimen.temperature_k),
        };
        let point = EvaluationPoint::new(temperature, specimen.burnup_fima, specimen.density_td);
        propagate_variance(correlation, &point, &self.config)
    }

    fn evaluate_one(&self, specimen: &Specimen) -> SpecimenSensitivity {
        SpecimenSensitivity {
            specimen: specimen.clone(),
            storms: self.evaluate_specimen(specimen, Correlation::Storms),
            rogozkin: self.evaluate_specimen(specimen, Correlation::Rogozkin),
        }
    }

    /// Sequential batch evaluation, one record per specimen, input order
    /// preserved.
    pub fn evaluate_matrix(&self, specimens: &[Specimen]) -> Vec<SpecimenSensitivity> {
        specimens.iter().map(|s| self.evaluate_one(s)).collect()
    }

    /// Parallel batch evaluation. Order-preserving collect keeps the
    /// output identical to [`evaluate_matrix`].
    pub fn evaluate_matrix_par(&self, specimens: &[Specimen]) -> Vec<SpecimenSensitivity> {
        specimens
            .par_iter()
            .map(|s| self.evaluate_one(s))
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Central Finite Differences
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Partial derivative estimation by symmetric perturbation.
//!
//! Step sizes are fixed per dimension and supplied by the caller from
//! [`fgr_types::config::FiniteDifferenceSteps`]; they are never inferred
//! adaptively, so repeated runs reproduce derivatives exactly.

use crate::correlation::{Correlation, EvaluationPoint, InputDimension};
use fgr_types::config::FiniteDifferenceSteps;
use fgr_types::error::{FgrError, FgrResult};

/// Central-difference estimate of ∂FGR/∂x at `point`:
/// `(f(x + h) − f(x − h)) / 2h` with all other coordinates held fixed.
///
/// Fails if the step is not finite and positive, or if either perturbed
/// point leaves the correlation's valid domain.
pub fn partial_derivative(
    correlation: Correlation,
    point: &EvaluationPoint,
    dimension: InputDimension,
    step: f64,
) -> FgrResult<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Err(FgrError::ConfigError(format!(
            "finite-difference step must be finite and > 0, got {step}"
        )));
    }
    let forward = correlation.evaluate(&point.offset(dimension, step))?;
    let backward = correlation.evaluate(&point.offset(dimension, -step))?;
    Ok((forward - backward) / (2.0 * step))
}

/// Step size for one dimension out of the fixed per-dimension set.
pub fn step_for(steps: &FiniteDifferenceSteps, dimension: InputDimension) -> f64 {
    match dimension {
        InputDimension::Temperature => steps.temperature_k,
        InputDimension::Burnup => steps.burnup_fima,
        InputDimension::Density => steps.density_td,
    }
}

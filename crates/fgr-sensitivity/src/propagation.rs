// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Variance Propagation
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! First-order uncertainty propagation with variance decomposition.
//!
//! σ²(FGR) = Σ_i (∂f/∂x_i)²·Δx_i² over the dimensions the correlation
//! consumes — uncorrelated inputs, no cross terms. Fractional
//! contributions sum to 100 % whenever the total variance is nonzero.

use crate::correlation::{Correlation, EvaluationPoint, InputDimension};
use crate::derivative::{partial_derivative, step_for};
use fgr_types::config::{InputUncertainty, SensitivityConfig};
use fgr_types::error::{FgrError, FgrResult};
use serde::Serialize;

/// Total variance at or below this floor is treated as degenerate.
const VARIANCE_FLOOR: f64 = 1e-300;

/// Contribution of one input dimension to the propagated variance.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VarianceTerm {
    pub dimension: InputDimension,
    /// ∂FGR/∂x at the central point [%/unit].
    pub partial: f64,
    /// (∂FGR/∂x)²·Δx² [%²].
    pub variance: f64,
    /// Share of the total variance [%]. `None` when the total variance
    /// is degenerate and the fraction is undefined.
    pub fraction_pct: Option<f64>,
}

/// Immutable sensitivity record for one (specimen, correlation) pair.
#[derive(Debug, Clone, Serialize)]
pub struct SensitivityBreakdown {
    pub correlation: Correlation,
    /// Central FGR estimate [%].
    pub fgr_pct: f64,
    /// One term per dimension the correlation consumes, in
    /// `correlation.dimensions()` order.
    pub terms: Vec<VarianceTerm>,
    /// Sum of the per-dimension variance contributions [%²].
    pub total_variance: f64,
    /// Propagated standard deviation [%].
    pub total_std_pct: f64,
}

impl SensitivityBreakdown {
    /// True when all relevant partials vanished and fractional
    /// contributions are undefined.
    pub fn is_degenerate(&self) -> bool {
        self.total_variance <= VARIANCE_FLOOR
    }

    /// Fractional contribution of `dimension`, or `DegenerateVariance`
    /// when the total variance is zero. Dimensions the correlation does
    /// not consume report a zero fraction.
    pub fn fraction_pct(&self, dimension: InputDimension) -> FgrResult<f64> {
        if self.is_degenerate() {
            return Err(FgrError::DegenerateVariance {
                fgr_pct: self.fgr_pct,
            });
        }
        Ok(self
            .terms
            .iter()
            .find(|t| t.dimension == dimension)
            .and_then(|t| t.fraction_pct)
            .unwrap_or(0.0))
    }
}

fn half_width_for(uncertainties: &InputUncertainty, dimension: InputDimension) -> f64 {
    match dimension {
        InputDimension::Temperature => uncertainties.delta_temperature_k,
        InputDimension::Burnup => uncertainties.delta_burnup_fima,
        InputDimension::Density => uncertainties.delta_density_td,
    }
}

/// Propagate input uncertainties through `correlation` at `point`.
///
/// `point` is in the correlation's native units. Dimensions the
/// correlation does not consume are not evaluated at all.
pub fn propagate_variance(
    correlation: Correlation,
    point: &EvaluationPoint,
    config: &SensitivityConfig,
) -> FgrResult<SensitivityBreakdown> {
    config.validate()?;
    let fgr_pct = correlation.evaluate(point)?;

    let mut terms = Vec::with_capacity(correlation.dimensions().len());
    let mut total_variance = 0.0;
    for &dimension in correlation.dimensions() {
        let step = step_for(&config.fd_steps, dimension);
        let partial = partial_derivative(correlation, point, dimension, step)?;
        let half_width = half_width_for(&config.uncertainties, dimension);
        let variance = (partial * half_width).powi(2);
        total_variance += variance;
        terms.push(VarianceTerm {
            dimension,
            partial,
            variance,
            fraction_pct: None,
        });
    }

    if total_variance > VARIANCE_FLOOR {
        for term in &mut terms {
            term.fraction_pct = Some(100.0 * term.variance / total_variance);
        }
    }

    Ok(SensitivityBreakdown {
        correlation,
        fgr_pct,
        terms,
        total_variance,
        total_std_pct: total_variance.sqrt(),
    })
}

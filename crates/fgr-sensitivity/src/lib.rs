// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Engine
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Sensitivity engine for the ROADRUNNER UN MiniFuel FGR correlations.
//!
//! Evaluates the Storms and Rogozkin fission gas release correlations at
//! per-specimen (T, BU, ρ) conditions, estimates partial derivatives by
//! central finite differences, and propagates input uncertainties to a
//! first-order variance decomposition (Appendix A methodology).

pub mod batch;
pub mod correlation;
pub mod derivative;
pub mod propagation;
pub mod report;

pub use batch::{SensitivityEngine, SpecimenSensitivity, TemperatureRegime};
pub use correlation::{kelvin_to_celsius, Correlation, EvaluationPoint, InputDimension};
pub use propagation::{propagate_variance, SensitivityBreakdown, VarianceTerm};

// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Constants
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Correlation coefficients and default uncertainty-propagation constants.
//!
//! Coefficient values follow the published Storms and Rogozkin UN FGR
//! correlations; default half-widths and finite-difference steps follow
//! the ROADRUNNER Appendix A methodology.

/// Storms logistic rate coefficient [1/K].
pub const STORMS_RATE: f64 = 0.0025;

/// Storms density prefactor.
pub const STORMS_DENSITY_PREFACTOR: f64 = 90.0;

/// Storms density exponent (ρ in %TD).
pub const STORMS_DENSITY_EXP: f64 = 0.77;

/// Storms burnup exponent (BU in %FIMA).
pub const STORMS_BURNUP_EXP: f64 = 0.09;

/// Rogozkin prefactor [%].
pub const ROGOZKIN_PREFACTOR: f64 = 3.05;

/// Rogozkin burnup exponent (BU in %FIMA).
pub const ROGOZKIN_BURNUP_EXP: f64 = 1.92;

/// Rogozkin activation temperature [degC].
pub const ROGOZKIN_ACTIVATION_C: f64 = 2086.0;

/// Offset between kelvin and degrees Celsius.
pub const KELVIN_CELSIUS_OFFSET: f64 = 273.15;

/// Default temperature uncertainty half-width [K].
/// Thermal design margin plus SiC thermometry resolution.
pub const DELTA_TEMPERATURE_K: f64 = 30.0;

/// Default burnup uncertainty half-width [%FIMA].
/// Neutronic calculation uncertainty.
pub const DELTA_BURNUP_FIMA: f64 = 0.5;

/// Default density uncertainty half-width [%TD].
/// As-fabricated density variability.
pub const DELTA_DENSITY_TD: f64 = 2.0;

/// Central-difference step in temperature [K]. Fixed, never adaptive.
pub const FD_STEP_TEMPERATURE_K: f64 = 1.0;

/// Central-difference step in burnup [%FIMA]. Fixed, never adaptive.
pub const FD_STEP_BURNUP_FIMA: f64 = 0.01;

/// Central-difference step in density [%TD]. Fixed, never adaptive.
pub const FD_STEP_DENSITY_TD: f64 = 0.1;

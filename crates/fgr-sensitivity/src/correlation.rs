// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Correlations
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Empirical FGR correlations for uranium nitride fuel.
//!
//! Storms:   FGR = 100 / (exp(0.0025·(90·ρ^0.77 / BU^0.09 − T_K)) + 1)
//! Rogozkin: FGR = 3.05·BU^1.92·exp(−2086 / T_C)
//!
//! Each correlation takes its native temperature unit; the caller converts
//! kelvin to Celsius before invoking Rogozkin (see [`kelvin_to_celsius`]).

use fgr_types::constants;
use fgr_types::error::{FgrError, FgrResult};
use serde::{Deserialize, Serialize};

/// One input dimension of a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputDimension {
    Temperature,
    Burnup,
    Density,
}

impl InputDimension {
    pub fn label(&self) -> &'static str {
        match self {
            InputDimension::Temperature => "T",
            InputDimension::Burnup => "BU",
            InputDimension::Density => "rho",
        }
    }
}

/// A (T, BU, ρ) evaluation point in the correlation's native units.
///
/// `temperature` is kelvin for Storms and degrees Celsius for Rogozkin;
/// density is carried for both but never read by Rogozkin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPoint {
    pub temperature: f64,
    pub burnup_fima: f64,
    pub density_td: f64,
}

impl EvaluationPoint {
    pub fn new(temperature: f64, burnup_fima: f64, density_td: f64) -> Self {
        EvaluationPoint {
            temperature,
            burnup_fima,
            density_td,
        }
    }

    /// Copy of this point with one coordinate shifted by `delta`.
    pub fn offset(&self, dimension: InputDimension, delta: f64) -> Self {
        let mut p = *self;
        match dimension {
            InputDimension::Temperature => p.temperature += delta,
            InputDimension::Burnup => p.burnup_fima += delta,
            InputDimension::Density => p.density_td += delta,
        }
        p
    }
}

pub fn kelvin_to_celsius(temperature_k: f64) -> f64 {
    temperature_k - constants::KELVIN_CELSIUS_OFFSET
}

/// The closed set of FGR correlations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Correlation {
    /// Logistic form in (ρ, BU, T). Temperature in kelvin.
    Storms,
    /// Power-law × exponential form in (BU, T). Temperature in degrees
    /// Celsius; density not used.
    Rogozkin,
}

impl Correlation {
    pub fn name(&self) -> &'static str {
        match self {
            Correlation::Storms => "Storms",
            Correlation::Rogozkin => "Rogozkin",
        }
    }

    /// The input dimensions this correlation actually consumes.
    pub fn dimensions(&self) -> &'static [InputDimension] {
        match self {
            Correlation::Storms => &[
                InputDimension::Temperature,
                InputDimension::Burnup,
                InputDimension::Density,
            ],
            Correlation::Rogozkin => &[InputDimension::Temperature, InputDimension::Burnup],
        }
    }

    /// Evaluate the correlation at `point`. Returns FGR in percent.
    ///
    /// The output is generally expected in [0, 100] but is never clamped;
    /// an out-of-range value signals invalid inputs to the caller.
    pub fn evaluate(&self, point: &EvaluationPoint) -> FgrResult<f64> {
        self.check_domain(point)?;
        let fgr = match self {
            Correlation::Storms => {
                let arg = constants::STORMS_RATE
                    * (constants::STORMS_DENSITY_PREFACTOR
                        * point.density_td.powf(constants::STORMS_DENSITY_EXP)
                        / point.burnup_fima.powf(constants::STORMS_BURNUP_EXP)
                        - point.temperature);
                100.0 / (arg.exp() + 1.0)
            }
            Correlation::Rogozkin => {
                constants::ROGOZKIN_PREFACTOR
                    * point.burnup_fima.powf(constants::ROGOZKIN_BURNUP_EXP)
                    * (-constants::ROGOZKIN_ACTIVATION_C / point.temperature).exp()
            }
        };
        if !fgr.is_finite() {
            return Err(FgrError::InvalidInput(format!(
                "{} produced a non-finite FGR at T={}, BU={}, rho={}",
                self.name(),
                point.temperature,
                point.burnup_fima,
                point.density_td
            )));
        }
        Ok(fgr)
    }

    /// Reject points outside the correlation's valid domain: burnup and
    /// density are bases of non-integer powers and must be positive, and
    /// Rogozkin needs a positive Celsius temperature for its exponential.
    fn check_domain(&self, point: &EvaluationPoint) -> FgrResult<()> {
        if !point.temperature.is_finite() {
            return Err(FgrError::InvalidInput(format!(
                "{}: temperature must be finite, got {}",
                self.name(),
                point.temperature
            )));
        }
        if !point.burnup_fima.is_finite() || point.burnup_fima <= 0.0 {
            return Err(FgrError::InvalidInput(format!(
                "{}: burnup must be finite and > 0 %FIMA, got {}",
                self.name(),
                point.burnup_fima
            )));
        }
        match self {
            Correlation::Storms => {
                if !point.density_td.is_finite() || point.density_td <= 0.0 {
                    return Err(FgrError::InvalidInput(format!(
                        "Storms: density must be finite and > 0 %TD, got {}",
                        point.density_td
                    )));
                }
            }
            Correlation::Rogozkin => {
                if point.temperature <= 0.0 {
                    return Err(FgrError::InvalidInput(format!(
                        "Rogozkin: temperature must be > 0 degC, got {}",
                        point.temperature
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storms_known_value() {
        // Intermediate-temperature reference point.
        let p = EvaluationPoint::new(1173.0, 6.0, 93.0);
        let fgr = Correlation::Storms.evaluate(&p).unwrap();
        assert!(
            (fgr - 3.401457433708328).abs() < 1e-9,
            "Storms FGR mismatch: {fgr}"
        );
    }

    #[test]
    fn test_rogozkin_known_value() {
        let p = EvaluationPoint::new(kelvin_to_celsius(1173.0), 6.0, 93.0);
        let fgr = Correlation::Rogozkin.evaluate(&p).unwrap();
        assert!(
            (fgr - 9.366651168574773).abs() < 1e-9,
            "Rogozkin FGR mismatch: {fgr}"
        );
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let p = EvaluationPoint::new(1190.0, 7.058, 92.89);
        let a = Correlation::Storms.evaluate(&p).unwrap();
        let b = Correlation::Storms.evaluate(&p).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "Evaluation must be bit-identical");
    }

    #[test]
    fn test_storms_increases_with_temperature() {
        let cold = EvaluationPoint::new(1100.0, 6.0, 93.0);
        let hot = EvaluationPoint::new(1300.0, 6.0, 93.0);
        let f_cold = Correlation::Storms.evaluate(&cold).unwrap();
        let f_hot = Correlation::Storms.evaluate(&hot).unwrap();
        assert!(
            f_hot > f_cold,
            "Logistic must increase in T: {f_cold} vs {f_hot}"
        );
    }

    #[test]
    fn test_rogozkin_ignores_density() {
        let a = EvaluationPoint::new(900.0, 6.0, 85.0);
        let b = EvaluationPoint::new(900.0, 6.0, 96.0);
        let fa = Correlation::Rogozkin.evaluate(&a).unwrap();
        let fb = Correlation::Rogozkin.evaluate(&b).unwrap();
        assert_eq!(fa.to_bits(), fb.to_bits());
    }

    #[test]
    fn test_unit_mismatch_is_material() {
        // Kelvin fed where Celsius is expected must give a visibly wrong
        // answer; this anchors the conversion boundary.
        let wrong = Correlation::Rogozkin
            .evaluate(&EvaluationPoint::new(1173.0, 6.0, 93.0))
            .unwrap();
        let right = Correlation::Rogozkin
            .evaluate(&EvaluationPoint::new(899.85, 6.0, 93.0))
            .unwrap();
        assert!(
            (wrong - right).abs() > 1.0,
            "Unit mismatch should change FGR materially: {wrong} vs {right}"
        );
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let bad_bu = EvaluationPoint::new(1173.0, 0.0, 93.0);
        assert!(matches!(
            Correlation::Storms.evaluate(&bad_bu),
            Err(FgrError::InvalidInput(_))
        ));

        let bad_rho = EvaluationPoint::new(1173.0, 6.0, -1.0);
        assert!(Correlation::Storms.evaluate(&bad_rho).is_err());
        // Rogozkin never reads density, so it accepts the same point.
        let celsius = EvaluationPoint::new(899.85, 6.0, -1.0);
        assert!(Correlation::Rogozkin.evaluate(&celsius).is_ok());

        let bad_t = EvaluationPoint::new(f64::NAN, 6.0, 93.0);
        assert!(Correlation::Storms.evaluate(&bad_t).is_err());
        assert!(Correlation::Rogozkin
            .evaluate(&EvaluationPoint::new(-10.0, 6.0, 93.0))
            .is_err());
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Correlation::Storms.dimensions().len(), 3);
        assert_eq!(Correlation::Rogozkin.dimensions().len(), 2);
        assert!(!Correlation::Rogozkin
            .dimensions()
            .contains(&InputDimension::Density));
    }

    #[test]
    fn test_kelvin_to_celsius() {
        assert!((kelvin_to_celsius(1173.0) - 899.85).abs() < 1e-12);
        assert!((kelvin_to_celsius(273.15)).abs() < 1e-12);
    }
}

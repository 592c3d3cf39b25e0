// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Config
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use crate::constants;
use crate::error::{FgrError, FgrResult};
use serde::{Deserialize, Serialize};

/// Absolute uncertainty half-widths, one per input dimension.
/// Constant across all specimens and both correlations; Rogozkin
/// simply never consumes the density entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InputUncertainty {
    /// ΔT [K] (default: ±30).
    #[serde(default = "default_delta_temperature")]
    pub delta_temperature_k: f64,
    /// ΔBU [%FIMA] (default: ±0.5).
    #[serde(default = "default_delta_burnup")]
    pub delta_burnup_fima: f64,
    /// Δρ [%TD] (default: ±2).
    #[serde(default = "default_delta_density")]
    pub delta_density_td: f64,
}

/// Central-difference step sizes, one per input dimension.
/// Distinct from the uncertainty half-widths and deliberately fixed;
/// reproducibility requires exactly these constants, not adaptive steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiniteDifferenceSteps {
    /// h_T [K] (default: 1).
    #[serde(default = "default_step_temperature")]
    pub temperature_k: f64,
    /// h_BU [%FIMA] (default: 0.01).
    #[serde(default = "default_step_burnup")]
    pub burnup_fima: f64,
    /// h_ρ [%TD] (default: 0.1).
    #[serde(default = "default_step_density")]
    pub density_td: f64,
}

/// Full sensitivity-analysis configuration.
///
/// Passed explicitly into the engine entry points so tests can override
/// uncertainty magnitudes without touching shared state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensitivityConfig {
    #[serde(default)]
    pub uncertainties: InputUncertainty,
    #[serde(default)]
    pub fd_steps: FiniteDifferenceSteps,
}

fn default_delta_temperature() -> f64 {
    constants::DELTA_TEMPERATURE_K
}
fn default_delta_burnup() -> f64 {
    constants::DELTA_BURNUP_FIMA
}
fn default_delta_density() -> f64 {
    constants::DELTA_DENSITY_TD
}
fn default_step_temperature() -> f64 {
    constants::FD_STEP_TEMPERATURE_K
}
fn default_step_burnup() -> f64 {
    constants::FD_STEP_BURNUP_FIMA
}
fn default_step_density() -> f64 {
    constants::FD_STEP_DENSITY_TD
}

impl Default for InputUncertainty {
    fn default() -> Self {
        InputUncertainty {
            delta_temperature_k: default_delta_temperature(),
            delta_burnup_fima: default_delta_burnup(),
            delta_density_td: default_delta_density(),
        }
    }
}

impl Default for FiniteDifferenceSteps {
    fn default() -> Self {
        FiniteDifferenceSteps {
            temperature_k: default_step_temperature(),
            burnup_fima: default_step_burnup(),
            density_td: default_step_density(),
        }
    }
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        SensitivityConfig {
            uncertainties: InputUncertainty::default(),
            fd_steps: FiniteDifferenceSteps::default(),
        }
    }
}

impl SensitivityConfig {
    /// Load from a JSON file. Missing fields fall back to the published
    /// Appendix A defaults.
    pub fn from_file(path: &str) -> FgrResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject non-finite or non-positive half-widths and step sizes.
    pub fn validate(&self) -> FgrResult<()> {
        let entries = [
            ("uncertainties.delta_temperature_k", self.uncertainties.delta_temperature_k),
            ("uncertainties.delta_burnup_fima", self.uncertainties.delta_burnup_fima),
            ("uncertainties.delta_density_td", self.uncertainties.delta_density_td),
            ("fd_steps.temperature_k", self.fd_steps.temperature_k),
            ("fd_steps.burnup_fima", self.fd_steps.burnup_fima),
            ("fd_steps.density_td", self.fd_steps.density_td),
        ];
        for (name, value) in entries {
            if !value.is_finite() || value <= 0.0 {
                return Err(FgrError::ConfigError(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_constants() {
        let cfg = SensitivityConfig::default();
        assert!((cfg.uncertainties.delta_temperature_k - 30.0).abs() < 1e-12);
        assert!((cfg.uncertainties.delta_burnup_fima - 0.5).abs() < 1e-12);
        assert!((cfg.uncertainties.delta_density_td - 2.0).abs() < 1e-12);
        assert!((cfg.fd_steps.temperature_k - 1.0).abs() < 1e-12);
        assert!((cfg.fd_steps.burnup_fima - 0.01).abs() < 1e-12);
        assert!((cfg.fd_steps.density_td - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: SensitivityConfig =
            serde_json::from_str(r#"{"uncertainties": {"delta_temperature_k": 50.0}}"#).unwrap();
        assert!((cfg.uncertainties.delta_temperature_k - 50.0).abs() < 1e-12);
        assert!((cfg.uncertainties.delta_burnup_fima - 0.5).abs() < 1e-12);
        assert!((cfg.fd_steps.density_td - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = SensitivityConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: SensitivityConfig = serde_json::from_str(&json).unwrap();
        assert!(
            (cfg.uncertainties.delta_density_td - cfg2.uncertainties.delta_density_td).abs()
                < 1e-15
        );
        assert!((cfg.fd_steps.burnup_fima - cfg2.fd_steps.burnup_fima).abs() < 1e-15);
    }

    #[test]
    fn test_validate_rejects_non_positive_step() {
        let mut cfg = SensitivityConfig::default();
        cfg.fd_steps.temperature_k = 0.0;
        assert!(matches!(cfg.validate(), Err(FgrError::ConfigError(_))));

        cfg.fd_steps.temperature_k = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_half_width() {
        let mut cfg = SensitivityConfig::default();
        cfg.uncertainties.delta_burnup_fima = -0.5;
        assert!(cfg.validate().is_err());
    }
}

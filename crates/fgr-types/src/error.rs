// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Errors
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FgrError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Degenerate variance: total propagated variance is zero at FGR = {fgr_pct} %, \
         fractional contributions are undefined"
    )]
    DegenerateVariance { fgr_pct: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FgrResult<T> = Result<T, FgrError>;

// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Tabular Reporting
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! CSV and fixed-width table rendering of batch results.
//!
//! One CSV row per specimen with per-correlation estimate, propagated
//! sigma, and variance shares. Undefined fractions (degenerate variance)
//! render as `NA`; failed pairs keep their row with the error message in
//! the status column instead of aborting the report.

use crate::batch::{SpecimenSensitivity, TemperatureRegime};
use crate::correlation::InputDimension;
use crate::propagation::SensitivityBreakdown;
use fgr_types::error::FgrResult;
use std::fmt::Write as _;
use std::path::Path;

const CSV_HEADER: &str = "Sample_ID,Target,T_K,BU_FIMA,TD_pct,\
FGR_Storms,sigma_Storms,Storms_var_T_pct,Storms_var_BU_pct,Storms_var_TD_pct,\
FGR_Rogozkin,sigma_Rogozkin,Rogozkin_var_T_pct,Rogozkin_var_BU_pct,\
Abs_Discrepancy,Status";

fn fmt4(value: f64) -> String {
    format!("{value:.4}")
}

fn fmt2(value: f64) -> String {
    format!("{value:.2}")
}

fn fraction_cell(breakdown: &SensitivityBreakdown, dimension: InputDimension) -> String {
    match breakdown.fraction_pct(dimension) {
        Ok(f) => fmt4(f),
        // Degenerate variance: the share is undefined, never 0/0.
        Err(_) => "NA".to_string(),
    }
}

fn quote(message: &str) -> String {
    format!("\"{}\"", message.replace('"', "\"\""))
}

fn csv_row(record: &SpecimenSensitivity) -> String {
    let s = &record.specimen;
    let mut row = format!(
        "{},{},{:.1},{:.3},{:.2}",
        s.id, s.target, s.temperature_k, s.burnup_fima, s.density_td
    );

    match &record.storms {
        Ok(b) => {
            row.push_str(&format!(
                ",{},{},{},{},{}",
                fmt4(b.fgr_pct),
                fmt4(b.total_std_pct),
                fraction_cell(b, InputDimension::Temperature),
                fraction_cell(b, InputDimension::Burnup),
                fraction_cell(b, InputDimension::Density),
            ));
        }
        Err(_) => row.push_str(",NA,NA,NA,NA,NA"),
    }
    match &record.rogozkin {
        Ok(b) => {
            row.push_str(&format!(
                ",{},{},{},{}",
                fmt4(b.fgr_pct),
                fmt4(b.total_std_pct),
                fraction_cell(b, InputDimension::Temperature),
                fraction_cell(b, InputDimension::Burnup),
            ));
        }
        Err(_) => row.push_str(",NA,NA,NA,NA"),
    }
    match record.discrepancy_pct() {
        Some(d) => row.push_str(&format!(",{}", fmt4(d))),
        None => row.push_str(",NA"),
    }

    let status = match (&record.storms, &record.rogozkin) {
        (Ok(_), Ok(_)) => "ok".to_string(),
        (Err(e), Ok(_)) => quote(&format!("Storms: {e}")),
        (Ok(_), Err(e)) => quote(&format!("Rogozkin: {e}")),
        (Err(es), Err(er)) => quote(&format!("Storms: {es}; Rogozkin: {er}")),
    };
    row.push(',');
    row.push_str(&status);
    row
}

/// Render the batch as CSV, header included.
pub fn results_csv(records: &[SpecimenSensitivity]) -> String {
    let mut out = String::with_capacity(records.len() * 160 + CSV_HEADER.len());
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&csv_row(record));
        out.push('\n');
    }
    out
}

/// Write the batch CSV to `path`.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[SpecimenSensitivity]) -> FgrResult<()> {
    std::fs::write(path, results_csv(records))?;
    Ok(())
}

/// Fixed-width per-specimen table: predictions, propagated sigmas, and
/// model discrepancy.
pub fn summary_table(records: &[SpecimenSensitivity]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>7} {:>7} {:>8} {:>9} {:>7} {:>9} {:>7} {:>7}",
        "Sample", "T(K)", "BU", "rho(%TD)", "FGR_S(%)", "s_S(%)", "FGR_R(%)", "s_R(%)", "|d|(%)"
    );
    for record in records {
        let s = &record.specimen;
        let (fgr_s, sig_s) = match &record.storms {
            Ok(b) => (fmt2(b.fgr_pct), fmt2(b.total_std_pct)),
            Err(_) => ("NA".to_string(), "NA".to_string()),
        };
        let (fgr_r, sig_r) = match &record.rogozkin {
            Ok(b) => (fmt2(b.fgr_pct), fmt2(b.total_std_pct)),
            Err(_) => ("NA".to_string(), "NA".to_string()),
        };
        let disc = record
            .discrepancy_pct()
            .map(fmt2)
            .unwrap_or_else(|| "NA".to_string());
        let _ = writeln!(
            out,
            "{:<12} {:>7.1} {:>7.2} {:>8.2} {:>9} {:>7} {:>9} {:>7} {:>7}",
            s.id, s.temperature_k, s.burnup_fima, s.density_td, fgr_s, sig_s, fgr_r, sig_r, disc
        );
    }
    out
}

/// Mean variance shares for one regime's successfully evaluated records.
#[derive(Debug, Clone)]
pub struct RegimeSummary {
    pub regime: TemperatureRegime,
    pub specimens: usize,
    pub storms_mean_pct: [f64; 3],
    pub rogozkin_mean_pct: [f64; 2],
    pub mean_discrepancy_pct: f64,
}

/// Group records by temperature regime and average the variance
/// decompositions. Regimes with no valid records are omitted; degenerate
/// records are skipped rather than averaged as zeros.
pub fn regime_summaries(records: &[SpecimenSensitivity]) -> Vec<RegimeSummary> {
    let mut out = Vec::new();
    for regime in [
        TemperatureRegime::Low,
        TemperatureRegime::Intermediate,
        TemperatureRegime::High,
    ] {
        let mut n = 0usize;
        let mut storms_acc = [0.0; 3];
        let mut rog_acc = [0.0; 2];
        let mut disc_acc = 0.0;
        for record in records.iter().filter(|r| r.regime() == regime) {
            let (Ok(sb), Ok(rb)) = (&record.storms, &record.rogozkin) else {
                continue;
            };
            if sb.is_degenerate() || rb.is_degenerate() {
                continue;
            }
            let dims = [
                InputDimension::Temperature,
                InputDimension::Burnup,
                InputDimension::Density,
            ];
            for (acc, dim) in storms_acc.iter_mut().zip(dims) {
                *acc += sb.fraction_pct(dim).unwrap_or(0.0);
            }
            for (acc, dim) in rog_acc.iter_mut().zip(dims) {
                *acc += rb.fraction_pct(dim).unwrap_or(0.0);
            }
            disc_acc += (sb.fgr_pct - rb.fgr_pct).abs();
            n += 1;
        }
        if n == 0 {
            continue;
        }
        let inv = 1.0 / n as f64;
        out.push(RegimeSummary {
            regime,
            specimens: n,
            storms_mean_pct: storms_acc.map(|v| v * inv),
            rogozkin_mean_pct: rog_acc.map(|v| v * inv),
            mean_discrepancy_pct: disc_acc * inv,
        });
    }
    out
}

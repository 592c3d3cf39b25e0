// ─────────────────────────────────────────────────────────────────────
// ROADRUNNER FGR Sensitivity — Specimen Matrix
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Specimen data model and the embedded ROADRUNNER irradiation matrix.
//!
//! Per-specimen conditions (Tables 2 and 3): TAVA fuel temperature,
//! discharge burnup, and as-fabricated density for six targets of six
//! subcapsules each.

use serde::{Deserialize, Serialize};

/// One irradiated UN MiniFuel specimen. Read-only input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specimen {
    /// Sample identifier, e.g. "RRN03-4".
    pub id: String,
    /// Target (capsule) number, 1-6.
    pub target: u8,
    /// TAVA fuel temperature [K].
    pub temperature_k: f64,
    /// Discharge burnup [%FIMA].
    pub burnup_fima: f64,
    /// As-fabricated density [%TD].
    pub density_td: f64,
}

impl Specimen {
    pub fn new(id: &str, target: u8, temperature_k: f64, burnup_fima: f64, density_td: f64) -> Self {
        Specimen {
            id: id.to_string(),
            target,
            temperature_k,
            burnup_fima,
            density_td,
        }
    }
}

/// (id, target, T [K], BU [%FIMA], ρ [%TD]) per specimen.
const MATRIX: [(&str, u8, f64, f64, f64); 36] = [
    ("RRN01-6", 1, 1190.0, 7.058, 92.89),
    ("RRN01-5", 1, 1190.0, 7.470, 94.21),
    ("RRN01-4", 1, 1181.0, 7.657, 93.43),
    ("RRN01-3", 1, 1183.0, 7.839, 94.73),
    ("RRN01-2", 1, 1163.0, 7.730, 95.21),
    ("RRN01-1", 1, 1182.0, 7.576, 95.76),
    ("RRN02-6", 2, 877.0, 7.338, 94.79),
    ("RRN02-5", 2, 881.0, 7.726, 94.36),
    ("RRN02-4", 2, 1183.0, 7.908, 93.19),
    ("RRN02-3", 2, 1479.0, 8.081, 92.00),
    ("RRN02-2", 2, 1487.0, 8.020, 95.01),
    ("RRN02-1", 2, 1181.0, 7.716, 95.49),
    ("RRN03-6", 3, 1184.0, 3.498, 89.09),
    ("RRN03-5", 3, 1187.0, 3.681, 86.27),
    ("RRN03-4", 3, 1181.0, 3.741, 89.02),
    ("RRN03-3", 3, 1172.0, 3.852, 95.21),
    ("RRN03-2", 3, 1187.0, 3.842, 95.91),
    ("RRN03-1", 3, 1181.0, 3.740, 94.50),
    ("RRN04-6", 4, 875.0, 5.936, 94.33),
    ("RRN04-5", 4, 881.0, 6.229, 95.45),
    ("RRN04-4", 4, 1172.0, 6.399, 95.59),
    ("RRN04-3", 4, 1483.0, 6.517, 93.48),
    ("RRN04-2", 4, 1490.0, 6.451, 96.05),
    ("RRN04-1", 4, 1175.0, 6.237, 95.60),
    ("RRN05-6", 5, 1191.0, 5.485, 87.30),
    ("RRN05-5", 5, 1183.0, 5.751, 88.57),
    ("RRN05-4", 5, 1183.0, 5.985, 88.19),
    ("RRN05-3", 5, 1179.0, 5.990, 93.27),
    ("RRN05-2", 5, 1182.0, 5.983, 94.07),
    ("RRN05-1", 5, 1175.0, 5.863, 96.32),
    ("RRN06-6", 6, 877.0, 3.757, 94.10),
    ("RRN06-5", 6, 881.0, 4.027, 95.43),
    ("RRN06-4", 6, 1183.0, 4.096, 95.63),
    ("RRN06-3", 6, 1479.0, 4.217, 95.14),
    ("RRN06-2", 6, 1487.0, 4.163, 96.14),
    ("RRN06-1", 6, 1181.0, 3.958, 95.01),
];

/// The full 36-specimen ROADRUNNER irradiation matrix.
pub fn roadrunner_matrix() -> Vec<Specimen> {
    MATRIX
        .iter()
        .map(|&(id, target, t, bu, td)| Specimen::new(id, target, t, bu, td))
        .collect()
}

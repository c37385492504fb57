//! Statistical spend analysis.

use std::collections::HashMap;

use num_traits::ToPrimitive;

use crate::ledger::CategorySpendRow;

use super::insights_model::{AnomalySeverity, SpendingAnomaly};

/// Absolute z-score past which an entry is flagged.
const ANOMALY_Z_THRESHOLD: f64 = 2.0;
/// Absolute z-score past which an anomaly is medium severity.
const MEDIUM_Z_THRESHOLD: f64 = 2.5;
/// Absolute z-score past which an anomaly is high severity.
const HIGH_Z_THRESHOLD: f64 = 3.0;

/// Flags spend entries whose amount deviates from their category's mean by
/// more than two standard deviations.
///
/// Statistics are per category over the daily sums, using the population
/// standard deviation. Categories with no spread (a single entry, or all
/// entries equal) yield nothing. Amount signs are the raw ledger sums, so a
/// large expense reads as an unusually low value.
pub fn detect_anomalies(rows: &[CategorySpendRow]) -> Vec<SpendingAnomaly> {
    let mut amounts_by_category: HashMap<&str, Vec<f64>> = HashMap::new();
    for row in rows {
        amounts_by_category
            .entry(row.category.as_str())
            .or_default()
            .push(row.amount.to_f64().unwrap_or(0.0));
    }

    let stats: HashMap<&str, (f64, f64)> = amounts_by_category
        .iter()
        .map(|(category, amounts)| (*category, mean_and_std(amounts)))
        .collect();

    let mut anomalies = Vec::new();
    for row in rows {
        let (mean, std) = match stats.get(row.category.as_str()) {
            Some(stats) => *stats,
            None => continue,
        };
        if std <= 0.0 {
            continue;
        }

        let amount = row.amount.to_f64().unwrap_or(0.0);
        let z_score = (amount - mean) / std;
        if z_score.abs() > ANOMALY_Z_THRESHOLD {
            anomalies.push(SpendingAnomaly {
                date: row.date,
                category: row.category.clone(),
                amount: row.amount,
                z_score,
                severity: severity_for(z_score.abs()),
                reason: reason_for(z_score),
            });
        }
    }

    anomalies
}

fn mean_and_std(amounts: &[f64]) -> (f64, f64) {
    let count = amounts.len() as f64;
    let mean = amounts.iter().sum::<f64>() / count;
    let variance = amounts
        .iter()
        .map(|amount| (amount - mean).powi(2))
        .sum::<f64>()
        / count;

    (mean, variance.sqrt())
}

fn severity_for(abs_z: f64) -> AnomalySeverity {
    if abs_z > HIGH_Z_THRESHOLD {
        AnomalySeverity::High
    } else if abs_z > MEDIUM_Z_THRESHOLD {
        AnomalySeverity::Medium
    } else {
        AnomalySeverity::Low
    }
}

fn reason_for(z_score: f64) -> String {
    if z_score > 0.0 {
        format!("Unusually high spending ({:.1}σ above average)", z_score)
    } else {
        format!(
            "Unusually low spending ({:.1}σ below average)",
            z_score.abs()
        )
    }
}

//! Qualitative-to-numeric scores (0–100) used for the bar display.

use crate::input::{Budget, Complexity, DataSensitivity, Traffic};

/// Upper bound on the combined risk score.
pub const RISK_CEILING: u8 = 95;
const RISK_BASE: u8 = 20;

pub fn score_complexity(complexity: &str) -> u8 {
    match Complexity::from_key(complexity) {
        Some(Complexity::Simple) => 25,
        Some(Complexity::Moderate) => 55,
        Some(Complexity::Complex) => 85,
        None => 50,
    }
}

pub fn score_cost(budget: &str) -> u8 {
    match Budget::from_key(budget) {
        Some(Budget::Minimal) => 20,
        Some(Budget::Moderate) => 50,
        Some(Budget::High) => 80,
        None => 40,
    }
}

/// Sensitivity and traffic terms are additive; the sum is capped at
/// [`RISK_CEILING`].
pub fn score_risk(data_sensitivity: &str, traffic: &str) -> u8 {
    let sensitivity = match DataSensitivity::from_key(data_sensitivity) {
        Some(DataSensitivity::Medium) => 20,
        Some(DataSensitivity::High) => 40,
        Some(DataSensitivity::Low) | None => 0,
    };
    let load = match Traffic::resolve(traffic) {
        Traffic::Medium => 10,
        Traffic::High => 20,
        Traffic::Low => 0,
    };
    (RISK_BASE + sensitivity + load).min(RISK_CEILING)
}

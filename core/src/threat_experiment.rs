//! Threat scenarios: Bernoulli attack/defence batches.
//!
//! Each scenario is one attack attempt with success probability
//! base_prob discounted by the defence strength:
//!   p_adj = clamp(base_prob * (1 - defence_strength), 0, 1)
//! The raw per-scenario records are returned alongside the summary so
//! the caller can show a sample, not just the aggregates.

use crate::{
    error::{check_probability, SimError, SimResult},
    rng::TrialRng,
    stats,
    summary::{Summary, SummaryValue},
    types::TrialCount,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRecord {
    /// 1-based sequence number within the batch.
    pub scenario_id:       u64,
    pub attack_successful: bool,
}

/// Effective attack probability after the defence discount.
pub fn adjusted_probability(base_prob: f64, defence_strength: f64) -> SimResult<f64> {
    check_probability("base_prob", base_prob)?;
    check_probability("defence_strength", defence_strength)?;
    Ok((base_prob * (1.0 - defence_strength)).clamp(0.0, 1.0))
}

/// Run `n` independent attack scenarios.
///
/// The summary reports the adjusted probability and the observed
/// success rate separately; they legitimately differ by sampling
/// variance.
pub fn simulate_bernoulli_batch(
    base_prob: f64,
    defence_strength: f64,
    n: TrialCount,
    rng: &mut TrialRng,
) -> SimResult<(Vec<ScenarioRecord>, Summary)> {
    let adjusted = adjusted_probability(base_prob, defence_strength)?;
    if n == 0 {
        return Err(SimError::InvalidTrialCount);
    }

    let scenarios: Vec<ScenarioRecord> = (1..=n)
        .map(|scenario_id| ScenarioRecord {
            scenario_id,
            attack_successful: rng.chance(adjusted),
        })
        .collect();

    let indicators: Vec<f64> = scenarios
        .iter()
        .map(|s| if s.attack_successful { 1.0 } else { 0.0 })
        .collect();
    let observed_rate = stats::expected_value(&indicators);

    let successes = scenarios.iter().filter(|s| s.attack_successful).count() as u64;
    let blocked = n - successes;

    let mut summary = Summary::new();
    summary.push("Simulated scenarios", SummaryValue::Count(n));
    summary.push("Adjusted attack probability", SummaryValue::Rate(adjusted));
    summary.push("Observed success rate", SummaryValue::Rate(observed_rate));
    summary.push("Successful attacks", SummaryValue::Count(successes));
    summary.push("Blocked attacks", SummaryValue::Count(blocked));

    log::debug!(
        "threat: n={n} base={base_prob} defence={defence_strength} p_adj={adjusted:.3} observed={observed_rate:.3}"
    );

    Ok((scenarios, summary))
}

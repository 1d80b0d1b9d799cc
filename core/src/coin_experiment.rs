//! Coin flips: n Bernoulli draws split into Heads/Tails.

use crate::{
    error::{check_probability, SimError, SimResult},
    frequency::FrequencyTable,
    rng::TrialRng,
    summary::{Summary, SummaryValue},
    types::TrialCount,
};

pub const HEADS: &str = "Heads";
pub const TAILS: &str = "Tails";
pub const FAIR_COIN_PROB: f64 = 0.5;

/// Draw `n` Bernoulli(prob) samples, `prob` being the Heads probability.
/// Both rows are always present; a category that never came up keeps
/// count 0 and relative frequency 0.
pub fn simulate_binary(
    n: TrialCount,
    prob: f64,
    rng: &mut TrialRng,
) -> SimResult<(FrequencyTable, Summary)> {
    if n == 0 {
        return Err(SimError::InvalidTrialCount);
    }
    check_probability("prob", prob)?;

    let mut heads: u64 = 0;
    for _ in 0..n {
        if rng.chance(prob) {
            heads += 1;
        }
    }
    let tails = n - heads;

    let table = FrequencyTable::from_counts(vec![
        (HEADS.to_string(), heads),
        (TAILS.to_string(), tails),
    ]);

    let heads_freq = table.row(HEADS).map(|r| r.relative_frequency).unwrap_or(0.0);
    let tails_freq = table.row(TAILS).map(|r| r.relative_frequency).unwrap_or(0.0);

    let mut summary = Summary::new();
    summary.push("Total trials", SummaryValue::Count(n));
    summary.push("Heads frequency", SummaryValue::Rate(heads_freq));
    summary.push("Tails frequency", SummaryValue::Rate(tails_freq));

    log::debug!("coin: n={n} prob={prob} heads={heads} tails={tails}");

    Ok((table, summary))
}

/// Fair-coin entry point used by the runner.
pub fn simulate_coin_flips(
    n: TrialCount,
    rng: &mut TrialRng,
) -> SimResult<(FrequencyTable, Summary)> {
    simulate_binary(n, FAIR_COIN_PROB, rng)
}

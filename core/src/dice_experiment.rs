//! Dice rolls: n uniform draws over {1..k}.

use crate::{
    error::{SimError, SimResult},
    frequency::FrequencyTable,
    rng::TrialRng,
    summary::{Summary, SummaryValue},
    types::TrialCount,
};

pub const DICE_FACES: u32 = 6;

/// Draw `n` uniform samples over {1..k}. The table always carries all
/// k categories, zero counts included, so its shape never depends on
/// which faces happened to come up.
pub fn simulate_categorical(
    n: TrialCount,
    k: u32,
    rng: &mut TrialRng,
) -> SimResult<(FrequencyTable, Summary)> {
    if n == 0 {
        return Err(SimError::InvalidTrialCount);
    }
    if k < 2 {
        return Err(SimError::InvalidCategoryCount(k));
    }

    let mut counts = vec![0u64; k as usize];
    for _ in 0..n {
        let face = rng.next_u64_below(k as u64) as usize;
        counts[face] += 1;
    }

    let table = FrequencyTable::from_counts(
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| ((i as u64 + 1).to_string(), count))
            .collect(),
    );

    // Unwrap is safe: k >= 2 guarantees at least one row.
    let top = table.max_row().expect("table has rows");
    let mut summary = Summary::new();
    summary.push("Total rolls", SummaryValue::Count(n));
    summary.push("Most frequent face", SummaryValue::Label(top.outcome.clone()));
    summary.push("Max relative frequency", SummaryValue::Rate(top.relative_frequency));

    log::debug!("dice: n={n} k={k} top_face={} top_freq={:.3}", top.outcome, top.relative_frequency);

    Ok((table, summary))
}

/// Six-sided entry point used by the runner.
pub fn simulate_dice_rolls(
    n: TrialCount,
    rng: &mut TrialRng,
) -> SimResult<(FrequencyTable, Summary)> {
    simulate_categorical(n, DICE_FACES, rng)
}

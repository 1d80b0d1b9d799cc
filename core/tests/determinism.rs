//! Seeded runs must reproduce exactly; slot streams must be independent.

use playground_core::rng::{ExperimentSlot, RngBank};
use playground_core::{Experiment, Playground};

#[test]
fn same_seed_produces_identical_draws() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    let mut rng_a = RngBank::new(SEED).for_experiment(ExperimentSlot::Dice);
    let mut rng_b = RngBank::new(SEED).for_experiment(ExperimentSlot::Dice);

    let draws_a: Vec<u64> = (0..1_000).map(|_| rng_a.next_u64_below(6)).collect();
    let draws_b: Vec<u64> = (0..1_000).map(|_| rng_b.next_u64_below(6)).collect();

    assert_eq!(draws_a, draws_b, "Same seed and slot must replay identically");
}

#[test]
fn slots_are_independent_streams() {
    let bank = RngBank::new(42);
    let mut coin = bank.for_experiment(ExperimentSlot::Coin);
    let mut dice = bank.for_experiment(ExperimentSlot::Dice);

    let coin_draws: Vec<u64> = (0..100).map(|_| coin.next_u64_below(1 << 32)).collect();
    let dice_draws: Vec<u64> = (0..100).map(|_| dice.next_u64_below(1 << 32)).collect();

    assert_ne!(
        coin_draws, dice_draws,
        "Different slots must not share a stream"
    );
}

#[test]
fn seeded_playground_reproduces_whole_reports() {
    const SEED: u64 = 99;
    let experiment = Experiment::Threat {
        trials:           1_000,
        base_attack_prob: 0.4,
        defence_strength: 0.3,
    };

    let report_a = Playground::seeded(SEED).run(&experiment).expect("run a");
    let report_b = Playground::seeded(SEED).run(&experiment).expect("run b");

    let flags_a: Vec<bool> = report_a.scenarios.iter().map(|s| s.attack_successful).collect();
    let flags_b: Vec<bool> = report_b.scenarios.iter().map(|s| s.attack_successful).collect();
    assert_eq!(flags_a, flags_b, "Seeded playgrounds must agree scenario by scenario");
}

#[test]
fn reruns_on_one_playground_are_fresh_draws() {
    // Each run() derives a fresh slot stream from the master seed, so
    // repeating an experiment on the same playground replays it.
    let playground = Playground::seeded(7);
    let experiment = Experiment::Coin { trials: 200 };

    let first = playground.run(&experiment).expect("first run");
    let second = playground.run(&experiment).expect("second run");

    let freq = |r: &playground_core::ExperimentReport| {
        r.table
            .as_ref()
            .and_then(|t| t.row("Heads"))
            .map(|row| row.count)
    };
    assert_eq!(freq(&first), freq(&second), "Same playground, same stream, same counts");
}

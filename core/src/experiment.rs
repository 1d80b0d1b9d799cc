//! Run dispatch: one Playground per user action.
//!
//! RULES:
//!   - A Playground owns one RngBank; each experiment draws its own
//!     slot stream, so experiments never perturb each other.
//!   - run() recomputes everything from scratch and returns an owned
//!     report; nothing is retained between runs.

use crate::{
    coin_experiment, dice_experiment,
    error::SimResult,
    frequency::FrequencyTable,
    rng::{ExperimentSlot, RngBank},
    summary::Summary,
    threat_experiment::{self, ScenarioRecord},
    types::TrialCount,
};

/// A fully parameterized run request.
#[derive(Debug, Clone)]
pub enum Experiment {
    Coin {
        trials: TrialCount,
    },
    Dice {
        trials: TrialCount,
    },
    Threat {
        trials:           TrialCount,
        base_attack_prob: f64,
        defence_strength: f64,
    },
}

impl Experiment {
    pub fn slot(&self) -> ExperimentSlot {
        match self {
            Self::Coin { .. } => ExperimentSlot::Coin,
            Self::Dice { .. } => ExperimentSlot::Dice,
            Self::Threat { .. } => ExperimentSlot::Threat,
        }
    }
}

/// Uniform result shape across all three experiments. Threat runs have
/// no frequency table; coin and dice runs have no scenario list.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    pub table:     Option<FrequencyTable>,
    pub scenarios: Vec<ScenarioRecord>,
    pub summary:   Summary,
}

/// One interactive session's simulation handle.
pub struct Playground {
    rng_bank: RngBank,
}

impl Playground {
    /// Reproducible runs — tests and scripted comparisons.
    pub fn seeded(master_seed: u64) -> Self {
        Self {
            rng_bank: RngBank::new(master_seed),
        }
    }

    /// Production runs: master seed drawn from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng_bank: RngBank::from_entropy(),
        }
    }

    pub fn master_seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    pub fn run(&self, experiment: &Experiment) -> SimResult<ExperimentReport> {
        let mut rng = self.rng_bank.for_experiment(experiment.slot());
        log::info!("run: experiment={} seed={}", rng.name, self.master_seed());

        match *experiment {
            Experiment::Coin { trials } => {
                let (table, summary) = coin_experiment::simulate_coin_flips(trials, &mut rng)?;
                Ok(ExperimentReport {
                    table:     Some(table),
                    scenarios: Vec::new(),
                    summary,
                })
            }
            Experiment::Dice { trials } => {
                let (table, summary) = dice_experiment::simulate_dice_rolls(trials, &mut rng)?;
                Ok(ExperimentReport {
                    table:     Some(table),
                    scenarios: Vec::new(),
                    summary,
                })
            }
            Experiment::Threat {
                trials,
                base_attack_prob,
                defence_strength,
            } => {
                let (scenarios, summary) = threat_experiment::simulate_bernoulli_batch(
                    base_attack_prob,
                    defence_strength,
                    trials,
                    &mut rng,
                )?;
                Ok(ExperimentReport {
                    table: None,
                    scenarios,
                    summary,
                })
            }
        }
    }
}

//! Injected random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG directly.
//! All randomness flows through TrialRng instances handed to the
//! sampling operations by the caller.
//!
//! Each experiment gets its own RNG stream, seeded deterministically
//! from (master_seed XOR slot_index). This means:
//!   - Adding a new experiment never changes existing experiments' streams.
//!   - Each experiment's stream is fully reproducible in isolation.
//!
//! Interactive runs seed the master from OS entropy; tests inject a
//! fixed seed. No reproducibility is promised across entropy-seeded runs.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named RNG stream for a single experiment.
pub struct TrialRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl TrialRng {
    /// Create an experiment RNG from the master seed and a stable
    /// slot index. The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// A stream seeded from OS entropy, for interactive runs.
    pub fn from_entropy() -> Self {
        Self {
            name: "entropy",
            inner: Pcg64Mcg::from_entropy(),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Per-run source of experiment RNG streams.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// A bank with an entropy-drawn master seed, for interactive runs.
    pub fn from_entropy() -> Self {
        let mut seeder = TrialRng::from_entropy();
        Self {
            master_seed: seeder.inner.next_u64(),
        }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_experiment(&self, slot: ExperimentSlot) -> TrialRng {
        TrialRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable experiment slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every experiment's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum ExperimentSlot {
    Coin = 0,
    Dice = 1,
    Threat = 2,
    // Add new experiments here — append only.
}

impl ExperimentSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Dice => "dice",
            Self::Threat => "threat",
        }
    }
}

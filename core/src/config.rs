//! Run parameters as the dashboard's input widgets would hand them over.
//!
//! The core validates and fails fast on out-of-range values; `clamped()`
//! is the widget-side behavior — it forces parameters into the slider
//! bounds before they ever reach a simulate call.

use crate::error::SimResult;
use crate::types::TrialCount;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Slider bounds for trial counts.
pub const MIN_TRIALS: TrialCount = 10;
pub const MAX_TRIALS: TrialCount = 50_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default = "default_trials")]
    pub trials:           TrialCount,
    #[serde(default = "default_base_attack_prob")]
    pub base_attack_prob: f64,
    #[serde(default = "default_defence_strength")]
    pub defence_strength: f64,
}

fn default_trials() -> TrialCount {
    100
}

fn default_base_attack_prob() -> f64 {
    0.3
}

fn default_defence_strength() -> f64 {
    0.5
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials:           default_trials(),
            base_attack_prob: default_base_attack_prob(),
            defence_strength: default_defence_strength(),
        }
    }
}

impl ExperimentConfig {
    /// Force every parameter into its widget bounds.
    pub fn clamped(mut self) -> Self {
        self.trials = self.trials.clamp(MIN_TRIALS, MAX_TRIALS);
        self.base_attack_prob = self.base_attack_prob.clamp(0.0, 1.0);
        self.defence_strength = self.defence_strength.clamp(0.0, 1.0);
        self
    }

    /// Load parameters from a JSON file. Missing fields fall back to
    /// the slider defaults.
    pub fn load(path: &Path) -> SimResult<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        Ok(config)
    }
}

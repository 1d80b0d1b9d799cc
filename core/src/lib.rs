//! playground-core: the simulation layer of the Probability Playground.
//!
//! Three experiments — coin flips, dice rolls, and attack/defence threat
//! scenarios — each drawing random outcomes, tabulating frequencies and
//! producing a small summary for display.
//!
//! RULES:
//!   - All randomness flows through TrialRng streams derived from a
//!     single master seed (or OS entropy for interactive runs).
//!   - Every run recomputes from scratch; nothing is retained or shared
//!     between runs.
//!   - Parameters are validated at the entry points; invalid arguments
//!     fail fast with SimError, never silently produce output.

pub mod coin_experiment;
pub mod config;
pub mod dice_experiment;
pub mod error;
pub mod experiment;
pub mod frequency;
pub mod rng;
pub mod stats;
pub mod summary;
pub mod threat_experiment;
pub mod types;

pub use error::{SimError, SimResult};
pub use experiment::{Experiment, ExperimentReport, Playground};
pub use frequency::{FrequencyRow, FrequencyTable};
pub use summary::{Summary, SummaryValue};

//! Shared primitive types used across the simulation.

/// Number of independent draws in a single run.
pub type TrialCount = u64;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Trial count must be at least 1")]
    InvalidTrialCount,

    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("Category count must be at least 2, got {0}")]
    InvalidCategoryCount(u32),

    #[error("Config read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;

/// Reject probabilities outside [0, 1] (NaN included).
pub(crate) fn check_probability(name: &'static str, value: f64) -> SimResult<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SimError::ProbabilityOutOfRange { name, value });
    }
    Ok(value)
}

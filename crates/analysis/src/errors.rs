use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("statistics block contains no runs")]
    NoRuns,

    #[error("cannot take a quantile of an empty sample")]
    EmptySample,

    #[error("quantile {0} is outside [0, 1]")]
    InvalidQuantile(f64),

    #[error("quasi-extinction threshold must be non-negative and finite, got {0}")]
    InvalidThreshold(f64),
}

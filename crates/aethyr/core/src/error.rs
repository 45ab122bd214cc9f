use aethyr_compute::ComputeError;
use aethyr_evolution::EvolutionError;

/// Errors surfaced by the core.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] EvolutionError),
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Compute(#[from] ComputeError),
}

pub type CoreResult<T> = Result<T, CoreError>;

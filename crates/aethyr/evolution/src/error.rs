/// Errors raised while building parameter sets, bounds or engines.
///
/// Evolution itself never fails: a rejected candidate is reported through
/// [`crate::EvolutionStatus::Rejected`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvolutionError {
    #[error("parameter {name} must be a finite value > 0, got {value}")]
    NonPositiveParameter { name: String, value: f64 },
    #[error("required parameter missing: {0}")]
    MissingParameter(&'static str),
    #[error("invalid bound {name}: {reason}")]
    InvalidBound { name: &'static str, reason: String },
    #[error("mutation rate must be within [0, 1], got {0}")]
    InvalidRate(f64),
}

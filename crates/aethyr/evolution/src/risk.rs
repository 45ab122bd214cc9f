use crate::types::ParameterSet;

/// Scores a candidate parameter set; higher is riskier.
pub trait RiskAssessor: Send + Sync {
    /// `engine_mutation_rate` is the engine's stored rate, not the request's.
    fn assess(&self, candidate: &ParameterSet, engine_mutation_rate: f64) -> f64;
}

/// `learning_rate * 0.5 + engine_mutation_rate * 0.5`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearRiskAssessor;

impl RiskAssessor for LinearRiskAssessor {
    fn assess(&self, candidate: &ParameterSet, engine_mutation_rate: f64) -> f64 {
        candidate.learning_rate() * 0.5 + engine_mutation_rate * 0.5
    }
}

/// Always returns the same score. Useful to force the commit or reject path.
#[derive(Clone, Copy, Debug)]
pub struct FixedRiskAssessor(pub f64);

impl RiskAssessor for FixedRiskAssessor {
    fn assess(&self, _candidate: &ParameterSet, _engine_mutation_rate: f64) -> f64 {
        self.0
    }
}

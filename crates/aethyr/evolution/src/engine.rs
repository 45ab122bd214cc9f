use crate::error::EvolutionError;
use crate::metrics::EvolutionMetrics;
use crate::observer::{EvolutionObserver, TracingObserver};
use crate::risk::{LinearRiskAssessor, RiskAssessor};
use crate::types::{
    Bounds, EvolutionRequest, ParameterSet, LEARNING_RATE_MAX, LEARNING_RATE_MIN, VALUE_FLOOR,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Mutation rate the engine stores when none is configured.
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

const DEFAULT_HISTORY: usize = 100;

/// Whether a candidate was committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionStatus {
    Committed,
    Rejected,
}

/// Outcome of one `evolve` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionReport {
    pub status: EvolutionStatus,
    /// The engine's committed parameters after the call.
    pub parameters: ParameterSet,
    pub risk_score: f64,
    pub risk_threshold: f64,
    /// Request rate after clamping to `max_autonomy`.
    pub effective_mutation_rate: f64,
    pub steps: u32,
}

impl EvolutionReport {
    pub fn is_committed(&self) -> bool {
        self.status == EvolutionStatus::Committed
    }
}

/// Owns the committed parameter set and evolves it under fixed bounds.
///
/// Each call runs `idle -> evaluating candidate -> committed | rejected`;
/// nothing carries over between calls except the committed set and metrics.
/// Callers sharing an engine across threads must serialise `evolve` (for
/// example behind a `Mutex`), since it reads, scores and writes back.
pub struct EvolutionEngine<R = StdRng> {
    parameters: ParameterSet,
    bounds: Bounds,
    mutation_rate: f64,
    rng: R,
    risk: Box<dyn RiskAssessor>,
    observer: Box<dyn EvolutionObserver>,
    metrics: EvolutionMetrics,
}

impl EvolutionEngine<StdRng> {
    /// Engine with an entropy-seeded generator.
    pub fn new(parameters: ParameterSet, bounds: Bounds) -> Result<Self, EvolutionError> {
        Self::with_rng(parameters, bounds, StdRng::from_entropy())
    }

    /// Engine whose draws are reproducible from `seed`.
    pub fn seeded(
        parameters: ParameterSet,
        bounds: Bounds,
        seed: u64,
    ) -> Result<Self, EvolutionError> {
        Self::with_rng(parameters, bounds, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn with_rng(parameters: ParameterSet, bounds: Bounds, rng: R) -> Result<Self, EvolutionError> {
        bounds.validate()?;
        Ok(Self {
            parameters,
            bounds,
            mutation_rate: DEFAULT_MUTATION_RATE,
            rng,
            risk: Box::new(LinearRiskAssessor),
            observer: Box::new(TracingObserver::default()),
            metrics: EvolutionMetrics::new(DEFAULT_HISTORY),
        })
    }

    pub fn with_risk_assessor(mut self, risk: impl RiskAssessor + 'static) -> Self {
        self.risk = Box::new(risk);
        self
    }

    pub fn with_observer(mut self, observer: impl EvolutionObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Set the engine's stored mutation rate (used by the risk score and
    /// by [`Self::default_request`]).
    pub fn with_mutation_rate(mut self, rate: f64) -> Result<Self, EvolutionError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(EvolutionError::InvalidRate(rate));
        }
        self.mutation_rate = rate;
        Ok(self)
    }

    pub fn with_history(mut self, max_history: usize) -> Self {
        self.metrics = EvolutionMetrics::new(max_history);
        self
    }

    /// Run `request` and return the committed parameters afterwards.
    ///
    /// A rejected candidate leaves the committed set untouched, so the
    /// returned value equals the pre-call state.
    pub fn evolve(&mut self, request: EvolutionRequest) -> ParameterSet {
        self.evolve_report(request).parameters
    }

    /// Run `request` and describe the outcome.
    pub fn evolve_report(&mut self, request: EvolutionRequest) -> EvolutionReport {
        let request = EvolutionRequest::new(request.mutation_rate, request.evolution_steps);
        let rate = request.effective_rate(&self.bounds);
        // Deltas are scaled by the committed factor, not the candidate's.
        let spread = self.parameters.adaptation_factor();

        let mut candidate = self.parameters.clone();
        for _ in 0..request.evolution_steps {
            for value in candidate.values_mut() {
                if self.rng.gen::<f64>() < rate {
                    let delta = self.rng.gen_range(-spread..=spread);
                    *value = (*value + delta).max(VALUE_FLOOR);
                }
            }
            let factor = self.rng.gen_range(0.99..=1.01);
            if let Some(lr) = candidate.learning_rate_mut() {
                *lr = (*lr * factor).clamp(LEARNING_RATE_MIN, LEARNING_RATE_MAX);
            }
        }

        let risk_score = self.risk.assess(&candidate, self.mutation_rate);
        let threshold = self.bounds.risk_threshold;
        // NaN scores fail this comparison and are rejected.
        let status = if risk_score <= threshold {
            self.parameters = candidate;
            EvolutionStatus::Committed
        } else {
            EvolutionStatus::Rejected
        };

        let report = EvolutionReport {
            status,
            parameters: self.parameters.clone(),
            risk_score,
            risk_threshold: threshold,
            effective_mutation_rate: rate,
            steps: request.evolution_steps,
        };
        self.metrics.record(&report);
        match status {
            EvolutionStatus::Committed => self.observer.on_committed(&report),
            EvolutionStatus::Rejected => self.observer.on_rejected(&report),
        }
        report
    }

    /// One step at the engine's stored mutation rate.
    pub fn default_request(&self) -> EvolutionRequest {
        EvolutionRequest::new(self.mutation_rate, 1)
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn metrics(&self) -> &EvolutionMetrics {
        &self.metrics
    }
}

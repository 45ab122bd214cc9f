//! Logging collaborators injected into the engine.

use crate::engine::EvolutionReport;
use tracing::{info, warn};

/// Receives the outcome of every evolution call.
pub trait EvolutionObserver: Send + Sync {
    fn on_committed(&self, report: &EvolutionReport);
    fn on_rejected(&self, report: &EvolutionReport);
}

/// Emits `tracing` events tagged with the owning node.
#[derive(Clone, Debug)]
pub struct TracingObserver {
    node_id: String,
}

impl TracingObserver {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
        }
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new("local")
    }
}

impl EvolutionObserver for TracingObserver {
    fn on_committed(&self, report: &EvolutionReport) {
        info!(
            node_id = %self.node_id,
            risk_score = report.risk_score,
            steps = report.steps,
            mutation_rate = report.effective_mutation_rate,
            parameters = ?report.parameters,
            "Evolution committed"
        );
    }

    fn on_rejected(&self, report: &EvolutionReport) {
        warn!(
            node_id = %self.node_id,
            risk_score = %format!("{:.4}", report.risk_score),
            threshold = report.risk_threshold,
            "Evolution aborted: risk score exceeds threshold"
        );
    }
}

/// Discards every outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl EvolutionObserver for NoopObserver {
    fn on_committed(&self, _report: &EvolutionReport) {}
    fn on_rejected(&self, _report: &EvolutionReport) {}
}

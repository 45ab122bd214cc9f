use crate::engine::{EvolutionReport, EvolutionStatus};
use serde::{Deserialize, Serialize};

/// Running counters over an engine's lifetime.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionMetrics {
    /// Total evolve calls.
    pub attempts: u64,
    /// Calls whose candidate was committed.
    pub committed: u64,
    /// Calls whose candidate exceeded the risk threshold.
    pub rejected: u64,
    /// Risk score of the most recent call.
    pub last_risk_score: Option<f64>,
    /// Risk scores of the last N calls, oldest first.
    pub risk_history: Vec<f64>,
    max_history: usize,
}

impl EvolutionMetrics {
    pub fn new(max_history: usize) -> Self {
        Self {
            max_history,
            ..Default::default()
        }
    }

    pub fn record(&mut self, report: &EvolutionReport) {
        self.attempts += 1;
        match report.status {
            EvolutionStatus::Committed => self.committed += 1,
            EvolutionStatus::Rejected => self.rejected += 1,
        }
        self.last_risk_score = Some(report.risk_score);
        self.risk_history.push(report.risk_score);
        if self.risk_history.len() > self.max_history {
            self.risk_history.remove(0);
        }
    }

    pub fn commit_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 1.0;
        }
        self.committed as f64 / self.attempts as f64
    }

    pub fn avg_risk(&self) -> f64 {
        if self.risk_history.is_empty() {
            return 0.0;
        }
        self.risk_history.iter().sum::<f64>() / self.risk_history.len() as f64
    }
}

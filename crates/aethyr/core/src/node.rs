use crate::config::CoreConfig;
use crate::error::CoreResult;
use aethyr_compute::{ComputeResult, Task, TaskDispatcher, TaskOutput};
use aethyr_evolution::{
    Bounds, EvolutionEngine, EvolutionMetrics, EvolutionObserver, EvolutionReport,
    EvolutionRequest, ParameterSet, RiskAssessor, TracingObserver,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, info_span};

/// Read-only view of a node for reporting layers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoreSnapshot {
    pub node_id: String,
    pub cluster_size: u32,
    pub parameters: ParameterSet,
    pub bounds: Bounds,
    pub mutation_rate: f64,
    pub metrics: EvolutionMetrics,
    pub tasks_dispatched: u64,
    pub tasks_failed: u64,
    pub taken_at: DateTime<Utc>,
}

/// A node: one task dispatcher plus one evolution engine.
pub struct AethyrCore {
    node_id: String,
    cluster_size: u32,
    dispatcher: TaskDispatcher,
    engine: EvolutionEngine,
}

impl AethyrCore {
    pub fn new(config: CoreConfig) -> CoreResult<Self> {
        config.validate()?;

        // Distinct streams so dispatch calls do not shift evolution draws.
        let (dispatcher, engine) = match config.seed {
            Some(seed) => (
                TaskDispatcher::seeded(seed),
                EvolutionEngine::seeded(config.parameters, config.bounds, seed.wrapping_add(1))?,
            ),
            None => (
                TaskDispatcher::new(),
                EvolutionEngine::new(config.parameters, config.bounds)?,
            ),
        };
        let engine = engine
            .with_mutation_rate(config.mutation_rate)?
            .with_history(config.risk_history)
            .with_observer(TracingObserver::new(config.node_id.clone()));

        info!(
            node_id = %config.node_id,
            cluster_size = config.cluster_size,
            seeded = config.seed.is_some(),
            "Aethyr core initialized"
        );

        Ok(Self {
            node_id: config.node_id,
            cluster_size: config.cluster_size,
            dispatcher,
            engine,
        })
    }

    pub fn with_risk_assessor(mut self, risk: impl RiskAssessor + 'static) -> Self {
        self.engine = self.engine.with_risk_assessor(risk);
        self
    }

    pub fn with_observer(mut self, observer: impl EvolutionObserver + 'static) -> Self {
        self.engine = self.engine.with_observer(observer);
        self
    }

    /// Decode and run a task named by an external identifier.
    pub fn dispatch(&mut self, task_id: &str, args: &[Value]) -> ComputeResult<TaskOutput> {
        let _span = info_span!("dispatch", node_id = %self.node_id).entered();
        self.dispatcher.dispatch(task_id, args)
    }

    /// Run an already-typed task.
    pub fn run(&mut self, task: &Task) -> ComputeResult<TaskOutput> {
        let _span = info_span!("dispatch", node_id = %self.node_id).entered();
        self.dispatcher.run(task)
    }

    pub fn evolve(&mut self, request: EvolutionRequest) -> ParameterSet {
        self.engine.evolve(request)
    }

    pub fn evolve_report(&mut self, request: EvolutionRequest) -> EvolutionReport {
        self.engine.evolve_report(request)
    }

    /// One step at the engine's stored mutation rate.
    pub fn evolve_default(&mut self) -> EvolutionReport {
        let request = self.engine.default_request();
        self.engine.evolve_report(request)
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn cluster_size(&self) -> u32 {
        self.cluster_size
    }

    pub fn parameters(&self) -> &ParameterSet {
        self.engine.parameters()
    }

    pub fn bounds(&self) -> &Bounds {
        self.engine.bounds()
    }

    pub fn metrics(&self) -> &EvolutionMetrics {
        self.engine.metrics()
    }

    /// The engine's stored mutation rate.
    pub fn mutation_rate(&self) -> f64 {
        self.engine.mutation_rate()
    }

    pub fn snapshot(&self) -> CoreSnapshot {
        CoreSnapshot {
            node_id: self.node_id.clone(),
            cluster_size: self.cluster_size,
            parameters: self.engine.parameters().clone(),
            bounds: *self.engine.bounds(),
            mutation_rate: self.engine.mutation_rate(),
            metrics: self.engine.metrics().clone(),
            tasks_dispatched: self.dispatcher.dispatched(),
            tasks_failed: self.dispatcher.failed(),
            taken_at: Utc::now(),
        }
    }
}

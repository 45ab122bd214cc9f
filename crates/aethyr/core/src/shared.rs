use crate::node::{AethyrCore, CoreSnapshot};
use aethyr_compute::{ComputeResult, TaskOutput};
use aethyr_evolution::{EvolutionReport, EvolutionRequest, ParameterSet};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, thread-safe handle to one [`AethyrCore`].
///
/// Every operation holds the lock for its whole read-score-commit sequence.
#[derive(Clone)]
pub struct SharedCore {
    inner: Arc<Mutex<AethyrCore>>,
}

impl SharedCore {
    pub fn new(core: AethyrCore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(core)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AethyrCore> {
        // A panic mid-call cannot leave a half-written parameter set:
        // commits are a single assignment.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn dispatch(&self, task_id: &str, args: &[Value]) -> ComputeResult<TaskOutput> {
        self.lock().dispatch(task_id, args)
    }

    pub fn evolve(&self, request: EvolutionRequest) -> ParameterSet {
        self.lock().evolve(request)
    }

    pub fn evolve_report(&self, request: EvolutionRequest) -> EvolutionReport {
        self.lock().evolve_report(request)
    }

    pub fn parameters(&self) -> ParameterSet {
        self.lock().parameters().clone()
    }

    pub fn snapshot(&self) -> CoreSnapshot {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access to the core.
    pub fn with_core<T>(&self, f: impl FnOnce(&mut AethyrCore) -> T) -> T {
        f(&mut self.lock())
    }
}

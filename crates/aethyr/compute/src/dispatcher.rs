use crate::error::ComputeResult;
use crate::matrix::matrix_multiply;
use crate::neural::neural_layer;
use crate::number::{nth_prime, square_free_count};
use crate::task::{Task, TaskOutput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::{debug, warn};

/// Routes decoded tasks to the numeric routines.
///
/// Owns the random source used by `neural_simulation`; every other task is
/// deterministic.
pub struct TaskDispatcher<R = StdRng> {
    rng: R,
    dispatched: u64,
    failed: u64,
}

impl TaskDispatcher<StdRng> {
    /// Dispatcher with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Dispatcher whose stochastic tasks are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for TaskDispatcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TaskDispatcher<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            dispatched: 0,
            failed: 0,
        }
    }

    /// Decode `task_id` + positional `args` and run the task.
    pub fn dispatch(&mut self, task_id: &str, args: &[Value]) -> ComputeResult<TaskOutput> {
        match Task::decode(task_id, args) {
            Ok(task) => self.run(&task),
            Err(e) => {
                self.dispatched += 1;
                self.failed += 1;
                warn!(task = task_id, kind = e.kind(), error = %e, "Task rejected");
                Err(e)
            }
        }
    }

    /// Run an already-decoded task.
    pub fn run(&mut self, task: &Task) -> ComputeResult<TaskOutput> {
        self.dispatched += 1;
        let result = match task {
            Task::NthPrime { n } => nth_prime(*n).map(TaskOutput::Integer),
            Task::SquareFreeCount { limit } => square_free_count(*limit).map(TaskOutput::Integer),
            Task::MatrixMultiply { left, right } => {
                matrix_multiply(left, right).map(TaskOutput::Matrix)
            }
            Task::NeuralSimulation { input } => {
                neural_layer(input, &mut self.rng).map(TaskOutput::Vector)
            }
        };

        match &result {
            Ok(_) => debug!(task = %task.kind(), "Task completed"),
            Err(e) => {
                self.failed += 1;
                warn!(task = %task.kind(), kind = e.kind(), error = %e, "Task failed");
            }
        }
        result
    }

    /// Tasks dispatched so far, including failures.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Tasks that returned an error.
    pub fn failed(&self) -> u64 {
        self.failed
    }
}

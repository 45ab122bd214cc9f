//! Task identifiers, typed payloads and outputs.

use crate::error::{ComputeError, ComputeResult};
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The four supported task kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    NthPrime,
    SquareFreeCount,
    MatrixMultiply,
    NeuralSimulation,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::NthPrime,
        TaskKind::SquareFreeCount,
        TaskKind::MatrixMultiply,
        TaskKind::NeuralSimulation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::NthPrime => "nth_prime",
            TaskKind::SquareFreeCount => "square_free_count",
            TaskKind::MatrixMultiply => "matrix_multiply",
            TaskKind::NeuralSimulation => "neural_simulation",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ComputeError::UnsupportedTask(s.to_string()))
    }
}

/// A decoded task with its typed arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum Task {
    NthPrime { n: u64 },
    SquareFreeCount { limit: u64 },
    MatrixMultiply { left: Matrix, right: Matrix },
    NeuralSimulation { input: Vec<f64> },
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::NthPrime { .. } => TaskKind::NthPrime,
            Task::SquareFreeCount { .. } => TaskKind::SquareFreeCount,
            Task::MatrixMultiply { .. } => TaskKind::MatrixMultiply,
            Task::NeuralSimulation { .. } => TaskKind::NeuralSimulation,
        }
    }

    /// Decode an external task identifier and its positional arguments.
    ///
    /// Integer arguments accept JSON integers, finite floats (truncated
    /// toward zero) and numeric strings. Arguments past the ones a task
    /// reads are ignored.
    pub fn decode(task_id: &str, args: &[Value]) -> ComputeResult<Task> {
        let kind: TaskKind = task_id.parse()?;
        let args = Args { kind, values: args };
        match kind {
            TaskKind::NthPrime => Ok(Task::NthPrime {
                n: args.positive_integer(0, "n")?,
            }),
            TaskKind::SquareFreeCount => Ok(Task::SquareFreeCount {
                limit: args.positive_integer(0, "limit")?,
            }),
            TaskKind::MatrixMultiply => Ok(Task::MatrixMultiply {
                left: args.matrix(0)?,
                right: args.matrix(1)?,
            }),
            TaskKind::NeuralSimulation => Ok(Task::NeuralSimulation {
                input: args.vector(0)?,
            }),
        }
    }
}

/// Result value of a task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Integer(u64),
    Matrix(Matrix),
    Vector(Vec<f64>),
}

impl TaskOutput {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            TaskOutput::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            TaskOutput::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            TaskOutput::Vector(v) => Some(v),
            _ => None,
        }
    }
}

struct Args<'a> {
    kind: TaskKind,
    values: &'a [Value],
}

impl Args<'_> {
    fn invalid(&self, reason: impl Into<String>) -> ComputeError {
        ComputeError::invalid(self.kind.as_str(), reason)
    }

    fn get(&self, index: usize) -> ComputeResult<&Value> {
        self.values
            .get(index)
            .ok_or_else(|| self.invalid(format!("missing positional argument {}", index)))
    }

    fn integer(&self, index: usize) -> ComputeResult<i64> {
        match self.get(index)? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i)
                } else if n.as_u64().is_some() {
                    Err(self.invalid(format!("argument {} is out of range: {}", index, n)))
                } else {
                    let f = n.as_f64().unwrap_or(f64::NAN);
                    if f.is_finite() && f.abs() < i64::MAX as f64 {
                        Ok(f.trunc() as i64)
                    } else {
                        Err(self.invalid(format!("argument {} is out of range: {}", index, n)))
                    }
                }
            }
            Value::String(s) => s.trim().parse::<i64>().map_err(|e| {
                self.invalid(format!("argument {} {:?} is not an integer: {}", index, s, e))
            }),
            other => Err(self.invalid(format!(
                "argument {} must be an integer, got {}",
                index,
                type_name(other)
            ))),
        }
    }

    fn positive_integer(&self, index: usize, name: &str) -> ComputeResult<u64> {
        let value = self.integer(index)?;
        if value < 1 {
            return Err(self.invalid(format!("{} must be >= 1, got {}", name, value)));
        }
        Ok(value as u64)
    }

    fn numbers(&self, value: &Value, what: &str) -> ComputeResult<Vec<f64>> {
        let items = value
            .as_array()
            .ok_or_else(|| self.invalid(format!("{} must be an array, got {}", what, type_name(value))))?;
        items
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64().ok_or_else(|| {
                    self.invalid(format!("{}[{}] must be a number, got {}", what, i, type_name(v)))
                })
            })
            .collect()
    }

    fn vector(&self, index: usize) -> ComputeResult<Vec<f64>> {
        let value = self.get(index)?;
        self.numbers(value, &format!("argument {}", index))
    }

    fn matrix(&self, index: usize) -> ComputeResult<Matrix> {
        let value = self.get(index)?;
        let rows = value.as_array().ok_or_else(|| {
            self.invalid(format!(
                "argument {} must be a matrix, got {}",
                index,
                type_name(value)
            ))
        })?;
        rows.iter()
            .enumerate()
            .map(|(r, row)| self.numbers(row, &format!("argument {} row {}", index, r)))
            .collect()
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

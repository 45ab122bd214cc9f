/// Errors from task decoding and the numeric routines.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ComputeError {
    #[error("invalid argument for {task}: {reason}")]
    InvalidArgument { task: String, reason: String },
    #[error("dimension mismatch: left matrix has {left_cols} columns, right matrix has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },
    #[error("unsupported computation task: {0}")]
    UnsupportedTask(String),
}

impl ComputeError {
    pub fn invalid(task: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            task: task.into(),
            reason: reason.into(),
        }
    }

    /// Stable short name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::UnsupportedTask(_) => "unsupported_task",
        }
    }
}

pub type ComputeResult<T> = Result<T, ComputeError>;

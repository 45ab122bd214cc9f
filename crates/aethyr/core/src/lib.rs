#![deny(unsafe_code)]
//! # aethyr-core
//!
//! The node-level object callers talk to. An [`AethyrCore`] owns one
//! [`TaskDispatcher`](aethyr_compute::TaskDispatcher) and one
//! [`EvolutionEngine`](aethyr_evolution::EvolutionEngine); the two never
//! call each other. Construction is driven by a layered [`CoreConfig`].

pub mod config;
pub mod error;
pub mod node;
pub mod shared;

pub use crate::config::CoreConfig;
pub use crate::error::{CoreError, CoreResult};
pub use crate::node::{AethyrCore, CoreSnapshot};
pub use crate::shared::SharedCore;

pub use aethyr_compute::{ComputeError, Task, TaskKind, TaskOutput};
pub use aethyr_evolution::{
    Bounds, EvolutionMetrics, EvolutionReport, EvolutionRequest, EvolutionStatus, ParameterSet,
};

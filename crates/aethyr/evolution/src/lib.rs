#![deny(unsafe_code)]
//! # aethyr-evolution
//!
//! The evolution engine owns an adaptive [`ParameterSet`] and a fixed set of
//! [`Bounds`]. Each call to [`EvolutionEngine::evolve`] mutates a working copy
//! for the requested number of steps, scores it with a [`RiskAssessor`], and
//! commits it only when the score stays within `risk_threshold`.
//!
//! The random source, the risk function and the logging collaborator are all
//! owned by the engine instance and injectable, so seeded runs are reproducible.

pub mod engine;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod risk;
pub mod types;

pub use engine::{EvolutionEngine, EvolutionReport, EvolutionStatus};
pub use error::EvolutionError;
pub use metrics::EvolutionMetrics;
pub use observer::{EvolutionObserver, NoopObserver, TracingObserver};
pub use risk::{FixedRiskAssessor, LinearRiskAssessor, RiskAssessor};
pub use types::{Bounds, EvolutionRequest, ParameterSet};

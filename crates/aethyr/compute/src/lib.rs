#![deny(unsafe_code)]
//! # aethyr-compute
//!
//! Task dispatcher for the Aethyr core. A string task identifier plus
//! positional JSON arguments is decoded once into a typed [`Task`] and
//! routed to one of four numeric routines:
//!
//! - `nth_prime` -- the n-th prime, 1-indexed
//! - `square_free_count` -- how many integers in `[1, limit]` are square-free
//! - `matrix_multiply` -- the standard matrix product
//! - `neural_simulation` -- `tanh(v · W + b)` with freshly drawn `W` and `b`
//!
//! Every failure is returned as a [`ComputeError`]; nothing panics on caller input.

pub mod dispatcher;
pub mod error;
pub mod matrix;
pub mod neural;
pub mod number;
pub mod task;

pub use dispatcher::TaskDispatcher;
pub use error::{ComputeError, ComputeResult};
pub use matrix::{matrix_multiply, Matrix};
pub use neural::neural_layer;
pub use number::{is_square_free, nth_prime, square_free_count};
pub use task::{Task, TaskKind, TaskOutput};

//! Cellular multi-objective genetic algorithm (MOCell).
//!
//! Individuals live on a toroidal grid and only mate within their Moore
//! neighbourhood. Non-dominated offspring are collected in a bounded
//! crowding archive, which is the result of a run.
//!
//! ```ignore
//! let settings = Settings::asynchronous(100, 100, 25000).with_seed(1);
//! let mut optimizer = MOCellOptimizer::with_default_operators(settings, Box::new(Dtlz2::new(12, 3)))?;
//! let front = optimizer.run()?;
//! ```
pub mod archive;
pub mod crowding_distance;
pub mod dominance;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod neighborhood;
pub mod operators;
pub mod optimizers;
pub mod problem;
pub mod ranking;
pub mod settings;
pub mod solution;
#[cfg(test)]
mod tests;

pub use crate::archive::CrowdingArchive;
pub use crate::error::{MocellError, ProblemError, SettingsError};
pub use crate::optimizers::mocell::MOCellOptimizer;
pub use crate::optimizers::Optimizer;
pub use crate::problem::Problem;
pub use crate::settings::{Settings, Variant};
pub use crate::solution::Solution;

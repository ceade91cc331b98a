//! Genetic Algorithm for the TSP.
//!
//! # Key Types
//!
//! - [`GaConfig`]: run parameters (population size, tournament size,
//!   mutation rate, elitism, generation count, seed)
//! - [`GeneticAlgorithm`]: advances one population to the next generation
//! - [`GaRunner`]: executes a whole run and returns a [`GaResult`]
//! - [`Individual`]: fitness accessor used by [`Tournament`] selection
//!
//! # Submodules
//!
//! - [`operators`]: order-preserving crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod engine;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use engine::GeneticAlgorithm;
pub use runner::{GaResult, GaRunner};
pub use selection::Tournament;
pub use types::Individual;

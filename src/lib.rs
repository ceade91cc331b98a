//! Approximate solver for the Euclidean Traveling Salesman Problem using a
//! genetic algorithm.
//!
//! A fixed set of 2-D cities is registered once in a [`TourManager`]. A
//! [`Population`] of random round trips is then evolved generation by
//! generation:
//!
//! - **Selection**: tournament selection, sampling with replacement
//! - **Crossover**: order-preserving single-segment crossover
//! - **Mutation**: per-slot pairwise swap
//! - **Elitism**: the fittest tour survives unchanged into the next generation
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tsp_ga::ga::{GaConfig, GaRunner};
//! use tsp_ga::tsp::TourManager;
//!
//! let manager = Arc::new(TourManager::from(
//!     &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (5.0, 5.0)][..],
//! ));
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(50)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(manager, &config).unwrap();
//! println!("{} ({:.2})", result.best, result.best_distance);
//! ```
//!
//! All randomness comes from a generator passed in by the caller (or built
//! from [`GaConfig::seed`]), so runs are reproducible.
//!
//! [`TourManager`]: tsp::TourManager
//! [`Population`]: tsp::Population
//! [`GaConfig::seed`]: ga::GaConfig::seed

pub mod error;
pub mod ga;
pub mod random;
pub mod tsp;

pub use error::{Error, Result};

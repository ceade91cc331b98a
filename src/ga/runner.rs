//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a whole run: initialization, then one
//! [`evolve_population`](GeneticAlgorithm::evolve_population) call per
//! generation, then reporting of the fittest tour.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, instrument};

use super::config::GaConfig;
use super::engine::GeneticAlgorithm;
use crate::error::Result;
use crate::random::rng_from_seed;
use crate::tsp::{Population, Tour, TourManager};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Fittest tour of the final population.
    pub best: Arc<Tour>,

    /// Round-trip distance of `best`.
    pub best_distance: f64,

    /// Best distance in the initial random population.
    pub initial_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best distance of the initial population followed by the best of each
    /// generation.
    pub distance_history: Vec<f64>,

    /// Final population, for callers that want more than the best tour.
    pub population: Population,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use tsp_ga::ga::{GaConfig, GaRunner};
/// use tsp_ga::tsp::TourManager;
///
/// let manager = Arc::new(TourManager::from(
///     &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)][..],
/// ));
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
/// let result = GaRunner::run(manager, &config).unwrap();
/// assert!(result.best_distance <= result.initial_distance);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, seeding the generator from `config.seed`.
    pub fn run(manager: Arc<TourManager>, config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(manager, config, &mut rng)
    }

    /// Runs the GA with a caller-supplied generator. `config.seed` is ignored.
    #[instrument(level = "debug", skip_all, fields(
        cities = manager.number_of_cities(),
        population_size = config.population_size,
        generations = config.generations
    ))]
    pub fn run_with_rng<R: Rng>(
        manager: Arc<TourManager>,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        let ga = GeneticAlgorithm::new(Arc::clone(&manager), config)?;

        let mut population = Population::random(ga.manager(), config.population_size, rng)?;
        let initial_distance = population.fittest()?.distance();
        info!(initial_distance, "initial population created");

        let mut distance_history = Vec::with_capacity(config.generations + 1);
        distance_history.push(initial_distance);

        for generation in 0..config.generations {
            population = ga.evolve_population(&population, rng)?;
            let best = population.fittest()?.distance();
            distance_history.push(best);
            debug!(generation = generation + 1, best_distance = best, "generation complete");
        }

        let best = Arc::clone(population.fittest()?);
        let best_distance = best.distance();
        info!(initial_distance, best_distance, "run finished");

        Ok(GaResult {
            best,
            best_distance,
            initial_distance,
            generations: config.generations,
            distance_history,
            population,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

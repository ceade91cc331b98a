//! One-generation step: selection, crossover, mutation, elitism.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, instrument};

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::Tournament;
use crate::error::{Error, Result};
use crate::tsp::{Population, Tour, TourManager};

/// Advances a [`Population`] by one generation.
///
/// Holds no per-generation state: every call reads the given population and
/// builds a fresh one.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use tsp_ga::ga::{GaConfig, GeneticAlgorithm};
/// use tsp_ga::random::create_rng;
/// use tsp_ga::tsp::{Population, TourManager};
///
/// let manager = Arc::new(TourManager::from(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)][..]));
/// let config = GaConfig::default().with_population_size(10);
/// let ga = GeneticAlgorithm::new(Arc::clone(&manager), &config).unwrap();
///
/// let mut rng = create_rng(1);
/// let pop = Population::random(&manager, 10, &mut rng).unwrap();
/// let next = ga.evolve_population(&pop, &mut rng).unwrap();
/// assert_eq!(next.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    manager: Arc<TourManager>,
    tournament: Tournament,
    mutation_rate: f64,
    elitism: bool,
}

impl GeneticAlgorithm {
    /// Creates an engine over `manager`.
    ///
    /// Fails on an empty registry or an invalid configuration.
    pub fn new(manager: Arc<TourManager>, config: &GaConfig) -> Result<Self> {
        if manager.is_empty() {
            return Err(Error::NoCities);
        }
        config.validate()?;
        Ok(Self {
            manager,
            tournament: Tournament::new(config.tournament_size),
            mutation_rate: config.mutation_rate,
            elitism: config.elitism,
        })
    }

    pub fn manager(&self) -> &Arc<TourManager> {
        &self.manager
    }

    /// Produces the next generation from `population`.
    ///
    /// 1. With elitism, slot 0 shares the current fittest tour (same `Arc`).
    /// 2. Every other slot gets a child of two tournament winners.
    /// 3. Every child, never the elite, is swap-mutated.
    ///
    /// The returned population has the same size as the input.
    #[instrument(level = "debug", skip_all, fields(population_size = population.len()))]
    pub fn evolve_population<R: Rng>(
        &self,
        population: &Population,
        rng: &mut R,
    ) -> Result<Population> {
        let size = population.len();
        if size == 0 {
            return Err(Error::EmptyPopulation);
        }
        if population
            .iter()
            .any(|tour| !Arc::ptr_eq(tour.manager(), &self.manager))
        {
            return Err(Error::RegistryMismatch);
        }

        let mut next: Vec<Arc<Tour>> = Vec::with_capacity(size);
        if self.elitism {
            next.push(Arc::clone(population.fittest()?));
        }
        let elitism_offset = next.len();

        let mut children = Vec::with_capacity(size - elitism_offset);
        for _ in elitism_offset..size {
            let parent1 = self.tournament_selection(population, rng);
            let parent2 = self.tournament_selection(population, rng);
            children.push(order_crossover(parent1, parent2, rng)?);
        }

        let mut swaps = 0;
        for child in &mut children {
            swaps += swap_mutation(child, self.mutation_rate, rng);
        }

        next.extend(children.into_iter().map(Arc::new));
        let next = Population::from_shared(next);

        debug!(
            elite = self.elitism,
            swaps,
            best_distance = next.fittest()?.distance(),
            "generation evolved"
        );
        Ok(next)
    }

    /// Fittest of `tournament.size` tours drawn with replacement.
    pub fn tournament_selection<'a, R: Rng>(
        &self,
        population: &'a Population,
        rng: &mut R,
    ) -> &'a Tour {
        let idx = self.tournament.select(population.tours(), rng);
        &population.tours()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::{City, CityId};
    use std::collections::HashSet;

    fn pentagon() -> Arc<TourManager> {
        Arc::new(TourManager::from(
            &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (5.0, 5.0)][..],
        ))
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_tournament_size(5)
            .with_mutation_rate(0.01)
    }

    fn assert_permutations(pop: &Population, n: usize) {
        for tour in pop.iter() {
            let set: HashSet<CityId> = tour.cities().iter().copied().collect();
            assert_eq!(tour.len(), n);
            assert_eq!(set.len(), n, "not a permutation: {tour:?}");
        }
    }

    #[test]
    fn test_new_rejects_empty_registry() {
        let manager = Arc::new(TourManager::new());
        assert_eq!(
            GeneticAlgorithm::new(manager, &config()).unwrap_err(),
            Error::NoCities
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let bad = config().with_population_size(3);
        assert!(matches!(
            GeneticAlgorithm::new(pentagon(), &bad),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_evolve_keeps_size_and_permutations() {
        let manager = pentagon();
        let ga = GeneticAlgorithm::new(Arc::clone(&manager), &config()).unwrap();
        let mut rng = create_rng(42);
        let mut pop = Population::random(&manager, 20, &mut rng).unwrap();
        for _ in 0..30 {
            pop = ga.evolve_population(&pop, &mut rng).unwrap();
            assert_eq!(pop.len(), 20);
            assert_permutations(&pop, 5);
        }
    }

    #[test]
    fn test_elite_is_shared_not_copied() {
        let manager = pentagon();
        let ga = GeneticAlgorithm::new(Arc::clone(&manager), &config()).unwrap();
        let mut rng = create_rng(9);
        let pop = Population::random(&manager, 20, &mut rng).unwrap();
        let elite = Arc::clone(pop.fittest().unwrap());
        let elite_before = (*elite).clone();

        let next = ga.evolve_population(&pop, &mut rng).unwrap();
        assert!(Arc::ptr_eq(next.tour(0).unwrap(), &elite));
        assert_eq!(*elite, elite_before);
        assert_eq!(elite.evaluation(), elite_before.evaluation());
    }

    #[test]
    fn test_elitism_never_regresses() {
        let manager = pentagon();
        let ga = GeneticAlgorithm::new(
            Arc::clone(&manager),
            &config().with_mutation_rate(0.5),
        )
        .unwrap();
        let mut rng = create_rng(123);
        let mut pop = Population::random(&manager, 20, &mut rng).unwrap();
        let mut best = pop.fittest().unwrap().distance();
        for _ in 0..40 {
            pop = ga.evolve_population(&pop, &mut rng).unwrap();
            let gen_best = pop.fittest().unwrap().distance();
            assert!(gen_best <= best, "regressed: {gen_best} > {best}");
            best = gen_best;
        }
    }

    #[test]
    fn test_without_elitism_all_slots_are_children() {
        let manager = pentagon();
        let ga = GeneticAlgorithm::new(
            Arc::clone(&manager),
            &config().with_elitism(false),
        )
        .unwrap();
        let mut rng = create_rng(4);
        let pop = Population::random(&manager, 20, &mut rng).unwrap();
        let next = ga.evolve_population(&pop, &mut rng).unwrap();
        for tour in next.iter() {
            assert!(pop.iter().all(|old| !Arc::ptr_eq(old, tour)));
        }
    }

    #[test]
    fn test_population_of_one_with_elitism() {
        let manager = pentagon();
        let cfg = config().with_population_size(1).with_tournament_size(1);
        let ga = GeneticAlgorithm::new(Arc::clone(&manager), &cfg).unwrap();
        let mut rng = create_rng(42);
        let pop = Population::random(&manager, 1, &mut rng).unwrap();
        let next = ga.evolve_population(&pop, &mut rng).unwrap();
        assert_eq!(next.len(), 1);
        assert!(Arc::ptr_eq(next.tour(0).unwrap(), pop.tour(0).unwrap()));
    }

    #[test]
    fn test_population_of_one_without_elitism_or_mutation() {
        let manager = pentagon();
        let cfg = config()
            .with_population_size(1)
            .with_tournament_size(1)
            .with_elitism(false)
            .with_mutation_rate(0.0);
        let ga = GeneticAlgorithm::new(Arc::clone(&manager), &cfg).unwrap();
        let mut rng = create_rng(42);
        let pop = Population::random(&manager, 1, &mut rng).unwrap();
        let next = ga.evolve_population(&pop, &mut rng).unwrap();
        // Crossing a tour with itself reproduces it.
        assert_eq!(**next.tour(0).unwrap(), **pop.tour(0).unwrap());
    }

    #[test]
    fn test_evolve_rejects_foreign_population() {
        let ga = GeneticAlgorithm::new(pentagon(), &config()).unwrap();
        let other = Arc::new(TourManager::from_iter((0..3).map(|i| City::new(i as f64, 0.0))));
        let mut rng = create_rng(1);
        let pop = Population::random(&other, 20, &mut rng).unwrap();
        assert_eq!(
            ga.evolve_population(&pop, &mut rng).unwrap_err(),
            Error::RegistryMismatch
        );
    }

    #[test]
    fn test_evolve_rejects_same_size_foreign_registry() {
        let own = Arc::new(TourManager::from(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)][..]));
        let other = Arc::new(TourManager::from(
            &[(0.0, 0.0), (900.0, 0.0), (0.0, 900.0)][..],
        ));
        let cfg = config().with_population_size(4).with_tournament_size(2);
        let ga = GeneticAlgorithm::new(Arc::clone(&own), &cfg).unwrap();
        let mut rng = create_rng(1);

        let foreign = Population::random(&other, 4, &mut rng).unwrap();
        assert_eq!(
            ga.evolve_population(&foreign, &mut rng).unwrap_err(),
            Error::RegistryMismatch
        );

        let native = Population::random(ga.manager(), 4, &mut rng).unwrap();
        let next = ga.evolve_population(&native, &mut rng).unwrap();
        assert!(next.iter().all(|t| Arc::ptr_eq(t.manager(), &own)));
    }

    #[test]
    fn test_evolve_rejects_empty_population() {
        let ga = GeneticAlgorithm::new(pentagon(), &config()).unwrap();
        let mut rng = create_rng(1);
        let pop = Population::from_tours(Vec::new());
        assert_eq!(
            ga.evolve_population(&pop, &mut rng).unwrap_err(),
            Error::EmptyPopulation
        );
    }
}

//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

/// Tournament selection: sample `size` individuals uniformly at random
/// (with replacement) and keep the fittest.
///
/// Higher `size` = stronger selection pressure. Ties inside a tournament go
/// to the earliest draw.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::Tournament;
///
/// let tournament = Tournament::new(5);
/// assert_eq!(tournament.size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    pub size: usize,
}

impl Tournament {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Select a parent index from the population.
    ///
    /// # Complexity
    /// O(size) per selection
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let k = self.size.max(1);
        let n = population.len();

        let mut best_idx = rng.random_range(0..n);
        let mut best_fitness = population[best_idx].fitness();
        for _ in 1..k {
            let idx = rng.random_range(0..n);
            let fitness = population[idx].fitness();
            if fitness > best_fitness {
                best_idx = idx;
                best_fitness = fitness;
            }
        }
        best_idx
    }
}

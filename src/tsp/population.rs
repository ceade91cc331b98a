//! A generation of tours.

use std::sync::Arc;

use rand::Rng;

use super::city::TourManager;
use super::tour::Tour;
use crate::error::{Error, Result};

/// Fixed-size, ordered collection of evaluated tours.
///
/// Tours are held behind `Arc` so the elite of one generation can be carried
/// into the next without copying. An `Arc<Tour>` cannot be mutated in place,
/// which keeps the shared elite intact.
#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Arc<Tour>>,
}

impl Population {
    /// Creates `size` random tours over `manager`.
    pub fn random<R: Rng>(manager: &Arc<TourManager>, size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidConfig("population size must be positive".into()));
        }
        let tours = (0..size)
            .map(|_| Tour::random(Arc::clone(manager), rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_tours(tours))
    }

    /// Evaluates and wraps owned tours.
    pub fn from_tours(tours: Vec<Tour>) -> Self {
        tours.into_iter().map(Arc::new).collect()
    }

    /// Wraps tours that may already be shared with another population.
    ///
    /// Unevaluated tours are evaluated before being stored; ones that are
    /// already shared are kept as-is and evaluated lazily on read.
    pub fn from_shared(tours: Vec<Arc<Tour>>) -> Self {
        let tours = tours
            .into_iter()
            .map(|mut tour| {
                if let Some(owned) = Arc::get_mut(&mut tour) {
                    owned.evaluate();
                }
                tour
            })
            .collect();
        Self { tours }
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    pub fn tour(&self, index: usize) -> Result<&Arc<Tour>> {
        self.tours.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.tours.len(),
        })
    }

    pub fn tours(&self) -> &[Arc<Tour>] {
        &self.tours
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Tour>> {
        self.tours.iter()
    }

    /// The tour with the highest fitness. Ties go to the leftmost.
    pub fn fittest(&self) -> Result<&Arc<Tour>> {
        let mut iter = self.tours.iter();
        let mut best = iter.next().ok_or(Error::EmptyPopulation)?;
        let mut best_fitness = best.fitness();
        for tour in iter {
            let fitness = tour.fitness();
            if fitness > best_fitness {
                best = tour;
                best_fitness = fitness;
            }
        }
        Ok(best)
    }
}

impl FromIterator<Arc<Tour>> for Population {
    fn from_iter<T: IntoIterator<Item = Arc<Tour>>>(iter: T) -> Self {
        Self::from_shared(iter.into_iter().collect())
    }
}

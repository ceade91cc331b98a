//! Candidate round trips.
//!
//! A [`Tour`] is always a complete permutation of the registry it was built
//! from. Crossover assembles children slot by slot in a [`PartialTour`] and
//! only gets a `Tour` back once every slot holds a distinct city.

use std::fmt;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use super::city::{City, CityId, TourManager};
use crate::error::{Error, Result};
use crate::ga::Individual;

/// Cached evaluation state of a tour.
///
/// Any write to a slot resets the state to `Unevaluated`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Evaluation {
    #[default]
    Unevaluated,
    Evaluated { distance: f64, fitness: f64 },
}

impl Evaluation {
    fn from_distance(distance: f64) -> Self {
        Evaluation::Evaluated {
            distance,
            fitness: fitness_from_distance(distance),
        }
    }
}

/// Fitness is the inverse of the round-trip distance.
///
/// A zero-length tour (one city, or every city on the same spot) cannot be
/// improved on and gets `f64::INFINITY`.
pub fn fitness_from_distance(distance: f64) -> f64 {
    if distance > 0.0 {
        1.0 / distance
    } else {
        f64::INFINITY
    }
}

/// A complete round trip visiting every registered city exactly once.
#[derive(Clone)]
pub struct Tour {
    manager: Arc<TourManager>,
    cities: Vec<CityId>,
    evaluation: Evaluation,
}

impl Tour {
    /// Builds a uniformly random permutation of every registered city.
    pub fn random<R: Rng>(manager: Arc<TourManager>, rng: &mut R) -> Result<Self> {
        if manager.is_empty() {
            return Err(Error::NoCities);
        }
        let mut cities: Vec<CityId> = manager.ids().collect();
        cities.shuffle(rng);
        Ok(Self {
            manager,
            cities,
            evaluation: Evaluation::Unevaluated,
        })
    }

    /// Builds a tour from an explicit visiting order.
    ///
    /// Fails with [`Error::NotAPermutation`] unless `cities` holds every
    /// registered id exactly once.
    pub fn from_cities(manager: Arc<TourManager>, cities: Vec<CityId>) -> Result<Self> {
        if manager.is_empty() {
            return Err(Error::NoCities);
        }
        if !is_permutation(&cities, manager.number_of_cities()) {
            return Err(Error::NotAPermutation);
        }
        Ok(Self {
            manager,
            cities,
            evaluation: Evaluation::Unevaluated,
        })
    }

    pub fn manager(&self) -> &Arc<TourManager> {
        &self.manager
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City id visited at `position`.
    pub fn city(&self, position: usize) -> Result<CityId> {
        self.cities
            .get(position)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: position,
                count: self.cities.len(),
            })
    }

    /// Visiting order as registry ids.
    pub fn cities(&self) -> &[CityId] {
        &self.cities
    }

    /// Visiting order as coordinates.
    pub fn coordinates(&self) -> Vec<City> {
        self.cities
            .iter()
            .map(|id| self.manager.cities()[id.index()])
            .collect()
    }

    /// Identity membership test.
    pub fn contains_city(&self, city: CityId) -> bool {
        self.cities.contains(&city)
    }

    /// Exchanges the cities at two positions and drops the cached evaluation.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.cities.swap(a, b);
        self.evaluation = Evaluation::Unevaluated;
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Computes and caches distance and fitness if not already cached.
    pub fn evaluate(&mut self) -> Evaluation {
        if self.evaluation == Evaluation::Unevaluated {
            self.evaluation = Evaluation::from_distance(self.compute_distance());
        }
        self.evaluation
    }

    /// Closed-loop length, including the edge from the last city back to
    /// the first. Uses the cached value when present.
    pub fn distance(&self) -> f64 {
        match self.evaluation {
            Evaluation::Evaluated { distance, .. } => distance,
            Evaluation::Unevaluated => self.compute_distance(),
        }
    }

    /// Inverse of [`distance`](Self::distance). Higher is better.
    pub fn fitness(&self) -> f64 {
        match self.evaluation {
            Evaluation::Evaluated { fitness, .. } => fitness,
            Evaluation::Unevaluated => fitness_from_distance(self.compute_distance()),
        }
    }

    fn compute_distance(&self) -> f64 {
        let n = self.cities.len();
        (0..n)
            .map(|i| {
                self.manager
                    .distance(self.cities[i], self.cities[(i + 1) % n])
            })
            .sum()
    }
}

impl Individual for Tour {
    fn fitness(&self) -> f64 {
        Tour::fitness(self)
    }
}

impl PartialEq for Tour {
    fn eq(&self, other: &Self) -> bool {
        self.cities == other.cities
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tour")
            .field("cities", &self.cities)
            .field("evaluation", &self.evaluation)
            .finish()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for city in self.coordinates() {
            write!(f, "{city}|")?;
        }
        Ok(())
    }
}

/// A tour under construction: some slots may still be empty.
///
/// Only crossover builds these. [`finish`](Self::finish) turns a fully
/// populated one into a [`Tour`].
#[derive(Debug, Clone)]
pub struct PartialTour {
    manager: Arc<TourManager>,
    slots: Vec<Option<CityId>>,
    present: Vec<bool>,
    next_empty: usize,
}

impl PartialTour {
    /// Creates a tour with every slot empty.
    pub fn new(manager: Arc<TourManager>) -> Self {
        let n = manager.number_of_cities();
        Self {
            manager,
            slots: vec![None; n],
            present: vec![false; n],
            next_empty: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn city(&self, position: usize) -> Option<CityId> {
        self.slots.get(position).copied().flatten()
    }

    /// Writes `city` into `position`, replacing whatever was there.
    ///
    /// Fails with [`Error::NotAPermutation`] if `city` already sits in a
    /// different slot.
    pub fn set_city(&mut self, position: usize, city: CityId) -> Result<()> {
        let count = self.slots.len();
        if position >= count {
            return Err(Error::IndexOutOfRange {
                index: position,
                count,
            });
        }
        if city.index() >= count {
            return Err(Error::CityIndexOutOfRange {
                index: city.index(),
                count,
            });
        }
        if self.present[city.index()] && self.slots[position] != Some(city) {
            return Err(Error::NotAPermutation);
        }
        if let Some(previous) = self.slots[position].replace(city) {
            self.present[previous.index()] = false;
        }
        self.present[city.index()] = true;
        Ok(())
    }

    /// Identity membership test.
    pub fn contains_city(&self, city: CityId) -> bool {
        self.present.get(city.index()).copied().unwrap_or(false)
    }

    /// Places `city` in the leftmost empty slot.
    ///
    /// Returns `false` when no slot is empty.
    pub fn fill_next_empty(&mut self, city: CityId) -> Result<bool> {
        while self.next_empty < self.slots.len() && self.slots[self.next_empty].is_some() {
            self.next_empty += 1;
        }
        if self.next_empty == self.slots.len() {
            return Ok(false);
        }
        self.set_city(self.next_empty, city)?;
        Ok(true)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Converts into a [`Tour`], failing if any slot is empty or any city
    /// appears twice.
    pub fn finish(self) -> Result<Tour> {
        let cities = self
            .slots
            .into_iter()
            .collect::<Option<Vec<CityId>>>()
            .ok_or(Error::NotAPermutation)?;
        Tour::from_cities(self.manager, cities)
    }
}

/// True if `cities` holds each of `0..n` exactly once.
pub(crate) fn is_permutation(cities: &[CityId], n: usize) -> bool {
    if cities.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for city in cities {
        match seen.get_mut(city.index()) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

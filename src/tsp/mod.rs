//! Problem model for the Euclidean Traveling Salesman Problem.
//!
//! - [`City`] / [`TourManager`]: the fixed set of points to visit
//! - [`Tour`]: one complete round trip, with cached distance and fitness
//! - [`PartialTour`]: a tour under construction during crossover
//! - [`Population`]: one generation of tours

mod city;
mod population;
mod tour;

pub use city::{City, CityId, TourManager};
pub use population::Population;
pub use tour::{fitness_from_distance, Evaluation, PartialTour, Tour};

//! Permutation-preserving genetic operators for tours.
//!
//! # Crossover
//!
//! - [`order_crossover`]: copy one contiguous (possibly wrapping) block from
//!   parent1, fill the rest in parent2's order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-slot random pairwise swap
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use std::sync::Arc;

use rand::Rng;

use crate::error::{Error, Result};
use crate::tsp::{PartialTour, Tour};

// ============================================================================
// Crossover
// ============================================================================

/// Order-preserving single-segment crossover with random cut points.
///
/// Draws `start` and `end` independently from `0..n` and delegates to
/// [`order_crossover_at`].
///
/// # Complexity
/// O(n) time, O(n) space
pub fn order_crossover<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> Result<Tour> {
    let n = parent1.len();
    if n == 0 {
        return Err(Error::NoCities);
    }
    let start = rng.random_range(0..n);
    let end = rng.random_range(0..n);
    order_crossover_at(parent1, parent2, start, end)
}

/// Order-preserving crossover with explicit cut points.
///
/// Which positions are inherited from `parent1`:
///
/// - `start < end`: positions strictly between the cuts
/// - `start > end`: every position except those strictly between `end` and
///   `start`, i.e. a block wrapping around the end of the tour
/// - `start == end`: none
///
/// The remaining slots are filled left to right with the cities of `parent2`
/// that are not yet in the child, in `parent2`'s order.
pub fn order_crossover_at(
    parent1: &Tour,
    parent2: &Tour,
    start: usize,
    end: usize,
) -> Result<Tour> {
    if !Arc::ptr_eq(parent1.manager(), parent2.manager()) {
        return Err(Error::RegistryMismatch);
    }
    let n = parent1.len();
    if start >= n || end >= n {
        return Err(Error::IndexOutOfRange {
            index: start.max(end),
            count: n,
        });
    }

    let mut child = PartialTour::new(Arc::clone(parent1.manager()));

    for (i, &city) in parent1.cities().iter().enumerate() {
        let inherited = if start < end {
            i > start && i < end
        } else if start > end {
            !(i < start && i > end)
        } else {
            false
        };
        if inherited {
            child.set_city(i, city)?;
        }
    }

    for &city in parent2.cities() {
        if !child.contains_city(city) && !child.fill_next_empty(city)? {
            break;
        }
    }

    child.finish()
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: for every position, with probability `rate`, swap it with
/// a uniformly chosen position (possibly itself).
///
/// Returns the number of swaps performed. Any swap drops the tour's cached
/// evaluation.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) -> usize {
    let n = tour.len();
    let mut swaps = 0;
    for pos1 in 0..n {
        if rng.random::<f64>() < rate {
            let pos2 = rng.random_range(0..n);
            tour.swap(pos1, pos2);
            swaps += 1;
        }
    }
    swaps
}

// ============================================================================
// Tests
// ============================================================================

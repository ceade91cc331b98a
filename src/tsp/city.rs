//! Cities and the city registry.

use crate::error::{Error, Result};

/// A point in the plane.
///
/// Equality is by value: two cities with the same coordinates compare
/// equal. Tours never rely on this; they track cities by [`CityId`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Identity of a registered city: its insertion index in a [`TourManager`].
///
/// Two cities registered at the same coordinates get different ids and are
/// never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityId(pub usize);

impl CityId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered registry of the cities a run optimizes over.
///
/// Built once before evolution starts, then shared read-only (usually
/// behind an `Arc`) by every tour and population.
///
/// # Examples
///
/// ```
/// use tsp_ga::tsp::{City, TourManager};
///
/// let mut manager = TourManager::new();
/// let a = manager.add_city(City::new(0.0, 0.0));
/// let b = manager.add_city(City::new(3.0, 4.0));
/// assert_eq!(manager.number_of_cities(), 2);
/// assert_eq!(manager.distance(a, b), 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourManager {
    cities: Vec<City>,
}

impl TourManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a city and returns its id. Duplicate coordinates are allowed.
    pub fn add_city(&mut self, city: City) -> CityId {
        self.cities.push(city);
        CityId(self.cities.len() - 1)
    }

    /// Returns the city registered at `index`.
    pub fn city(&self, index: usize) -> Result<&City> {
        self.cities.get(index).ok_or(Error::CityIndexOutOfRange {
            index,
            count: self.cities.len(),
        })
    }

    pub fn number_of_cities(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// All registered cities in insertion order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Ids of every registered city, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.cities.len()).map(CityId)
    }

    /// Distance between two registered cities.
    ///
    /// # Panics
    /// Panics if either id does not belong to this registry.
    #[inline]
    pub fn distance(&self, a: CityId, b: CityId) -> f64 {
        self.cities[a.0].distance_to(&self.cities[b.0])
    }
}

impl FromIterator<City> for TourManager {
    fn from_iter<T: IntoIterator<Item = City>>(iter: T) -> Self {
        Self {
            cities: iter.into_iter().collect(),
        }
    }
}

impl From<&[(f64, f64)]> for TourManager {
    fn from(coords: &[(f64, f64)]) -> Self {
        coords.iter().map(|&(x, y)| City::new(x, y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_symmetric_and_zero_on_self() {
        let a = City::new(1.5, -2.0);
        let b = City::new(-7.0, 11.25);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_add_city_returns_sequential_ids() {
        let mut manager = TourManager::new();
        assert_eq!(manager.add_city(City::new(0.0, 0.0)), CityId(0));
        assert_eq!(manager.add_city(City::new(1.0, 0.0)), CityId(1));
        assert_eq!(manager.number_of_cities(), 2);
    }

    #[test]
    fn test_duplicate_coordinates_are_not_merged() {
        let mut manager = TourManager::new();
        let a = manager.add_city(City::new(2.0, 2.0));
        let b = manager.add_city(City::new(2.0, 2.0));
        assert_ne!(a, b);
        assert_eq!(manager.number_of_cities(), 2);
        assert_eq!(manager.city(0).unwrap(), manager.city(1).unwrap());
    }

    #[test]
    fn test_city_out_of_range() {
        let manager: TourManager = [City::new(0.0, 0.0)].into_iter().collect();
        assert!(manager.city(0).is_ok());
        assert_eq!(
            manager.city(1),
            Err(Error::CityIndexOutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn test_from_coordinate_slice() {
        let coords = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)];
        let manager = TourManager::from(&coords[..]);
        assert_eq!(manager.number_of_cities(), 3);
        assert_eq!(*manager.city(2).unwrap(), City::new(10.0, 10.0));
        assert_eq!(manager.ids().collect::<Vec<_>>(), vec![CityId(0), CityId(1), CityId(2)]);
    }
}

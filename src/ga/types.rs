//! Core trait shared by the selection and replacement code.

/// A candidate solution that can be ranked by fitness.
///
/// Higher fitness is better. Selection only ever compares fitness values,
/// so anything exposing one can take part in a tournament.
pub trait Individual {
    /// Returns the fitness of this individual.
    fn fitness(&self) -> f64;
}

impl<T: Individual + ?Sized> Individual for std::sync::Arc<T> {
    fn fitness(&self) -> f64 {
        (**self).fitness()
    }
}

//! Error type shared by every fallible operation in the crate.

/// Errors raised by tour construction, population handling and GA setup.
///
/// All variants describe precondition violations. None of them are
/// recoverable mid-evolution: a configuration error fails at construction,
/// and an invariant violation points at a bug in an operator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("no cities registered")]
    NoCities,
    #[error("city index out of range: index={index}, count={count}")]
    CityIndexOutOfRange { index: usize, count: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("population is empty")]
    EmptyPopulation,
    #[error("tour is not a permutation of the registered cities")]
    NotAPermutation,
    #[error("index out of range: index={index}, count={count}")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("tours belong to different city registries")]
    RegistryMismatch,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the checked and fallible entry points.
//!
//! The core sampling functions (`rand`, `rand_from`, `make_rng`) never return
//! errors: unsupported types are rejected at compile time and inverted ranges
//! are a caller contract violation. [`RandError`] covers the operations that
//! opt into checking instead.

use thiserror::Error;

/// Errors returned by checked sampling, distribution construction,
/// entropy seeding and settings loading.
///
/// # Variants
///
/// - `EmptyRange`: `low > high`, or a bound is NaN
/// - `NonFiniteRange`: a floating-point bound is infinite
/// - `InvalidParameters`: a distribution rejected its parameters
/// - `Entropy`: the operating system entropy source failed
/// - `Settings`: engine settings could not be loaded
///
/// # Examples
///
/// ```
/// use easyrand::RandError;
///
/// let err = RandError::EmptyRange {
///     low: "10".to_string(),
///     high: "3".to_string(),
/// };
/// assert_eq!(format!("{}", err), "empty range: low 10 is greater than high 3");
/// ```
#[derive(Debug, Error)]
pub enum RandError {
    /// The range contains no values.
    #[error("empty range: low {low} is greater than high {high}")]
    EmptyRange {
        /// Lower bound as supplied
        low: String,
        /// Upper bound as supplied
        high: String,
    },

    /// A floating-point bound is infinite.
    #[error("non-finite range: [{low}, {high}) cannot be sampled uniformly")]
    NonFiniteRange {
        /// Lower bound as supplied
        low: String,
        /// Upper bound as supplied
        high: String,
    },

    /// Distribution construction rejected the parameters.
    #[error("invalid parameters for {distribution}: {reason}")]
    InvalidParameters {
        /// Name of the distribution family
        distribution: &'static str,
        /// Message from the distribution constructor
        reason: String,
    },

    /// The operating system entropy source could not be read.
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    /// Engine settings could not be loaded.
    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),
}

impl RandError {
    /// Builds an `InvalidParameters` error from a distribution constructor error.
    pub(crate) fn invalid_parameters(
        distribution: &'static str,
        source: impl std::fmt::Display,
    ) -> Self {
        RandError::InvalidParameters {
            distribution,
            reason: source.to_string(),
        }
    }
}

/// Result type alias for easyrand operations.
pub type Result<T> = std::result::Result<T, RandError>;

//! Distribution kinds that can be built from a parameter set.
//!
//! [`DistributionKind`] names a distribution family together with the
//! parameters needed to construct it. It is what lets
//! [`make_rng_from`](crate::make_rng_from) build a distribution from its type
//! alone, and lets [`rand_with_params`](crate::rand_with_params) draw with
//! one-off parameters.
//!
//! Implemented for the `rand_distr` families below. Constructor errors are
//! reported as [`RandError::InvalidParameters`].
//!
//! | Kind             | Params             | Output |
//! |------------------|--------------------|--------|
//! | `Bernoulli`      | `p`                | `bool` |
//! | `Normal<f64>`    | `(mean, std_dev)`  | `f64`  |
//! | `LogNormal<f64>` | `(mu, sigma)`      | `f64`  |
//! | `Exp<f64>`       | `lambda`           | `f64`  |
//! | `Poisson<f64>`   | `lambda`           | `f64`  |
//! | `Gamma<f64>`     | `(shape, scale)`   | `f64`  |
//! | `Binomial`       | `(n, p)`           | `u64`  |
//! | `Geometric`      | `p`                | `u64`  |

use rand_distr::{Bernoulli, Binomial, Exp, Gamma, Geometric, LogNormal, Normal, Poisson};

use crate::error::{RandError, Result};

/// A distribution family constructible from a parameter set.
pub trait DistributionKind: Sized {
    /// Human-readable family name, used in error messages.
    const NAME: &'static str;

    /// Constructor parameters.
    type Params;

    /// Sample type.
    type Output;

    /// Builds a distribution from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidParameters`] if the family rejects `params`.
    fn from_params(params: Self::Params) -> Result<Self>;
}

impl DistributionKind for Bernoulli {
    const NAME: &'static str = "Bernoulli";
    type Params = f64;
    type Output = bool;

    fn from_params(p: f64) -> Result<Self> {
        Bernoulli::new(p).map_err(|e| RandError::invalid_parameters(Self::NAME, e))
    }
}

impl DistributionKind for Normal<f64> {
    const NAME: &'static str = "Normal";
    type Params = (f64, f64);
    type Output = f64;

    fn from_params((mean, std_dev): (f64, f64)) -> Result<Self> {
        Normal::new(mean, std_dev).map_err(|e| RandError::invalid_parameters(Self::NAME, e))
    }
}

impl DistributionKind for LogNormal<f64> {
    const NAME: &'static str = "LogNormal";
    type Params = (f64, f64);
    type Output = f64;

    fn from_params((mu, sigma): (f64, f64)) -> Result<Self> {
        LogNormal::new(mu, sigma).map_err(|e| RandError::invalid_parameters(Self::NAME, e))
    }
}

impl DistributionKind for Exp<f64> {
    const NAME: &'static str = "Exp";
    type Params = f64;
    type Output = f64;

    fn from_params(lambda: f64) -> Result<Self> {
        Exp::new(lambda).map_err(|e| RandError::invalid_parameters(Self::NAME, e))
    }
}

impl DistributionKind for Poisson<f64> {
    const NAME: &'static str = "Poisson";
    type Params = f64;
    type Output = f64;

    fn from_params(lambda: f64) -> Result<Self> {
        Poisson::new(lambda).map_err(|e| RandError::invalid_parameters(Self::NAME, e))
    }
}

impl DistributionKind for Gamma<f64> {
    const NAME: &'static str = "Gamma";
    type Params = (f64, f64);
    type Output = f64;

    fn from_params((shape, scale): (f64, f64)) -> Result<Self> {
        Gamma::new(shape, scale).map_err(|e| RandError::invalid_parameters(Self::NAME, e))
    }
}

impl DistributionKind for Binomial {
    const NAME: &'static str = "Binomial";
    type Params = (u64, f64);
    type Output = u64;

    fn from_params((n, p): (u64, f64)) -> Result<Self> {
        Binomial::new(n, p).map_err(|e| RandError::invalid_parameters(Self::NAME, e))
    }
}

impl DistributionKind for Geometric {
    const NAME: &'static str = "Geometric";
    type Params = f64;
    type Output = u64;

    fn from_params(p: f64) -> Result<Self> {
        Geometric::new(p).map_err(|e| RandError::invalid_parameters(Self::NAME, e))
    }
}

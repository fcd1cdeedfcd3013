//! Bound generators: zero-argument closures with fixed sampling parameters.
//!
//! When the same call is made repeatedly it is convenient to capture its
//! arguments once. Each constructor here returns a closure that draws one
//! sample per call from the calling thread's engine.
//!
//! ```rust
//! use easyrand::{make_rng, make_rng_from};
//! use rand_distr::Bernoulli;
//!
//! let unit = make_rng(0.0f32, 1.0f32);
//! assert!((0.0..1.0).contains(&unit()));
//!
//! let mut coin = make_rng_from::<Bernoulli>(0.75).unwrap();
//! let _heads: bool = coin();
//! ```

use crate::error::Result;
use crate::kinds::DistributionKind;
use crate::sampler::{rand_from, Sampler};
use crate::uniform::{rand, UniformBound};

/// Returns a closure that calls [`rand(a, b)`](crate::rand) on each
/// invocation.
///
/// The bounds are captured by value. Integer ranges are closed, floating-point
/// ranges half-open. The precondition `a <= b` is checked when the closure
/// is called, not here.
///
/// # Examples
///
/// ```rust
/// use easyrand::make_rng;
///
/// let d20 = make_rng(1u32, 20u32);
/// let rolls: Vec<u32> = (0..5).map(|_| d20()).collect();
/// assert!(rolls.iter().all(|r| (1..=20).contains(r)));
/// ```
pub fn make_rng<T: UniformBound>(a: T, b: T) -> impl Fn() -> T + Clone {
    move || rand(a, b)
}

/// Returns a closure that owns a `D` built from `params` and samples from it
/// on each invocation.
///
/// # Errors
///
/// Returns [`RandError::InvalidParameters`](crate::RandError::InvalidParameters)
/// if `D` rejects `params`.
///
/// # Examples
///
/// ```rust
/// use easyrand::make_rng_from;
/// use rand_distr::Normal;
///
/// let mut noise = make_rng_from::<Normal<f64>>((0.0, 0.01)).unwrap();
/// assert!(noise().abs() < 1.0);
///
/// assert!(make_rng_from::<Normal<f64>>((0.0, f64::NAN)).is_err());
/// ```
pub fn make_rng_from<D>(params: D::Params) -> Result<impl FnMut() -> D::Output>
where
    D: DistributionKind + Sampler<D::Output>,
{
    let dist = D::from_params(params)?;
    Ok(make_rng_with::<D, D::Output>(dist))
}

/// Returns a closure that owns `sampler` and draws from it on each
/// invocation.
///
/// The sampler's state, if any, carries over from one call to the next.
///
/// # Examples
///
/// ```rust
/// use easyrand::make_rng_with;
/// use rand_distr::Exp;
///
/// let mut wait = make_rng_with::<_, f64>(Exp::new(2.0).unwrap());
/// let t = wait();
/// assert!(t >= 0.0);
/// ```
pub fn make_rng_with<S, T>(mut sampler: S) -> impl FnMut() -> T
where
    S: Sampler<T>,
{
    move || rand_from(&mut sampler)
}

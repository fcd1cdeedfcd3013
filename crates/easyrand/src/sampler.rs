//! Sampling from caller-supplied distributions.
//!
//! Any value that can turn engine output into a sample is a [`Sampler`].
//! Every [`rand::distributions::Distribution`] is one through a blanket
//! implementation, so the whole of `rand` and `rand_distr` works out of the
//! box. Types that need to keep state between draws (caches, counters,
//! rejection buffers) implement [`Sampler`] directly and take `&mut self`.

use rand::distributions::Distribution;

use crate::engine::{with_engine, Engine};
use crate::error::Result;
use crate::kinds::DistributionKind;

/// A source of samples driven by an [`Engine`].
///
/// # Examples
///
/// A stateful sampler that alternates sign on each draw:
///
/// ```rust
/// use easyrand::{rand_from, Engine, Sampler};
/// use rand::Rng;
///
/// struct Alternating {
///     negative: bool,
/// }
///
/// impl Sampler<f64> for Alternating {
///     fn draw(&mut self, engine: &mut Engine) -> f64 {
///         self.negative = !self.negative;
///         let magnitude: f64 = engine.gen();
///         if self.negative { -magnitude } else { magnitude }
///     }
/// }
///
/// let mut sampler = Alternating { negative: false };
/// let first: f64 = rand_from(&mut sampler);
/// let second: f64 = rand_from(&mut sampler);
/// assert!(first <= 0.0 && second >= 0.0);
/// ```
pub trait Sampler<T> {
    /// Draws one sample using `engine`.
    fn draw(&mut self, engine: &mut Engine) -> T;
}

impl<T, D> Sampler<T> for D
where
    D: Distribution<T> + ?Sized,
{
    #[inline]
    fn draw(&mut self, engine: &mut Engine) -> T {
        Distribution::<T>::sample(&*self, engine)
    }
}

/// Returns one sample from `sampler`, drawn with the calling thread's engine.
///
/// The sampler may update its own state; stateless distributions are left
/// as they were.
///
/// # Examples
///
/// ```rust
/// use easyrand::rand_from;
/// use rand_distr::Normal;
///
/// let mut normal = Normal::new(5.0, 0.5).unwrap();
/// let x: f64 = rand_from(&mut normal);
/// assert!(x.is_finite());
/// ```
#[inline]
pub fn rand_from<T, S>(sampler: &mut S) -> T
where
    S: Sampler<T> + ?Sized,
{
    with_engine(|engine| sampler.draw(engine))
}

/// Returns one sample from a distribution of the same kind as `dist`, built
/// from `params` for this call only.
///
/// `dist` only selects the distribution kind and is not modified; its
/// stored parameters stay as they were. `rand_distr` distributions carry no
/// separate parameter object, so the override is available only for types
/// implementing [`DistributionKind`]. A custom [`Sampler`] that is not a
/// distribution kind has to be rebuilt by the caller and passed to
/// [`rand_from`] instead.
///
/// # Errors
///
/// Returns [`RandError::InvalidParameters`](crate::RandError::InvalidParameters)
/// if `params` are rejected by the distribution constructor. The engine is
/// not advanced in that case.
///
/// # Examples
///
/// ```rust
/// use easyrand::rand_with_params;
/// use rand_distr::Normal;
///
/// let normal = Normal::new(0.0, 1.0).unwrap();
/// let shifted = rand_with_params(&normal, (1_000.0, 1e-9)).unwrap();
/// assert!((shifted - 1_000.0).abs() < 1e-3);
/// assert_eq!(normal.mean(), 0.0);
/// ```
pub fn rand_with_params<D>(_dist: &D, params: D::Params) -> Result<D::Output>
where
    D: DistributionKind + Sampler<D::Output>,
{
    let mut scoped = D::from_params(params)?;
    Ok(rand_from(&mut scoped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reseed_with;
    use rand::RngCore;
    use rand_distr::{Bernoulli, Normal};

    struct CountingSampler {
        draws: usize,
    }

    impl Sampler<u32> for CountingSampler {
        fn draw(&mut self, engine: &mut Engine) -> u32 {
            self.draws += 1;
            engine.next_u32()
        }
    }

    #[test]
    fn test_stateful_sampler_keeps_state() {
        let mut sampler = CountingSampler { draws: 0 };
        for _ in 0..7 {
            let _: u32 = rand_from(&mut sampler);
        }
        assert_eq!(sampler.draws, 7);
    }

    #[test]
    fn test_distribution_uses_thread_engine() {
        let mut normal = Normal::new(0.0, 1.0).unwrap();

        reseed_with(21);
        let first: Vec<f64> = (0..10).map(|_| rand_from(&mut normal)).collect();
        reseed_with(21);
        let second: Vec<f64> = (0..10).map(|_| rand_from(&mut normal)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_params_override_leaves_distribution_untouched() {
        let normal = Normal::new(3.0, 2.0).unwrap();
        let _ = rand_with_params(&normal, (-50.0, 0.1)).unwrap();
        assert_eq!(normal.mean(), 3.0);
        assert_eq!(normal.std_dev(), 2.0);
    }

    #[test]
    fn test_params_override_ignores_stored_params() {
        let narrow = Normal::new(0.0, 1.0).unwrap();
        let wide = Normal::new(-40.0, 25.0).unwrap();

        reseed_with(5);
        let from_narrow = rand_with_params(&narrow, (10.0, 0.5)).unwrap();
        reseed_with(5);
        let from_wide = rand_with_params(&wide, (10.0, 0.5)).unwrap();

        assert_eq!(from_narrow, from_wide);
    }

    #[test]
    fn test_params_override_rejects_invalid_params() {
        let coin = Bernoulli::new(0.5).unwrap();
        assert!(rand_with_params(&coin, 2.0).is_err());
        assert!(rand_with_params(&coin, 1.0).unwrap());
        assert!(!rand_with_params(&coin, 0.0).unwrap());
    }
}

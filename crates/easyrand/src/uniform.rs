//! Uniform sampling over a range given by two bounds.
//!
//! [`rand`] is the default entry point of the crate: it draws one value,
//! uniformly distributed between two bounds, from the calling thread's
//! engine. Which bounds are accepted is decided at compile time by the
//! sealed [`UniformBound`] trait.
//!
//! ## Integer Ranges
//!
//! For `i16`, `i32`, `i64`, `isize`, `u16`, `u32`, `u64` and `usize` the
//! range is the closed interval `[a, b]`; both bounds can be returned.
//! Single-byte types (`i8`, `u8`) and `bool` are not supported.
//!
//! ## Floating-Point Ranges
//!
//! For `f32` and `f64` the range behaves as the half-open interval `[a, b)`:
//! `b` is the nominal upper bound but is not guaranteed to be returned. This
//! differs from the closed-interval wording used for integers and is kept
//! as is; callers must not rely on `b` being produced. When `a == b` the
//! result is `a`.

use std::fmt::Debug;

use ::rand::Rng;

use crate::engine::with_engine;
use crate::error::{RandError, Result};

mod private {
    pub trait Sealed {}
}

/// Numeric types that can bound a uniform range.
///
/// This trait is sealed: it is implemented for the integer and
/// floating-point types listed in the [module documentation](self) and
/// cannot be implemented outside this crate.
pub trait UniformBound: Copy + PartialOrd + Debug + private::Sealed {
    /// Samples one value between `low` and `high` using `rng`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`, or for floating-point types if a bound is not
    /// finite or `high - low` overflows.
    fn sample_between<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self;

    /// Checks that `[low, high]` can be sampled.
    fn check_range(low: Self, high: Self) -> Result<()>;
}

fn empty_range<T: Debug>(low: T, high: T) -> RandError {
    RandError::EmptyRange {
        low: format!("{:?}", low),
        high: format!("{:?}", high),
    }
}

macro_rules! impl_integer_bound {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl UniformBound for $t {
                #[inline]
                fn sample_between<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self {
                    rng.gen_range(low..=high)
                }

                fn check_range(low: Self, high: Self) -> Result<()> {
                    if low <= high {
                        Ok(())
                    } else {
                        Err(empty_range(low, high))
                    }
                }
            }
        )*
    };
}

macro_rules! impl_float_bound {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl UniformBound for $t {
                #[inline]
                fn sample_between<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self {
                    // gen_range rejects the degenerate range low == high
                    if low == high {
                        low
                    } else {
                        rng.gen_range(low..high)
                    }
                }

                #[allow(clippy::neg_cmp_op_on_partial_ord)]
                fn check_range(low: Self, high: Self) -> Result<()> {
                    // NaN fails this comparison as well
                    if !(low <= high) {
                        return Err(empty_range(low, high));
                    }
                    if !(low.is_finite() && high.is_finite() && (high - low).is_finite()) {
                        return Err(RandError::NonFiniteRange {
                            low: format!("{:?}", low),
                            high: format!("{:?}", high),
                        });
                    }
                    Ok(())
                }
            }
        )*
    };
}

impl_integer_bound!(i16, i32, i64, isize, u16, u32, u64, usize);
impl_float_bound!(f32, f64);

/// Returns a random number between `a` and `b`, selected with uniform
/// distribution from the calling thread's engine.
///
/// Integer ranges are closed (`[a, b]`); floating-point ranges are
/// half-open (`[a, b)`), see the [module documentation](self).
///
/// # Panics
///
/// Panics if `a > b`. For floating-point types it also panics if a bound is
/// not finite or if `b - a` overflows, as in `rand(-f64::MAX, f64::MAX)`.
/// Use [`try_rand`] to get an error instead.
///
/// # Examples
///
/// ```rust
/// use easyrand::rand;
///
/// let die = rand(1, 6);
/// assert!((1..=6).contains(&die));
///
/// let unit = rand(0.0, 1.0);
/// assert!((0.0..1.0).contains(&unit));
///
/// let single = rand(0.0f32, 200.0f32);
/// assert!((0.0..200.0).contains(&single));
/// ```
#[inline]
pub fn rand<T: UniformBound>(a: T, b: T) -> T {
    with_engine(|engine| T::sample_between(engine, a, b))
}

/// Checked form of [`rand`].
///
/// Returns [`RandError::EmptyRange`] when `a > b` (or a bound is NaN) and
/// [`RandError::NonFiniteRange`] when a floating-point bound is not finite or
/// `b - a` overflows.
/// The engine is not advanced when the range is rejected.
///
/// # Examples
///
/// ```rust
/// use easyrand::{try_rand, RandError};
///
/// assert!(try_rand(10u32, 20u32).is_ok());
/// assert!(matches!(try_rand(20, 10), Err(RandError::EmptyRange { .. })));
/// assert!(matches!(
///     try_rand(0.0, f64::INFINITY),
///     Err(RandError::NonFiniteRange { .. })
/// ));
/// ```
pub fn try_rand<T: UniformBound>(a: T, b: T) -> Result<T> {
    T::check_range(a, b)?;
    Ok(rand(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{reseed_with, Engine};

    #[test]
    fn test_integer_bounds_are_inclusive() {
        let mut engine = Engine::from_seed(3);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..10_000 {
            let v = i32::sample_between(&mut engine, -2, 2);
            assert!((-2..=2).contains(&v));
            seen_low |= v == -2;
            seen_high |= v == 2;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut engine = Engine::from_seed(3);
        assert_eq!(u64::sample_between(&mut engine, 9, 9), 9);
        assert_eq!(f64::sample_between(&mut engine, 2.5, 2.5), 2.5);
        assert_eq!(f32::sample_between(&mut engine, -1.0, -1.0), -1.0);
    }

    #[test]
    fn test_full_integer_range() {
        let mut engine = Engine::from_seed(3);
        let _ = u64::sample_between(&mut engine, u64::MIN, u64::MAX);
        let _ = i16::sample_between(&mut engine, i16::MIN, i16::MAX);
    }

    #[test]
    #[should_panic]
    fn test_inverted_integer_range_panics() {
        let _ = rand(10, 3);
    }

    #[test]
    #[should_panic]
    fn test_overflowing_float_span_panics() {
        let _ = rand(-f64::MAX, f64::MAX);
    }

    #[test]
    fn test_overflowing_float_span_is_rejected() {
        assert!(matches!(
            try_rand(-f32::MAX, f32::MAX),
            Err(RandError::NonFiniteRange { .. })
        ));
    }

    #[test]
    fn test_check_range_rejects_nan() {
        assert!(matches!(
            f64::check_range(f64::NAN, 1.0),
            Err(RandError::EmptyRange { .. })
        ));
        assert!(matches!(
            f64::check_range(-f64::MAX, f64::MAX),
            Err(RandError::NonFiniteRange { .. })
        ));
    }

    #[test]
    fn test_rejected_range_does_not_advance_engine() {
        reseed_with(11);
        assert!(try_rand(5i64, 1i64).is_err());
        let after_error = rand(0u32, 1_000_000u32);

        reseed_with(11);
        assert_eq!(rand(0u32, 1_000_000u32), after_error);
    }
}

//! # easyrand
//!
//! An easy-to-use interface on top of `rand` and `rand_distr`.
//!
//! - **No engines to manage**: a thread-local engine is created for you on
//!   first use.
//! - **No seeds to manage**: the engine is seeded from the operating system
//!   entropy source. The seed can be controlled for reproducible runs.
//! - **Uniform by default**: `rand(a, b)` samples uniformly; any other
//!   distribution can be passed in.
//!
//! ## Usage Example
//!
//! ```rust
//! use easyrand::{make_rng, make_rng_from, rand, rand_from, reseed, reseed_with};
//! use rand_distr::{Bernoulli, Normal};
//!
//! // Uniform selection from a range
//! let n = rand(10, 20);          // an i32 in [10, 20]
//! let x = rand(0.0, 1.0);        // an f64 in [0.0, 1.0)
//! let y = rand(0.0f32, 1.0f32);  // an f32 in [0.0, 1.0)
//! # assert!((10..=20).contains(&n) && x < 1.0 && y < 1.0);
//!
//! // Any other distribution
//! let mut normal = Normal::new(5.0, 0.5).unwrap();
//! let z: f64 = rand_from(&mut normal);
//! # assert!(z.is_finite());
//!
//! // Generators with the arguments bound
//! reseed_with(0); // make the results repeatable
//! let unit = make_rng(0.0f32, 1.0f32);
//! let _ = unit();
//!
//! reseed(); // back to a random seed
//! let mut coin = make_rng_from::<Bernoulli>(0.75).unwrap();
//! let _heads: bool = coin();
//! ```
//!
//! ## Module Structure
//!
//! - [`engine`]: the thread-local engine and seeding control
//! - [`uniform`]: uniform sampling between two bounds
//! - [`sampler`]: sampling from caller-supplied distributions
//! - [`kinds`]: distribution families constructible from parameters
//! - [`generator`]: bound generators
//! - [`settings`]: seed settings from the environment or a file
//!
//! ## Threads
//!
//! Each thread has its own engine. Reseeding affects the calling thread
//! only, and no operation takes a lock or blocks.
//!
//! ## Known Constraints
//!
//! - Not suitable for cryptography.
//! - Sequences are reproducible for a fixed seed within one version of
//!   `rand`; they are not guaranteed stable across `rand` upgrades.

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod generator;
pub mod kinds;
pub mod sampler;
pub mod settings;
pub mod uniform;

pub use engine::{current_seed, reseed, reseed_with, try_reseed, with_engine, Engine};
pub use error::{RandError, Result};
pub use generator::{make_rng, make_rng_from, make_rng_with};
pub use kinds::DistributionKind;
pub use sampler::{rand_from, rand_with_params, Sampler};
pub use settings::EngineSettings;
pub use uniform::{rand, try_rand, UniformBound};

//! Walkthrough of the easyrand API.
//!
//! Run with `cargo run -p easyrand --example demo`. Set `EASYRAND_SEED` to
//! make the first sections repeatable and `RUST_LOG=easyrand=debug` to see
//! engine seeding events.

use easyrand::{
    make_rng, make_rng_from, rand, rand_from, reseed, reseed_with, DistributionKind,
    EngineSettings, RandError,
};
use rand_distr::{Bernoulli, Normal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), RandError> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = EngineSettings::from_env()?.apply()?;
    info!(seed, "engine ready");

    println!("integers in [0, 200]:");
    for _ in 0..5 {
        println!("  {}", rand(0, 200));
    }

    println!("doubles in [0, 200):");
    for _ in 0..5 {
        println!("  {}", rand(0.0, 200.0));
    }

    println!("floats in [0, 200):");
    for _ in 0..5 {
        println!("  {}", rand(0.0f32, 200.0f32));
    }

    // Make the results repeatable
    reseed_with(0);
    let unit = make_rng(0.0f32, 1.0f32);
    println!("repeatable floats in [0, 1):");
    for _ in 0..5 {
        println!("  {}", unit());
    }

    // Back to a random seed
    reseed();
    let mut normal = Normal::<f64>::from_params((0.0, 1.0))?;
    println!("standard normal:");
    for _ in 0..5 {
        let x: f64 = rand_from(&mut normal);
        println!("  {}", x);
    }

    let mut bern = make_rng_from::<Bernoulli>(0.75)?;
    println!("bernoulli(0.75):");
    for _ in 0..5 {
        println!("  {}", bern());
    }

    Ok(())
}

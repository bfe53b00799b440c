//! Construct-and-multiply throughput benchmark
//!
//! Each iteration builds two vectors from pseudo-random `u32` components and
//! multiplies them componentwise. The run is seeded, so two runs with the same
//! configuration multiply exactly the same vectors.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use num_traits::{NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};
use vector4_math::{Scalar, Vector4};

use crate::config::BenchmarkConfig;

/// Numeric kind a benchmark run is parameterized over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit IEEE-754
    Single,
    /// 64-bit IEEE-754
    Double,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => write!(f, "f32"),
            Precision::Double => write!(f, "f64"),
        }
    }
}

/// Outcome of one benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub precision: Precision,
    pub iterations: u64,
    pub elapsed: Duration,
    /// Product components that came out infinite or NaN
    pub non_finite: u64,
    /// Sum of the x component of every product
    pub checksum: f64,
}

impl BenchmarkReport {
    /// Mean wall-clock cost of one iteration
    pub fn per_iteration(&self) -> Duration {
        let nanos = self.elapsed.as_nanos() / <u128 as From<u64>>::from(self.iterations.max(1));
        Duration::from_nanos(nanos as u64)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} iterations in {:.3?} ({:?}/iter), {} non-finite, checksum {:e}",
            self.precision,
            self.iterations,
            self.elapsed,
            self.per_iteration(),
            self.non_finite,
            self.checksum,
        )
    }
}

/// Error type for benchmark runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    /// The configuration asked for zero iterations
    NoIterations,
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkError::NoIterations => write!(f, "Benchmark needs at least one iteration"),
        }
    }
}

impl std::error::Error for BenchmarkError {}

/// Random `u32` as `N`; every `u32` is representable (possibly rounded) in
/// both float kinds, so the NaN fallback is never taken for them.
#[inline]
fn random_component<N: Scalar>(rng: &mut StdRng) -> N {
    <N as NumCast>::from(rng.random::<u32>()).unwrap_or_else(N::nan)
}

#[inline]
fn random_vector<N: Scalar>(rng: &mut StdRng) -> Vector4<N> {
    Vector4::new(
        random_component(rng),
        random_component(rng),
        random_component(rng),
        random_component(rng),
    )
}

/// Run the construct-and-multiply loop for one numeric kind
pub fn run<N: Scalar>(
    precision: Precision,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport, BenchmarkError> {
    if config.iterations == 0 {
        return Err(BenchmarkError::NoIterations);
    }

    log::debug!(
        "Benchmarking {} with {} iterations (seed {})",
        precision,
        config.iterations,
        config.seed
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut non_finite = 0u64;
    let mut checksum = 0.0f64;

    let start = Instant::now();
    for _ in 0..config.iterations {
        let a = random_vector::<N>(&mut rng);
        let b = random_vector::<N>(&mut rng);
        let product = black_box(a * b);

        non_finite += product
            .to_array()
            .iter()
            .filter(|&&c| !c.is_finite())
            .count() as u64;
        checksum += product.x.to_f64().unwrap_or(f64::NAN);
    }
    let elapsed = start.elapsed();

    Ok(BenchmarkReport {
        precision,
        iterations: config.iterations,
        elapsed,
        non_finite,
        checksum,
    })
}

/// Run the benchmark for a precision chosen at runtime
pub fn run_precision(
    precision: Precision,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport, BenchmarkError> {
    match precision {
        Precision::Single => run::<f32>(precision, config),
        Precision::Double => run::<f64>(precision, config),
    }
}

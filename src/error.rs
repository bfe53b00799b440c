//! Top-level application error
//!
//! Collects the recoverable failures of the binary: loading configuration and
//! running the benchmark. The vector type itself never returns errors.

use std::fmt;

use crate::benchmark::BenchmarkError;
use crate::config::ConfigError;

/// Error type for the demonstration binary
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded or parsed
    Config(ConfigError),
    /// A benchmark run was rejected
    Benchmark(BenchmarkError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "{}", err),
            AppError::Benchmark(err) => write!(f, "Benchmark error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Benchmark(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<BenchmarkError> for AppError {
    fn from(err: BenchmarkError) -> Self {
        AppError::Benchmark(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_benchmark_error_display() {
        let err = AppError::from(BenchmarkError::NoIterations);
        let msg = format!("{}", err);
        assert!(msg.contains("Benchmark error"));
        assert!(msg.contains("at least one iteration"));
    }

    #[test]
    fn test_source_is_preserved() {
        let err = AppError::from(BenchmarkError::NoIterations);
        assert!(err.source().is_some());
    }
}

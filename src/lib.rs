//! Vector4 - generic 4-component vector demonstration
//!
//! Re-exports the [`vector4_math`] value type and adds the pieces the
//! `vector4` binary is built from: layered configuration, the startup
//! demonstration and the construct-and-multiply benchmark.

pub mod benchmark;
pub mod config;
pub mod demo;
pub mod error;

pub use vector4_math::{max, min, Scalar, Vector4, Vector4d, Vector4f};

//! 4-component vector mathematics
//!
//! This crate provides a single immutable value type, [`Vector4`], generic over
//! the floating-point kind it stores.
//!
//! ## Core Types
//!
//! - [`Scalar`] - Numeric kinds a vector can be built from (`f32`, `f64`)
//! - [`Vector4`] - 4-component vector with x, y, z, w components
//! - [`Vector4f`] / [`Vector4d`] - Single and double precision aliases

mod scalar;
mod vector4;

pub use scalar::Scalar;
pub use vector4::{max, min, Vector4, Vector4d, Vector4f};

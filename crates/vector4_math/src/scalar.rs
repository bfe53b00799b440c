//! Numeric kinds usable as vector components

use std::fmt::{Debug, Display};

use bytemuck::Pod;
use num_traits::{ConstZero, Float};

/// A floating-point kind with the arithmetic a [`Vector4`](crate::Vector4) needs.
///
/// Satisfied by `f32` and `f64`. Arithmetic, ordering and `sqrt` come from
/// [`Float`]; all of it follows the kind's native IEEE-754 behavior, so
/// nothing here intercepts NaN, infinity or division by zero.
pub trait Scalar: Float + ConstZero + Pod + Debug + Display {}

impl<T> Scalar for T where T: Float + ConstZero + Pod + Debug + Display {}

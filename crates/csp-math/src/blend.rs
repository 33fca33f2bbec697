//! Weighted linear combination of two values.

use std::ops::{Add, Mul};

/// Blend `a` and `b` as `a * (1 - alpha) + b * alpha`.
///
/// `alpha` is not clamped: values outside `[0, 1]` extrapolate along the
/// line through `a` and `b`.
pub fn blend<T>(alpha: f64, a: T, b: T) -> T
where
    T: Add<Output = T> + Mul<f64, Output = T>,
{
    a * (1.0 - alpha) + b * alpha
}

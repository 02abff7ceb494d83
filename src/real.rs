use num_traits::{Float, FloatConst};
use std::fmt::Debug;

/// Floating point type usable as interpolation factor.
///
/// Implemented for `f32` and `f64`, so every easing formula is evaluated in the precision of the
/// interpolated type.
pub trait Real: Float + FloatConst + Debug {
    /// Converts constant into this precision.
    fn literal(value: f64) -> Self;

    fn half() -> Self {
        Self::literal(0.5)
    }

    fn two() -> Self {
        Self::literal(2.0)
    }
}

impl Real for f32 {
    fn literal(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    fn literal(value: f64) -> Self {
        value
    }
}

pub mod ease;
pub mod geometry;
#[cfg(feature = "glam")]
mod glam_impls;
pub mod interpolation;
pub mod real;
pub mod utils;

pub mod prelude {
    pub use crate::{Scalar, ease::*, geometry::*, interpolation::*, real::*, utils::*};
}

/// Precision of [`geometry`] types.
///
/// Geometry is `f32` unless `scalar64` feature is enabled. Generic interpolation of `f32`, `f64`,
/// arrays and tuples does not depend on it.
#[cfg(not(feature = "scalar64"))]
pub type Scalar = f32;
#[cfg(feature = "scalar64")]
pub type Scalar = f64;

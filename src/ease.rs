use crate::{real::Real, utils::factor_iter};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Family of easing curve.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Circ,
    Expo,
}

impl Shape {
    pub const ALL: [Self; 8] = [
        Self::Linear,
        Self::Quad,
        Self::Cubic,
        Self::Quart,
        Self::Quint,
        Self::Sine,
        Self::Circ,
        Self::Expo,
    ];
}

/// Tells which end of the transition gets eased.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Accelerates from rest.
    In,
    /// Decelerates to rest.
    Out,
    /// Accelerates in first half and decelerates in second half.
    InOut,
}

impl Phase {
    pub const ALL: [Self; 3] = [Self::In, Self::Out, Self::InOut];
}

/// Easing type.
///
/// Default is [`Ease::InLinear`] which leaves factor untouched.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ease {
    #[default]
    InLinear,
    OutLinear,
    InOutLinear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InCirc,
    OutCirc,
    InOutCirc,
    InExpo,
    OutExpo,
    InOutExpo,
}

impl Ease {
    pub const ALL: [Self; 24] = [
        Self::InLinear,
        Self::OutLinear,
        Self::InOutLinear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InQuart,
        Self::OutQuart,
        Self::InOutQuart,
        Self::InQuint,
        Self::OutQuint,
        Self::InOutQuint,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
    ];

    /// Builds easing out of curve family and phase.
    pub fn new(shape: Shape, phase: Phase) -> Self {
        match (shape, phase) {
            (Shape::Linear, Phase::In) => Self::InLinear,
            (Shape::Linear, Phase::Out) => Self::OutLinear,
            (Shape::Linear, Phase::InOut) => Self::InOutLinear,
            (Shape::Quad, Phase::In) => Self::InQuad,
            (Shape::Quad, Phase::Out) => Self::OutQuad,
            (Shape::Quad, Phase::InOut) => Self::InOutQuad,
            (Shape::Cubic, Phase::In) => Self::InCubic,
            (Shape::Cubic, Phase::Out) => Self::OutCubic,
            (Shape::Cubic, Phase::InOut) => Self::InOutCubic,
            (Shape::Quart, Phase::In) => Self::InQuart,
            (Shape::Quart, Phase::Out) => Self::OutQuart,
            (Shape::Quart, Phase::InOut) => Self::InOutQuart,
            (Shape::Quint, Phase::In) => Self::InQuint,
            (Shape::Quint, Phase::Out) => Self::OutQuint,
            (Shape::Quint, Phase::InOut) => Self::InOutQuint,
            (Shape::Sine, Phase::In) => Self::InSine,
            (Shape::Sine, Phase::Out) => Self::OutSine,
            (Shape::Sine, Phase::InOut) => Self::InOutSine,
            (Shape::Circ, Phase::In) => Self::InCirc,
            (Shape::Circ, Phase::Out) => Self::OutCirc,
            (Shape::Circ, Phase::InOut) => Self::InOutCirc,
            (Shape::Expo, Phase::In) => Self::InExpo,
            (Shape::Expo, Phase::Out) => Self::OutExpo,
            (Shape::Expo, Phase::InOut) => Self::InOutExpo,
        }
    }

    /// Gets curve family of this easing.
    pub fn shape(self) -> Shape {
        match self {
            Self::InLinear | Self::OutLinear | Self::InOutLinear => Shape::Linear,
            Self::InQuad | Self::OutQuad | Self::InOutQuad => Shape::Quad,
            Self::InCubic | Self::OutCubic | Self::InOutCubic => Shape::Cubic,
            Self::InQuart | Self::OutQuart | Self::InOutQuart => Shape::Quart,
            Self::InQuint | Self::OutQuint | Self::InOutQuint => Shape::Quint,
            Self::InSine | Self::OutSine | Self::InOutSine => Shape::Sine,
            Self::InCirc | Self::OutCirc | Self::InOutCirc => Shape::Circ,
            Self::InExpo | Self::OutExpo | Self::InOutExpo => Shape::Expo,
        }
    }

    /// Gets phase of this easing.
    pub fn phase(self) -> Phase {
        match self {
            Self::InLinear
            | Self::InQuad
            | Self::InCubic
            | Self::InQuart
            | Self::InQuint
            | Self::InSine
            | Self::InCirc
            | Self::InExpo => Phase::In,
            Self::OutLinear
            | Self::OutQuad
            | Self::OutCubic
            | Self::OutQuart
            | Self::OutQuint
            | Self::OutSine
            | Self::OutCirc
            | Self::OutExpo => Phase::Out,
            Self::InOutLinear
            | Self::InOutQuad
            | Self::InOutCubic
            | Self::InOutQuart
            | Self::InOutQuint
            | Self::InOutSine
            | Self::InOutCirc
            | Self::InOutExpo => Phase::InOut,
        }
    }

    /// Remaps linear factor into eased factor.
    ///
    /// Factors outside of <0; 1> range are not clamped - formulas extrapolate, so clamp before
    /// calling if result has to stay between interpolated values.
    pub fn apply<T: Real>(self, factor: T) -> T {
        if factor < T::zero() || factor > T::one() {
            tracing::trace!(ease = ?self, ?factor, "Extrapolating easing outside of 0-1 range");
        }
        let shape = self.shape();
        match self.phase() {
            Phase::In => ease_in(shape, factor),
            Phase::Out => ease_out(shape, factor),
            Phase::InOut => ease_in_out(shape, factor),
        }
    }

    /// Samples easing at `steps + 1` uniformly spread factors.
    /// Yields tuples of: (factor, eased factor)
    pub fn samples<T: Real>(self, steps: usize) -> impl Iterator<Item = (T, T)> {
        factor_iter(steps).map(move |factor| (factor, self.apply(factor)))
    }
}

/// Square root with argument clamped to non-negative values, so rounding near domain boundary
/// never produces NaN.
fn sqrt_clamped<T: Real>(value: T) -> T {
    value.max(T::zero()).sqrt()
}

/// Power of 2 for exponential curves. Exact 0 and 1 factors are returned as is.
fn exp2_guarded<T: Real>(
    factor: T,
    exponent: impl FnOnce(T) -> T,
    shaped: impl FnOnce(T) -> T,
) -> T {
    if factor == T::zero() || factor == T::one() {
        factor
    } else {
        shaped(exponent(factor).exp2())
    }
}

fn ease_in<T: Real>(shape: Shape, t: T) -> T {
    let one = T::one();
    match shape {
        Shape::Linear => t,
        Shape::Quad => t * t,
        Shape::Cubic => t * t * t,
        Shape::Quart => t * t * t * t,
        Shape::Quint => t * t * t * t * t,
        Shape::Sine => ((t - one) * T::FRAC_PI_2()).sin() + one,
        Shape::Circ => one - sqrt_clamped(one - t * t),
        Shape::Expo => exp2_guarded(t, |t| T::literal(10.0) * (t - one), |v| v),
    }
}

fn ease_out<T: Real>(shape: Shape, t: T) -> T {
    let one = T::one();
    let d = t - one;
    match shape {
        Shape::Linear => t,
        Shape::Quad => t * (T::two() - t),
        Shape::Cubic => d * d * d + one,
        Shape::Quart => d * d * d * (one - t) + one,
        Shape::Quint => d * d * d * d * d + one,
        Shape::Sine => (t * T::FRAC_PI_2()).sin(),
        Shape::Circ => sqrt_clamped((T::two() - t) * t),
        Shape::Expo => exp2_guarded(t, expo_out_exponent::<T>, |v| one - v),
    }
}

#[cfg(not(feature = "shifted-expo-out"))]
fn expo_out_exponent<T: Real>(t: T) -> T {
    -T::literal(10.0) * t
}

#[cfg(feature = "shifted-expo-out")]
fn expo_out_exponent<T: Real>(t: T) -> T {
    T::literal(10.0) * (t - T::one())
}

fn ease_in_out<T: Real>(shape: Shape, t: T) -> T {
    let one = T::one();
    let half = T::half();
    let first_half = t < half;
    match shape {
        Shape::Linear => t,
        Shape::Quad => {
            if first_half {
                T::two() * t * t
            } else {
                T::literal(4.0) * t - T::two() * t * t - one
            }
        }
        Shape::Cubic => {
            if first_half {
                T::literal(4.0) * t * t * t
            } else {
                let d = T::two() * t - T::two();
                half * d * d * d + one
            }
        }
        Shape::Quart => {
            if first_half {
                T::literal(8.0) * t * t * t * t
            } else {
                let d = t - one;
                -T::literal(8.0) * d * d * d * d + one
            }
        }
        Shape::Quint => {
            if first_half {
                T::literal(16.0) * t * t * t * t * t
            } else {
                let d = T::two() * t - T::two();
                half * d * d * d * d * d + one
            }
        }
        Shape::Sine => half * (one - (t * T::PI()).cos()),
        Shape::Circ => {
            if first_half {
                half * (one - sqrt_clamped(one - T::literal(4.0) * t * t))
            } else {
                let a = -(T::two() * t - T::literal(3.0));
                let b = T::two() * t - one;
                half * (sqrt_clamped(a * b) + one)
            }
        }
        Shape::Expo => {
            if first_half {
                exp2_guarded(
                    t,
                    |t| T::literal(20.0) * t - T::literal(10.0),
                    |v| half * v,
                )
            } else {
                exp2_guarded(
                    t,
                    |t| -T::literal(20.0) * t + T::literal(10.0),
                    |v| one - half * v,
                )
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Easing text parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEaseError {
    #[error("unknown easing phase in `{0}`")]
    UnknownPhase(String),
    #[error("unknown easing shape in `{0}`")]
    UnknownShape(String),
}

/// Lowercase name without separators and `ease` prefix.
fn normalize_name(text: &str) -> String {
    let name = text
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect::<String>();
    match name.strip_prefix("ease") {
        Some(rest) => rest.to_owned(),
        None => name,
    }
}

fn parse_shape(name: &str) -> Option<Shape> {
    match name {
        "linear" => Some(Shape::Linear),
        "quad" | "quadratic" => Some(Shape::Quad),
        "cubic" => Some(Shape::Cubic),
        "quart" | "quartic" => Some(Shape::Quart),
        "quint" | "quintic" => Some(Shape::Quint),
        "sine" | "sin" => Some(Shape::Sine),
        "circ" | "circular" => Some(Shape::Circ),
        "expo" | "exponential" => Some(Shape::Expo),
        _ => None,
    }
}

fn parse_phase(name: &str) -> Option<Phase> {
    match name {
        "in" => Some(Phase::In),
        "out" => Some(Phase::Out),
        "inout" => Some(Phase::InOut),
        _ => None,
    }
}

impl FromStr for Shape {
    type Err = ParseEaseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_shape(&normalize_name(text))
            .ok_or_else(|| ParseEaseError::UnknownShape(text.to_owned()))
    }
}

impl FromStr for Phase {
    type Err = ParseEaseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_phase(&normalize_name(text))
            .ok_or_else(|| ParseEaseError::UnknownPhase(text.to_owned()))
    }
}

impl FromStr for Ease {
    type Err = ParseEaseError;

    /// Parses names like `InOutCubic`, `easeOutQuadratic` or `in-sine`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(text);
        if name == "linear" {
            return Ok(Self::default());
        }
        let (phase, rest) = ["inout", "in", "out"]
            .into_iter()
            .find_map(|prefix| {
                let rest = name.strip_prefix(prefix)?;
                Some((parse_phase(prefix)?, rest))
            })
            .ok_or_else(|| ParseEaseError::UnknownPhase(text.to_owned()))?;
        let shape =
            parse_shape(rest).ok_or_else(|| ParseEaseError::UnknownShape(text.to_owned()))?;
        Ok(Self::new(shape, phase))
    }
}

use crate::{ease::Ease, real::Real};

/// Interpolate trait gives an interface over blending values of the same type.
///
/// Implementors provide only [`Interpolate::blend`], which mixes two values by already eased
/// factor. Leaf types do the arithmetic, composite types call `blend` of each of their fields with
/// the same factor. Everything else is built on top of it.
pub trait Interpolate: Sized {
    /// Floating point precision of interpolation factor.
    type Factor: Real;

    /// Blends `start` and `end` by eased `factor`, where 0 gives `start` and 1 gives `end`.
    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self;

    /// Replaces this value with linear interpolation towards `end`.
    fn interpolate(&mut self, end: &Self, factor: Self::Factor) {
        self.interpolate_with(end, factor, Ease::default());
    }

    /// Replaces this value with eased interpolation towards `end`.
    fn interpolate_with(&mut self, end: &Self, factor: Self::Factor, ease: Ease) {
        *self = interpolate_with(self, end, factor, ease);
    }

    /// Returns linear interpolation between this value and `end`.
    fn interpolated(&self, end: &Self, factor: Self::Factor) -> Self {
        interpolate(self, end, factor)
    }

    /// Returns eased interpolation between this value and `end`.
    fn interpolated_with(&self, end: &Self, factor: Self::Factor, ease: Ease) -> Self {
        interpolate_with(self, end, factor, ease)
    }
}

/// Interpolates between `start` and `end` without easing.
pub fn interpolate<T>(start: &T, end: &T, factor: T::Factor) -> T
where
    T: Interpolate,
{
    interpolate_with(start, end, factor, Ease::default())
}

/// Interpolates between `start` and `end` with factor remapped by `ease`.
///
/// Factor is not clamped, values outside of <0; 1> range extrapolate past `start` or `end`.
pub fn interpolate_with<T>(start: &T, end: &T, factor: T::Factor, ease: Ease) -> T
where
    T: Interpolate,
{
    T::blend(start, end, ease.apply(factor))
}

impl Interpolate for f32 {
    type Factor = f32;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        factor * end + (1.0 - factor) * start
    }
}

impl Interpolate for f64 {
    type Factor = f64;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        factor * end + (1.0 - factor) * start
    }
}

impl<T, const N: usize> Interpolate for [T; N]
where
    T: Interpolate,
{
    type Factor = T::Factor;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        std::array::from_fn(|index| T::blend(&start[index], &end[index], factor))
    }
}

impl<A, B> Interpolate for (A, B)
where
    A: Interpolate,
    B: Interpolate<Factor = A::Factor>,
{
    type Factor = A::Factor;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        (
            A::blend(&start.0, &end.0, factor),
            B::blend(&start.1, &end.1, factor),
        )
    }
}

impl<A, B, C> Interpolate for (A, B, C)
where
    A: Interpolate,
    B: Interpolate<Factor = A::Factor>,
    C: Interpolate<Factor = A::Factor>,
{
    type Factor = A::Factor;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        (
            A::blend(&start.0, &end.0, factor),
            B::blend(&start.1, &end.1, factor),
            C::blend(&start.2, &end.2, factor),
        )
    }
}

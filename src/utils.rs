use crate::real::Real;

/// Return iterator over uniformly spread samples of `steps` in 0 to 1 range.
///
/// Zero steps yields single sample at 0.
pub fn factor_iter<T: Real>(steps: usize) -> impl Iterator<Item = T> {
    let count = T::literal(steps.max(1) as f64);
    (0..=steps).map(move |index| T::literal(index as f64) / count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_iter() {
        let samples = factor_iter::<f32>(4).collect::<Vec<_>>();
        assert_eq!(samples, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let samples = factor_iter::<f64>(0).collect::<Vec<_>>();
        assert_eq!(samples, vec![0.0]);
        assert_eq!(factor_iter::<f64>(100).last(), Some(1.0));
    }
}

use crate::{interpolation::Interpolate, Scalar};
use serde::{Deserialize, Serialize};

/// 2D point.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Scalar,
    pub y: Scalar,
}

impl Point {
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }
}

impl Interpolate for Point {
    type Factor = Scalar;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self {
            x: Scalar::blend(&start.x, &end.x, factor),
            y: Scalar::blend(&start.y, &end.y, factor),
        }
    }
}

/// 2D size.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: Scalar,
    pub height: Scalar,
}

impl Size {
    pub fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }
}

impl Interpolate for Size {
    type Factor = Scalar;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self {
            width: Scalar::blend(&start.width, &end.width, factor),
            height: Scalar::blend(&start.height, &end.height, factor),
        }
    }
}

/// 2D vector (displacement).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: Scalar,
    pub dy: Scalar,
}

impl Vector {
    pub fn new(dx: Scalar, dy: Scalar) -> Self {
        Self { dx, dy }
    }
}

impl Interpolate for Vector {
    type Factor = Scalar;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self {
            dx: Scalar::blend(&start.dx, &end.dx, factor),
            dy: Scalar::blend(&start.dy, &end.dy, factor),
        }
    }
}

/// Axis aligned rectangle made out of origin point and size.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self::from_origin_size(Point::new(x, y), Size::new(width, height))
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

impl Interpolate for Rect {
    type Factor = Scalar;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self {
            origin: Point::blend(&start.origin, &end.origin, factor),
            size: Size::blend(&start.size, &end.size, factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ease::Ease, interpolation::interpolate_with, utils::factor_iter};

    #[test]
    fn test_point_interpolation() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(10.0, 10.0);
        assert_eq!(
            interpolate_with(&start, &end, 0.25, Ease::InLinear),
            Point::new(2.5, 2.5)
        );
        assert_eq!(start.interpolated(&end, 1.0), end);
        assert_eq!(start.interpolated(&end, 0.0), start);
    }

    #[test]
    fn test_rect_delegation() {
        let start = Rect::new(-5.0, 2.0, 10.0, 4.0);
        let end = Rect::new(15.0, -8.0, 30.0, 1.0);
        for ease in Ease::ALL {
            for factor in factor_iter::<Scalar>(20) {
                let result = interpolate_with(&start, &end, factor, ease);
                let expected = Rect::from_origin_size(
                    interpolate_with(&start.origin, &end.origin, factor, ease),
                    interpolate_with(&start.size, &end.size, factor, ease),
                );
                assert_eq!(result, expected);
                assert_eq!(
                    result.origin.x,
                    interpolate_with(&start.origin.x, &end.origin.x, factor, ease)
                );
                assert_eq!(
                    result.size.height,
                    interpolate_with(&start.size.height, &end.size.height, factor, ease)
                );
            }
        }
    }

    #[test]
    fn test_vector_and_size_interpolation() {
        let mut vector = Vector::new(1.0, -1.0);
        vector.interpolate_with(&Vector::new(3.0, 1.0), 0.5, Ease::InOutCubic);
        assert_eq!(vector, Vector::new(2.0, 0.0));

        let size = Size::new(4.0, 8.0);
        assert_eq!(size.interpolated(&size, 0.75), size);
    }

    #[test]
    fn test_geometry_serde() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let text = serde_json::to_string(&rect).unwrap();
        let result: Rect = serde_json::from_str(&text).unwrap();
        assert_eq!(result, rect);
    }
}

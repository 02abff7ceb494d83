use crate::interpolation::Interpolate;
use glam::{DVec2, DVec3, DVec4, Vec2, Vec3, Vec4};

impl Interpolate for Vec2 {
    type Factor = f32;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self::new(
            f32::blend(&start.x, &end.x, factor),
            f32::blend(&start.y, &end.y, factor),
        )
    }
}

impl Interpolate for Vec3 {
    type Factor = f32;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self::new(
            f32::blend(&start.x, &end.x, factor),
            f32::blend(&start.y, &end.y, factor),
            f32::blend(&start.z, &end.z, factor),
        )
    }
}

impl Interpolate for Vec4 {
    type Factor = f32;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self::new(
            f32::blend(&start.x, &end.x, factor),
            f32::blend(&start.y, &end.y, factor),
            f32::blend(&start.z, &end.z, factor),
            f32::blend(&start.w, &end.w, factor),
        )
    }
}

impl Interpolate for DVec2 {
    type Factor = f64;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self::new(
            f64::blend(&start.x, &end.x, factor),
            f64::blend(&start.y, &end.y, factor),
        )
    }
}

impl Interpolate for DVec3 {
    type Factor = f64;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self::new(
            f64::blend(&start.x, &end.x, factor),
            f64::blend(&start.y, &end.y, factor),
            f64::blend(&start.z, &end.z, factor),
        )
    }
}

impl Interpolate for DVec4 {
    type Factor = f64;

    fn blend(start: &Self, end: &Self, factor: Self::Factor) -> Self {
        Self::new(
            f64::blend(&start.x, &end.x, factor),
            f64::blend(&start.y, &end.y, factor),
            f64::blend(&start.z, &end.z, factor),
            f64::blend(&start.w, &end.w, factor),
        )
    }
}

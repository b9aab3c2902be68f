use core::ops::{Add, Mul, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Vec2::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_offsets_add_to_a_center() {
        let center = Vec2::new(300.0, 300.0);
        assert_eq!(center + (0.0, -160.0).into(), Vec2::new(300.0, 140.0));
    }

    #[test]
    fn length_of_a_3_4_vector() {
        assert_eq!(Vec2::new(3.0, -4.0).length(), 5.0);
        assert_eq!((Vec2::new(1.0, 1.0) - Vec2::new(1.0, 1.0)) * 2.0, Vec2::zero());
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
        assert!(Vec2::new(1800.0, 700.0).is_finite());
    }
}

use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use nalgebra::Vector3;

#[derive(Copy, Clone, PartialEq)]
pub struct Vec3(pub Vector3<f32>);

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3(Vector3::new(x, y, z))
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }
}

impl Vec3 {
    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0.x
    }
    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.0.y
    }
    #[inline(always)]
    pub fn z(&self) -> f32 {
        self.0.z
    }
    pub fn as_array(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }

    pub fn norm(&self) -> f32 {
        self.0.norm()
    }

    pub fn normalized(&self) -> Self {
        Vec3(self.0 / self.norm())
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::ZERO
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

// dot product
impl Mul for Vec3 {
    type Output = f32;
    fn mul(self, other: Vec3) -> f32 {
        self.0.dot(&other.0)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3(self.0 * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3(other.0 * self)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3(self.0 / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3(self.0 + other.0)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3(-self.0)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dot_and_norm() {
        let a = Vec3::new(1.0, 2.0, 2.0);
        assert!(a * a == 9.0);
        assert!(a.norm() == 3.0, "{:?}", a);
        let n = a.normalized();
        assert!((n.norm() - 1.0).abs() < 0.000001, "{:?}", n);
        assert!(Vec3::X * Vec3::Y == 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, -1.0, 0.5);
        let b = Vec3::new(0.0, 2.0, 1.5);
        assert_eq!(a + b, Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(a - b, Vec3::new(1.0, -3.0, -1.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vec3::new(-1.0, 1.0, -0.5));
        assert_eq!((a * 4.0) / 4.0, a);
    }
}

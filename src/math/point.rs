use std::{
    fmt,
    ops::{Add, Sub},
};

use nalgebra::Vector3;

use super::Vec3;

#[derive(Copy, Clone, PartialEq)]
pub struct Point3(pub nalgebra::Point3<f32>);

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3(nalgebra::OPoint {
            coords: Vector3::new(x, y, z),
        })
    }
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }
}

impl Point3 {
    pub fn x(&self) -> f32 {
        self.0.x
    }
    pub fn y(&self) -> f32 {
        self.0.y
    }
    pub fn z(&self) -> f32 {
        self.0.z
    }
    pub fn as_array(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Point3::ORIGIN
    }
}

impl fmt::Debug for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, other: Vec3) -> Point3 {
        Point3(self.0 + other.0)
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, other: Point3) -> Vec3 {
        Vec3(self.0 - other.0)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(other: [f32; 3]) -> Point3 {
        Point3::new(other[0], other[1], other[2])
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Point3 {
        Point3::ORIGIN + v
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3(p.0.coords)
    }
}

use crate::geometry::{IntersectionData, Primitive};
use crate::math::{Color, Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub color: Color,
    // None disables the highlight entirely
    pub specular: Option<f32>,
    pub reflective: f32,
}

impl Sphere {
    pub fn new(
        center: Point3,
        radius: f32,
        color: Color,
        specular: Option<f32>,
        reflective: f32,
    ) -> Sphere {
        Sphere {
            center,
            radius,
            color,
            specular,
            reflective,
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        (point - self.center).normalized()
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray) -> IntersectionData {
        let co: Vec3 = r.origin - self.center;
        let a = r.direction * r.direction;
        let b = 2.0 * (co * r.direction);
        let c = co * co - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return IntersectionData::MISS;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let t1 = (-b + discriminant_sqrt) / (2.0 * a);
        let t2 = (-b - discriminant_sqrt) / (2.0 * a);
        IntersectionData::new(t1, t2)
    }
}

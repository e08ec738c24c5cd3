use crate::math::Ray;

mod sphere;

pub use sphere::Sphere;

/// Both roots of a ray-primitive quadratic. When `is_intersecting` is false the roots hold the
/// `NO_HIT_TIME` sentinel and must not be read as distances.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionData {
    pub is_intersecting: bool,
    pub times: (f32, f32),
}

impl IntersectionData {
    pub const NO_HIT_TIME: f32 = -1.0;
    pub const MISS: IntersectionData = IntersectionData {
        is_intersecting: false,
        times: (Self::NO_HIT_TIME, Self::NO_HIT_TIME),
    };

    pub fn new(t1: f32, t2: f32) -> Self {
        IntersectionData {
            is_intersecting: true,
            times: (t1, t2),
        }
    }
}

pub trait Primitive {
    fn intersect(&self, r: Ray) -> IntersectionData;
}

#[derive(Copy, Clone, Debug)]
pub struct NearestHit<'a> {
    pub sphere: &'a Sphere,
    pub time: f32,
}

/// Finds the smallest root strictly inside `(t0, t1)` over every sphere. Exact ties keep the
/// sphere that appears first in `spheres`.
pub fn nearest_hit(spheres: &[Sphere], t0: f32, t1: f32, r: Ray) -> Option<NearestHit<'_>> {
    let mut nearest: Option<NearestHit> = None;
    let mut nearest_time = f32::INFINITY;

    for sphere in spheres {
        let isect = sphere.intersect(r);
        if !isect.is_intersecting {
            continue;
        }
        for time in [isect.times.0, isect.times.1] {
            if time > t0 && time < t1 && time < nearest_time {
                nearest_time = time;
                nearest = Some(NearestHit { sphere, time });
            }
        }
    }
    nearest
}

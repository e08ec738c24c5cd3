use crate::geometry::Sphere;
use crate::light::Light;
use crate::math::{Color, Point3, Vec3};

pub const DEFAULT_BACKGROUND: Color = Color::new(24, 1, 97);

/// Everything a frame is traced against. Shared read-only between render threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub background: Color,
    pub eye: Point3,
}

impl Scene {
    pub fn empty() -> Self {
        Scene {
            spheres: Vec::new(),
            lights: Vec::new(),
            background: DEFAULT_BACKGROUND,
            eye: Point3::ORIGIN,
        }
    }
}

impl Default for Scene {
    /// Three small spheres resting over a huge yellow "floor" sphere, lit by ambient, point and
    /// directional light.
    fn default() -> Self {
        let spheres = vec![
            Sphere::new(
                Point3::new(0.0, -1.0, 3.0),
                1.0,
                Color::new(230, 41, 55),
                Some(500.0),
                0.2,
            ),
            Sphere::new(
                Point3::new(2.0, 0.0, 4.0),
                1.0,
                Color::new(0, 121, 241),
                Some(500.0),
                0.3,
            ),
            Sphere::new(
                Point3::new(-2.0, 0.0, 4.0),
                1.0,
                Color::new(0, 228, 48),
                Some(10.0),
                0.4,
            ),
            Sphere::new(
                Point3::new(0.0, -5001.0, 0.0),
                5000.0,
                Color::new(253, 249, 0),
                Some(1000.0),
                0.5,
            ),
        ];
        let lights = vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Point3::new(2.0, 1.0, 0.0),
            },
            Light::Directional {
                intensity: 0.2,
                direction: Vec3::new(1.0, 4.0, 4.0),
            },
        ];
        Scene {
            spheres,
            lights,
            ..Scene::empty()
        }
    }
}

use crate::geometry::{nearest_hit, Sphere};
use crate::math::{reflect, Point3, Ray, Vec3};

/// Lower bound for shadow rays, keeps a surface from shadowing itself.
pub const SHADOW_T_MIN: f32 = 0.001;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    Ambient { intensity: f32 },
    Point { intensity: f32, position: Point3 },
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => *intensity,
        }
    }

    /// Vector from `point` towards the light, or None for ambient light.
    ///
    /// A directional light's vector is `direction + point`, so its shadow ray is cast the same
    /// way as a point light's rather than along a constant direction.
    pub fn vector_from(&self, point: Point3) -> Option<Vec3> {
        match *self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => Some(position - point),
            Light::Directional { direction, .. } => Some(direction + Vec3::from(point)),
        }
    }
}

/// Total light intensity arriving at `point`, as a non-negative brightness factor.
///
/// `normal` must be unit length. `specular` of None skips the highlight term. Lights whose
/// vector has zero length, and highlight terms with a zero-length reflection or view vector,
/// contribute nothing.
pub fn compute_light(
    spheres: &[Sphere],
    lights: &[Light],
    tmax: f32,
    point: Point3,
    normal: Vec3,
    view: Vec3,
    specular: Option<f32>,
) -> f32 {
    debug_assert!(
        (normal.norm() - 1.0).abs() < 0.0001,
        "normal is not unit length: {:?}",
        normal
    );
    let mut intensity = 0.0;
    for light in lights {
        let light_vector = match light.vector_from(point) {
            None => {
                intensity += light.intensity();
                continue;
            }
            Some(l) => l,
        };
        let light_norm = light_vector.norm();
        if light_norm == 0.0 {
            continue;
        }

        // shadow
        let shadow_ray = Ray::new(point, light_vector);
        if nearest_hit(spheres, SHADOW_T_MIN, tmax, shadow_ray).is_some() {
            continue;
        }

        // diffuse
        let n_dot_l = normal * light_vector;
        if n_dot_l > 0.0 {
            intensity += light.intensity() * n_dot_l / (normal.norm() * light_norm);
        }

        // specular
        if let Some(exponent) = specular {
            let reflection = reflect(light_vector, normal);
            let r_dot_v = reflection * view;
            let denominator = reflection.norm() * view.norm();
            if r_dot_v > 0.0 && denominator > 0.0 {
                intensity += light.intensity() * (r_dot_v / denominator).powf(exponent);
            }
        }
    }
    intensity
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Color;

    const UP: Vec3 = Vec3::Y;

    fn matte(center: Point3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Color::WHITE, None, 0.0)
    }

    #[test]
    fn test_ambient_only() {
        let lights = vec![
            Light::Ambient { intensity: 0.2 },
            Light::Ambient { intensity: 0.3 },
        ];
        let i = compute_light(
            &[],
            &lights,
            f32::INFINITY,
            Point3::ORIGIN,
            UP,
            UP,
            Some(100.0),
        );
        assert!((i - 0.5).abs() < 0.000001, "{}", i);
    }

    #[test]
    fn test_point_light_diffuse_falloff() {
        let overhead = vec![Light::Point {
            intensity: 0.6,
            position: Point3::new(0.0, 5.0, 0.0),
        }];
        let i = compute_light(&[], &overhead, f32::INFINITY, Point3::ORIGIN, UP, UP, None);
        assert!((i - 0.6).abs() < 0.000001, "{}", i);

        let angled = vec![Light::Point {
            intensity: 1.0,
            position: Point3::new(1.0, 1.0, 0.0),
        }];
        let i = compute_light(&[], &angled, f32::INFINITY, Point3::ORIGIN, UP, UP, None);
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((i - expected).abs() < 0.00001, "{}", i);
    }

    #[test]
    fn test_light_behind_surface_adds_nothing() {
        let lights = vec![Light::Point {
            intensity: 1.0,
            position: Point3::new(0.0, -5.0, 0.0),
        }];
        let i = compute_light(&[], &lights, f32::INFINITY, Point3::ORIGIN, UP, UP, None);
        assert_eq!(i, 0.0);
    }

    #[test]
    fn test_occluded_light_is_skipped() {
        let blocker = vec![matte(Point3::new(0.0, 2.5, 0.0), 1.0)];
        let lights = vec![
            Light::Ambient { intensity: 0.1 },
            Light::Point {
                intensity: 0.9,
                position: Point3::new(0.0, 5.0, 0.0),
            },
        ];
        let i = compute_light(
            &blocker,
            &lights,
            f32::INFINITY,
            Point3::ORIGIN,
            UP,
            UP,
            Some(10.0),
        );
        assert!((i - 0.1).abs() < 0.000001, "{}", i);
    }

    #[test]
    fn test_shaded_sphere_does_not_shadow_itself() {
        // point sits on the top of the sphere it belongs to
        let spheres = vec![matte(Point3::new(0.0, -1.0, 0.0), 1.0)];
        let lights = vec![Light::Point {
            intensity: 1.0,
            position: Point3::new(0.0, 5.0, 0.0),
        }];
        let i = compute_light(
            &spheres,
            &lights,
            f32::INFINITY,
            Point3::ORIGIN,
            UP,
            UP,
            None,
        );
        assert!((i - 1.0).abs() < 0.000001, "{}", i);
    }

    #[test]
    fn test_specular_highlight() {
        let lights = vec![Light::Point {
            intensity: 0.5,
            position: Point3::new(0.0, 5.0, 0.0),
        }];
        // viewer straight along the mirror direction: full diffuse plus full highlight
        let i = compute_light(&[], &lights, f32::INFINITY, Point3::ORIGIN, UP, UP, Some(50.0));
        assert!((i - 1.0).abs() < 0.00001, "{}", i);

        // viewer off the mirror direction: highlight falls off with the exponent
        let view = Vec3::new(1.0, 1.0, 0.0);
        let i = compute_light(&[], &lights, f32::INFINITY, Point3::ORIGIN, UP, view, Some(2.0));
        assert!((i - 0.75).abs() < 0.00001, "{}", i);
    }

    #[test]
    fn test_no_specular_sentinel() {
        let lights = vec![Light::Point {
            intensity: 0.5,
            position: Point3::new(0.0, 5.0, 0.0),
        }];
        let i = compute_light(&[], &lights, f32::INFINITY, Point3::ORIGIN, UP, UP, None);
        assert!((i - 0.5).abs() < 0.00001, "{}", i);
    }

    #[test]
    fn test_directional_offsets_by_point() {
        let light = Light::Directional {
            intensity: 0.2,
            direction: Vec3::new(1.0, 4.0, 4.0),
        };
        let l = light.vector_from(Point3::new(1.0, 0.0, -1.0)).unwrap();
        assert_eq!(l, Vec3::new(2.0, 4.0, 3.0));
        assert!(Light::Ambient { intensity: 1.0 }
            .vector_from(Point3::ORIGIN)
            .is_none());
    }

    #[test]
    fn test_directional_diffuse_away_from_origin() {
        // L = (0, 4, 0) + (1, 0, 0), so n.L / |L| = 4 / sqrt(17) rather than 1
        let lights = vec![Light::Directional {
            intensity: 1.0,
            direction: Vec3::new(0.0, 4.0, 0.0),
        }];
        let point = Point3::new(1.0, 0.0, 0.0);
        let i = compute_light(&[], &lights, f32::INFINITY, point, UP, UP, None);
        let expected = 4.0 / 17.0f32.sqrt();
        assert!((i - expected).abs() < 0.00001, "{}", i);
    }

    #[test]
    fn test_directional_light_is_shadowed_along_offset_vector() {
        // blocker centered at point + 0.5 * L, clear of the straight-up direction
        let blocker = vec![matte(Point3::new(1.5, 2.0, 0.0), 0.5)];
        let lights = vec![
            Light::Ambient { intensity: 0.1 },
            Light::Directional {
                intensity: 1.0,
                direction: Vec3::new(0.0, 4.0, 0.0),
            },
        ];
        let point = Point3::new(1.0, 0.0, 0.0);
        let i = compute_light(&blocker, &lights, f32::INFINITY, point, UP, UP, None);
        assert!((i - 0.1).abs() < 0.000001, "{}", i);
    }

    #[test]
    #[should_panic(expected = "normal is not unit length")]
    fn test_non_unit_normal_panics() {
        let lights = vec![Light::Ambient { intensity: 1.0 }];
        compute_light(
            &[],
            &lights,
            f32::INFINITY,
            Point3::ORIGIN,
            Vec3::new(0.0, 2.0, 0.0),
            UP,
            None,
        );
    }

    #[test]
    fn test_coincident_point_light_is_finite() {
        let lights = vec![Light::Point {
            intensity: 1.0,
            position: Point3::ORIGIN,
        }];
        let i = compute_light(
            &[],
            &lights,
            f32::INFINITY,
            Point3::ORIGIN,
            UP,
            UP,
            Some(10.0),
        );
        assert_eq!(i, 0.0);
    }

    #[test]
    fn test_zero_view_vector_is_finite() {
        let lights = vec![Light::Point {
            intensity: 1.0,
            position: Point3::new(0.0, 5.0, 0.0),
        }];
        let i = compute_light(
            &[],
            &lights,
            f32::INFINITY,
            Point3::ORIGIN,
            UP,
            Vec3::ZERO,
            Some(10.0),
        );
        assert!(i.is_finite());
        assert!((i - 1.0).abs() < 0.000001, "{}", i);
    }
}

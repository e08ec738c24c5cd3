use crate::geometry::nearest_hit;
use crate::light::compute_light;
use crate::math::{add_colors, reflect, scale_color, Color, Ray};
use crate::scene::Scene;

/// Reflectivity below this is treated as a non-reflective surface.
pub const REFLECTIVE_EPSILON: f32 = 0.000001;
/// Lower bound for reflected rays, keeps a bounce from re-hitting its own surface.
pub const REFLECTION_T_MIN: f32 = 0.01;

/// Color seen along `r`, counting up to `depth` mirror bounces.
///
/// Hits are only accepted strictly inside `(tmin, tmax)`. A miss yields the scene background.
pub fn trace_ray(scene: &Scene, r: Ray, tmin: f32, tmax: f32, depth: u32) -> Color {
    let hit = match nearest_hit(&scene.spheres, tmin, tmax, r) {
        Some(hit) => hit,
        None => return scene.background,
    };
    let sphere = hit.sphere;

    let point = r.point_at_parameter(hit.time);
    let normal = sphere.normal_at(point);
    let view = scene.eye - point;

    let intensity = compute_light(
        &scene.spheres,
        &scene.lights,
        tmax,
        point,
        normal,
        view,
        sphere.specular,
    );
    let local_color = scale_color(sphere.color, intensity);

    let reflective = sphere.reflective;
    if reflective < REFLECTIVE_EPSILON || depth == 0 {
        return local_color;
    }

    let bounce = Ray::new(point, reflect(-r.direction, normal));
    let reflected_color = trace_ray(scene, bounce, REFLECTION_T_MIN, tmax, depth - 1);

    add_colors(
        scale_color(local_color, 1.0 - reflective),
        scale_color(reflected_color, reflective),
    )
}

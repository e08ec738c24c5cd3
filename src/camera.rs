use crate::math::{Point3, Ray, Vec3};

/// The projection plane: `width` by `height` world units, `distance` in front of the eye
/// along +z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub distance: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

impl Viewport {
    /// Maps canvas coordinates (origin at the image center, y up) onto the viewport plane.
    pub fn pixel_to_view_ray(
        &self,
        pixel_x: i32,
        pixel_y: i32,
        screen_width: usize,
        screen_height: usize,
    ) -> Vec3 {
        Vec3::new(
            pixel_x as f32 * (self.width / screen_width as f32),
            pixel_y as f32 * (self.height / screen_height as f32),
            self.distance,
        )
    }

    pub fn get_ray(
        &self,
        eye: Point3,
        pixel: (i32, i32),
        screen_width: usize,
        screen_height: usize,
    ) -> Ray {
        let view_point = self.pixel_to_view_ray(pixel.0, pixel.1, screen_width, screen_height);
        Ray::new(eye, view_point - Vec3::from(eye))
    }
}

/// Reference mapping with a 1x1 viewport at distance 1.
pub fn pixel_to_view_ray(
    pixel_x: i32,
    pixel_y: i32,
    screen_width: usize,
    screen_height: usize,
) -> Vec3 {
    Viewport::default().pixel_to_view_ray(pixel_x, pixel_y, screen_width, screen_height)
}

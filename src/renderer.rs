use std::{io::Stdout, sync::Mutex};

use pbr::ProgressBar;
use rayon::prelude::*;

use crate::camera::Viewport;
use crate::film::{index_to_canvas, Film};
use crate::math::Color;
use crate::scene::Scene;
use crate::tracer::trace_ray;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub depth: u32,
    pub tmin: f32,
    pub tmax: f32,
    pub viewport: Viewport,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            depth: 3,
            tmin: 1.0,
            tmax: f32::INFINITY,
            viewport: Viewport::default(),
        }
    }
}

/// Color of a single pixel, in canvas coordinates. Pure, so it can be called from any thread.
pub fn render_pixel(
    scene: &Scene,
    settings: &RenderSettings,
    pixel: (i32, i32),
    width: usize,
    height: usize,
) -> Color {
    let ray = settings.viewport.get_ray(scene.eye, pixel, width, height);
    trace_ray(scene, ray, settings.tmin, settings.tmax, settings.depth)
}

/// Traces every pixel of `film`. Each worker owns a distinct buffer cell.
pub fn render(scene: &Scene, settings: &RenderSettings, film: &mut Film<Color>) {
    let (width, height) = (film.width, film.height);
    if width == 0 || height == 0 {
        return;
    }
    film.buffer.par_iter_mut().enumerate().for_each(|(i, e)| {
        let pixel = index_to_canvas(i, width, height);
        *e = render_pixel(scene, settings, pixel, width, height);
    });
}

/// Same as `render`, but row by row with a progress bar on stdout.
pub fn render_with_progress(scene: &Scene, settings: &RenderSettings, film: &mut Film<Color>) {
    let (width, height) = (film.width, film.height);
    if width == 0 || height == 0 {
        return;
    }
    let mut pb: ProgressBar<Stdout> = ProgressBar::new(height as u64);
    pb.message("rows ");
    let pb = Mutex::new(pb);

    film.buffer
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, e) in row.iter_mut().enumerate() {
                let pixel = index_to_canvas(y * width + x, width, height);
                *e = render_pixel(scene, settings, pixel, width, height);
            }
            if let Ok(mut pb) = pb.lock() {
                pb.inc();
            }
        });

    if let Ok(mut pb) = pb.into_inner() {
        pb.finish_print("done");
    }
}

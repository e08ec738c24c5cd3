use std::{error::Error, path::Path};

use crate::math::Color;

/// Canvas coordinates of the buffer cell at `index` on a `width` by `height` film.
pub fn index_to_canvas(index: usize, width: usize, height: usize) -> (i32, i32) {
    let x = (index % width) as i32;
    let y = (index / width) as i32;
    (x - (width / 2) as i32, (height / 2) as i32 - y)
}

/// Row-major pixel buffer, `(0, 0)` at the top left.
#[derive(Clone, Debug)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize, fill_value: T) {
        self.buffer.clear();
        self.buffer.resize(width * height, fill_value);
        self.width = width;
        self.height = height;
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        debug_assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside a {}x{} film",
            x,
            y,
            self.width,
            self.height
        );
        self.buffer[y * self.width + x]
    }

    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside a {}x{} film",
            x,
            y,
            self.width,
            self.height
        );
        self.buffer[y * self.width + x] = value;
    }

    /// Screen position of canvas coordinates (origin at the center, y up), if it lies on the
    /// film.
    pub fn canvas_to_screen(&self, canvas_x: i32, canvas_y: i32) -> Option<(usize, usize)> {
        let x = (self.width / 2) as i64 + canvas_x as i64;
        let y = (self.height / 2) as i64 - canvas_y as i64;
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Inverse of `canvas_to_screen` for a buffer index.
    pub fn index_to_canvas(&self, index: usize) -> (i32, i32) {
        index_to_canvas(index, self.width, self.height)
    }

    /// Writes through canvas coordinates. Returns false and leaves the film untouched when the
    /// coordinates fall outside it.
    pub fn put_canvas_pixel(&mut self, canvas_x: i32, canvas_y: i32, value: T) -> bool {
        match self.canvas_to_screen(canvas_x, canvas_y) {
            Some((x, y)) => {
                self.write_at(x, y, value);
                true
            }
            None => false,
        }
    }
}

impl Film<Color> {
    /// Packs the film into `dst` in the `0x00RRGGBB` layout, reallocating as needed.
    pub fn pack_into(&self, dst: &mut Vec<u32>) {
        dst.clear();
        dst.extend(self.buffer.iter().map(|c| c.to_u32()));
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.at(x as usize, y as usize).into()
        })
    }

    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

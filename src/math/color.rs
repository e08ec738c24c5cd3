use serde::{Deserialize, Serialize};

/// 8-bit RGBA color. Every constructor and combinator clamps, so channels never leave `[0, 255]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Packs into the `0x00RRGGBB` layout minifb expects.
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

// float to channel conversion truncates toward zero after clamping, NaN maps to 0
fn clamp_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

pub fn scale_color(color: Color, factor: f32) -> Color {
    Color::new(
        clamp_channel(color.r as f32 * factor),
        clamp_channel(color.g as f32 * factor),
        clamp_channel(color.b as f32 * factor),
    )
}

pub fn add_colors(a: Color, b: Color) -> Color {
    Color::new(
        clamp_channel(a.r as f32 + b.r as f32),
        clamp_channel(a.g as f32 + b.g as f32),
        clamp_channel(a.b as f32 + b.b as f32),
    )
}

use serde::{Deserialize, Serialize};

use super::SceneError;
use crate::{
    geometry::Sphere,
    math::{Color, Point3},
};

/// Specular exponent meaning "no highlight" in scene files.
pub const NO_SPECULAR: f32 = -1.0;

fn no_specular() -> f32 {
    NO_SPECULAR
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereData {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: Color,
    #[serde(default = "no_specular")]
    pub specular: f32,
    #[serde(default)]
    pub reflective: f32,
}

impl SphereData {
    pub fn transform(self, index: usize) -> Result<Sphere, SceneError> {
        let center = Point3::from(self.center);
        if !center.is_finite() {
            return Err(SceneError::NonFinite {
                what: format!("sphere {} center", index),
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                index,
                radius: self.radius,
            });
        }
        let specular = if self.specular == NO_SPECULAR {
            None
        } else if self.specular.is_finite() && self.specular > 0.0 {
            Some(self.specular)
        } else {
            return Err(SceneError::InvalidSpecular {
                index,
                specular: self.specular,
            });
        };
        if !(0.0..=1.0).contains(&self.reflective) {
            return Err(SceneError::InvalidReflective {
                index,
                reflective: self.reflective,
            });
        }
        Ok(Sphere::new(
            center,
            self.radius,
            self.color,
            specular,
            self.reflective,
        ))
    }
}

impl From<&Sphere> for SphereData {
    fn from(sphere: &Sphere) -> Self {
        SphereData {
            center: sphere.center.as_array(),
            radius: sphere.radius,
            color: sphere.color,
            specular: sphere.specular.unwrap_or(NO_SPECULAR),
            reflective: sphere.reflective,
        }
    }
}

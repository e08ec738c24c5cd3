use serde::{Deserialize, Serialize};

use super::SceneError;
use crate::{
    light::Light,
    math::{Point3, Vec3},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LightData {
    Ambient { intensity: f32 },
    Point { intensity: f32, position: [f32; 3] },
    Directional { intensity: f32, direction: [f32; 3] },
}

impl LightData {
    pub fn transform(self, index: usize) -> Result<Light, SceneError> {
        let light = match self {
            Self::Ambient { intensity } => Light::Ambient { intensity },
            Self::Point {
                intensity,
                position,
            } => {
                let position = Point3::from(position);
                if !position.is_finite() {
                    return Err(SceneError::NonFinite {
                        what: format!("light {} position", index),
                    });
                }
                Light::Point {
                    intensity,
                    position,
                }
            }
            Self::Directional {
                intensity,
                direction,
            } => {
                let direction = Vec3::from(direction);
                if !direction.is_finite() {
                    return Err(SceneError::NonFinite {
                        what: format!("light {} direction", index),
                    });
                }
                Light::Directional {
                    intensity,
                    direction,
                }
            }
        };
        let intensity = light.intensity();
        if !(intensity.is_finite() && intensity >= 0.0) {
            return Err(SceneError::InvalidIntensity { index, intensity });
        }
        Ok(light)
    }
}

impl From<&Light> for LightData {
    fn from(light: &Light) -> Self {
        match *light {
            Light::Ambient { intensity } => LightData::Ambient { intensity },
            Light::Point {
                intensity,
                position,
            } => LightData::Point {
                intensity,
                position: position.as_array(),
            },
            Light::Directional {
                intensity,
                direction,
            } => LightData::Directional {
                intensity,
                direction: direction.as_array(),
            },
        }
    }
}

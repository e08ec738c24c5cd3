mod lights;
mod primitives;

use std::{error::Error, fs::File, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use lights::*;
pub use primitives::*;

use crate::{
    math::{Color, Point3},
    scene::{Scene, DEFAULT_BACKGROUND},
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("sphere {index}: radius must be finite and positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },
    #[error("sphere {index}: specular exponent must be -1 or positive, got {specular}")]
    InvalidSpecular { index: usize, specular: f32 },
    #[error("sphere {index}: reflective must be within [0, 1], got {reflective}")]
    InvalidReflective { index: usize, reflective: f32 },
    #[error("light {index}: intensity must be finite and non-negative, got {intensity}")]
    InvalidIntensity { index: usize, intensity: f32 },
    #[error("{what} is not finite")]
    NonFinite { what: String },
}

fn default_background() -> Color {
    DEFAULT_BACKGROUND
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub eye: [f32; 3],
    pub spheres: Vec<SphereData>,
    pub lights: Vec<LightData>,
}

impl TryFrom<SceneData> for Scene {
    type Error = SceneError;
    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        let eye = Point3::from(data.eye);
        if !eye.is_finite() {
            return Err(SceneError::NonFinite {
                what: String::from("eye"),
            });
        }
        let spheres = data
            .spheres
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.transform(i))
            .collect::<Result<Vec<_>, _>>()?;
        let lights = data
            .lights
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.transform(i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            spheres,
            lights,
            background: data.background,
            eye,
        })
    }
}

impl From<&Scene> for SceneData {
    fn from(scene: &Scene) -> Self {
        SceneData {
            background: scene.background,
            eye: scene.eye.as_array(),
            spheres: scene.spheres.iter().map(SphereData::from).collect(),
            lights: scene.lights.iter().map(LightData::from).collect(),
        }
    }
}

pub fn load_json<T, P>(path: P) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut input = String::new();
    File::open(path)?.read_to_string(&mut input)?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, Box<dyn Error>> {
    let data: SceneData = load_json(path)?;
    Ok(Scene::try_from(data)?)
}

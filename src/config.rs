use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::vector::Vec3;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config -> {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config -> {0}")]
    Json(#[from] serde_json::Error),

    #[error("image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("sphere radius must be positive and finite, got {0}")]
    Radius(f64),

    #[error("scene bounds are empty or not finite: min {min:?} max {max:?}")]
    Bounds { min: [f64; 3], max: [f64; 3] },
}

/// Everything needed to build and render a scene.
///
/// Every field is optional in JSON; missing ones take the defaults below.
/// Keys are accepted in snake_case or camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    #[serde(alias = "sphereCount")]
    pub sphere_count: usize,
    #[serde(alias = "sphereRadius")]
    pub sphere_radius: f64,
    #[serde(alias = "sphereColour")]
    pub sphere_colour: [f64; 3],
    #[serde(alias = "cameraPosition")]
    pub camera_position: [f64; 3],
    #[serde(alias = "lightPosition")]
    pub light_position: [f64; 3],
    /// Sphere centres are drawn uniformly from `bounds_min..bounds_max`.
    #[serde(alias = "boundsMin")]
    pub bounds_min: [f64; 3],
    #[serde(alias = "boundsMax")]
    pub bounds_max: [f64; 3],
    /// `None` seeds from the operating system.
    #[serde(alias = "randomSeed")]
    pub random_seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            sphere_count: 5000,
            sphere_radius: 5.0,
            sphere_colour: [1.0, 0.0, 0.0],
            camera_position: [0.0, 0.0, -50.0],
            light_position: [300.0, -40.0, -200.0],
            bounds_min: [-35.0, -20.0, 20.0],
            bounds_max: [35.0, 20.0, 60.0],
            random_seed: None,
        }
    }
}

impl RenderConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.sphere_radius.is_finite() && self.sphere_radius > 0.0) {
            return Err(ConfigError::Radius(self.sphere_radius));
        }
        // uniform sampling needs a non-empty range of finite width on every axis
        if self.sphere_count > 0
            && self
                .bounds_min
                .iter()
                .zip(self.bounds_max.iter())
                .any(|(&lo, &hi)| !(lo < hi && (hi - lo).is_finite()))
        {
            return Err(ConfigError::Bounds {
                min: self.bounds_min,
                max: self.bounds_max,
            });
        }
        Ok(())
    }

    pub fn sphere_colour(&self) -> Vec3 {
        Vec3::from(self.sphere_colour)
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::from(self.camera_position)
    }

    pub fn light_position(&self) -> Vec3 {
        Vec3::from(self.light_position)
    }
}

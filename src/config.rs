//! Per-scene configuration.
//!
//! Every scene starts from a preset that reproduces its hard-coded window and
//! world parameters. A JSON file may override any subset of the fields:
//!
//! ```
//! use physics_demos::config::DemoConfig;
//!
//! let mut config = DemoConfig::bouncing_basketballs();
//! config.apply_overrides_json(r#"{ "gravity": [0.0, 500.0], "seed": 7 }"#).unwrap();
//! assert_eq!(config.gravity, [0.0, 500.0]);
//! assert_eq!(config.seed, Some(7));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::draw::Rgb;
use crate::error::DemoError;

/// Window and world parameters for one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Window title.
    pub title: String,
    /// Window width in pixels.
    pub width: f32,
    /// Window height in pixels.
    pub height: f32,
    /// Loop ticks per second. Each tick steps the world once.
    pub fps: u32,
    /// Physics timestep per tick, in seconds. Not tied to `fps`.
    pub timestep: f32,
    /// Gravity in pixels/s², y pointing down.
    pub gravity: [f32; 2],
    /// Clear color.
    pub background: Rgb,
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Optional fields read from a JSON override file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverrides {
    title: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
    fps: Option<u32>,
    timestep: Option<f32>,
    gravity: Option<[f32; 2]>,
    background: Option<Rgb>,
    seed: Option<u64>,
}

impl DemoConfig {
    pub fn slide_and_joint() -> Self {
        Self {
            title: "Game 1: Slide & Pin Joint".to_string(),
            width: 600.0,
            height: 600.0,
            // Slower loop than the physics timestep: the scene runs in slow motion
            // and one ball appears every half second.
            fps: 20,
            timestep: 1.0 / 50.0,
            gravity: [0.0, 900.0],
            background: Rgb::WHITE,
            seed: None,
        }
    }

    pub fn slide_and_pin_joint() -> Self {
        Self {
            title: "Game 1: Slide & Pin Joint".to_string(),
            width: 600.0,
            height: 600.0,
            fps: 50,
            timestep: 1.0 / 50.0,
            gravity: [0.0, 900.0],
            background: Rgb::WHITE,
            seed: None,
        }
    }

    pub fn bouncing_basketballs() -> Self {
        Self {
            title: "Game 2: Bouncing Basketballs".to_string(),
            width: 800.0,
            height: 800.0,
            fps: 60,
            timestep: 1.0 / 60.0,
            gravity: [0.0, 1000.0],
            background: Rgb::WHITE,
            seed: None,
        }
    }

    pub fn colliding_balls() -> Self {
        Self {
            title: "Game 2: Colliding Balls".to_string(),
            width: 500.0,
            height: 500.0,
            fps: 60,
            timestep: 1.0 / 60.0,
            gravity: [0.0, 0.0],
            background: Rgb::WHITE,
            seed: None,
        }
    }

    /// Overrides fields from a JSON file. See [`DemoConfig::apply_overrides_json`].
    pub fn apply_overrides_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), DemoError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply_overrides_json(&text)
    }

    /// Overrides the fields present in `json`, then validates the result.
    /// On error `self` is left unchanged.
    pub fn apply_overrides_json(&mut self, json: &str) -> Result<(), DemoError> {
        let overrides: ConfigOverrides = serde_json::from_str(json)?;
        let mut next = self.clone();

        if let Some(title) = overrides.title {
            next.title = title;
        }
        if let Some(width) = overrides.width {
            next.width = width;
        }
        if let Some(height) = overrides.height {
            next.height = height;
        }
        if let Some(fps) = overrides.fps {
            next.fps = fps;
        }
        if let Some(timestep) = overrides.timestep {
            next.timestep = timestep;
        }
        if let Some(gravity) = overrides.gravity {
            next.gravity = gravity;
        }
        if let Some(background) = overrides.background {
            next.background = background;
        }
        if overrides.seed.is_some() {
            next.seed = overrides.seed;
        }

        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Checks that the window and timing parameters are usable.
    pub fn validate(&self) -> Result<(), DemoError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(DemoError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(DemoError::InvalidConfig("fps must be at least 1".to_string()));
        }
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(DemoError::InvalidConfig(format!(
                "timestep must be positive and finite, got {}",
                self.timestep
            )));
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(DemoError::InvalidConfig("gravity must be finite".to_string()));
        }
        Ok(())
    }
}

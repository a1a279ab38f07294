//! Application configuration.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults (the reference level, a 1024x512 screen, 60° FOV)
//! 2. an optional JSON file (`--config path.json`), any field may be omitted
//! 3. `RAYCASTER_*` environment variables for the most commonly tuned values
//!
//! | Variable | Field |
//! |----------|-------|
//! | `RAYCASTER_WIDTH` | `screen.width` |
//! | `RAYCASTER_HEIGHT` | `screen.height` |
//! | `RAYCASTER_FOV` | `camera.fov` (radians) |
//! | `RAYCASTER_STEP` | `camera.march_step` |
//! | `RAYCASTER_FRAME_MS` | `input.frame_ms` |
//! | `RAYCASTER_LOG_PATH` | `log_path` |
//!
//! Unparsable environment values are ignored with a warning.

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{
    Background, MinimapRenderer, PlayerPose, RayCaster, Scene, SceneSettings, TileMap,
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_ROWS, DEFAULT_MAP_WIDTH,
};
use crate::types::{
    pack_rgb, Rgba, FOV, FRAME_MS, MARCH_STEP, MAX_RANGE, MOVE_STEP, SCREEN_HEIGHT, SCREEN_WIDTH,
    TURN_STEP,
};

pub const DEFAULT_LOG_PATH: &str = "/tmp/tile-raycaster.log";

/// Largest framebuffer accepted from configuration (8192x8192).
pub const MAX_SCREEN_PIXELS: usize = 8192 * 8192;

/// Finest march step accepted from configuration.
pub const MIN_MARCH_STEP: f32 = 1e-4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub screen: ScreenConfig,
    pub camera: CameraConfig,
    pub player: PlayerConfig,
    pub map: MapConfig,
    pub input: InputConfig,
    /// Log file of the interactive binary (the terminal is in raw mode).
    pub log_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: usize,
    pub height: usize,
    /// Solid background color (RGB).
    pub background: [u8; 3],
    /// Replace the solid background with the red/green test gradient.
    pub gradient: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov: f32,
    pub march_step: f32,
    pub max_range: f32,
    /// Draw the single gaze ray on the minimap.
    pub show_gaze: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub move_step: f32,
    pub turn_step: f32,
    pub frame_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            camera: CameraConfig::default(),
            player: PlayerConfig::default(),
            map: MapConfig::default(),
            input: InputConfig::default(),
            log_path: DEFAULT_LOG_PATH.to_string(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        let bg = Rgba::BACKGROUND;
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            background: [bg.r, bg.g, bg.b],
            gradient: false,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: FOV,
            march_step: MARCH_STEP,
            max_range: MAX_RANGE,
            show_gaze: false,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let pose = PlayerPose::default();
        Self {
            x: pose.x,
            y: pose.y,
            angle: pose.angle,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            rows: DEFAULT_MAP_ROWS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_step: MOVE_STEP,
            turn_step: TURN_STEP,
            frame_ms: FRAME_MS,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file; missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Defaults, then `path` if given, then the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `RAYCASTER_*` environment variables.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override fields from any `key -> value` source.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = parse_var(&lookup, "RAYCASTER_WIDTH") {
            self.screen.width = v;
        }
        if let Some(v) = parse_var(&lookup, "RAYCASTER_HEIGHT") {
            self.screen.height = v;
        }
        if let Some(v) = parse_var(&lookup, "RAYCASTER_FOV") {
            self.camera.fov = v;
        }
        if let Some(v) = parse_var(&lookup, "RAYCASTER_STEP") {
            self.camera.march_step = v;
        }
        if let Some(v) = parse_var(&lookup, "RAYCASTER_FRAME_MS") {
            self.input.frame_ms = v;
        }
        if let Some(v) = lookup("RAYCASTER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            self.log_path = v;
        }
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.screen.width < 2 || self.screen.height == 0 {
            bail!(
                "screen must be at least 2x1 pixels, got {}x{}",
                self.screen.width,
                self.screen.height
            );
        }
        match self.screen.width.checked_mul(self.screen.height) {
            Some(pixels) if pixels <= MAX_SCREEN_PIXELS => {}
            _ => bail!(
                "screen {}x{} exceeds {} pixels",
                self.screen.width,
                self.screen.height,
                MAX_SCREEN_PIXELS
            ),
        }
        if !(self.camera.march_step >= MIN_MARCH_STEP) || !self.camera.march_step.is_finite() {
            bail!(
                "march_step must be at least {}, got {}",
                MIN_MARCH_STEP,
                self.camera.march_step
            );
        }
        if !(self.camera.max_range > 0.0) || !self.camera.max_range.is_finite() {
            bail!("max_range must be positive, got {}", self.camera.max_range);
        }
        if !self.camera.fov.is_finite() {
            bail!("fov must be finite");
        }
        Ok(())
    }

    pub fn build_map(&self) -> Result<TileMap> {
        TileMap::parse(&self.map.rows, self.map.width, self.map.height).with_context(|| {
            format!("map is not {}x{}", self.map.width, self.map.height)
        })
    }

    pub fn pose(&self) -> PlayerPose {
        PlayerPose::new(self.player.x, self.player.y, self.player.angle)
    }

    pub fn scene_settings(&self) -> SceneSettings {
        let [r, g, b] = self.screen.background;
        let background = if self.screen.gradient {
            Background::Gradient
        } else {
            Background::Solid(pack_rgb(r, g, b))
        };

        let mut minimap = MinimapRenderer::default();
        if self.camera.show_gaze {
            minimap = minimap.with_gaze(Rgba::WHITE.pack());
        }

        SceneSettings {
            width: self.screen.width,
            height: self.screen.height,
            background,
            move_step: self.input.move_step,
            turn_step: self.input.turn_step,
            caster: RayCaster::new(self.camera.fov, self.camera.march_step, self.camera.max_range),
            minimap,
        }
    }

    /// Validate the map and assemble a ready-to-render scene.
    pub fn build_scene(&self) -> Result<Scene> {
        let map = self.build_map()?;
        Ok(Scene::new(map, self.pose(), self.scene_settings()))
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_reference_window() {
        let c = AppConfig::default();
        assert_eq!((c.screen.width, c.screen.height), (1024, 512));
        assert_eq!(c.map.rows.len(), 16);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = AppConfig::from_json(r#"{"screen": {"width": 320}, "camera": {"show_gaze": true}}"#).unwrap();
        assert_eq!(c.screen.width, 320);
        assert_eq!(c.screen.height, SCREEN_HEIGHT);
        assert!(c.camera.show_gaze);
        assert_eq!(c.camera.march_step, MARCH_STEP);
    }

    #[test]
    fn overrides_replace_only_valid_values() {
        let vars: HashMap<&str, &str> = [
            ("RAYCASTER_WIDTH", "640"),
            ("RAYCASTER_STEP", "fast"),
            ("RAYCASTER_LOG_PATH", "  "),
        ]
        .into_iter()
        .collect();
        let mut c = AppConfig::default();
        c.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(c.screen.width, 640);
        assert_eq!(c.camera.march_step, MARCH_STEP);
        assert_eq!(c.log_path, DEFAULT_LOG_PATH);
    }

    #[test]
    fn zero_step_is_rejected() {
        let mut c = AppConfig::default();
        c.camera.march_step = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn tiny_step_is_rejected() {
        let mut c = AppConfig::default();
        c.camera.march_step = 1e-9;
        assert!(c.validate().is_err());
        c.camera.march_step = MIN_MARCH_STEP;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn oversized_screen_is_rejected() {
        let mut c = AppConfig::default();
        c.screen.width = usize::MAX;
        c.screen.height = 2;
        assert!(c.validate().is_err());

        c.screen.width = 8193;
        c.screen.height = 8192;
        assert!(c.validate().is_err());

        c.screen.width = 8192;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn overflowing_map_size_is_a_diagnostic() {
        let c = AppConfig::from_json(
            r#"{"map": {"width": 4294967296, "height": 4294967296, "rows": []}}"#,
        )
        .unwrap();
        let err = c.build_scene().err().unwrap();
        assert!(err.to_string().contains("map is not 4294967296x4294967296"));
    }

    #[test]
    fn gradient_flag_selects_gradient_background() {
        let mut c = AppConfig::default();
        c.screen.gradient = true;
        assert_eq!(c.scene_settings().background, Background::Gradient);
    }
}

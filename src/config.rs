//! Demo configuration
//!
//! Uses RON (Rusty Object Notation) for a human-editable `assets/demos.ron`.
//! Every field has a default, so a file only needs the values it changes.
//! A missing file is not an error: the demos run with built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound for the world render target (pixels per side)
pub const MAX_WORLD_PIXELS: u32 = 8192;

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl ConfigError {
    /// The config file does not exist (or could not be fetched)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A failed HTTP fetch of the config is treated like a missing file
#[cfg(any(target_arch = "wasm32", test))]
fn fetch_error(e: impl std::fmt::Display) -> ConfigError {
    ConfigError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Root configuration for all demos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Simulation rate; movement speeds are in pixels per tick
    pub ticks_per_second: u32,
    pub assets: AssetConfig,
    pub spaceship: SpaceshipConfig,
    pub pong: PongConfig,
    pub tilemap: TileMapConfig,
    pub camera: CameraConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            assets: AssetConfig::default(),
            spaceship: SpaceshipConfig::default(),
            pong: PongConfig::default(),
            tilemap: TileMapConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

/// Image file names, relative to `dir`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub dir: String,
    pub background: String,
    pub spaceship: String,
    pub ball: String,
    pub paddle: String,
    pub grass_tile: String,
    pub rock_tile: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
            background: "space.png".to_string(),
            spaceship: "spaceship.png".to_string(),
            ball: "ball.png".to_string(),
            paddle: "paddle.png".to_string(),
            grass_tile: "grassTile.png".to_string(),
            rock_tile: "rockTile.png".to_string(),
        }
    }
}

impl AssetConfig {
    /// Join a file name onto the asset directory
    pub fn path(&self, file: &str) -> String {
        let dir = self.dir.trim_end_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", dir, file)
        }
    }

    fn files(&self) -> [(&'static str, &str); 6] {
        [
            ("background", &self.background),
            ("spaceship", &self.spaceship),
            ("ball", &self.ball),
            ("paddle", &self.paddle),
            ("grass_tile", &self.grass_tile),
            ("rock_tile", &self.rock_tile),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceshipConfig {
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for SpaceshipConfig {
    fn default() -> Self {
        Self { speed: 4.0, width: 32.0, height: 32.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Gap between a paddle and its screen edge
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    /// Ball speed multiplier applied on every paddle hit
    pub speedup: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            paddle_width: 64.0,
            paddle_height: 16.0,
            paddle_speed: 4.0,
            paddle_margin: 16.0,
            ball_size: 32.0,
            ball_speed: 4.0,
            speedup: 1.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileMapConfig {
    pub tile_width: u32,
    pub tile_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl Default for TileMapConfig {
    fn default() -> Self {
        Self { tile_width: 64, tile_height: 64, columns: 20, rows: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// World pixels panned per tick at full stick deflection
    pub pan_speed: f32,
    pub zoom_step: i32,
    /// Zoom factor is clamped to [-zoom_limit, zoom_limit]
    pub zoom_limit: i32,
    /// Degrees per tick while rotating
    pub rotate_step: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { pan_speed: 1.0, zoom_step: 1, zoom_limit: 2400, rotate_step: 1 }
    }
}

fn check_positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "{} must be a positive number, got {}", name, value
        )));
    }
    Ok(())
}

impl DemoConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file from disk
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Serialize to pretty-printed RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(2);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Load the config at `path`, falling back to defaults on any failure.
    ///
    /// Native builds read the filesystem directly; the web build goes through
    /// macroquad's fetch-backed file API.
    pub async fn load_or_default(path: &str) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let result = Self::read_from(Path::new(path));

        #[cfg(target_arch = "wasm32")]
        let result = match macroquad::file::load_string(path).await {
            Ok(text) => Self::from_ron_str(&text),
            Err(e) => Err(fetch_error(e)),
        };

        match result {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) if e.is_not_found() => {
                log::warn!("No config at {}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                log::error!("Failed to load config {}: {}; using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Reject values the demos cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second == 0 || self.ticks_per_second > 1000 {
            return Err(ConfigError::ValidationError(format!(
                "ticks_per_second must be in 1..=1000, got {}", self.ticks_per_second
            )));
        }

        for (name, file) in self.assets.files() {
            if file.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!("assets.{} is empty", name)));
            }
        }

        check_positive("spaceship.speed", self.spaceship.speed)?;
        check_positive("spaceship.width", self.spaceship.width)?;
        check_positive("spaceship.height", self.spaceship.height)?;

        let pong = &self.pong;
        check_positive("pong.paddle_width", pong.paddle_width)?;
        check_positive("pong.paddle_height", pong.paddle_height)?;
        check_positive("pong.paddle_speed", pong.paddle_speed)?;
        check_positive("pong.ball_size", pong.ball_size)?;
        check_positive("pong.ball_speed", pong.ball_speed)?;
        check_positive("pong.speedup", pong.speedup)?;
        if !pong.paddle_margin.is_finite() || pong.paddle_margin < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "pong.paddle_margin must not be negative, got {}", pong.paddle_margin
            )));
        }

        let map = &self.tilemap;
        if map.tile_width == 0 || map.tile_height == 0 || map.columns == 0 || map.rows == 0 {
            return Err(ConfigError::ValidationError(
                "tilemap sizes must all be non-zero".to_string(),
            ));
        }
        let world_w = map.tile_width.saturating_mul(map.columns);
        let world_h = map.tile_height.saturating_mul(map.rows);
        if world_w > MAX_WORLD_PIXELS || world_h > MAX_WORLD_PIXELS {
            return Err(ConfigError::ValidationError(format!(
                "tilemap is {}x{} pixels (max {} per side)", world_w, world_h, MAX_WORLD_PIXELS
            )));
        }

        let camera = &self.camera;
        check_positive("camera.pan_speed", camera.pan_speed)?;
        if camera.zoom_step <= 0 || camera.rotate_step <= 0 || camera.zoom_limit < 0 {
            return Err(ConfigError::ValidationError(
                "camera steps must be positive and zoom_limit non-negative".to_string(),
            ));
        }
        // Scale is 1.01^zoom; past ~8900 it overflows f32
        if !1.01f32.powi(camera.zoom_limit).is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "camera.zoom_limit {} overflows the zoom scale", camera.zoom_limit
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tilemap.columns, 20);
        assert_eq!(config.pong.ball_size, 32.0);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = DemoConfig::from_ron_str(include_str!("../assets/demos.ron")).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = DemoConfig::from_ron_str("(pong: (ball_speed: 6.0))").unwrap();
        assert_eq!(config.pong.ball_speed, 6.0);
        assert_eq!(config.pong.paddle_speed, 4.0);
        assert_eq!(config.spaceship, SpaceshipConfig::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = DemoConfig::from_ron_str("(pong: (ball_speed: ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let err = DemoConfig::from_ron_str("(spaceship: (speed: -1.0))").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let err = DemoConfig::from_ron_str("(tilemap: (columns: 0))").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let err = DemoConfig::from_ron_str("(tilemap: (tile_width: 4096, columns: 4))").unwrap_err();
        assert!(err.to_string().contains("max"));

        let err = DemoConfig::from_ron_str("(ticks_per_second: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_zoom_limit_must_keep_scale_finite() {
        let err = DemoConfig::from_ron_str("(camera: (zoom_limit: 9000))").unwrap_err();
        assert!(err.to_string().contains("zoom_limit"));

        let config = DemoConfig::from_ron_str("(camera: (zoom_limit: 8000))").unwrap();
        assert_eq!(config.camera.zoom_limit, 8000);
    }

    #[test]
    fn test_written_config_reads_back() {
        let mut config = DemoConfig::default();
        config.camera.zoom_limit = 100;
        let text = config.to_ron_string().unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        let loaded = DemoConfig::read_from(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = DemoConfig::read_from(&dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_failed_fetch_counts_as_missing() {
        let err = fetch_error("HTTP 404");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("404"));

        let err = DemoConfig::from_ron_str("(ticks_per_second: 0)").unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_asset_path_join() {
        let mut assets = AssetConfig::default();
        assert_eq!(assets.path("ball.png"), "assets/ball.png");
        assets.dir = "data/".to_string();
        assert_eq!(assets.path("ball.png"), "data/ball.png");
        assets.dir = String::new();
        assert_eq!(assets.path("ball.png"), "ball.png");
    }
}

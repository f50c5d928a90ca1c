//! Sandbox configuration
//!
//! Uses RON (Rusty Object Notation) so the file stays hand-editable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::rasterizer::Color;
use crate::scene::{ControlValue, Scene, SceneManager};

/// Error type for config loading and saving
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Control values to apply to one scene at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePreset {
    pub scene: String,
    pub values: Vec<(String, ControlValue)>,
}

impl ScenePreset {
    pub fn matches(&self, scene: &dyn Scene) -> bool {
        self.scene.eq_ignore_ascii_case(scene.name())
    }

    /// Apply every value to the matching scene. Returns how many were accepted.
    pub fn apply(&self, scenes: &mut SceneManager) -> usize {
        let Some(scene) = scenes.find_mut(&self.scene) else {
            warn!("Preset for unknown scene '{}'", self.scene);
            return 0;
        };
        self.apply_to(scene)
    }

    /// Write every value into `scene`, warning about each rejected one
    pub fn apply_to(&self, scene: &mut dyn Scene) -> usize {
        let mut applied = 0;
        for (name, value) in &self.values {
            if scene.set_control(name, *value) {
                applied += 1;
            } else {
                warn!("Preset '{}': rejected control '{}'", self.scene, name);
            }
        }
        applied
    }
}

/// Apply every preset naming `scene`. Returns how many values were accepted.
pub fn apply_presets(presets: &[ScenePreset], scene: &mut dyn Scene) -> usize {
    let mut applied = 0;
    for preset in presets {
        if preset.matches(scene) {
            applied += preset.apply_to(scene);
        }
    }
    applied
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    /// Empty means the first registered scene
    pub initial_scene: String,
    pub clear_color: Color,
    /// Window pixels per framebuffer pixel
    pub pixel_scale: u32,
    pub presets: Vec<ScenePreset>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            title: "Bonnie Sandbox".to_string(),
            initial_scene: String::new(),
            clear_color: Color::new(0.1, 0.1, 0.12),
            pixel_scale: 1,
            presets: Vec::new(),
        }
    }
}

impl AppConfig {
    /// `pixel_scale` with 0 treated as 1
    pub fn effective_pixel_scale(&self) -> u32 {
        self.pixel_scale.max(1)
    }
}

/// Load a config from a RON file. A missing file gives the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load a config from a RON string
pub fn load_config_from_str(s: &str) -> Result<AppConfig, ConfigError> {
    Ok(ron::from_str(s)?)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneRegistry;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("nope.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sandbox.ron");

        let config = AppConfig {
            initial_scene: "Heart".to_string(),
            pixel_scale: 2,
            presets: vec![ScenePreset {
                scene: "Circle".to_string(),
                values: vec![
                    ("Radius".to_string(), ControlValue::Float(20.0)),
                    ("Color".to_string(), ControlValue::Color(Color::BLUE)),
                ],
            }],
            ..AppConfig::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = load_config_from_str("(window_width: 1024, initial_scene: \"Sphere\")").unwrap();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.initial_scene, "Sphere");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let err = load_config_from_str("(window_width: \"wide\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_zero_pixel_scale_treated_as_one() {
        let config = AppConfig {
            pixel_scale: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.effective_pixel_scale(), 1);
    }

    #[test]
    fn test_preset_applies_to_scene() {
        let mut scenes = SceneManager::from_registry(&SceneRegistry::builtin());
        let preset = ScenePreset {
            scene: "circle".to_string(),
            values: vec![
                ("Radius".to_string(), ControlValue::Float(12.0)),
                ("Radius".to_string(), ControlValue::Bool(true)),
                ("Bogus".to_string(), ControlValue::Float(1.0)),
            ],
        };
        assert_eq!(preset.apply(&mut scenes), 1);

        let idx = scenes.find("Circle").unwrap();
        let radius = scenes
            .get(idx)
            .unwrap()
            .describe_controls()
            .into_iter()
            .find(|c| c.name == "Radius")
            .map(|c| c.value);
        assert_eq!(radius, Some(ControlValue::Float(12.0)));

        let unknown = ScenePreset {
            scene: "Nowhere".to_string(),
            values: vec![("Radius".to_string(), ControlValue::Float(1.0))],
        };
        assert_eq!(unknown.apply(&mut scenes), 0);
    }

    #[test]
    fn test_apply_presets_to_single_scene() {
        let mut scene = SceneRegistry::builtin().create("Circle").unwrap();
        let presets = vec![
            ScenePreset {
                scene: "CIRCLE".to_string(),
                values: vec![
                    ("Radius".to_string(), ControlValue::Float(9.0)),
                    ("Radius".to_string(), ControlValue::Vec3(crate::rasterizer::Vec3::ZERO)),
                ],
            },
            ScenePreset {
                scene: "Heart".to_string(),
                values: vec![("Radius".to_string(), ControlValue::Float(1.0))],
            },
        ];
        assert_eq!(apply_presets(&presets, scene.as_mut()), 1);
        let radius = scene
            .describe_controls()
            .into_iter()
            .find(|c| c.name == "Radius")
            .map(|c| c.value);
        assert_eq!(radius, Some(ControlValue::Float(9.0)));
    }
}

//! Camera options with TOML preset support.
//!
//! Orbit shape, transition timing and key bindings are consolidated here.
//! Options serialize to/from TOML so camera presets can live on disk.

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit shape and transition timing.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults; values
    /// are range-checked with [`CameraOptions::validate`].
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        let opts: Self = toml::from_str(&content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        opts.camera.validate()?;
        log::info!("Loaded camera options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)?;
        log::info!("Saved camera options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CameraCommandTag;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
distance = 800.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.distance, 800.0);
        // Everything else should be default
        assert_eq!(opts.camera.pitch, -35.0);
        assert_eq!(opts.camera.ease_scale, 4.0);
        assert_eq!(opts.camera.rotation_step, 90.0);
        assert_eq!(
            opts.keybindings.lookup("KeyQ"),
            Some(CameraCommandTag::RotateLeft)
        );
    }

    #[test]
    fn keybindings_parse_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
ArrowLeft = "rotate_left"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(CameraCommandTag::RotateLeft)
        );
        // An explicit table replaces the default map
        assert_eq!(opts.keybindings.lookup("KeyQ"), None);
    }

    #[test]
    fn malformed_toml_is_options_parse_error() {
        let dir = std::env::temp_dir().join("tactical-camera-bad-options");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera\ndistance = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(CameraError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join("tactical-camera-presets")
            .join("nested");
        let _ = std::fs::remove_dir_all(&dir);
        let mut opts = Options::default();
        opts.camera.height = 250.0;
        opts.save(&dir.join("low.toml")).unwrap();
        opts.save(&dir.join("another.toml")).unwrap();

        let loaded = Options::load(&dir.join("low.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["another", "low"]);
    }

    #[test]
    fn out_of_range_values_are_rejected_on_load() {
        let dir = std::env::temp_dir().join("tactical-camera-invalid-options");
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("big_step.toml");
        std::fs::write(&path, "[camera]\nrotation_step = 600.0\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(CameraError::InvalidOptions(_))
        ));

        let path = dir.join("zero_scale.toml");
        std::fs::write(&path, "[camera]\nease_scale = 0.0\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(CameraError::InvalidOptions(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/definitely/not/here/options.toml");
        assert!(matches!(Options::load(path), Err(CameraError::Io(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("distance").is_some());
        assert!(camera.get("pitch").is_some());
        assert!(camera.get("ease_scale").is_none());
        assert!(camera.get("rotation_cooldown").is_none());
    }
}

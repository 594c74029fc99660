use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, PresetError, Result},
    options::{CrtConfig, PartialConfig},
    overlay::CrtEffect,
    resolve::Resolver,
};

/// Configuration file for the CRT effect
///
/// ```toml
/// preset = "cyberpunk"
///
/// [overrides]
/// enableGlow = false
/// edgeGlowSize = 0.2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preset used as the middle layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Caller overrides, highest precedence
    pub overrides: PartialConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the overlay described by this file
    pub fn effect(&self) -> CrtEffect {
        let effect = CrtEffect::new().overrides(self.overrides.clone());
        match &self.preset {
            Some(name) => effect.preset(name.clone()),
            None => effect,
        }
    }

    /// Validate the configuration against the built-in presets
    ///
    /// Resolution never calls this; it is an opt-in check for tooling that
    /// wants to reject values the stylesheet cannot use.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(Resolver::builtin())
    }

    pub fn validate_with(&self, resolver: &Resolver) -> Result<()> {
        if let Some(name) = &self.preset {
            if !resolver.registry().has_preset(name) {
                return Err(PresetError::NotFound { name: name.clone() }.into());
            }
        }

        validate_resolved(&resolver.resolve(self.preset.as_deref(), &self.overrides))
    }
}

/// Options whose values are always strings
const STRING_OPTIONS: [&str; 4] = ["scanlineColor", "glowColor", "edgeGlowColor", "theme"];

/// Build an override layer from `key=value` assignments
///
/// Values are read as TOML scalars (`true`, `0.2`, `"low"`); anything that is
/// not valid TOML is taken as a bare string, so `theme=amber` works unquoted.
/// String options keep the raw text when it happens to read as another scalar
/// (`theme=inf`, `glowColor=1`). Keys that are not recognized options are
/// rejected.
pub fn overrides_from_assignments<I, S>(assignments: I) -> Result<PartialConfig>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = toml::Table::new();

    for assignment in assignments {
        let assignment = assignment.as_ref();
        let (key, raw) = assignment.split_once('=').ok_or_else(|| ConfigError::InvalidOverride {
            input: assignment.to_string(),
            reason: "expected key=value".to_string(),
        })?;
        let (key, raw) = (key.trim(), raw.trim());
        if key.is_empty() {
            return Err(ConfigError::InvalidOverride {
                input: assignment.to_string(),
                reason: "empty key".to_string(),
            }
            .into());
        }

        let value = format!("value = {}", raw)
            .parse::<toml::Table>()
            .ok()
            .and_then(|mut parsed| parsed.remove("value"))
            .filter(|parsed| parsed.is_str() || !STRING_OPTIONS.contains(&key))
            .unwrap_or_else(|| toml::Value::String(raw.to_string()));

        table.insert(key.to_string(), value);
    }

    let expected = table.len();
    let keys: Vec<String> = table.keys().cloned().collect();
    let layer: PartialConfig = toml::Value::Table(table).try_into().map_err(|e: toml::de::Error| {
        ConfigError::InvalidOverride {
            input: keys.join(", "),
            reason: e.to_string(),
        }
    })?;

    if layer.len() != expected {
        let known = toml::Value::try_from(&layer).ok();
        let unknown: Vec<&str> = keys
            .iter()
            .map(String::as_str)
            .filter(|key| {
                let recognized = known.as_ref().and_then(|v| v.get(*key)).is_some()
                    || (*key == "glitchMode" && layer.enable_glitch.is_some());
                !recognized
            })
            .collect();
        return Err(ConfigError::InvalidOverride {
            input: unknown.join(", "),
            reason: "unknown option".to_string(),
        }
        .into());
    }

    Ok(layer)
}

fn validate_resolved(config: &CrtConfig) -> Result<()> {
    let unit_ranges = [
        ("scanlineOpacity", config.scanline_opacity),
        ("vignetteIntensity", config.vignette_intensity),
    ];
    for (key, value) in unit_ranges {
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(key, value));
        }
    }

    let positive = [
        ("sweepDuration", config.sweep_duration),
        ("sweepThickness", config.sweep_thickness),
        ("scanlineThickness", config.scanline_thickness),
        ("scanlineGap", config.scanline_gap),
    ];
    for (key, value) in positive {
        if !(value > 0.0) {
            return Err(invalid(key, value));
        }
    }

    if !(config.edge_glow_size >= 0.0) {
        return Err(invalid("edgeGlowSize", config.edge_glow_size));
    }

    Ok(())
}

fn invalid(key: &str, value: f64) -> crate::error::CrtError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CrtError;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_builtin_preset_is_valid() {
        for name in Resolver::builtin().registry().available_presets() {
            let config = Config { preset: Some(name.clone()), ..Config::default() };
            assert!(config.validate().is_ok(), "preset {} failed validation", name);
        }
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("crt.toml");

        let original_config = Config {
            preset: Some("cyberpunk".to_string()),
            overrides: PartialConfig::new()
                .enable_glow(false)
                .edge_glow_size(0.2)
                .glitch_speed(0.25)
                .flicker_intensity("high"),
        };

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_from_file_camel_case() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("crt.toml");
        std::fs::write(
            &file_path,
            "preset = \"fallout\"\n\n[overrides]\nglitchMode = true\nscanlineColor = \"rgb(1, 2, 3)\"\n",
        )
        .unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.preset.as_deref(), Some("fallout"));
        assert_eq!(config.overrides.enable_glitch, Some(true));
        assert_eq!(config.overrides.scanline_color.as_deref(), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(CrtError::Config(ConfigError::FileNotFound { .. }))));
    }

    #[test]
    fn test_invalid_opacity() {
        let config = Config {
            preset: None,
            overrides: PartialConfig::new().scanline_opacity(1.5),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_preset_rejected_by_validation_only() {
        let config = Config {
            preset: Some("amiga".to_string()),
            overrides: PartialConfig::new(),
        };
        assert!(matches!(config.validate(), Err(CrtError::Preset(_))));
        // Resolution still degrades gracefully
        assert_eq!(config.effect().resolve(), CrtConfig::default());
    }

    #[test]
    fn test_overrides_from_assignments() {
        let layer = overrides_from_assignments([
            "enableGlow=false",
            "edgeGlowSize = 0.2",
            "theme=amber",
            "flickerIntensity=\"high\"",
            "glitchSpeed=1",
        ])
        .unwrap();

        assert_eq!(layer.enable_glow, Some(false));
        assert_eq!(layer.edge_glow_size, Some(0.2));
        assert_eq!(layer.theme, Some(crate::options::Theme::Amber));
        assert_eq!(layer.flicker_intensity, Some("high".into()));
        assert_eq!(layer.glitch_speed, Some(1.0.into()));
    }

    #[test]
    fn test_string_options_keep_scalar_looking_text() {
        let layer = overrides_from_assignments([
            "theme=inf",
            "glowColor=1",
            "edgeGlowColor=true",
            "scanlineColor=\"rgb(1, 2, 3)\"",
        ])
        .unwrap();

        assert_eq!(layer.theme, Some(crate::options::Theme::Other("inf".to_string())));
        assert_eq!(layer.glow_color.as_deref(), Some("1"));
        assert_eq!(layer.edge_glow_color.as_deref(), Some("true"));
        assert_eq!(layer.scanline_color.as_deref(), Some("rgb(1, 2, 3)"));

        // Other options still read the scalar
        let layer = overrides_from_assignments(["flickerIntensity=inf"]).unwrap();
        assert_eq!(layer.flicker_intensity, Some(f64::INFINITY.into()));
    }

    #[test]
    fn test_assignment_errors() {
        assert!(overrides_from_assignments(["enableGlow"]).is_err());
        assert!(overrides_from_assignments(["=true"]).is_err());
        assert!(overrides_from_assignments(["enableGlow=maybe"]).is_err());

        let err = overrides_from_assignments(["glowRadius=3"]).unwrap_err();
        assert!(err.to_string().contains("glowRadius"));
    }

    #[test]
    fn test_glitch_mode_alias_assignment() {
        let layer = overrides_from_assignments(["glitchMode=true"]).unwrap();
        assert_eq!(layer.enable_glitch, Some(true));
    }

    #[test]
    fn test_zero_gap_rejected() {
        let config = Config {
            preset: Some("dos".to_string()),
            overrides: PartialConfig::new().scanline_gap(0.0),
        };
        assert!(config.validate().is_err());
    }
}

use thiserror::Error;

/// Main error type for the CRT effect library
///
/// Resolution itself never fails; these errors only come from the edges of the
/// crate (configuration files, strict validation and preset lookups by name).
#[derive(Error, Debug)]
pub enum CrtError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Preset error: {0}")]
    Preset(#[from] PresetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path} - {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid override '{input}': {reason}")]
    InvalidOverride { input: String, reason: String },
}

/// Preset-specific errors
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Preset not found: {name}")]
    NotFound { name: String },
}

/// Convenience type alias for Results using CrtError
pub type Result<T> = std::result::Result<T, CrtError>;

impl CrtError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Preset(PresetError::NotFound { name }) => {
                format!(
                    "Preset '{}' not found. Available presets: {}",
                    name,
                    crate::presets::PresetName::ALL
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Config(ConfigError::InvalidOverride { input, .. }) => {
                format!("Could not understand override '{}'. Use key=value, e.g. enableGlow=true.", input)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_lists_presets() {
        let err: CrtError = PresetError::NotFound { name: "amiga".to_string() }.into();
        let message = err.user_message();
        assert!(message.contains("'amiga'"));
        assert!(message.contains("fallout"));
        assert!(message.contains("vt100"));
    }

    #[test]
    fn test_config_error_display() {
        let err: CrtError = ConfigError::InvalidValue {
            key: "scanlineOpacity".to_string(),
            value: "1.5".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration value: scanlineOpacity = 1.5"
        );
    }
}

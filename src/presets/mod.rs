//! # Preset System
//!
//! Named bundles of option values that reproduce a recognizable display.
//! A preset only sets the options its aesthetic cares about; everything else
//! falls through to the defaults during resolution.
//!
//! ## Built-in Presets
//!
//! - **fallout**: green phosphor terminal with edge glow
//! - **dos**: orange Hercules monitor, no animation
//! - **cyberpunk**: magenta neon with glow and glitching
//! - **commodore64**: lavender 8-bit computer
//! - **apple2**: thin green scanlines
//! - **arcade**: heavy scanlines and glow of a coin-op cabinet
//! - **vt100**: pale DEC terminal
//! - **minimal**: barely-there scanlines
//!
//! ## Usage
//!
//! ```rust
//! use crt_effect::presets::PresetRegistry;
//!
//! let registry = PresetRegistry::new();
//! let layer = registry.lookup("fallout");
//! assert_eq!(layer.edge_glow_size, Some(40.0));
//!
//! // Unknown names behave like "no preset"
//! assert!(registry.lookup("amiga").is_empty());
//! ```

pub mod builtin;
pub mod registry;

use std::{fmt, str::FromStr};

use crate::{error::PresetError, options::PartialConfig};

pub use registry::PresetRegistry;

/// A named partial configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub metadata: PresetMetadata,
    pub config: PartialConfig,
}

impl Preset {
    pub fn new<S: Into<String>>(name: S, config: PartialConfig) -> Self {
        let name = name.into();
        Self {
            metadata: PresetMetadata {
                display_name: name.to_uppercase(),
                ..PresetMetadata::default()
            },
            name,
            config,
        }
    }

    pub fn with_metadata(mut self, metadata: PresetMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Presentation details used when listing presets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetMetadata {
    /// Label shown in pickers, e.g. `APPLE ][`
    pub display_name: String,

    /// One line description of the emulated hardware
    pub description: String,

    /// Representative foreground color as a hex string
    pub accent_color: String,
}

/// Names of the built-in presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PresetName {
    Fallout,
    Dos,
    Cyberpunk,
    Commodore64,
    Apple2,
    Arcade,
    Vt100,
    Minimal,
}

impl PresetName {
    pub const ALL: [PresetName; 8] = [
        PresetName::Fallout,
        PresetName::Dos,
        PresetName::Cyberpunk,
        PresetName::Commodore64,
        PresetName::Apple2,
        PresetName::Arcade,
        PresetName::Vt100,
        PresetName::Minimal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetName::Fallout => "fallout",
            PresetName::Dos => "dos",
            PresetName::Cyberpunk => "cyberpunk",
            PresetName::Commodore64 => "commodore64",
            PresetName::Apple2 => "apple2",
            PresetName::Arcade => "arcade",
            PresetName::Vt100 => "vt100",
            PresetName::Minimal => "minimal",
        }
    }

    /// Build the preset this name refers to
    pub fn preset(self) -> Preset {
        builtin::builtin(self)
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetName {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PresetError::NotFound { name: s.to_string() })
    }
}

//! # CRT Effect
//!
//! Resolve retro cathode-ray display overlays into CSS style variables.
//!
//! This library turns a preset name plus caller overrides into everything a
//! stylesheet needs to paint scanlines, a sweep band, glow, flicker, glitch
//! and vignette around arbitrary content.
//!
//! ## Quick Start
//!
//! ```rust
//! use crt_effect::{CrtEffect, PartialConfig};
//!
//! let overlay = CrtEffect::new()
//!     .preset("cyberpunk")
//!     .overrides(PartialConfig::new().enable_glow(false).edge_glow_size(0.2))
//!     .wrap("<pre>READY.</pre>");
//!
//! let style = overlay.style().unwrap();
//! assert_eq!(style.scanline_color_rgb, "255, 0, 255");
//! assert_eq!(style.edge_glow_size, "0.2px");
//!
//! println!("{}", overlay.to_html());
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`options`] - Option types, total and partial configurations
//! - [`presets`] - Built-in presets and the preset registry
//! - [`resolve`] - Defaults < preset < overrides merge
//! - [`color`] - Scanline color resolution
//! - [`normalize`] - Keyword-or-number intensities and speeds
//! - [`style`] - Derived CSS variables and effect flags
//! - [`overlay`] - Wrapping content
//! - [`config`] - Configuration files
//!
//! ## Custom Presets
//!
//! ```rust
//! use crt_effect::{PartialConfig, PresetRegistry, Resolver};
//! use crt_effect::presets::Preset;
//!
//! let mut registry = PresetRegistry::new();
//! registry.register(Preset::new("amber-lite", PartialConfig::new().theme("amber")));
//!
//! let resolver = Resolver::with_registry(registry);
//! let config = resolver.resolve(Some("amber-lite"), &PartialConfig::new());
//! assert_eq!(config.theme.as_str(), "amber");
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod normalize;
pub mod options;
pub mod overlay;
pub mod presets;
pub mod resolve;
pub mod style;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{CrtError, Result},
    options::{CrtConfig, PartialConfig},
    overlay::{CrtEffect, Overlay},
    presets::PresetRegistry,
    resolve::{resolve, Resolver},
    style::{Effect, EffectFlags, StyleVariables},
};

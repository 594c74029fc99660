//! Derived style variables and effect flags.
//!
//! This is the output contract towards the stylesheet: a fixed set of CSS
//! custom properties plus the class names that switch individual overlay
//! layers on and off.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::{
    color::resolve_scanline_rgb,
    normalize::{
        pixels, process_flicker_intensity, process_flicker_speed, process_glitch_intensity,
        process_glitch_speed, seconds_to_duration,
    },
    options::{CrtConfig, SweepStyle},
};

/// Class carried by every enabled overlay wrapper
pub const WRAPPER_CLASS: &str = "crt-effect-wrapper";

/// Class of the inner container holding the wrapped content
pub const INNER_CLASS: &str = "crt-inner";

/// Class of the vignette element
pub const VIGNETTE_CLASS: &str = "crt-vignette";

/// Box shadow applied to the inner container when the outer glow is on
pub const GLOW_BOX_SHADOW: &str =
    "0 0 6px var(--glow-color), 0 0 12px var(--glow-color), 0 0 20px var(--glow-color)";

/// An overlay effect that can be switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Effect {
    Scanlines,
    /// Classic sweep band
    Sweep,
    /// Soft sweep band; never active together with [`Effect::Sweep`]
    SoftSweep,
    Glow,
    EdgeGlow,
    Flicker,
    Glitch,
    Vignette,
}

impl Effect {
    /// CSS class toggling this effect, if it is driven by a class
    ///
    /// Glow is applied as an inline box shadow and the vignette as its own
    /// element, so neither has a class.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Effect::Scanlines => Some("scanlines-on"),
            Effect::Sweep => Some("sweep-on"),
            Effect::SoftSweep => Some("sweep-soft"),
            Effect::EdgeGlow => Some("edge-glow-on"),
            Effect::Flicker => Some("flicker-on"),
            Effect::Glitch => Some("glitch-on"),
            Effect::Glow | Effect::Vignette => None,
        }
    }

    /// Whether the class goes on the inner container rather than the wrapper
    pub fn targets_inner(self) -> bool {
        matches!(self, Effect::Glitch)
    }
}

/// Set of active effects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectFlags {
    active: BTreeSet<Effect>,
}

impl EffectFlags {
    /// Compute the active effects from a resolved configuration
    pub fn from_config(config: &CrtConfig) -> Self {
        let mut active = BTreeSet::new();

        if config.enable_scanlines {
            active.insert(Effect::Scanlines);
        }
        if config.enable_sweep {
            active.insert(match config.sweep_style {
                SweepStyle::Classic => Effect::Sweep,
                SweepStyle::Soft => Effect::SoftSweep,
            });
        }
        if config.enable_glow {
            active.insert(Effect::Glow);
        }
        if config.enable_edge_glow {
            active.insert(Effect::EdgeGlow);
        }
        if config.enable_flicker {
            active.insert(Effect::Flicker);
        }
        if config.enable_glitch {
            active.insert(Effect::Glitch);
        }
        if config.enable_vignette {
            active.insert(Effect::Vignette);
        }

        Self { active }
    }

    pub fn contains(&self, effect: Effect) -> bool {
        self.active.contains(&effect)
    }

    /// Active effects in a stable order
    pub fn iter(&self) -> impl Iterator<Item = Effect> + '_ {
        self.active.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Class list of the outer wrapper, base class first
    pub fn class_names(&self) -> Vec<&'static str> {
        std::iter::once(WRAPPER_CLASS)
            .chain(
                self.iter()
                    .filter(|effect| !effect.targets_inner())
                    .filter_map(Effect::class_name),
            )
            .collect()
    }

    /// Class list of the inner content container
    pub fn inner_class_names(&self) -> Vec<&'static str> {
        std::iter::once(INNER_CLASS)
            .chain(
                self.iter()
                    .filter(|effect| effect.targets_inner())
                    .filter_map(Effect::class_name),
            )
            .collect()
    }
}

/// A numeric CSS value printed in its shortest decimal form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Secondary values derived from a resolved configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleVariables {
    /// e.g. `10s`
    pub sweep_duration: String,
    /// e.g. `10px`
    pub sweep_thickness: String,
    pub scanline_opacity: Number,
    /// Bare `r, g, b` triple, alpha stripped
    pub scanline_color_rgb: String,
    pub scanline_thickness: String,
    pub scanline_gap: String,
    /// `to bottom` or `to right`
    pub scanline_gradient_direction: &'static str,
    pub glow_color: String,
    pub edge_glow_color: String,
    pub edge_glow_size: String,
    pub glitch_intensity: Number,
    pub glitch_speed: String,
    pub flicker_intensity: Number,
    pub flicker_speed: String,
    pub vignette_intensity: Number,
}

/// Keep a raw CSS value unless it could end its declaration or block
fn css_value_or_default(key: &str, value: &str, default: impl FnOnce() -> String) -> String {
    if value.contains([';', '{', '}']) {
        trace!("Rejected {} '{}', using default", key, value);
        return default();
    }
    value.to_string()
}

impl StyleVariables {
    pub fn from_config(config: &CrtConfig) -> Self {
        Self {
            sweep_duration: seconds_to_duration(config.sweep_duration),
            sweep_thickness: pixels(config.sweep_thickness),
            scanline_opacity: Number(config.scanline_opacity),
            scanline_color_rgb: resolve_scanline_rgb(&config.theme, &config.scanline_color),
            scanline_thickness: pixels(config.scanline_thickness),
            scanline_gap: pixels(config.scanline_gap),
            scanline_gradient_direction: config.scanline_orientation.gradient_direction(),
            glow_color: css_value_or_default("glowColor", &config.glow_color, || {
                CrtConfig::default().glow_color
            }),
            edge_glow_color: css_value_or_default("edgeGlowColor", &config.edge_glow_color, || {
                CrtConfig::default().edge_glow_color
            }),
            edge_glow_size: pixels(config.edge_glow_size),
            glitch_intensity: Number(process_glitch_intensity(&config.glitch_intensity)),
            glitch_speed: process_glitch_speed(&config.glitch_speed),
            flicker_intensity: Number(process_flicker_intensity(&config.flicker_intensity)),
            flicker_speed: process_flicker_speed(&config.flicker_speed),
            vignette_intensity: Number(config.vignette_intensity),
        }
    }

    /// CSS custom properties in declaration order
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--sweep-duration", self.sweep_duration.clone()),
            ("--sweep-thickness", self.sweep_thickness.clone()),
            ("--scanline-opacity", self.scanline_opacity.to_string()),
            ("--scanline-color-rgb", self.scanline_color_rgb.clone()),
            ("--scanline-thickness", self.scanline_thickness.clone()),
            ("--scanline-gap", self.scanline_gap.clone()),
            ("--glow-color", self.glow_color.clone()),
            ("--edge-glow-color", self.edge_glow_color.clone()),
            ("--edge-glow-size", self.edge_glow_size.clone()),
            ("--scanline-gradient-direction", self.scanline_gradient_direction.to_string()),
            ("--glitch-intensity", self.glitch_intensity.to_string()),
            ("--glitch-speed", self.glitch_speed.clone()),
            ("--flicker-intensity", self.flicker_intensity.to_string()),
            ("--flicker-speed", self.flicker_speed.clone()),
            ("--vignette-intensity", self.vignette_intensity.to_string()),
        ]
    }

    /// Inline declaration list, e.g. `--sweep-duration: 10s; --sweep-thickness: 10px; ...`
    pub fn to_inline_style(&self) -> String {
        self.css_properties()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    options::values::{Magnitude, Orientation, SweepStyle, Theme},
};

/// Declares every recognized option once and derives the total
/// [`CrtConfig`], the presence-tracking [`PartialConfig`] and the layering
/// operations between them, so the two structs can never drift apart.
macro_rules! crt_options {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty = $default:expr, )*) => {
        /// Fully populated CRT effect configuration
        ///
        /// `CrtConfig::default()` is the bottom layer of every resolution.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct CrtConfig {
            $( $(#[$meta])* pub $field: $ty, )*
        }

        impl Default for CrtConfig {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        /// A configuration layer where only the present fields are considered set
        ///
        /// Presets and caller overrides are both partial configurations. A field
        /// holding `Some` always wins over lower layers, even when its value equals
        /// the default.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct PartialConfig {
            $(
                $(#[$meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl PartialConfig {
            $(
                #[doc = concat!("Set `", stringify!($field), "` on this layer")]
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Overwrite every field of `config` that is present in this layer
            pub fn apply_to(&self, config: &mut CrtConfig) {
                $(
                    if let Some(value) = &self.$field {
                        config.$field = value.clone();
                    }
                )*
            }

            /// Stack `upper` on top of this layer; fields present in `upper` win
            pub fn merge(&self, upper: &PartialConfig) -> PartialConfig {
                PartialConfig {
                    $( $field: upper.$field.clone().or_else(|| self.$field.clone()), )*
                }
            }

            /// Number of fields set on this layer
            pub fn len(&self) -> usize {
                0 $( + usize::from(self.$field.is_some()) )*
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }

        impl From<CrtConfig> for PartialConfig {
            fn from(config: CrtConfig) -> Self {
                PartialConfig {
                    $( $field: Some(config.$field), )*
                }
            }
        }
    };
}

crt_options! {
    /// Master toggle; when false the content is passed through untouched
    enabled: bool = true,

    /// Sweep animation period in seconds
    sweep_duration: f64 = 10.0,
    /// Height of the sweep band in pixels
    sweep_thickness: f64 = 10.0,
    sweep_style: SweepStyle = SweepStyle::Classic,

    /// Scanline opacity (0.0-1.0)
    scanline_opacity: f64 = 0.2,
    /// `rgb(...)`/`rgba(...)` color used when the theme is `custom`
    scanline_color: String = "rgba(91, 179, 135, 0.2)".to_string(),
    /// Thickness of each scanline in pixels
    scanline_thickness: f64 = 2.0,
    /// Gap between scanlines in pixels
    scanline_gap: f64 = 3.0,
    scanline_orientation: Orientation = Orientation::Horizontal,

    enable_scanlines: bool = true,
    enable_sweep: bool = true,
    /// Outer glow around the container
    enable_glow: bool = false,
    /// Inner glow along the container edges
    enable_edge_glow: bool = false,
    enable_flicker: bool = false,
    enable_vignette: bool = false,
    #[serde(alias = "glitchMode")]
    enable_glitch: bool = false,

    theme: Theme = Theme::Green,
    glow_color: String = "rgba(0, 255, 128, 0.3)".to_string(),
    edge_glow_color: String = "rgba(0, 255, 128, 0.2)".to_string(),
    /// Size of the inner edge glow in pixels
    edge_glow_size: f64 = 30.0,

    flicker_intensity: Magnitude = Magnitude::default(),
    glitch_intensity: Magnitude = Magnitude::default(),
    /// Flicker period: keyword level or seconds
    flicker_speed: Magnitude = Magnitude::default(),
    /// Glitch period: keyword level or seconds
    glitch_speed: Magnitude = Magnitude::default(),

    /// Darkness at the edges (0.0-1.0)
    vignette_intensity: f64 = 0.4,
}

impl PartialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a layer from TOML using the camelCase option names
    ///
    /// Unknown keys are ignored.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ConfigError::ParseFailed {
                path: "<inline>".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

//! # Effect Options
//!
//! Every option the CRT overlay recognizes, in two shapes:
//!
//! - [`CrtConfig`]: the total configuration, every field populated
//! - [`PartialConfig`]: a layer (preset or caller overrides) in which a field
//!   is only considered set when present
//!
//! Option names follow the camelCase spelling used in configuration files
//! (`scanlineOpacity`, `enableEdgeGlow`, ...).

pub mod types;
pub mod values;

pub use types::{CrtConfig, PartialConfig};
pub use values::{Level, Magnitude, Orientation, SweepStyle, Theme};

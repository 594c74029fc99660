//! Scanline color resolution.
//!
//! The stylesheet builds the scanline color as `rgba(var(--scanline-color-rgb), opacity)`,
//! so the resolver only ever produces a bare `r, g, b` triple. Alpha is owned by
//! the separate `scanlineOpacity` option.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::options::Theme;

/// Classic CRT green, also the fallback for anything unparseable
pub const FALLBACK_RGB: &str = "91, 179, 135";

pub const GREEN_RGB: &str = FALLBACK_RGB;
pub const AMBER_RGB: &str = "255, 200, 100";
pub const BLUE_RGB: &str = "100, 200, 255";

/// RGB triple for a built-in theme, `None` for `custom`
pub fn theme_rgb(theme: &Theme) -> Option<&'static str> {
    match theme {
        Theme::Green => Some(GREEN_RGB),
        Theme::Amber => Some(AMBER_RGB),
        Theme::Blue => Some(BLUE_RGB),
        Theme::Custom => None,
        Theme::Other(name) => {
            trace!("Unknown theme '{}', using green", name);
            Some(GREEN_RGB)
        }
    }
}

/// Scanline RGB triple for the given theme
///
/// Any theme other than `custom` wins over `scanline_color`.
pub fn resolve_scanline_rgb(theme: &Theme, scanline_color: &str) -> String {
    match theme_rgb(theme) {
        Some(rgb) => rgb.to_string(),
        None => extract_rgb(scanline_color),
    }
}

/// `rgb(`/`rgba(` followed by a run of digits, whitespace, dots and commas
const RGB_PATTERN: &str = r"rgba?\(\s*([\d\s.,]+)\)";

fn rgb_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(RGB_PATTERN).ok()).as_ref()
}

/// Extract the first three components of an `rgb(...)` or `rgba(...)` color
///
/// Returns them joined as `r, g, b`, each component as written. Strings that
/// are not an `rgb`/`rgba` call with three or four numeric components yield
/// [`FALLBACK_RGB`].
pub fn extract_rgb(color: &str) -> String {
    match rgb_components(color) {
        Some(parts) => parts[..3].join(", "),
        None => {
            trace!("Unparseable color '{}', using fallback", color);
            FALLBACK_RGB.to_string()
        }
    }
}

fn rgb_components(color: &str) -> Option<Vec<&str>> {
    rgb_pattern()?.captures_iter(color).find_map(|caps| {
        let parts: Vec<&str> = caps.get(1)?.as_str().split(',').map(str::trim).collect();
        let numeric = parts.iter().all(|p| p.parse::<f64>().is_ok());
        ((3..=4).contains(&parts.len()) && numeric).then_some(parts)
    })
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual variant of the animated sweep band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepStyle {
    /// Hard-edged bright band
    #[default]
    Classic,
    /// Blurred band; any unrecognized style also selects this variant
    #[serde(other)]
    Soft,
}

/// Direction of the scanline raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    #[serde(other)]
    Vertical,
}

impl Orientation {
    /// CSS gradient direction used to draw the scanline pattern
    pub fn gradient_direction(self) -> &'static str {
        match self {
            Orientation::Horizontal => "to bottom",
            Orientation::Vertical => "to right",
        }
    }
}

/// Scanline color theme
///
/// Unrecognized theme names are kept verbatim in [`Theme::Other`] so the
/// resolved configuration reports what the caller asked for. The color
/// resolver treats them as green.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    #[default]
    Green,
    Amber,
    Blue,
    /// Use the caller supplied `scanlineColor`
    Custom,
    Other(String),
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::Green => "green",
            Theme::Amber => "amber",
            Theme::Blue => "blue",
            Theme::Custom => "custom",
            Theme::Other(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Theme::Custom)
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        match value {
            "green" => Theme::Green,
            "amber" => Theme::Amber,
            "blue" => Theme::Blue,
            "custom" => Theme::Custom,
            other => Theme::Other(other.to_string()),
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        match Theme::from(value.as_str()) {
            Theme::Other(_) => Theme::Other(value),
            known => known,
        }
    }
}

impl From<Theme> for String {
    fn from(value: Theme) -> Self {
        match value {
            Theme::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword level accepted by intensity and speed options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    /// Parse a keyword; only the exact lowercase names are levels
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intensity or speed: either a keyword level or a raw number
///
/// Keywords are stored as written; unknown ones are resolved to the medium
/// level by the normalizer rather than rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Magnitude {
    Number(f64),
    Keyword(String),
}

impl Magnitude {
    pub fn level(level: Level) -> Self {
        Magnitude::Keyword(level.as_str().to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Magnitude::Number(n) => Some(*n),
            Magnitude::Keyword(_) => None,
        }
    }

    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Magnitude::Keyword(k) => Some(k),
            Magnitude::Number(_) => None,
        }
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Magnitude::level(Level::Medium)
    }
}

impl From<Level> for Magnitude {
    fn from(value: Level) -> Self {
        Magnitude::level(value)
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Magnitude::Number(value)
    }
}

impl From<&str> for Magnitude {
    fn from(value: &str) -> Self {
        Magnitude::Keyword(value.to_string())
    }
}

impl From<String> for Magnitude {
    fn from(value: String) -> Self {
        Magnitude::Keyword(value)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Number(n) => write!(f, "{}", n),
            Magnitude::Keyword(k) => f.write_str(k),
        }
    }
}

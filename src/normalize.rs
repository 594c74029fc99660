//! Keyword-or-number normalization for intensity and speed options.
//!
//! Every intensity or speed option accepts a keyword level (`low`, `medium`,
//! `high`) or a raw number. The functions here collapse both forms into the
//! single type the stylesheet consumes: a number for intensities and a CSS
//! duration string for speeds. Numbers are passed through unclamped, and
//! unknown keywords fall back to the medium level.

use tracing::trace;

use crate::options::{Level, Magnitude};

/// Values for the three keyword levels of one option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelTable {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl LevelTable {
    pub fn get(&self, level: Level) -> f64 {
        match level {
            Level::Low => self.low,
            Level::Medium => self.medium,
            Level::High => self.high,
        }
    }

    /// Value for a keyword, using the medium level for unknown keywords
    pub fn keyword(&self, keyword: &str) -> f64 {
        let level = Level::from_keyword(keyword).unwrap_or_else(|| {
            trace!("Unknown level '{}', using medium", keyword);
            Level::Medium
        });
        self.get(level)
    }
}

/// Flicker brightness variation
pub const FLICKER_INTENSITY: LevelTable = LevelTable { low: 0.05, medium: 0.08, high: 0.12 };

/// Glitch displacement strength
pub const GLITCH_INTENSITY: LevelTable = LevelTable { low: 0.3, medium: 0.6, high: 0.9 };

/// Flicker animation period in seconds
pub const FLICKER_SPEED: LevelTable = LevelTable { low: 1.5, medium: 0.8, high: 0.4 };

/// Glitch animation period in seconds
pub const GLITCH_SPEED: LevelTable = LevelTable { low: 1.0, medium: 0.6, high: 0.3 };

/// Resolve an intensity to a number
pub fn process_intensity(value: &Magnitude, table: &LevelTable) -> f64 {
    match value {
        Magnitude::Number(n) => *n,
        Magnitude::Keyword(keyword) => table.keyword(keyword),
    }
}

/// Resolve a speed to a CSS duration such as `0.8s`
pub fn process_speed(value: &Magnitude, table: &LevelTable) -> String {
    let seconds = match value {
        Magnitude::Number(n) => *n,
        Magnitude::Keyword(keyword) => table.keyword(keyword),
    };
    seconds_to_duration(seconds)
}

pub fn process_flicker_intensity(value: &Magnitude) -> f64 {
    process_intensity(value, &FLICKER_INTENSITY)
}

pub fn process_glitch_intensity(value: &Magnitude) -> f64 {
    process_intensity(value, &GLITCH_INTENSITY)
}

pub fn process_flicker_speed(value: &Magnitude) -> String {
    process_speed(value, &FLICKER_SPEED)
}

pub fn process_glitch_speed(value: &Magnitude) -> String {
    process_speed(value, &GLITCH_SPEED)
}

/// Format seconds with the shortest decimal form (`1.0` becomes `1s`)
pub fn seconds_to_duration(seconds: f64) -> String {
    format!("{}s", seconds)
}

/// Format pixels with the shortest decimal form (`30.0` becomes `30px`)
pub fn pixels(value: f64) -> String {
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flicker_intensity_keywords() {
        assert_eq!(process_flicker_intensity(&"low".into()), 0.05);
        assert_eq!(process_flicker_intensity(&"medium".into()), 0.08);
        assert_eq!(process_flicker_intensity(&"high".into()), 0.12);
    }

    #[test]
    fn test_glitch_intensity_keywords() {
        assert_eq!(process_glitch_intensity(&Level::Low.into()), 0.3);
        assert_eq!(process_glitch_intensity(&Level::Medium.into()), 0.6);
        assert_eq!(process_glitch_intensity(&Level::High.into()), 0.9);
    }

    #[test]
    fn test_numbers_pass_through_unclamped() {
        assert_eq!(process_flicker_intensity(&0.33.into()), 0.33);
        assert_eq!(process_glitch_intensity(&4.5.into()), 4.5);
        assert_eq!(process_glitch_intensity(&(-1.0).into()), -1.0);
    }

    #[test]
    fn test_speeds() {
        assert_eq!(process_flicker_speed(&"low".into()), "1.5s");
        assert_eq!(process_flicker_speed(&"high".into()), "0.4s");
        assert_eq!(process_glitch_speed(&"low".into()), "1s");
        assert_eq!(process_glitch_speed(&"medium".into()), "0.6s");
        assert_eq!(process_glitch_speed(&0.25.into()), "0.25s");
        assert_eq!(process_flicker_speed(&2.0.into()), "2s");
    }

    #[test]
    fn test_unknown_keyword_uses_medium() {
        assert_eq!(process_flicker_intensity(&"extreme".into()), 0.08);
        assert_eq!(process_glitch_intensity(&"".into()), 0.6);
        assert_eq!(process_flicker_speed(&"ludicrous".into()), "0.8s");
        assert_eq!(process_glitch_speed(&"0.3".into()), "0.6s");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(process_flicker_intensity(&"HIGH".into()), 0.08);
        assert_eq!(process_glitch_intensity(&" low".into()), 0.6);
        assert_eq!(process_flicker_speed(&"High".into()), "0.8s");
    }

    #[test]
    fn test_pixels() {
        assert_eq!(pixels(30.0), "30px");
        assert_eq!(pixels(0.2), "0.2px");
    }
}

//! End-to-end checks of the defaults < preset < overrides merge and the
//! derived values built on top of it.

use crt_effect::{
    color::extract_rgb,
    normalize::process_flicker_intensity,
    options::{Magnitude, Theme},
    presets::PresetName,
    resolve, CrtConfig, PartialConfig, PresetRegistry, StyleVariables,
};

/// A layer setting every option to a value that differs from the defaults
/// and from every built-in preset.
fn exotic_layer() -> PartialConfig {
    PartialConfig::new()
        .enabled(true)
        .sweep_duration(7.5)
        .sweep_thickness(33.0)
        .sweep_style(crt_effect::options::SweepStyle::Soft)
        .scanline_opacity(0.77)
        .scanline_color("rgb(1, 2, 3)")
        .scanline_thickness(9.0)
        .scanline_gap(11.0)
        .scanline_orientation(crt_effect::options::Orientation::Vertical)
        .enable_scanlines(false)
        .enable_sweep(false)
        .enable_glow(true)
        .enable_edge_glow(true)
        .enable_flicker(true)
        .enable_vignette(false)
        .enable_glitch(true)
        .theme("blue")
        .glow_color("rgba(1, 1, 1, 1)")
        .edge_glow_color("rgba(2, 2, 2, 1)")
        .edge_glow_size(3.0)
        .flicker_intensity(0.5)
        .glitch_intensity("high")
        .flicker_speed(4.0)
        .glitch_speed("low")
        .vignette_intensity(0.05)
}

#[test]
fn overrides_win_over_every_preset() {
    let overrides = exotic_layer();
    let mut expected = CrtConfig::default();
    overrides.apply_to(&mut expected);

    for name in PresetName::ALL {
        assert_eq!(resolve(Some(name.as_str()), &overrides), expected, "preset {}", name);
    }
    assert_eq!(resolve(None, &overrides), expected);
}

#[test]
fn preset_fields_fall_through_to_defaults() {
    let registry = PresetRegistry::new();
    let defaults = CrtConfig::default();

    for name in PresetName::ALL {
        let layer = registry.lookup(name.as_str());
        let config = resolve(Some(name.as_str()), &PartialConfig::new());

        assert_eq!(config.glow_color, layer.glow_color.clone().unwrap_or(defaults.glow_color.clone()));
        assert_eq!(config.edge_glow_size, layer.edge_glow_size.unwrap_or(defaults.edge_glow_size));
        assert_eq!(
            config.glitch_intensity,
            layer.glitch_intensity.clone().unwrap_or(defaults.glitch_intensity.clone())
        );
        assert_eq!(config.flicker_speed, defaults.flicker_speed, "no preset sets a speed");
    }
}

#[test]
fn unknown_preset_equals_no_preset() {
    assert_eq!(
        resolve(Some("nonexistent-preset"), &PartialConfig::new()),
        resolve(None, &PartialConfig::new())
    );
    assert_eq!(resolve(Some(""), &PartialConfig::new()), CrtConfig::default());
}

#[test]
fn explicit_default_value_beats_preset() {
    // dos disables the sweep; passing the default value back turns it on
    let overrides = PartialConfig::new().enable_sweep(CrtConfig::default().enable_sweep);
    assert!(resolve(Some("dos"), &overrides).enable_sweep);
    assert!(!resolve(Some("dos"), &PartialConfig::new()).enable_sweep);
}

#[test]
fn cyberpunk_with_overrides() {
    let overrides = PartialConfig::new().enable_glow(false).edge_glow_size(0.2);
    let config = resolve(Some("cyberpunk"), &overrides);

    assert_eq!(config.theme, Theme::Custom);
    assert_eq!(config.scanline_color, "rgba(255, 0, 255, 0.3)");
    assert!(!config.enable_glow);
    assert_eq!(config.edge_glow_size, 0.2);
    assert!(config.enable_glitch);
    assert_eq!(config.flicker_intensity, Magnitude::Keyword("medium".to_string()));

    let style = StyleVariables::from_config(&config);
    assert_eq!(style.scanline_color_rgb, "255, 0, 255");
    assert_eq!(style.edge_glow_size, "0.2px");
    assert_eq!(style.glitch_intensity.0, 0.3);
    assert_eq!(style.flicker_intensity.0, 0.08);
}

#[test]
fn theme_wins_over_scanline_color_unless_custom() {
    let green = PartialConfig::new().theme("green").scanline_color("rgba(255, 0, 0, 0.5)");
    let style = StyleVariables::from_config(&resolve(Some("dos"), &green));
    assert_eq!(style.scanline_color_rgb, "91, 179, 135");

    let custom = PartialConfig::new().theme("custom").scanline_color("rgba(255, 0, 0, 0.5)");
    let style = StyleVariables::from_config(&resolve(Some("fallout"), &custom));
    assert_eq!(style.scanline_color_rgb, "255, 0, 0");

    let unknown = PartialConfig::new().theme("magenta");
    let config = resolve(None, &unknown);
    assert_eq!(config.theme.as_str(), "magenta");
    assert_eq!(StyleVariables::from_config(&config).scanline_color_rgb, "91, 179, 135");
}

#[test]
fn color_and_intensity_helpers() {
    assert_eq!(extract_rgb("rgba(10, 20, 30, 0.5)"), "10, 20, 30");
    assert_eq!(extract_rgb("not-a-color"), "91, 179, 135");
    assert_eq!(process_flicker_intensity(&"low".into()), 0.05);
    assert_eq!(process_flicker_intensity(&0.33.into()), 0.33);
}

#[test]
fn overrides_loaded_from_toml() {
    let overrides = PartialConfig::from_toml_str(
        r#"
        enableGlow = false
        edgeGlowSize = 0.2
        glitchIntensity = 1.7
        flickerSpeed = "high"
        glitchSpeed = "HIGH"
        "#,
    )
    .unwrap();

    let config = resolve(Some("cyberpunk"), &overrides);
    let style = StyleVariables::from_config(&config);
    assert_eq!(style.glitch_intensity.0, 1.7);
    assert_eq!(style.flicker_speed, "0.4s");
    // Keywords are case-sensitive, so an uppercase level is unknown
    assert_eq!(style.glitch_speed, "0.6s");
    assert!(!config.enable_glow);
}

// src/presets/builtin.rs - Built-in preset table

use crate::{
    options::{Level, PartialConfig, SweepStyle, Theme},
    presets::{Preset, PresetMetadata, PresetName},
};

/// Build the preset for a built-in name
pub fn builtin(name: PresetName) -> Preset {
    let (metadata, config) = match name {
        PresetName::Fallout => (meta("FALLOUT", "Vault-Tec Terminal", "#5bb387"), fallout()),
        PresetName::Dos => (meta("DOS", "Hercules Monitor", "#ff6400"), dos()),
        PresetName::Cyberpunk => (meta("CYBERPUNK", "Neon Future", "#ff00ff"), cyberpunk()),
        PresetName::Commodore64 => (meta("C64", "8-Bit Computer", "#a0a0ff"), commodore64()),
        PresetName::Apple2 => (meta("APPLE ][", "Vintage Computer", "#78dc50"), apple2()),
        PresetName::Arcade => (meta("ARCADE", "Coin-Op Cabinet", "#00ff64"), arcade()),
        PresetName::Vt100 => (meta("VT100", "DEC Terminal", "#dfffeb"), vt100()),
        PresetName::Minimal => (meta("MINIMAL", "Subtle Effect", "#999"), minimal()),
    };

    Preset {
        name: name.as_str().to_string(),
        metadata,
        config,
    }
}

fn meta(display_name: &str, description: &str, accent_color: &str) -> PresetMetadata {
    PresetMetadata {
        display_name: display_name.to_string(),
        description: description.to_string(),
        accent_color: accent_color.to_string(),
    }
}

/// Green phosphor terminal with edge glow and gentle flicker
fn fallout() -> PartialConfig {
    PartialConfig::new()
        .theme(Theme::Green)
        .enable_scanlines(true)
        .scanline_opacity(0.25)
        .scanline_thickness(2.0)
        .scanline_gap(3.0)
        .enable_sweep(true)
        .sweep_duration(12.0)
        .sweep_thickness(10.0)
        .sweep_style(SweepStyle::Classic)
        .enable_glow(false)
        .enable_edge_glow(true)
        .edge_glow_color("rgba(91, 179, 135, 0.5)")
        .edge_glow_size(40.0)
        .enable_flicker(true)
        .flicker_intensity(Level::Low)
        .enable_vignette(true)
        .vignette_intensity(0.3)
        .enable_glitch(false)
}

/// Classic DOS/Hercules monitor
fn dos() -> PartialConfig {
    PartialConfig::new()
        .theme(Theme::Custom)
        .scanline_color("rgba(255, 100, 0, 0.3)")
        .enable_scanlines(true)
        .scanline_opacity(0.2)
        .scanline_thickness(2.0)
        .scanline_gap(4.0)
        .enable_sweep(false)
        .enable_glow(false)
        .enable_edge_glow(false)
        .enable_flicker(false)
        .enable_vignette(true)
        .vignette_intensity(0.25)
        .enable_glitch(false)
}

fn cyberpunk() -> PartialConfig {
    PartialConfig::new()
        .theme(Theme::Custom)
        .scanline_color("rgba(255, 0, 255, 0.3)")
        .enable_scanlines(true)
        .scanline_opacity(0.35)
        .scanline_thickness(2.0)
        .scanline_gap(2.0)
        .enable_sweep(true)
        .sweep_duration(5.0)
        .sweep_thickness(15.0)
        .sweep_style(SweepStyle::Classic)
        .enable_glow(true)
        .glow_color("rgba(255, 0, 200, 0.5)")
        .enable_edge_glow(true)
        .edge_glow_color("rgba(200, 0, 255, 0.6)")
        .edge_glow_size(50.0)
        .enable_flicker(true)
        .flicker_intensity(Level::Medium)
        .enable_vignette(true)
        .vignette_intensity(0.4)
        .enable_glitch(true)
        .glitch_intensity(Level::Low)
}

fn commodore64() -> PartialConfig {
    PartialConfig::new()
        .theme(Theme::Custom)
        .scanline_color("rgba(160, 160, 255, 0.35)")
        .enable_scanlines(true)
        .scanline_opacity(0.35)
        .scanline_thickness(3.0)
        .scanline_gap(2.0)
        .enable_sweep(true)
        .sweep_duration(10.0)
        .sweep_thickness(12.0)
        .sweep_style(SweepStyle::Classic)
        .enable_glow(false)
        .enable_edge_glow(false)
        .enable_flicker(true)
        .flicker_intensity(Level::Low)
        .enable_vignette(true)
        .vignette_intensity(0.35)
        .enable_glitch(false)
}

fn apple2() -> PartialConfig {
    PartialConfig::new()
        .theme(Theme::Custom)
        .scanline_color("rgba(120, 220, 80, 0.3)")
        .enable_scanlines(true)
        .scanline_opacity(0.3)
        .scanline_thickness(1.0)
        .scanline_gap(2.0)
        .enable_sweep(false)
        .enable_glow(false)
        .enable_edge_glow(false)
        .enable_flicker(false)
        .enable_vignette(true)
        .vignette_intensity(0.2)
        .enable_glitch(false)
}

/// Arcade cabinet: heavy scanlines, fast sweep, full glow
fn arcade() -> PartialConfig {
    PartialConfig::new()
        .theme(Theme::Custom)
        .scanline_color("rgba(0, 255, 100, 0.4)")
        .enable_scanlines(true)
        .scanline_opacity(0.4)
        .scanline_thickness(3.0)
        .scanline_gap(3.0)
        .enable_sweep(true)
        .sweep_duration(4.0)
        .sweep_thickness(15.0)
        .sweep_style(SweepStyle::Classic)
        .enable_glow(true)
        .glow_color("rgba(0, 255, 100, 0.5)")
        .enable_edge_glow(true)
        .edge_glow_color("rgba(0, 255, 100, 0.6)")
        .edge_glow_size(45.0)
        .enable_flicker(true)
        .flicker_intensity(Level::Medium)
        .enable_vignette(true)
        .vignette_intensity(0.45)
        .enable_glitch(false)
}

fn vt100() -> PartialConfig {
    PartialConfig::new()
        .theme(Theme::Custom)
        .scanline_color("rgba(220, 255, 235, 0.2)")
        .enable_scanlines(true)
        .scanline_opacity(0.15)
        .scanline_thickness(2.0)
        .scanline_gap(4.0)
        .enable_sweep(false)
        .enable_glow(false)
        .enable_edge_glow(false)
        .enable_flicker(false)
        .enable_vignette(true)
        .vignette_intensity(0.15)
        .enable_glitch(false)
}

fn minimal() -> PartialConfig {
    PartialConfig::new()
        .theme(Theme::Green)
        .enable_scanlines(true)
        .scanline_opacity(0.1)
        .scanline_thickness(1.0)
        .scanline_gap(4.0)
        .enable_sweep(false)
        .enable_glow(false)
        .enable_edge_glow(false)
        .enable_flicker(false)
        .enable_vignette(true)
        .vignette_intensity(0.2)
        .enable_glitch(false)
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, Level};

use crt_effect::{
    config::{overrides_from_assignments, Config},
    CrtConfig, CrtEffect, EffectFlags, PresetRegistry, StyleVariables,
};

#[derive(Parser)]
#[command(
    name = "crt-effect",
    version,
    about = "Resolve retro CRT overlay presets into CSS variables",
    long_about = "Merges a preset, the built-in defaults and your overrides into the CSS custom properties and classes that drive a CRT overlay stylesheet."
)]
struct Cli {
    /// Preset to start from (fallout, dos, cyberpunk, commodore64, apple2, arcade, vt100, minimal)
    #[arg(short, long)]
    preset: Option<String>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override an option, e.g. --set enableGlow=false --set flickerIntensity=high
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Content to wrap when printing HTML
    #[arg(long, default_value = "")]
    content: String,

    /// List the available presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Reject unknown presets and out-of-range values instead of falling back
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Css,
    Json,
    Toml,
    Html,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    preset: Option<&'a str>,
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a CrtConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'a StyleVariables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effects: Option<&'a EffectFlags>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<&'static str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so stdout stays clean for the output
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if cli.list_presets {
        list_presets();
        return Ok(());
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            debug!("No configuration file, starting from defaults");
            Config::default()
        }
    };

    if cli.preset.is_some() {
        config.preset = cli.preset.clone();
    }
    if !cli.overrides.is_empty() {
        let layer = overrides_from_assignments(&cli.overrides)?;
        debug!("{} override(s) from the command line", layer.len());
        config.overrides = config.overrides.merge(&layer);
    }

    if cli.strict {
        config.validate().map_err(|e| anyhow::anyhow!(e.user_message()))?;
    }

    let effect = config.effect();
    info!(
        "Resolving preset {}",
        effect.preset_name().unwrap_or("<none>")
    );

    let overlay = effect.wrap(cli.content.as_str());
    let output = match cli.format {
        Format::Css => render_css(&overlay),
        Format::Json => serde_json::to_string_pretty(&report(&effect, &overlay))?,
        Format::Toml => match overlay.config() {
            Some(resolved) => toml::to_string_pretty(resolved)?,
            None => "enabled = false\n".to_string(),
        },
        Format::Html => overlay.to_html(),
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn list_presets() {
    let registry = PresetRegistry::new();
    for preset in registry.iter() {
        println!(
            "{:<12} {:<10} {:<20} {}",
            preset.name, preset.metadata.display_name, preset.metadata.description, preset.metadata.accent_color
        );
    }
}

fn render_css(overlay: &crt_effect::Overlay<&str>) -> String {
    let (Some(style), Some(flags)) = (overlay.style(), overlay.flags()) else {
        return "/* CRT effect disabled */".to_string();
    };

    let mut css = format!("/* classes: {} */\n", flags.class_names().join(" "));
    css.push_str(".crt-effect-wrapper {\n");
    for (name, value) in style.css_properties() {
        css.push_str(&format!("  {}: {};\n", name, value));
    }
    css.push_str("}\n");
    css
}

fn report<'a>(effect: &'a CrtEffect, overlay: &'a crt_effect::Overlay<&str>) -> Report<'a> {
    Report {
        preset: effect.preset_name(),
        enabled: overlay.is_enabled(),
        config: overlay.config(),
        style: overlay.style(),
        effects: overlay.flags(),
        classes: overlay.flags().map(EffectFlags::class_names).unwrap_or_default(),
    }
}

// Walk through every built-in preset and print what it resolves to

use crt_effect::{
    style::Effect,
    CrtEffect, PartialConfig, PresetRegistry,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("CRT Effect preset showcase");

    let registry = PresetRegistry::new();
    println!("\n{} presets available", registry.len());

    for preset in registry.iter() {
        let overlay = CrtEffect::new()
            .preset(preset.name.as_str())
            .wrap(preset.metadata.description.as_str());

        let style = overlay
            .style()
            .ok_or_else(|| format!("preset {} resolved as disabled", preset.name))?;
        let flags = overlay.flags().ok_or("missing effect flags")?;

        println!("\n{} ({})", preset.metadata.display_name, preset.metadata.description);
        println!("   Scanline RGB:   {}", style.scanline_color_rgb);
        println!("   Sweep:          {} / {}", style.sweep_duration, style.sweep_thickness);
        println!("   Flicker:        {} every {}", style.flicker_intensity, style.flicker_speed);
        println!("   Glitch:         {} every {}", style.glitch_intensity, style.glitch_speed);
        println!("   Classes:        {}", flags.class_names().join(" "));
        println!(
            "   Glow/Vignette:  {}/{}",
            flags.contains(Effect::Glow),
            flags.contains(Effect::Vignette)
        );
    }

    // Custom controls layered over a preset, as a control panel would send them
    println!("\nFallout with custom controls...");
    let custom = PartialConfig::new()
        .enable_glitch(true)
        .glitch_intensity("high")
        .glitch_speed(0.2)
        .flicker_speed("low");
    let overlay = CrtEffect::new().preset("fallout").overrides(custom).wrap("VAULT 66");
    println!("{}", overlay.to_html());

    Ok(())
}

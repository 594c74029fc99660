//! Three-layer configuration resolution.
//!
//! Every resolved option comes from the highest layer that defines it:
//!
//! 1. caller overrides
//! 2. the named preset (if any, and if known)
//! 3. the built-in defaults
//!
//! Resolution is pure. The defaults are owned by the resolver and never
//! mutated; each call builds a fresh [`CrtConfig`].

use std::sync::OnceLock;

use tracing::debug;

use crate::{
    options::{CrtConfig, PartialConfig},
    presets::PresetRegistry,
};

/// Merges defaults, presets and overrides into a total configuration
#[derive(Debug, Clone)]
pub struct Resolver {
    defaults: CrtConfig,
    registry: PresetRegistry,
}

impl Resolver {
    /// Create a resolver over the built-in presets
    pub fn new() -> Self {
        Self::with_registry(PresetRegistry::new())
    }

    /// Create a resolver over a custom preset registry
    pub fn with_registry(registry: PresetRegistry) -> Self {
        Self {
            defaults: CrtConfig::default(),
            registry,
        }
    }

    /// Shared resolver over the built-in presets
    pub fn builtin() -> &'static Resolver {
        static BUILTIN: OnceLock<Resolver> = OnceLock::new();
        BUILTIN.get_or_init(Resolver::new)
    }

    pub fn defaults(&self) -> &CrtConfig {
        &self.defaults
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// Resolve the effective configuration
    ///
    /// Unknown preset names contribute nothing. This never fails.
    pub fn resolve(&self, preset: Option<&str>, overrides: &PartialConfig) -> CrtConfig {
        let mut config = self.defaults.clone();

        if let Some(layer) = preset.and_then(|name| self.registry.layer(name)) {
            layer.apply_to(&mut config);
        }
        overrides.apply_to(&mut config);

        debug!(
            preset = preset.unwrap_or("<none>"),
            overrides = overrides.len(),
            "Resolved CRT configuration"
        );
        config
    }

    /// Whether the overlay is enabled, reading only the `enabled` layers
    pub fn is_enabled(&self, preset: Option<&str>, overrides: &PartialConfig) -> bool {
        overrides
            .enabled
            .or_else(|| preset.and_then(|name| self.registry.layer(name)?.enabled))
            .unwrap_or(self.defaults.enabled)
    }

    /// Resolve only when the overlay is enabled
    pub fn resolve_enabled(&self, preset: Option<&str>, overrides: &PartialConfig) -> Option<CrtConfig> {
        if self.is_enabled(preset, overrides) {
            Some(self.resolve(preset, overrides))
        } else {
            debug!("CRT overlay disabled, skipping resolution");
            None
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve against the built-in presets
pub fn resolve(preset: Option<&str>, overrides: &PartialConfig) -> CrtConfig {
    Resolver::builtin().resolve(preset, overrides)
}

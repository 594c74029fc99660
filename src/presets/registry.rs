use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{PresetError, Result},
    options::PartialConfig,
    presets::{Preset, PresetName},
};

/// Registry for managing available presets
///
/// The registry provides a central place to discover presets by name.
/// Lookups of unknown names never fail through [`PresetRegistry::lookup`];
/// they yield an empty layer so resolution degrades to defaults plus overrides.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: HashMap<String, Preset>,
}

impl PresetRegistry {
    /// Create a new preset registry with all built-in presets
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_presets();
        registry
    }

    /// Create a registry without any presets
    pub fn empty() -> Self {
        Self {
            presets: HashMap::new(),
        }
    }

    fn register_builtin_presets(&mut self) {
        for name in PresetName::ALL {
            self.register(name.preset());
        }
    }

    /// Register a custom preset
    ///
    /// A preset with the same name is replaced.
    pub fn register(&mut self, preset: Preset) {
        self.presets.insert(preset.name.clone(), preset);
    }

    /// Get a preset by name
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Get a preset by name, failing for unknown names
    pub fn require(&self, name: &str) -> Result<&Preset> {
        self.get(name)
            .ok_or_else(|| PresetError::NotFound { name: name.to_string() }.into())
    }

    /// Borrow the configuration layer of a preset
    pub fn layer(&self, name: &str) -> Option<&PartialConfig> {
        let layer = self.get(name).map(|preset| &preset.config);
        if layer.is_none() {
            debug!("Unknown preset '{}', using no preset layer", name);
        }
        layer
    }

    /// Configuration layer of a preset; empty for unknown names
    pub fn lookup(&self, name: &str) -> PartialConfig {
        self.layer(name).cloned().unwrap_or_default()
    }

    /// Get all available preset names, sorted
    pub fn available_presets(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over all presets in name order
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        let mut presets: Vec<&Preset> = self.presets.values().collect();
        presets.sort_by(|a, b| a.name.cmp(&b.name));
        presets.into_iter()
    }

    /// Check if a preset is available
    pub fn has_preset(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Get the number of registered presets
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

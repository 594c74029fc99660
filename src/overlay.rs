//! # CRT Overlay
//!
//! The construction-time surface of the crate. A [`CrtEffect`] collects a
//! preset name and caller overrides, then wraps opaque content. The content
//! itself is never inspected or altered.
//!
//! ```rust
//! use crt_effect::{CrtEffect, PartialConfig};
//!
//! let overlay = CrtEffect::new()
//!     .preset("cyberpunk")
//!     .overrides(PartialConfig::new().enable_glow(false))
//!     .wrap("<p>Hello</p>");
//!
//! assert!(overlay.is_enabled());
//! assert!(overlay.to_html().contains("<p>Hello</p>"));
//!
//! let disabled = CrtEffect::new().enabled(false).wrap("<p>Hello</p>");
//! assert_eq!(disabled.to_html(), "<p>Hello</p>");
//! ```

use std::fmt;

use crate::{
    options::{CrtConfig, PartialConfig},
    resolve::Resolver,
    style::{EffectFlags, Effect, StyleVariables, GLOW_BOX_SHADOW, VIGNETTE_CLASS},
};

/// CRT overlay settings for one render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrtEffect {
    preset: Option<String>,
    overrides: PartialConfig,
}

impl CrtEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a named preset as the middle layer
    pub fn preset<S: Into<String>>(mut self, name: S) -> Self {
        self.preset = Some(name.into());
        self
    }

    /// Stack caller overrides; later calls win over earlier ones
    pub fn overrides(mut self, overrides: PartialConfig) -> Self {
        self.overrides = self.overrides.merge(&overrides);
        self
    }

    /// Master toggle
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.overrides.enabled = Some(enabled);
        self
    }

    pub fn preset_name(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    pub fn override_layer(&self) -> &PartialConfig {
        &self.overrides
    }

    /// Resolve the configuration without wrapping anything
    pub fn resolve(&self) -> CrtConfig {
        self.resolve_with(Resolver::builtin())
    }

    pub fn resolve_with(&self, resolver: &Resolver) -> CrtConfig {
        resolver.resolve(self.preset.as_deref(), &self.overrides)
    }

    /// Wrap content using the built-in presets
    pub fn wrap<C>(&self, content: C) -> Overlay<C> {
        self.wrap_with(Resolver::builtin(), content)
    }

    /// Wrap content using a custom resolver
    ///
    /// When the overlay is disabled nothing is resolved and the content is
    /// passed through.
    pub fn wrap_with<C>(&self, resolver: &Resolver, content: C) -> Overlay<C> {
        match resolver.resolve_enabled(self.preset.as_deref(), &self.overrides) {
            Some(config) => Overlay::Wrapped(WrappedOverlay::new(config, content)),
            None => Overlay::Passthrough(content),
        }
    }
}

/// Content wrapped with the derived overlay styling
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedOverlay<C> {
    pub config: CrtConfig,
    pub style: StyleVariables,
    pub flags: EffectFlags,
    pub content: C,
}

impl<C> WrappedOverlay<C> {
    pub fn new(config: CrtConfig, content: C) -> Self {
        Self {
            style: StyleVariables::from_config(&config),
            flags: EffectFlags::from_config(&config),
            config,
            content,
        }
    }
}

/// Result of wrapping content
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay<C> {
    /// Overlay disabled; content returned verbatim
    Passthrough(C),
    Wrapped(WrappedOverlay<C>),
}

impl<C> Overlay<C> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Overlay::Wrapped(_))
    }

    pub fn content(&self) -> &C {
        match self {
            Overlay::Passthrough(content) => content,
            Overlay::Wrapped(wrapped) => &wrapped.content,
        }
    }

    /// Unwrap the original content, untouched
    pub fn into_content(self) -> C {
        match self {
            Overlay::Passthrough(content) => content,
            Overlay::Wrapped(wrapped) => wrapped.content,
        }
    }

    pub fn config(&self) -> Option<&CrtConfig> {
        self.wrapped().map(|w| &w.config)
    }

    pub fn style(&self) -> Option<&StyleVariables> {
        self.wrapped().map(|w| &w.style)
    }

    pub fn flags(&self) -> Option<&EffectFlags> {
        self.wrapped().map(|w| &w.flags)
    }

    fn wrapped(&self) -> Option<&WrappedOverlay<C>> {
        match self {
            Overlay::Wrapped(wrapped) => Some(wrapped),
            Overlay::Passthrough(_) => None,
        }
    }
}

impl<C: fmt::Display> Overlay<C> {
    /// Render as HTML markup for the CRT stylesheet
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl<C: fmt::Display> fmt::Display for Overlay<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wrapped = match self {
            Overlay::Passthrough(content) => return write!(f, "{}", content),
            Overlay::Wrapped(wrapped) => wrapped,
        };

        write!(
            f,
            "<div class=\"{}\" style=\"position: relative; {}\">",
            escape_attribute(&wrapped.flags.class_names().join(" ")),
            escape_attribute(&wrapped.style.to_inline_style()),
        )?;

        write!(
            f,
            "<div class=\"{}\"",
            wrapped.flags.inner_class_names().join(" ")
        )?;
        if wrapped.flags.contains(Effect::Glow) {
            write!(f, " style=\"box-shadow: {}\"", GLOW_BOX_SHADOW)?;
        }
        write!(f, ">{}</div>", wrapped.content)?;

        if wrapped.flags.contains(Effect::Vignette) {
            write!(f, "<div class=\"{}\"></div>", VIGNETTE_CLASS)?;
        }
        f.write_str("</div>")
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

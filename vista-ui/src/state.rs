//! Theme and form contexts shared through the Dioxus render tree.
//!
//! `ThemeContext` bundles the theme config and its resolved tokens into
//! signals provided via `use_context_provider`. Child components retrieve it
//! with `use_theme()`. Tokens are re-resolved only when the config changes.

use dioxus::prelude::*;
use vista_core::theme::{ControlSize, ThemeConfig, ThemeMode, ThemeTokens};

/// Theme shared by every Vista component.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    /// Current theme configuration
    pub config: Signal<ThemeConfig>,
    /// Tokens resolved from `config`
    pub tokens: Signal<ThemeTokens>,
    /// Set when the last config change could not be resolved
    pub error_msg: Signal<Option<String>>,
}

impl ThemeContext {
    /// Create a context for `config`, falling back to default tokens if it
    /// names an unknown color or level.
    pub fn new(config: ThemeConfig) -> Self {
        let (tokens, error) = match ThemeTokens::resolve(&config) {
            Ok(tokens) => (tokens, None),
            Err(e) => {
                log::error!("Failed to resolve theme tokens: {}", e);
                (ThemeTokens::default(), Some(e.to_string()))
            }
        };
        Self {
            config: Signal::new(config),
            tokens: Signal::new(tokens),
            error_msg: Signal::new(error),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.config.read().mode
    }

    /// Replace the config. Tokens are kept as they were if it does not resolve.
    pub fn set_config(&mut self, config: ThemeConfig) {
        match ThemeTokens::resolve(&config) {
            Ok(tokens) => {
                self.tokens.set(tokens);
                self.error_msg.set(None);
            }
            Err(e) => {
                log::warn!("Keeping previous theme tokens: {}", e);
                self.error_msg.set(Some(e.to_string()));
            }
        }
        self.config.set(config);
    }

    /// Mode changes do not affect tokens, only which tokens are picked.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.config.write().mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        let mode = self.mode().toggled();
        self.set_mode(mode);
    }

    pub fn set_theme_color(&mut self, theme_color: &str, level: u16) {
        let config = ThemeConfig {
            theme_color: theme_color.to_string(),
            primary_color_level: level,
            ..self.config.read().clone()
        };
        self.set_config(config);
    }
}

/// Provide a `ThemeContext` for `config` to all descendants.
pub fn use_theme_provider(config: ThemeConfig) -> ThemeContext {
    use_context_provider(move || ThemeContext::new(config))
}

/// Read the nearest `ThemeContext`.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Size set by an enclosing form layout.
#[derive(Clone, Copy, PartialEq)]
pub struct FormContext {
    pub size: ControlSize,
}

/// Size set by an enclosing input group.
#[derive(Clone, Copy, PartialEq)]
pub struct InputGroupContext {
    pub size: ControlSize,
}

//! Theme configuration and the resolved token snapshot.
//!
//! Components never read ambient CSS state. The app builds a [`ThemeConfig`]
//! (from defaults or JSON), resolves it once into [`ThemeTokens`] and hands
//! both down the render tree.

use crate::error::VistaError;
use crate::scales::{self, ColorScale, GRAY, INDIGO, RED, WHITE};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_THEME_COLOR: &str = "indigo";
pub const DEFAULT_PRIMARY_LEVEL: u16 = 600;
pub const DEFAULT_RADIUS_MD: &str = "0.375rem";

/// Light or dark rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Pick the dark or light variant of a value.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        if self.is_dark() {
            dark
        } else {
            light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Size of form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl ControlSize {
    /// Control height in Tailwind spacing units (1 unit = 4px).
    pub fn units(self) -> u32 {
        match self {
            ControlSize::Xs => 7,
            ControlSize::Sm => 9,
            ControlSize::Md => 11,
            ControlSize::Lg => 14,
        }
    }

    pub fn height_px(self) -> u32 {
        self.units() * 4
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ControlSize::Xs => "xs",
            ControlSize::Sm => "sm",
            ControlSize::Md => "md",
            ControlSize::Lg => "lg",
        }
    }
}

impl fmt::Display for ControlSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// App-wide theme settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    /// Tailwind scale name used for primary accents, e.g. "indigo".
    pub theme_color: String,
    /// Shade of `theme_color` used as the primary token, e.g. 600.
    pub primary_color_level: u16,
    /// Default size for controls not sized by a form or input group.
    pub control_size: ControlSize,
    pub radius_md: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            primary_color_level: DEFAULT_PRIMARY_LEVEL,
            control_size: ControlSize::default(),
            radius_md: DEFAULT_RADIUS_MD.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON theme config; missing keys take defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Class fragment naming the primary shade, e.g. "indigo-600".
    pub fn theme_color_class(&self) -> String {
        format!("{}-{}", self.theme_color, self.primary_color_level)
    }
}

/// Snapshot of the design tokens components style themselves with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub primary: String,
    pub primary50: String,
    pub primary100: String,
    pub red: String,
    pub gray50: String,
    pub gray100: String,
    pub gray300: String,
    pub gray400: String,
    pub gray500: String,
    pub gray600: String,
    pub gray700: String,
    pub gray800: String,
    pub white: String,
    pub radius_md: String,
}

impl ThemeTokens {
    /// Resolve the tokens for `config` against the built-in scales.
    pub fn resolve(config: &ThemeConfig) -> Result<Self, VistaError> {
        let scale = scales::scale(&config.theme_color)
            .ok_or_else(|| VistaError::UnknownColor(config.theme_color.clone()))?;
        let primary = scales::shade(&config.theme_color, config.primary_color_level)?;
        log::debug!(
            "Resolved theme tokens for {} ({})",
            config.theme_color_class(),
            config.mode.as_str()
        );
        Ok(Self::build(scale, primary, &config.radius_md))
    }

    fn build(scale: &ColorScale, primary: &str, radius_md: &str) -> Self {
        // Index into scales::LEVELS: 0 = 50, 1 = 100, 3 = 300 ...
        Self {
            primary: primary.to_string(),
            primary50: scale.shades[0].to_string(),
            primary100: scale.shades[1].to_string(),
            red: RED.shades[5].to_string(),
            gray50: GRAY.shades[0].to_string(),
            gray100: GRAY.shades[1].to_string(),
            gray300: GRAY.shades[3].to_string(),
            gray400: GRAY.shades[4].to_string(),
            gray500: GRAY.shades[5].to_string(),
            gray600: GRAY.shades[6].to_string(),
            gray700: GRAY.shades[7].to_string(),
            gray800: GRAY.shades[8].to_string(),
            white: WHITE.to_string(),
            radius_md: radius_md.to_string(),
        }
    }
}

impl Default for ThemeTokens {
    /// Tokens for `ThemeConfig::default()`.
    fn default() -> Self {
        Self::build(&INDIGO, INDIGO.shades[6], DEFAULT_RADIUS_MD)
    }
}

/// Fill and stroke colors for choropleth regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapColors {
    /// Fill for regions without a matching record.
    pub default_fill: String,
    pub stroke: String,
}

impl MapColors {
    pub fn for_mode(mode: ThemeMode, tokens: &ThemeTokens) -> Self {
        Self {
            default_fill: mode.pick(&tokens.gray500, &tokens.gray100).clone(),
            stroke: mode.pick(&tokens.gray600, &tokens.gray300).clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ThemeConfig::default();
        assert_eq!(config.mode, ThemeMode::Light);
        assert_eq!(config.theme_color_class(), "indigo-600");
        assert_eq!(config.control_size, ControlSize::Md);
    }

    #[test]
    fn test_partial_json_config() {
        let config = ThemeConfig::from_json(r#"{"mode":"dark","themeColor":"emerald"}"#).unwrap();
        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.theme_color, "emerald");
        assert_eq!(config.primary_color_level, DEFAULT_PRIMARY_LEVEL);
        assert_eq!(config.radius_md, DEFAULT_RADIUS_MD);
    }

    #[test]
    fn test_bad_json_config() {
        assert!(ThemeConfig::from_json(r#"{"mode":"sepia"}"#).is_err());
        assert!(ThemeConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_resolve_tokens() {
        let config = ThemeConfig {
            theme_color: "blue".to_string(),
            primary_color_level: 500,
            ..ThemeConfig::default()
        };
        let tokens = ThemeTokens::resolve(&config).unwrap();
        assert_eq!(tokens.primary, "#3b82f6");
        assert_eq!(tokens.primary50, "#eff6ff");
        assert_eq!(tokens.primary100, "#dbeafe");
        assert_eq!(tokens.red, "#ef4444");
        assert_eq!(tokens.gray800, "#1f2937");
        assert_eq!(tokens.white, "#ffffff");
        assert_eq!(tokens.radius_md, "0.375rem");
    }

    #[test]
    fn test_default_tokens_match_default_config() {
        let resolved = ThemeTokens::resolve(&ThemeConfig::default()).unwrap();
        assert_eq!(resolved, ThemeTokens::default());
    }

    #[test]
    fn test_resolve_unknown_color() {
        let config = ThemeConfig {
            theme_color: "mauve".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(
            ThemeTokens::resolve(&config),
            Err(VistaError::UnknownColor("mauve".to_string()))
        );
    }

    #[test]
    fn test_control_sizes() {
        assert_eq!(ControlSize::Xs.units(), 7);
        assert_eq!(ControlSize::Lg.height_px(), 56);
        assert_eq!(ControlSize::Sm.to_string(), "sm");
    }

    #[test]
    fn test_map_colors_follow_mode() {
        let tokens = ThemeTokens::default();
        let light = MapColors::for_mode(ThemeMode::Light, &tokens);
        assert_eq!(light.default_fill, tokens.gray100);
        assert_eq!(light.stroke, tokens.gray300);
        let dark = MapColors::for_mode(ThemeMode::Dark, &tokens);
        assert_eq!(dark.default_fill, tokens.gray500);
        assert_eq!(dark.stroke, tokens.gray600);
    }
}

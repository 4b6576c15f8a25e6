//! Style derivation for the themed select control.
//!
//! Nothing here keeps state: every render builds a fresh [`SelectStyles`]
//! from the current tokens, mode and validity flag, and asks it for the
//! declarations of each part of the control.

use crate::theme::{ControlSize, ThemeMode, ThemeTokens};
use serde::Serialize;

/// Prefix of every box-shadow outline the control draws.
pub const SHADOW_BASE: &str = "0 0 0 1px ";

/// Stacking order of the open menu.
pub const MENU_Z_INDEX: u32 = 50;

/// Class prefix for the control's inner parts (`select-option`, ...).
pub const CLASS_PREFIX: &str = "select";

/// Ordered CSS declarations. Setting a property twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleMap(Vec<(String, String)>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property.to_string(), value)),
        }
        self
    }

    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Layer `other` on top of `self`.
    pub fn merge(&mut self, other: &StyleMap) -> &mut Self {
        for (property, value) in &other.0 {
            self.set(property, value.clone());
        }
        self
    }

    /// Render as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Outline drawn around the control.
///
/// Invalid wins over focused; a valid, unfocused control has no outline.
pub fn box_shadow(invalid: bool, focused: bool, tokens: &ThemeTokens) -> String {
    if invalid {
        return format!("{}{}", SHADOW_BASE, tokens.red);
    }
    if focused {
        return format!("{}{}", SHADOW_BASE, tokens.primary);
    }
    "none".to_string()
}

/// Pick the control size: explicit prop, then input group, then form, then theme.
pub fn resolve_size(
    explicit: Option<ControlSize>,
    input_group: Option<ControlSize>,
    form: Option<ControlSize>,
    theme_default: ControlSize,
) -> ControlSize {
    explicit.or(input_group).or(form).unwrap_or(theme_default)
}

/// Root classes: `select select-{size}` plus any caller classes.
pub fn select_class(size: ControlSize, extra: Option<&str>) -> String {
    let mut classes = vec![CLASS_PREFIX.to_string(), format!("{}-{}", CLASS_PREFIX, size)];
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        classes.push(extra.to_string());
    }
    classes.join(" ")
}

/// Height classes for the control, e.g. `h-11 min-h-11`.
pub fn control_class(size: ControlSize) -> String {
    format!("h-{0} min-h-{0}", size.units())
}

pub fn option_class(selected: bool, disabled: bool, focused: bool) -> String {
    let mut classes = vec!["select-option"];
    if selected {
        classes.push("selected");
    }
    if disabled {
        classes.push("disabled");
    }
    if focused {
        classes.push("focused");
    }
    classes.join(" ")
}

/// Classes for the check mark on a selected option.
pub fn check_icon_class(theme_color_class: &str) -> String {
    format!("text-{} dark:text-white text-xl", theme_color_class)
}

pub fn loading_indicator_class(theme_color_class: &str) -> String {
    format!("select-loading-indicatior text-{}", theme_color_class)
}

/// Color slots handed to the dropdown renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPalette {
    /// Control and menu background.
    pub neutral0: String,
    pub neutral10: String,
    /// Control border.
    pub neutral20: String,
    /// Control border on hover.
    pub neutral30: String,
    /// Text.
    pub neutral80: String,
    /// Focused option background.
    pub primary25: String,
    /// Selected option background.
    pub primary50: String,
    pub primary: String,
}

impl SelectPalette {
    pub fn derive(mode: ThemeMode, tokens: &ThemeTokens) -> Self {
        let border = mode.pick(&tokens.gray600, &tokens.gray300);
        Self {
            neutral0: mode.pick(&tokens.gray800, &tokens.white).clone(),
            neutral10: border.clone(),
            neutral20: border.clone(),
            neutral30: border.clone(),
            neutral80: mode.pick(&tokens.gray400, &tokens.gray700).clone(),
            primary25: tokens.primary50.clone(),
            primary50: tokens.primary100.clone(),
            primary: tokens.primary.clone(),
        }
    }
}

/// Caller-supplied declarations layered over the derived ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectStyleOverrides {
    pub control: StyleMap,
    pub input: StyleMap,
    pub menu: StyleMap,
    pub option: StyleMap,
}

/// Styles for one render of the select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStyles {
    pub size: ControlSize,
    pub invalid: bool,
    pub palette: SelectPalette,
    tokens: ThemeTokens,
    overrides: SelectStyleOverrides,
}

impl SelectStyles {
    pub fn new(tokens: &ThemeTokens, mode: ThemeMode, size: ControlSize, invalid: bool) -> Self {
        Self {
            size,
            invalid,
            palette: SelectPalette::derive(mode, tokens),
            tokens: tokens.clone(),
            overrides: SelectStyleOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: SelectStyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn box_shadow(&self, focused: bool) -> String {
        box_shadow(self.invalid, focused, &self.tokens)
    }

    pub fn control(&self, focused: bool, disabled: bool) -> StyleMap {
        let height = format!("{}px", self.size.height_px());
        let mut style = StyleMap::new()
            .with("display", "flex")
            .with("align-items", "center")
            .with("position", "relative")
            .with("height", height.clone())
            .with("min-height", height)
            .with("background-color", self.palette.neutral0.clone())
            .with("color", self.palette.neutral80.clone())
            .with("border", format!("1px solid {}", self.palette.neutral20))
            .with("box-shadow", self.box_shadow(focused))
            .with("border-radius", self.tokens.radius_md.clone())
            .with("cursor", "pointer");
        if self.invalid {
            style.set("border-color", self.tokens.red.clone());
        }
        if disabled {
            style.set("opacity", "0.6").set("cursor", "not-allowed");
        }
        style.merge(&self.overrides.control);
        style
    }

    /// Declarations applied while the pointer is over the control.
    pub fn control_hover(&self, focused: bool) -> StyleMap {
        let mut style = StyleMap::new()
            .with("box-shadow", self.box_shadow(focused))
            .with("cursor", "pointer");
        if !self.invalid {
            style.set("border-color", self.palette.neutral30.clone());
        }
        style
    }

    pub fn input(&self) -> StyleMap {
        let mut style = StyleMap::new()
            .with("outline", "none")
            .with("outline-offset", "0")
            .with("box-shadow", "none !important");
        style.merge(&self.overrides.input);
        style
    }

    pub fn menu(&self) -> StyleMap {
        let mut style = StyleMap::new()
            .with("position", "absolute")
            .with("top", "100%")
            .with("left", "0")
            .with("right", "0")
            .with("margin-top", "4px")
            .with("background-color", self.palette.neutral0.clone())
            .with("border", format!("1px solid {}", self.palette.neutral20))
            .with("border-radius", self.tokens.radius_md.clone())
            .with("z-index", MENU_Z_INDEX.to_string());
        style.merge(&self.overrides.menu);
        style
    }

    pub fn option(&self, selected: bool, focused: bool, disabled: bool) -> StyleMap {
        let mut style = StyleMap::new()
            .with("display", "flex")
            .with("align-items", "center")
            .with("justify-content", "space-between")
            .with("padding", "8px 12px")
            .with("color", self.palette.neutral80.clone())
            .with("cursor", "pointer");
        if selected {
            style.set("background-color", self.palette.primary50.clone());
        } else if focused {
            style.set("background-color", self.palette.primary25.clone());
        }
        if disabled {
            style.set("opacity", "0.5").set("cursor", "not-allowed");
        }
        style.merge(&self.overrides.option);
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> ThemeTokens {
        ThemeTokens::default()
    }

    #[test]
    fn test_box_shadow_priority() {
        let t = tokens();
        assert_eq!(box_shadow(true, true, &t), format!("0 0 0 1px {}", t.red));
        assert_eq!(box_shadow(true, false, &t), format!("0 0 0 1px {}", t.red));
        assert_eq!(box_shadow(false, true, &t), format!("0 0 0 1px {}", t.primary));
        assert_eq!(box_shadow(false, false, &t), "none");
    }

    #[test]
    fn test_resolve_size_priority() {
        use ControlSize::*;
        assert_eq!(resolve_size(Some(Xs), Some(Sm), Some(Lg), Md), Xs);
        assert_eq!(resolve_size(None, Some(Sm), Some(Lg), Md), Sm);
        assert_eq!(resolve_size(None, None, Some(Lg), Md), Lg);
        assert_eq!(resolve_size(None, None, None, Md), Md);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(select_class(ControlSize::Sm, None), "select select-sm");
        assert_eq!(select_class(ControlSize::Lg, Some(" w-64 ")), "select select-lg w-64");
        assert_eq!(control_class(ControlSize::Md), "h-11 min-h-11");
        assert_eq!(option_class(true, false, true), "select-option selected focused");
        assert_eq!(option_class(false, false, false), "select-option");
        assert_eq!(check_icon_class("indigo-600"), "text-indigo-600 dark:text-white text-xl");
    }

    #[test]
    fn test_palette_by_mode() {
        let t = tokens();
        let light = SelectPalette::derive(ThemeMode::Light, &t);
        assert_eq!(light.neutral0, t.white);
        assert_eq!(light.neutral20, t.gray300);
        assert_eq!(light.neutral80, t.gray700);
        let dark = SelectPalette::derive(ThemeMode::Dark, &t);
        assert_eq!(dark.neutral0, t.gray800);
        assert_eq!(dark.neutral30, t.gray600);
        assert_eq!(dark.neutral80, t.gray400);
        assert_eq!(dark.primary25, t.primary50);
        assert_eq!(dark.primary50, t.primary100);
    }

    #[test]
    fn test_control_style_when_invalid() {
        let t = tokens();
        let styles = SelectStyles::new(&t, ThemeMode::Light, ControlSize::Md, true);
        let control = styles.control(true, false);
        assert_eq!(control.get("border-color"), Some(t.red.as_str()));
        assert_eq!(control.get("box-shadow"), Some(format!("0 0 0 1px {}", t.red).as_str()));
        assert_eq!(control.get("border-radius"), Some("0.375rem"));
        assert_eq!(control.get("height"), Some("44px"));
        assert_eq!(styles.control_hover(false).get("cursor"), Some("pointer"));
        assert_eq!(styles.control_hover(false).get("border-color"), None);
    }

    #[test]
    fn test_control_style_when_valid() {
        let t = tokens();
        let styles = SelectStyles::new(&t, ThemeMode::Light, ControlSize::Sm, false);
        assert_eq!(styles.control(false, false).get("box-shadow"), Some("none"));
        assert_eq!(styles.control(false, false).get("border-color"), None);
        assert_eq!(
            styles.control_hover(true).get("box-shadow"),
            Some(format!("0 0 0 1px {}", t.primary).as_str())
        );
    }

    #[test]
    fn test_menu_and_input() {
        let styles = SelectStyles::new(&tokens(), ThemeMode::Dark, ControlSize::Md, false);
        assert_eq!(styles.menu().get("z-index"), Some("50"));
        assert_eq!(styles.input().get("outline"), Some("none"));
        assert_eq!(styles.input().get("box-shadow"), Some("none !important"));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = SelectStyleOverrides {
            menu: StyleMap::new().with("z-index", "9999"),
            control: StyleMap::new().with("border-radius", "0"),
            ..SelectStyleOverrides::default()
        };
        let styles = SelectStyles::new(&tokens(), ThemeMode::Light, ControlSize::Md, false)
            .with_overrides(overrides);
        assert_eq!(styles.menu().get("z-index"), Some("9999"));
        assert_eq!(styles.control(false, false).get("border-radius"), Some("0"));
    }

    #[test]
    fn test_style_map_css() {
        let mut style = StyleMap::new().with("color", "red").with("cursor", "pointer");
        style.set("color", "blue");
        assert_eq!(style.to_css(), "color: blue; cursor: pointer;");
    }
}

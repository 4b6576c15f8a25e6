//! Error display component.

use crate::state::use_theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a box tinted with the theme's red.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let theme = use_theme();
    let red = theme.tokens.read().red.clone();

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; color: {red}; border-radius: 4px; border: 1px solid {red};",
            strong { "Error: " }
            "{props.message}"
        }
    }
}

//! Light/dark mode switch.

use crate::state::use_theme;
use dioxus::prelude::*;

/// Button flipping the theme context between light and dark mode.
#[component]
pub fn ThemeModeToggle() -> Element {
    let mut theme = use_theme();
    let mode = theme.mode();
    let tokens = theme.tokens.read().clone();
    let label = mode.pick("Light mode", "Dark mode");
    let border = mode.pick(&tokens.gray600, &tokens.gray300);

    rsx! {
        button {
            r#type: "button",
            style: "padding: 4px 12px; border: 1px solid {border}; border-radius: {tokens.radius_md}; background: transparent; color: inherit; cursor: pointer;",
            onclick: move |_| theme.toggle_mode(),
            "{label}"
        }
    }
}

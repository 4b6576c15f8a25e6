//! Indicators drawn on the right side of the select control.

use super::icons::{Icon, ICON_CHEVRON_DOWN, ICON_X};
use super::spinner::Spinner;
use dioxus::prelude::*;
use vista_core::select::loading_indicator_class;

/// Chevron shown on every select.
#[component]
pub fn DropdownIndicator() -> Element {
    rsx! {
        div {
            class: "select-dropdown-indicator",
            style: "display: flex; padding: 0 4px;",
            Icon { path: ICON_CHEVRON_DOWN }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ClearIndicatorProps {
    pub on_clear: EventHandler<()>,
}

/// Clears the current value. The click does not reach the control, so the
/// menu stays as it was.
#[component]
pub fn ClearIndicator(props: ClearIndicatorProps) -> Element {
    let on_clear = props.on_clear;

    rsx! {
        div {
            role: "button",
            aria_label: "Clear value",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_clear.call(());
            },
            div {
                class: "select-clear-indicator",
                style: "display: flex; padding: 0 4px;",
                Icon { path: ICON_X }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LoadingIndicatorProps {
    /// Primary shade class fragment, e.g. "indigo-600"
    pub theme_color_class: String,
    pub color: String,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        Spinner {
            class: loading_indicator_class(&props.theme_color_class),
            color: props.color.clone(),
        }
    }
}

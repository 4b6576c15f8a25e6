//! Inline heroicons (20px solid set).

use dioxus::prelude::*;

pub const ICON_CHECK: &str = "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z";
pub const ICON_CHEVRON_DOWN: &str = "M5.293 7.293a1 1 0 011.414 0L10 10.586l3.293-3.293a1 1 0 111.414 1.414l-4 4a1 1 0 01-1.414 0l-4-4a1 1 0 010-1.414z";
pub const ICON_X: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";

#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    /// SVG path data, one of the `ICON_*` constants
    pub path: &'static str,
    #[props(default)]
    pub class: String,
    #[props(default)]
    pub style: String,
}

/// A 1em square icon drawn in `currentColor`.
#[component]
pub fn Icon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            style: "{props.style}",
            view_box: "0 0 20 20",
            fill: "currentColor",
            width: "1em",
            height: "1em",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: props.path,
            }
        }
    }
}

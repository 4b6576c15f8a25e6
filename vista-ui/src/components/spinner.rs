//! Spinning loading indicator.

use dioxus::prelude::*;

const SPIN_KEYFRAMES: &str = "@keyframes vista-spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }";

#[derive(Props, Clone, PartialEq)]
pub struct SpinnerProps {
    #[props(default)]
    pub class: String,
    /// Stroke color; defaults to the inherited text color
    #[props(default = "currentColor".to_string())]
    pub color: String,
    #[props(default = 16)]
    pub size: u32,
}

/// Simple loading indicator.
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    rsx! {
        style { {SPIN_KEYFRAMES} }
        svg {
            class: "{props.class}",
            style: "animation: vista-spin 1s linear infinite;",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            circle {
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "{props.color}",
                stroke_width: "4",
                stroke_opacity: "0.25",
            }
            path {
                d: "M12 2a10 10 0 0 1 10 10",
                stroke: "{props.color}",
                stroke_width: "4",
                stroke_linecap: "round",
            }
        }
    }
}

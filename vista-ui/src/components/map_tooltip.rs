//! Tooltip that follows the pointer over the region map.

use crate::state::use_theme;
use dioxus::prelude::*;

/// Offset from the pointer so the tooltip never sits under it.
const POINTER_OFFSET: f64 = 12.0;

/// What the tooltip shows and where. Empty content hides it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub content: String,
    pub x: f64,
    pub y: f64,
}

impl TooltipState {
    pub fn at(content: String, x: f64, y: f64) -> Self {
        Self { content, x, y }
    }

    pub fn is_visible(&self) -> bool {
        !self.content.is_empty()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MapTooltipProps {
    pub state: Signal<TooltipState>,
}

#[component]
pub fn MapTooltip(props: MapTooltipProps) -> Element {
    let theme = use_theme();
    let tooltip = props.state.read().clone();
    if !tooltip.is_visible() {
        return rsx! {};
    }

    let tokens = theme.tokens.read().clone();
    let mode = theme.mode();
    let background = mode.pick(&tokens.gray100, &tokens.gray800);
    let color = mode.pick(&tokens.gray800, &tokens.white);
    let left = tooltip.x + POINTER_OFFSET;
    let top = tooltip.y + POINTER_OFFSET;

    rsx! {
        div {
            role: "tooltip",
            style: "position: fixed; left: {left}px; top: {top}px; pointer-events: none; z-index: 60; padding: 4px 8px; font-size: 12px; border-radius: {tokens.radius_md}; background: {background}; color: {color};",
            "{tooltip.content}"
        }
    }
}

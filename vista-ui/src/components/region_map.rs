//! Choropleth region map with hover tooltips.
//!
//! `RegionMap` owns the tooltip state; `MapChart` paints the D3 map and feeds
//! the tooltip. Painting is decided here in Rust (`RegionShading`) and shipped
//! to the renderer as a table, so the geometry engine never calls back per
//! shape. Only hover events cross back into Rust.

use super::map_tooltip::{MapTooltip, TooltipState};
use crate::js_bridge::{self, HoverEnter, HoverLeave};
use crate::state::use_theme;
use dioxus::prelude::*;
use serde::Serialize;
use std::rc::Rc;
use vista_core::region::{region_value, RegionRecord, RegionShading};
use vista_core::theme::MapColors;
use wasm_bindgen::closure::Closure;

/// World countries without Antarctica, served with the app's assets.
pub const DEFAULT_MAP_SOURCE: &str = "/assets/maps/world-countries-sans-antarctica.json";

/// Size and projection of the rendered map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFrame {
    pub width: u32,
    pub height: u32,
    /// Equal Earth projection scale
    pub scale: f64,
    /// Vertical shift of the drawing, in px
    pub offset_y: f64,
}

impl Default for MapFrame {
    fn default() -> Self {
        Self {
            width: 800,
            height: 380,
            scale: 145.0,
            offset_y: 20.0,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct RegionMapProps {
    /// DOM id of the map container (D3 renders into it)
    #[props(default = "region-map".to_string())]
    pub id: String,
    #[props(default)]
    pub data: Vec<RegionRecord>,
    /// URL of a GeoJSON feature collection whose features carry `properties.name`
    #[props(default = DEFAULT_MAP_SOURCE.to_string())]
    pub map_source: String,
    #[props(default)]
    pub value_prefix: String,
    #[props(default)]
    pub value_suffix: String,
    #[props(default)]
    pub frame: MapFrame,
}

/// Region map plus its tooltip.
#[component]
pub fn RegionMap(props: RegionMapProps) -> Element {
    let tooltip = use_signal(TooltipState::default);

    rsx! {
        MapChart {
            id: props.id.clone(),
            data: props.data.clone(),
            map_source: props.map_source.clone(),
            prefix: props.value_prefix.clone(),
            suffix: props.value_suffix.clone(),
            frame: props.frame.clone(),
            tooltip,
        }
        MapTooltip { state: tooltip }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MapChartProps {
    pub id: String,
    pub data: Vec<RegionRecord>,
    pub map_source: String,
    #[props(default)]
    pub prefix: String,
    #[props(default)]
    pub suffix: String,
    #[props(default)]
    pub frame: MapFrame,
    /// Receives the label of the hovered region, cleared on leave
    pub tooltip: Signal<TooltipState>,
}

/// What the hover handler needs to build a label.
#[derive(Clone, Debug, Default, PartialEq)]
struct LabelSource {
    records: Vec<RegionRecord>,
    prefix: String,
    suffix: String,
}

/// Everything a repaint depends on.
#[derive(Clone, Debug, PartialEq)]
struct MapRender {
    id: String,
    hover_key: String,
    map_source: String,
    shading_json: String,
    frame_json: String,
    labels: LabelSource,
}

#[component]
pub fn MapChart(props: MapChartProps) -> Element {
    let theme = use_theme();
    let mut labels = use_signal(LabelSource::default);
    let hover_key = use_hook(|| format!("__vistaRegionHover_{}", props.id.replace('-', "_")));

    // Hover handlers registered once and kept alive with the component.
    let _handlers = use_hook({
        let key = hover_key.clone();
        let mut tooltip = props.tooltip;
        move || {
            js_bridge::init_map_scripts();
            let enter: HoverEnter = Closure::new(move |name: Option<String>, x: f64, y: f64| {
                let source = labels.peek();
                let content = region_value(name.as_deref(), &source.records, &source.prefix, &source.suffix);
                tooltip.set(TooltipState::at(content, x, y));
            });
            let leave: HoverLeave = Closure::new(move || tooltip.set(TooltipState::default()));
            js_bridge::register_hover_handlers(&key, &enter, &leave);
            Rc::new((enter, leave))
        }
    });

    use_drop({
        let id = props.id.clone();
        let key = hover_key.clone();
        move || {
            js_bridge::unregister_hover_handlers(&key);
            js_bridge::destroy_map(&id);
        }
    });

    // Reading the theme here re-renders the map when mode or tokens change.
    let colors = MapColors::for_mode(theme.mode(), &theme.tokens.read());
    let shading = RegionShading::new(&props.data, &colors);
    let render = MapRender {
        id: props.id.clone(),
        hover_key: hover_key.clone(),
        map_source: props.map_source.clone(),
        shading_json: serde_json::to_string(&shading).unwrap_or_default(),
        frame_json: serde_json::to_string(&props.frame).unwrap_or_default(),
        labels: LabelSource {
            records: props.data.clone(),
            prefix: props.prefix.clone(),
            suffix: props.suffix.clone(),
        },
    };

    // Repaint only when something the map depends on changed.
    use_effect(use_reactive((&render,), move |(render,)| {
        log::debug!(
            "Painting region map {} ({} records)",
            render.id,
            render.labels.records.len()
        );
        labels.set(render.labels);
        js_bridge::render_region_map(
            &render.id,
            &render.map_source,
            &render.shading_json,
            &render.frame_json,
            &render.hover_key,
        );
    }));

    let mut tooltip = props.tooltip;

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            onmouseleave: move |_| tooltip.set(TooltipState::default()),
            div {
                id: "{props.id}",
                class: "region-map",
                style: "width: 100%; min-height: {props.frame.height}px;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapFrame;

    #[test]
    fn test_default_frame_json() {
        let json = serde_json::to_value(MapFrame::default()).unwrap();
        assert_eq!(json["height"], 380);
        assert_eq!(json["scale"], 145.0);
        assert_eq!(json["offsetY"], 20.0);
    }
}

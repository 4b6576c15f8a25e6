//! Vista showcase
//!
//! A GDP choropleth with hover tooltips next to a few themed selects.
//!
//! Data flow:
//! 1. `include_str!` embeds `fixtures/theme.json` and `fixtures/regions.csv`.
//! 2. On mount: parse the theme config (falling back to defaults) and provide
//!    it to the tree as a `ThemeContext`.
//! 3. Parse the region CSV; rows without a color take a light palette tint.
//! 4. The map repaints whenever the theme or the records change.

use anyhow::Context;
use dioxus::prelude::*;
use serde_json::json;
use vista_core::form::FormState;
use vista_core::palette::chart_color_light;
use vista_core::region::{parse_region_csv, RegionRecord};
use vista_core::scales::{LEVELS, SCALES};
use vista_core::theme::{ControlSize, ThemeConfig};
use vista_ui::components::{
    ErrorDisplay, FormLayout, InputGroup, RegionMap, Select, SelectOption, ThemeModeToggle,
};
use vista_ui::state::{use_theme, use_theme_provider};

const THEME_JSON: &str = include_str!("../../fixtures/theme.json");
const REGIONS_CSV: &str = include_str!("../../fixtures/regions.csv");

const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Form field bound to the home-region select.
const HOME_REGION_FIELD: &str = "homeRegion";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("vista-root"))
        .launch(App);
}

/// Theme config from the embedded JSON, plus the error if it did not parse.
fn load_theme_config() -> (ThemeConfig, Option<String>) {
    match ThemeConfig::from_json(THEME_JSON) {
        Ok(config) => (config, None),
        Err(e) => {
            log::error!("Failed to parse theme config: {}", e);
            (ThemeConfig::default(), Some(format!("Invalid theme config: {}", e)))
        }
    }
}

fn load_regions() -> anyhow::Result<Vec<RegionRecord>> {
    let mut records = parse_region_csv(REGIONS_CSV).context("Failed to parse regions.csv")?;
    for (index, record) in records.iter_mut().enumerate() {
        if record.color.is_none() {
            record.color = Some(chart_color_light(index).to_string());
        }
    }
    log::info!("Loaded {} regions", records.len());
    Ok(records)
}

#[component]
fn App() -> Element {
    let (config, config_error) = use_hook(load_theme_config);
    let theme = use_theme_provider(config);
    let mut error_msg = use_signal(|| config_error);
    let regions: Signal<Vec<RegionRecord>> = use_signal(Vec::new);

    // ─── Parse region data once on mount ───
    use_effect(move || {
        let mut regions = regions;
        match load_regions() {
            Ok(records) => regions.set(records),
            Err(e) => {
                log::error!("{:#}", e);
                error_msg.set(Some(format!("{:#}", e)));
            }
        }
    });

    let mode = theme.mode();
    let mode_class = mode.as_str();
    let tokens = theme.tokens.read().clone();
    let background = mode.pick(&tokens.gray800, &tokens.white);
    let color = mode.pick(&tokens.gray100, &tokens.gray800);
    let theme_error = theme.error_msg.read().clone();

    rsx! {
        document::Script { src: D3_SRC }
        div {
            class: "{mode_class}",
            style: "min-height: 100vh; background: {background}; color: {color}; font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "max-width: 900px; margin: 0 auto; padding: 16px;",

                if let Some(err) = error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }
                if let Some(err) = theme_error {
                    ErrorDisplay { message: err }
                }

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                    h2 { style: "margin: 0;", "GDP by country (USD trillions)" }
                    ThemeModeToggle {}
                }

                RegionMap {
                    id: "gdp-map".to_string(),
                    data: regions.read().clone(),
                    value_prefix: "$".to_string(),
                    value_suffix: "T".to_string(),
                }

                ThemeColorPicker {}
                HomeRegionForm { regions: regions.read().clone() }
            }
        }
    }
}

/// Two selects in an input group switching the theme's primary color.
#[component]
fn ThemeColorPicker() -> Element {
    let mut theme = use_theme();
    let config = theme.config.read().clone();

    let color_options: Vec<SelectOption> = SCALES
        .iter()
        .filter(|scale| scale.name != "gray")
        .map(|scale| SelectOption::new(scale.name, scale.name))
        .collect();
    let level_options: Vec<SelectOption> = LEVELS
        .iter()
        .map(|level| SelectOption::new(level.to_string(), level.to_string()))
        .collect();

    let level = config.primary_color_level;
    let theme_color = config.theme_color.clone();

    rsx! {
        div {
            style: "margin: 16px 0;",
            p { style: "margin: 0 0 4px 0; font-weight: bold;", "Primary color" }
            InputGroup {
                size: ControlSize::Sm,
                Select {
                    options: color_options,
                    value: Some(config.theme_color.clone()),
                    class: "w-40".to_string(),
                    on_change: move |value: Option<String>| {
                        if let Some(color) = value {
                            theme.set_theme_color(&color, level);
                        }
                    },
                }
                Select {
                    options: level_options,
                    value: Some(level.to_string()),
                    class: "w-28".to_string(),
                    on_change: move |value: Option<String>| {
                        if let Some(level) = value.and_then(|v| v.parse::<u16>().ok()) {
                            theme.set_theme_color(&theme_color, level);
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HomeRegionFormProps {
    regions: Vec<RegionRecord>,
}

/// A required select bound to form state: invalid once touched and empty.
#[component]
fn HomeRegionForm(props: HomeRegionFormProps) -> Element {
    let theme = use_theme();
    let mut home_region = use_signal(|| None::<String>);
    let mut touched = use_signal(|| false);

    let options: Vec<SelectOption> = props
        .regions
        .iter()
        .map(|record| SelectOption::new(record.name.clone(), record.name.clone()))
        .collect();

    let errors = if home_region.read().is_none() {
        json!({ (HOME_REGION_FIELD): "Please pick a home region" })
    } else {
        json!({})
    };
    let form = FormState::new(json!({ (HOME_REGION_FIELD): touched() }), errors);
    let message = form.error_message(HOME_REGION_FIELD).map(str::to_string);
    let red = theme.tokens.read().red.clone();

    rsx! {
        FormLayout {
            size: ControlSize::Md,
            label {
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "Home region"
            }
            Select {
                options,
                value: home_region(),
                placeholder: "Pick a country...".to_string(),
                is_clearable: true,
                is_loading: props.regions.is_empty(),
                field: HOME_REGION_FIELD.to_string(),
                form: form.clone(),
                on_change: move |value: Option<String>| home_region.set(value),
                on_blur: move |_| touched.set(true),
            }
            if let Some(message) = message {
                p { style: "margin: 4px 0 0 0; font-size: 12px; color: {red};", "{message}" }
            }
        }
    }
}

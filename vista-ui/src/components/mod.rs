//! Reusable Dioxus RSX components for Vista apps.

mod error_display;
mod form_layout;
mod icons;
mod indicators;
mod map_tooltip;
mod region_map;
mod select;
mod spinner;
mod theme_mode_toggle;

pub use error_display::ErrorDisplay;
pub use form_layout::{FormLayout, InputGroup};
pub use icons::{Icon, ICON_CHECK, ICON_CHEVRON_DOWN, ICON_X};
pub use indicators::{ClearIndicator, DropdownIndicator, LoadingIndicator};
pub use map_tooltip::{MapTooltip, TooltipState};
pub use region_map::{MapChart, MapFrame, RegionMap, DEFAULT_MAP_SOURCE};
pub use select::{Select, SelectOption};
pub use spinner::Spinner;
pub use theme_mode_toggle::ThemeModeToggle;

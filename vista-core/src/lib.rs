//! Target-independent logic behind the Vista UI components.
//!
//! This crate provides:
//! - `color`: hex color parsing and the shade transform used for hover fills
//! - `palette`: chart color constants
//! - `scales`: built-in Tailwind color scales
//! - `theme`: `ThemeConfig` and the resolved `ThemeTokens` snapshot
//! - `region`: region record lookup for choropleth maps
//! - `select`: style descriptors for the themed select control
//! - `form`: validity flag derived from external form state
//!
//! Nothing here touches the DOM, so everything is unit tested on the host.

pub mod color;
pub mod error;
pub mod form;
pub mod palette;
pub mod region;
pub mod scales;
pub mod select;
pub mod theme;

pub use error::VistaError;

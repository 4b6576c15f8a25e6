//! Shared Dioxus components and D3.js map bridge for Vista apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js region map via `js_sys::eval()`
//!   and `wasm-bindgen` hover callbacks
//! - `state`: `ThemeContext` with Dioxus Signals, plus form/input-group contexts
//! - `components`: RSX components (region map, select, indicators, ...)

pub mod components;
pub mod js_bridge;
pub mod state;

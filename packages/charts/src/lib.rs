#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Plotly figure spec construction.
//!
//! Every chart on the dashboard is a JSON figure spec
//! (`{"data": [...], "layout": {...}}`) built server-side and handed to
//! Plotly.js in the browser via `Plotly.react`. Placeholder states render
//! as figures too, carrying their own titles, so the frontend never
//! special-cases an error shape.

pub mod bars;
pub mod choropleth;

/// Font family applied to every figure, matching the site styling.
pub const FONT_FAMILY: &str = "Quattro Slab, serif";

/// Builds the layout `font` object shared by all figures.
#[must_use]
pub fn font() -> serde_json::Value {
    serde_json::json!({ "family": FONT_FAMILY })
}

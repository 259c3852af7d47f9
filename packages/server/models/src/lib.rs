#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the dashboard server.
//!
//! These types are serialized to JSON for the UI's event round-trips.
//! They are separate from the dataset row types to allow independent
//! evolution of the API contract.

use campeche_stats_analytics_models::FilterSelection;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// The option lists needed to populate the selectors on page load.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStartupOptions {
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Distinct municipalities in dataset order.
    pub municipalities: Vec<String>,
    /// Distinct legal categories in dataset order.
    pub legal_categories: Vec<String>,
    /// All distinct crime types, for the home page selector.
    pub crime_types: Vec<String>,
}

/// A dependent selector's option list plus the selection to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOptionList {
    /// Options in derived order.
    pub options: Vec<String>,
    /// Value the selector should adopt, if any.
    pub selected: Option<String>,
}

impl ApiOptionList {
    /// An option list whose first entry is pre-selected — the cascading
    /// selector default when a parent value narrows the child options.
    #[must_use]
    pub fn with_default_first(options: Vec<String>) -> Self {
        let selected = options.first().cloned();
        Self { options, selected }
    }

    /// An option list with no default selection.
    #[must_use]
    pub const fn without_selection(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
        }
    }
}

/// Query parameters for the home page figures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFigureParams {
    /// Selected year.
    pub year: Option<i32>,
    /// Selected crime type.
    pub crime_type: Option<String>,
}

/// The home page figure pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFigures {
    /// Choropleth spec: totals when a full selection exists, the flat
    /// base map otherwise.
    pub map: serde_json::Value,
    /// Municipality bar chart spec; absent until a full selection exists.
    pub bars: Option<serde_json::Value>,
}

/// Query parameters for the statistics drill-down figure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillDownParams {
    /// Selected year.
    pub year: Option<i32>,
    /// Selected legal category.
    pub legal_category: Option<String>,
    /// Selected crime type.
    pub crime_type: Option<String>,
    /// Selected crime subtype.
    pub crime_subtype: Option<String>,
    /// Selected modality, if any.
    pub modality: Option<String>,
    /// Selected municipality.
    pub municipality: Option<String>,
}

impl From<DrillDownParams> for FilterSelection {
    fn from(params: DrillDownParams) -> Self {
        Self {
            year: params.year,
            legal_category: params.legal_category,
            crime_type: params.crime_type,
            crime_subtype: params.crime_subtype,
            modality: params.modality,
            municipality: params.municipality,
        }
    }
}

/// Query parameters for the dependent option endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentOptionParams {
    /// Parent legal category.
    pub legal_category: Option<String>,
    /// Parent crime type.
    pub crime_type: Option<String>,
    /// Parent crime subtype.
    pub crime_subtype: Option<String>,
}

/// Query parameters for the comparison-year option list.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonYearParams {
    /// Primary year to exclude from the list.
    pub exclude: Option<i32>,
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter selection and aggregation result types.
//!
//! A [`FilterSelection`] is rebuilt from the UI state on every request and
//! discarded after rendering; the aggregation results are equally
//! transient. Both placeholder conditions ("nothing selected yet" and
//! "selection matches nothing") are distinct enum variants so the renderer
//! can never conflate them.

use campeche_stats_dataset_models::Month;
use serde::{Deserialize, Serialize};

/// The filter values active for one UI interaction.
///
/// Every field is optional; each pipeline decides which fields it
/// requires and signals a placeholder state when they are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    /// Selected year.
    pub year: Option<i32>,
    /// Selected legal category ("Bien jurídico afectado").
    pub legal_category: Option<String>,
    /// Selected crime type.
    pub crime_type: Option<String>,
    /// Selected crime subtype.
    pub crime_subtype: Option<String>,
    /// Selected modality. Optional even for the full drill-down.
    pub modality: Option<String>,
    /// Selected municipality.
    pub municipality: Option<String>,
}

/// Aggregated incident total for one municipality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityTotal {
    /// Municipality name as it appears in the dataset.
    pub municipality: String,
    /// Sum of all twelve monthly counts across the matching records.
    pub total: u64,
}

/// Aggregated incident total for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    /// The calendar month.
    pub month: Month,
    /// Total count for the selection in this month.
    pub total: u64,
}

/// Result of the per-municipality aggregation behind the map and the
/// municipality bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAggregation {
    /// Year or crime type not chosen yet; render the flat base map.
    NoSelection,
    /// Per-municipality totals for the selected (year, crime type),
    /// sorted by municipality name.
    Totals(Vec<MunicipalityTotal>),
}

/// Result of the per-month aggregation behind the drill-down chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthlyAggregation {
    /// At least one mandatory filter is unset; prompt the user.
    IncompleteSelection,
    /// The full selection matches no records.
    NoData,
    /// One total per calendar month, January through December.
    Series(Vec<MonthlyPoint>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_empty() {
        let selection = FilterSelection::default();
        assert_eq!(selection.year, None);
        assert_eq!(selection.legal_category, None);
        assert_eq!(selection.modality, None);
    }

    #[test]
    fn monthly_point_serializes_spanish_month() {
        let point = MonthlyPoint {
            month: Month::January,
            total: 7,
        };
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["month"], "Enero");
        assert_eq!(json["total"], 7);
    }

    #[test]
    fn placeholder_states_are_distinct() {
        assert_ne!(
            MonthlyAggregation::IncompleteSelection,
            MonthlyAggregation::NoData
        );
    }
}

//! The two aggregations behind every chart on the dashboard.

use std::collections::BTreeMap;

use campeche_stats_analytics_models::{
    FilterSelection, MapAggregation, MonthlyAggregation, MonthlyPoint, MunicipalityTotal,
};
use campeche_stats_dataset_models::{CrimeRecord, Month};

/// Aggregates incident totals per municipality for a (year, crime type)
/// selection.
///
/// Filters records on `year` and `crime_type`, sums each record's twelve
/// monthly counts, and groups the per-record totals by municipality.
/// Returns [`MapAggregation::NoSelection`] when either field is unset so
/// the renderer can fall back to the base map instead of drawing an empty
/// chart. A selection that matches nothing yields an empty totals list,
/// which is a different condition from no selection at all.
#[must_use]
pub fn aggregate_by_municipality(
    records: &[CrimeRecord],
    selection: &FilterSelection,
) -> MapAggregation {
    let (Some(year), Some(crime_type)) = (selection.year, selection.crime_type.as_deref()) else {
        return MapAggregation::NoSelection;
    };

    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| r.year == year && r.crime_type == crime_type)
    {
        *totals.entry(record.municipality.as_str()).or_default() += record.total();
    }

    log::trace!(
        "Aggregated {} municipalities for year={year} crimeType={crime_type}",
        totals.len()
    );

    MapAggregation::Totals(
        totals
            .into_iter()
            .map(|(municipality, total)| MunicipalityTotal {
                municipality: municipality.to_string(),
                total,
            })
            .collect(),
    )
}

/// Aggregates incident totals per calendar month for a full drill-down
/// selection.
///
/// The five mandatory fields are legal category, municipality, year,
/// crime type and crime subtype; filtering is conjunctive across all of
/// them. Modality further restricts the match when present, otherwise all
/// modalities are included. Returns
/// [`MonthlyAggregation::IncompleteSelection`] when a mandatory field is
/// unset and [`MonthlyAggregation::NoData`] when the full selection
/// matches no records; a successful series always holds twelve points in
/// calendar order.
#[must_use]
pub fn aggregate_by_month(
    records: &[CrimeRecord],
    selection: &FilterSelection,
) -> MonthlyAggregation {
    let (Some(year), Some(legal_category), Some(municipality), Some(crime_type), Some(subtype)) = (
        selection.year,
        selection.legal_category.as_deref(),
        selection.municipality.as_deref(),
        selection.crime_type.as_deref(),
        selection.crime_subtype.as_deref(),
    ) else {
        return MonthlyAggregation::IncompleteSelection;
    };

    let mut totals = [0u64; 12];
    let mut matched = false;

    for record in records.iter().filter(|r| {
        r.year == year
            && r.legal_category == legal_category
            && r.municipality == municipality
            && r.crime_type == crime_type
            && r.crime_subtype == subtype
            && selection
                .modality
                .as_deref()
                .is_none_or(|modality| r.modality == modality)
    }) {
        matched = true;
        for (total, &count) in totals.iter_mut().zip(&record.monthly_counts) {
            *total += u64::from(count);
        }
    }

    if !matched {
        return MonthlyAggregation::NoData;
    }

    MonthlyAggregation::Series(
        Month::all()
            .iter()
            .zip(totals)
            .map(|(&month, total)| MonthlyPoint { month, total })
            .collect(),
    )
}

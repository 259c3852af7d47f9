//! Bar chart figure specs.

use campeche_stats_analytics_models::{FilterSelection, MonthlyAggregation, MunicipalityTotal};
use serde_json::{Value, json};

use crate::font;

/// Title of the incomplete-selection placeholder.
pub const INCOMPLETE_SELECTION_TITLE: &str = "Seleccione todos los filtros";

/// Title of the no-data placeholder.
pub const NO_DATA_TITLE: &str = "No hay datos para mostrar";

/// Fixed 4-stop scale for the monthly drill-down bars.
const MONTHLY_COLORSCALE: [(f64, &str); 4] = [
    (0.0, "#888B8D"),
    (0.33, "#235B4E"),
    (0.66, "#BCA986"),
    (1.0, "#9F2241"),
];

/// Horizontal bar chart of totals per municipality.
///
/// Bar color intensity is driven by each bar's own value, on the same
/// reversed `RdYlGn` scale as the map, so the two views read together.
#[must_use]
pub fn municipality_bars(totals: &[MunicipalityTotal], year: i32) -> Value {
    let municipalities: Vec<&str> = totals.iter().map(|t| t.municipality.as_str()).collect();
    let values: Vec<u64> = totals.iter().map(|t| t.total).collect();

    json!({
        "data": [{
            "type": "bar",
            "orientation": "h",
            "x": values,
            "y": municipalities,
            "marker": {
                "color": values,
                "colorscale": "RdYlGn",
                "reversescale": true,
            },
        }],
        "layout": {
            "title": format!("Total de delitos por municipio en {year}"),
            "xaxis": { "title": "Total de Delitos" },
            "yaxis": { "title": "Municipio" },
            "font": font(),
        },
    })
}

/// Vertical bar chart of totals per month for the drill-down selection.
///
/// The two placeholder outcomes render as empty figures distinguished only
/// by their titles; a real series renders twelve bars colored by value on
/// the fixed 4-stop scale.
#[must_use]
pub fn monthly_bars(aggregation: &MonthlyAggregation, selection: &FilterSelection) -> Value {
    let points = match aggregation {
        MonthlyAggregation::IncompleteSelection => {
            return placeholder(INCOMPLETE_SELECTION_TITLE);
        }
        MonthlyAggregation::NoData => return placeholder(NO_DATA_TITLE),
        MonthlyAggregation::Series(points) => points,
    };

    let months: Vec<String> = points.iter().map(|p| p.month.to_string()).collect();
    let values: Vec<u64> = points.iter().map(|p| p.total).collect();
    let colorscale: Vec<Value> = MONTHLY_COLORSCALE
        .iter()
        .map(|&(stop, color)| json!([stop, color]))
        .collect();

    json!({
        "data": [{
            "type": "bar",
            "x": months,
            "y": values,
            "text": values,
            "textposition": "auto",
            "marker": {
                "color": values,
                "colorscale": colorscale,
            },
        }],
        "layout": {
            "title": drill_down_title(selection),
            "xaxis": { "title": "Meses" },
            "yaxis": { "title": "Total de Delitos" },
            "font": font(),
        },
    })
}

/// An empty figure whose title carries the placeholder message.
#[must_use]
pub fn placeholder(title: &str) -> Value {
    json!({
        "data": [],
        "layout": {
            "title": title,
            "xaxis": { "title": "Meses" },
            "yaxis": { "title": "Total de Delitos" },
            "font": font(),
        },
    })
}

/// Title for the drill-down figure.
///
/// The filter values appear in fixed field order
/// category - type - subtype [- modality]; the modality segment only
/// appears while a modality is active.
#[must_use]
pub fn drill_down_title(selection: &FilterSelection) -> String {
    let detail: Vec<&str> = [
        selection.legal_category.as_deref(),
        selection.crime_type.as_deref(),
        selection.crime_subtype.as_deref(),
        selection.modality.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    let detail = detail.join(" - ");

    match (selection.municipality.as_deref(), selection.year) {
        (Some(municipality), Some(year)) => {
            format!("Total de delitos en {municipality} en {year}: {detail}")
        }
        _ => format!("Total de delitos por mes: {detail}"),
    }
}

//! HTTP handler functions for the dashboard API.
//!
//! Each handler is one UI event round-trip: it rebuilds the transient
//! filter selection from the query parameters, runs the aggregation
//! pipeline against the shared immutable dataset, and returns either an
//! option list or a Plotly figure spec. Placeholder conditions come back
//! as HTTP 200 figures; nothing here can fail at runtime.

use actix_web::{HttpResponse, web};
use campeche_stats_analytics::pipeline;
use campeche_stats_analytics_models::{FilterSelection, MapAggregation};
use campeche_stats_charts::{bars, choropleth};
use campeche_stats_server_models::{
    ApiHealth, ApiOptionList, ApiStartupOptions, ComparisonYearParams, DependentOptionParams,
    DrillDownParams, HomeFigureParams, HomeFigures,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/options`
///
/// Returns the option lists that populate the selectors on page load.
pub async fn startup_options(state: web::Data<AppState>) -> HttpResponse {
    let options = &state.options;
    HttpResponse::Ok().json(ApiStartupOptions {
        years: options.years().to_vec(),
        municipalities: options.municipalities().to_vec(),
        legal_categories: options.legal_categories().to_vec(),
        crime_types: options.crime_types().to_vec(),
    })
}

/// `GET /api/options/crime-types`
///
/// Crime types offered by the selected legal category, first entry
/// pre-selected. An absent or unknown category yields an empty list.
pub async fn crime_type_options(
    state: web::Data<AppState>,
    params: web::Query<DependentOptionParams>,
) -> HttpResponse {
    let list = params.legal_category.as_deref().map_or_else(
        || ApiOptionList::without_selection(Vec::new()),
        |category| {
            ApiOptionList::with_default_first(state.options.crime_types_for(category).to_vec())
        },
    );
    HttpResponse::Ok().json(list)
}

/// `GET /api/options/subtypes`
///
/// Subtypes offered by the selected crime type, first entry pre-selected.
pub async fn subtype_options(
    state: web::Data<AppState>,
    params: web::Query<DependentOptionParams>,
) -> HttpResponse {
    let list = params.crime_type.as_deref().map_or_else(
        || ApiOptionList::without_selection(Vec::new()),
        |crime_type| {
            ApiOptionList::with_default_first(state.options.subtypes_for(crime_type).to_vec())
        },
    );
    HttpResponse::Ok().json(list)
}

/// `GET /api/options/modalities`
///
/// Modalities offered by the full (category, type, subtype) triple. No
/// default selection: modality is an optional refinement.
pub async fn modality_options(
    state: web::Data<AppState>,
    params: web::Query<DependentOptionParams>,
) -> HttpResponse {
    let list = match (
        params.legal_category.as_deref(),
        params.crime_type.as_deref(),
        params.crime_subtype.as_deref(),
    ) {
        (Some(category), Some(crime_type), Some(subtype)) => ApiOptionList::without_selection(
            state
                .options
                .modalities_for(category, crime_type, subtype)
                .to_vec(),
        ),
        _ => ApiOptionList::without_selection(Vec::new()),
    };
    HttpResponse::Ok().json(list)
}

/// `GET /api/options/years`
///
/// Years available for the "other selection" comparison, excluding the
/// primary year.
pub async fn comparison_year_options(
    state: web::Data<AppState>,
    params: web::Query<ComparisonYearParams>,
) -> HttpResponse {
    let years = params.exclude.map_or_else(
        || state.options.years().to_vec(),
        |primary| state.options.comparison_years(primary),
    );
    HttpResponse::Ok().json(years)
}

/// `GET /api/home/figures`
///
/// The choropleth and municipality bar chart for a (year, crime type)
/// selection. Without a full selection the map falls back to the flat
/// base map and the bars are omitted.
pub async fn home_figures(
    state: web::Data<AppState>,
    params: web::Query<HomeFigureParams>,
) -> HttpResponse {
    let selection = FilterSelection {
        year: params.year,
        crime_type: params.crime_type.clone(),
        ..FilterSelection::default()
    };

    let MapAggregation::Totals(totals) =
        pipeline::aggregate_by_municipality(&state.records, &selection)
    else {
        return HttpResponse::Ok().json(HomeFigures {
            map: choropleth::base_map(&state.boundaries),
            bars: None,
        });
    };
    // Totals implies the year was present
    let Some(year) = selection.year else {
        return HttpResponse::Ok().json(HomeFigures {
            map: choropleth::base_map(&state.boundaries),
            bars: None,
        });
    };

    HttpResponse::Ok().json(HomeFigures {
        map: choropleth::totals_map(&state.boundaries, &totals, year),
        bars: Some(bars::municipality_bars(&totals, year)),
    })
}

/// `GET /api/estadisticas/figure`
///
/// The monthly drill-down figure for the full cascading selection. Both
/// placeholder states come back as ordinary figures with their own
/// titles.
pub async fn drill_down_figure(
    state: web::Data<AppState>,
    params: web::Query<DrillDownParams>,
) -> HttpResponse {
    let selection = FilterSelection::from(params.into_inner());
    let aggregation = pipeline::aggregate_by_month(&state.records, &selection);
    HttpResponse::Ok().json(bars::monthly_bars(&aggregation, &selection))
}

//! Choropleth figure specs for the municipality map.

use campeche_stats_analytics_models::MunicipalityTotal;
use campeche_stats_dataset::boundaries::BoundaryCollection;
use serde_json::{Value, json};

use crate::font;

/// Property path Plotly uses to join `locations` against the `GeoJSON`
/// features.
pub const FEATURE_ID_KEY: &str = "properties.NOM_MUN";

/// Fill color for regions without data and for the no-selection base map.
const BASE_REGION_COLOR: &str = "lightgray";

/// The flat base map shown before a (year, crime type) selection exists.
///
/// Every region renders in the same neutral color with no color scale.
#[must_use]
pub fn base_map(boundaries: &BoundaryCollection) -> Value {
    let locations = boundaries.region_names();
    json!({
        "data": [{
            "type": "choropleth",
            "geojson": boundaries.geojson(),
            "locations": locations,
            "featureidkey": FEATURE_ID_KEY,
            "z": vec![0; locations.len()],
            "colorscale": [[0, BASE_REGION_COLOR], [1, BASE_REGION_COLOR]],
            "showscale": false,
            "hoverinfo": "location",
        }],
        "layout": {
            "title": "Mapa de municipios de Campeche",
            "geo": { "fitbounds": "locations", "visible": false },
            "font": font(),
        },
    })
}

/// The choropleth colored by per-municipality totals.
///
/// A neutral base layer carries every boundary region, so municipalities
/// absent from the aggregation render in the no-data color rather than
/// disappearing. A municipality present in the totals but absent from the
/// boundary file is a join mismatch: it is logged and still emitted, so
/// Plotly leaves that region unfilled instead of failing the whole
/// figure.
#[must_use]
pub fn totals_map(
    boundaries: &BoundaryCollection,
    totals: &[MunicipalityTotal],
    year: i32,
) -> Value {
    for entry in totals {
        if !boundaries.contains(&entry.municipality) {
            log::warn!(
                "Municipality '{}' has no boundary feature; region renders unfilled",
                entry.municipality
            );
        }
    }

    let base_locations = boundaries.region_names();
    let locations: Vec<&str> = totals.iter().map(|t| t.municipality.as_str()).collect();
    let values: Vec<u64> = totals.iter().map(|t| t.total).collect();

    json!({
        "data": [
            {
                "type": "choropleth",
                "geojson": boundaries.geojson(),
                "locations": base_locations,
                "featureidkey": FEATURE_ID_KEY,
                "z": vec![0; base_locations.len()],
                "colorscale": [[0, BASE_REGION_COLOR], [1, BASE_REGION_COLOR]],
                "showscale": false,
                "hoverinfo": "skip",
            },
            {
                "type": "choropleth",
                "geojson": boundaries.geojson(),
                "locations": locations,
                "featureidkey": FEATURE_ID_KEY,
                "z": values,
                "colorscale": "RdYlGn",
                "reversescale": true,
                "colorbar": { "title": "Total de Delitos" },
            },
        ],
        "layout": {
            "title": format!("Mapa de municipios con total de delitos en {year}"),
            "geo": { "fitbounds": "locations", "visible": false },
            "font": font(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use campeche_stats_dataset::boundaries::parse_boundaries;

    fn boundaries() -> BoundaryCollection {
        parse_boundaries(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "properties": {"NOM_MUN": "Campeche"}, "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}},
                    {"type": "Feature", "properties": {"NOM_MUN": "Carmen"}, "geometry": {"type": "Polygon", "coordinates": [[[2.0, 0.0], [3.0, 0.0], [3.0, 1.0], [2.0, 0.0]]]}}
                ]
            }"#,
        )
        .unwrap()
    }

    fn totals() -> Vec<MunicipalityTotal> {
        vec![
            MunicipalityTotal {
                municipality: "Campeche".to_string(),
                total: 12,
            },
            MunicipalityTotal {
                municipality: "Hopelchén".to_string(),
                total: 4,
            },
        ]
    }

    #[test]
    fn base_map_is_flat_with_no_scale() {
        let figure = base_map(&boundaries());
        let trace = &figure["data"][0];
        assert_eq!(trace["showscale"], json!(false));
        assert_eq!(trace["z"], json!([0, 0]));
        assert_eq!(trace["colorscale"][0][1], trace["colorscale"][1][1]);
        assert_eq!(
            figure["layout"]["title"],
            json!("Mapa de municipios de Campeche")
        );
    }

    #[test]
    fn totals_map_colors_by_value() {
        let figure = totals_map(&boundaries(), &totals(), 2022);
        let trace = &figure["data"][1];
        assert_eq!(trace["locations"], json!(["Campeche", "Hopelchén"]));
        assert_eq!(trace["z"], json!([12, 4]));
        assert_eq!(trace["reversescale"], json!(true));
        assert_eq!(trace["featureidkey"], json!(FEATURE_ID_KEY));
        assert_eq!(
            figure["layout"]["title"],
            json!("Mapa de municipios con total de delitos en 2022")
        );
    }

    #[test]
    fn totals_map_keeps_a_neutral_layer_under_every_region() {
        // Carmen has no aggregated total; the base layer still carries it
        // so it renders in the no-data color instead of disappearing.
        let figure = totals_map(&boundaries(), &totals(), 2022);
        let base = &figure["data"][0];
        assert_eq!(base["locations"], json!(["Campeche", "Carmen"]));
        assert_eq!(base["showscale"], json!(false));
        assert_eq!(base["colorscale"][0][1], base["colorscale"][1][1]);
    }

    #[test]
    fn join_mismatch_still_emits_the_municipality() {
        // Hopelchén has no boundary feature; it must stay in the trace so
        // the rest of the map renders, leaving that region unfilled.
        let figure = totals_map(&boundaries(), &totals(), 2022);
        let locations = figure["data"][1]["locations"].as_array().unwrap();
        assert!(locations.contains(&json!("Hopelchén")));
    }

    #[test]
    fn maps_fit_to_locations() {
        for figure in [base_map(&boundaries()), totals_map(&boundaries(), &totals(), 2023)] {
            assert_eq!(figure["layout"]["geo"]["fitbounds"], json!("locations"));
            assert_eq!(figure["layout"]["geo"]["visible"], json!(false));
        }
    }
}

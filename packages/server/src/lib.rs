#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the Campeche crime statistics dashboard.
//!
//! Loads the incidence CSV and the municipality boundary `GeoJSON` once at
//! startup, derives the selector option index, and serves two
//! server-rendered pages plus the JSON API their scripts call on every
//! input change. All shared state is immutable after startup, so
//! concurrent sessions need no synchronization.

mod handlers;
mod pages;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use campeche_stats_dataset::boundaries::{BoundaryCollection, load_boundaries};
use campeche_stats_dataset::options::OptionIndex;
use campeche_stats_dataset::records::load_records;
use campeche_stats_dataset_models::CrimeRecord;
use std::path::Path;

/// Shared application state, read-only after startup.
pub struct AppState {
    /// The loaded incidence dataset.
    pub records: Vec<CrimeRecord>,
    /// Municipality boundaries for the choropleth.
    pub boundaries: BoundaryCollection,
    /// Derived selector options and dependency mappings.
    pub options: OptionIndex,
}

/// Starts the dashboard server.
///
/// Loads the dataset and boundary files (paths overridable via
/// `DATA_PATH` and `GEOJSON_PATH`), builds the option index, and binds
/// the Actix-Web HTTP server on `BIND_ADDR`:`PORT`.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if either startup file is missing or malformed — the process
/// must not serve traffic without a usable dataset.
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_path =
        std::env::var("DATA_PATH").unwrap_or_else(|_| "data/datos-graficas.csv".to_string());
    let geojson_path =
        std::env::var("GEOJSON_PATH").unwrap_or_else(|_| "data/map-campeche.geojson".to_string());
    let assets_dir = std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string());

    log::info!("Loading crime records from {data_path}...");
    let records = load_records(Path::new(&data_path)).expect("Failed to load crime records");

    log::info!("Loading municipality boundaries from {geojson_path}...");
    let boundaries =
        load_boundaries(Path::new(&geojson_path)).expect("Failed to load municipality boundaries");

    log::info!("Building option index...");
    let options = OptionIndex::build(&records);
    log::info!(
        "Option index ready: {} years, {} municipalities, {} crime types",
        options.years().len(),
        options.municipalities().len(),
        options.crime_types().len()
    );

    let state = web::Data::new(AppState {
        records,
        boundaries,
        options,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/options", web::get().to(handlers::startup_options))
                    .route(
                        "/options/crime-types",
                        web::get().to(handlers::crime_type_options),
                    )
                    .route("/options/subtypes", web::get().to(handlers::subtype_options))
                    .route(
                        "/options/modalities",
                        web::get().to(handlers::modality_options),
                    )
                    .route(
                        "/options/years",
                        web::get().to(handlers::comparison_year_options),
                    )
                    .route("/home/figures", web::get().to(handlers::home_figures))
                    .route(
                        "/estadisticas/figure",
                        web::get().to(handlers::drill_down_figure),
                    ),
            )
            .route("/", web::get().to(pages::home))
            .route("/estadisticas", web::get().to(pages::estadisticas))
            // Logos and fonts
            .service(Files::new("/assets", assets_dir.clone()))
            // Unknown paths fall back to the home page
            .default_service(web::get().to(pages::home))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use campeche_stats_dataset::boundaries::parse_boundaries;
    use campeche_stats_dataset::records::parse_records;

    const CSV: &str = "Municipio,Año,Bien jurídico afectado,Tipo de delito,Subtipo de delito,Modalidad,Enero,Febrero,Marzo,Abril,Mayo,Junio,Julio,Agosto,Septiembre,Octubre,Noviembre,Diciembre\n\
        Campeche,2022,El patrimonio,Robo,Robo a casa habitación,Con violencia,1,0,0,2,0,0,0,0,0,0,0,0\n\
        Carmen,2021,El patrimonio,Robo,Robo a casa habitación,Sin violencia,0,3,0,0,0,0,0,0,0,0,0,0\n";

    const GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"NOM_MUN": "Campeche"}, "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}},
            {"type": "Feature", "properties": {"NOM_MUN": "Carmen"}, "geometry": {"type": "Polygon", "coordinates": [[[2.0, 0.0], [3.0, 0.0], [3.0, 1.0], [2.0, 0.0]]]}}
        ]
    }"#;

    fn test_state() -> web::Data<AppState> {
        let records = parse_records(CSV.as_bytes()).unwrap();
        let options = OptionIndex::build(&records);
        let boundaries = parse_boundaries(GEOJSON).unwrap();
        web::Data::new(AppState {
            records,
            boundaries,
            options,
        })
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_the_home_page() {
        let app = test::init_service(
            App::new()
                .route("/", web::get().to(pages::home))
                .route("/estadisticas", web::get().to(pages::estadisticas))
                .default_service(web::get().to(pages::home)),
        )
        .await;

        let request = test::TestRequest::get().uri("/no-such-page").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body = test::read_body(response).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("mapa-campeche"));
    }

    #[actix_web::test]
    async fn year_only_selection_serves_the_base_map_without_bars() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .route("/api/home/figures", web::get().to(handlers::home_figures)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/api/home/figures?year=2022")
            .to_request();
        let figures: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert!(figures["bars"].is_null());
        assert_eq!(figures["map"]["data"][0]["showscale"], false);
    }

    #[actix_web::test]
    async fn full_selection_serves_totals_map_and_bars() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .route("/api/home/figures", web::get().to(handlers::home_figures)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/api/home/figures?year=2022&crimeType=Robo")
            .to_request();
        let figures: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(figures["map"]["data"][1]["locations"][0], "Campeche");
        assert_eq!(figures["map"]["data"][1]["z"][0], 3);
        assert_eq!(figures["bars"]["data"][0]["x"][0], 3);
    }
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! One-time dataset loading for the Campeche crime statistics dashboard.
//!
//! Reads the FGE incidence CSV and the municipality boundary `GeoJSON`
//! exactly once at process start, and derives the [`options::OptionIndex`]
//! that drives the cascading selectors. Everything produced here is
//! immutable for the process lifetime; a load failure is fatal before the
//! server binds.

pub mod boundaries;
pub mod options;
pub mod records;

use thiserror::Error;

/// Errors that can occur while loading the dataset or boundary files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// `GeoJSON` parsing failed.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is absent from the CSV header.
    #[error("Missing required column: {name}")]
    MissingColumn {
        /// Header name that was expected.
        name: String,
    },

    /// The file parsed but its content is unusable.
    #[error("Malformed dataset: {message}")]
    Malformed {
        /// Description of what went wrong.
        message: String,
    },
}

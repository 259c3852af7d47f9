//! `GeoJSON` boundary loader for the municipality choropleth.
//!
//! The boundary file is a `FeatureCollection` of municipality polygons.
//! Each feature carries the municipality name in the `NOM_MUN` property,
//! which is the case-sensitive join key against
//! [`CrimeRecord::municipality`](campeche_stats_dataset_models::CrimeRecord).
//! The geometry itself is never transformed here; it is passed through to
//! the client untouched for rendering.

use std::path::Path;

use geojson::GeoJson;

use crate::LoadError;

/// Feature property holding the municipality name (the choropleth join key).
pub const NAME_PROPERTY: &str = "NOM_MUN";

/// The parsed municipality boundary collection.
///
/// Holds the raw `GeoJSON` as a [`serde_json::Value`] for embedding into
/// choropleth figure specs, plus the region names extracted from the
/// feature properties.
#[derive(Debug, Clone)]
pub struct BoundaryCollection {
    geojson: serde_json::Value,
    names: Vec<String>,
}

impl BoundaryCollection {
    /// Region names in file order.
    #[must_use]
    pub fn region_names(&self) -> &[String] {
        &self.names
    }

    /// Whether `name` matches a boundary region (case-sensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of boundary regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the collection holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The raw `GeoJSON` for embedding into a figure spec.
    #[must_use]
    pub const fn geojson(&self) -> &serde_json::Value {
        &self.geojson
    }
}

/// Loads the municipality boundary `GeoJSON` from `path`.
///
/// # Errors
///
/// Returns [`LoadError`] if the file is missing, is not valid `GeoJSON`,
/// is not a `FeatureCollection`, or contains no named regions.
pub fn load_boundaries(path: &Path) -> Result<BoundaryCollection, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    parse_boundaries(&raw)
}

/// Parses a boundary collection from raw `GeoJSON` text.
///
/// Features without a `NOM_MUN` property are skipped with a warning; they
/// can never join against the dataset.
///
/// # Errors
///
/// Returns [`LoadError`] if the text is not a `FeatureCollection` or no
/// feature carries a region name.
pub fn parse_boundaries(raw: &str) -> Result<BoundaryCollection, LoadError> {
    let geojson = raw.parse::<GeoJson>()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(LoadError::Malformed {
            message: "boundary file is not a GeoJSON FeatureCollection".to_string(),
        });
    };

    let mut names = Vec::with_capacity(collection.features.len());
    for feature in &collection.features {
        match feature
            .property(NAME_PROPERTY)
            .and_then(serde_json::Value::as_str)
        {
            Some(name) => names.push(name.to_string()),
            None => log::warn!("Boundary feature without a {NAME_PROPERTY} property, skipping"),
        }
    }

    if names.is_empty() {
        return Err(LoadError::Malformed {
            message: format!("boundary file has no features with a {NAME_PROPERTY} property"),
        });
    }

    log::info!("Loaded {} municipality boundaries", names.len());

    Ok(BoundaryCollection {
        geojson: serde_json::to_value(&collection)?,
        names,
    })
}

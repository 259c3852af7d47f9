#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Core record types for the Campeche crime statistics dashboard.
//!
//! The dataset is the FGE Campeche incidence table: one row per
//! (municipality, year, legal category, crime type, subtype, modality)
//! combination with twelve monthly counts. These types are loaded once at
//! startup and shared read-only for the process lifetime.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A calendar month, serialized with the Spanish names used as both the
/// dataset's column headers and the chart x-axis labels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Month {
    #[serde(rename = "Enero")]
    #[strum(serialize = "Enero")]
    January,
    #[serde(rename = "Febrero")]
    #[strum(serialize = "Febrero")]
    February,
    #[serde(rename = "Marzo")]
    #[strum(serialize = "Marzo")]
    March,
    #[serde(rename = "Abril")]
    #[strum(serialize = "Abril")]
    April,
    #[serde(rename = "Mayo")]
    #[strum(serialize = "Mayo")]
    May,
    #[serde(rename = "Junio")]
    #[strum(serialize = "Junio")]
    June,
    #[serde(rename = "Julio")]
    #[strum(serialize = "Julio")]
    July,
    #[serde(rename = "Agosto")]
    #[strum(serialize = "Agosto")]
    August,
    #[serde(rename = "Septiembre")]
    #[strum(serialize = "Septiembre")]
    September,
    #[serde(rename = "Octubre")]
    #[strum(serialize = "Octubre")]
    October,
    #[serde(rename = "Noviembre")]
    #[strum(serialize = "Noviembre")]
    November,
    #[serde(rename = "Diciembre")]
    #[strum(serialize = "Diciembre")]
    December,
}

impl Month {
    /// Returns all twelve months in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self; 12] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    /// Returns the 0-based calendar position (January = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One row of the crime incidence dataset.
///
/// Identity is positional (row index in the source file); the dataset
/// enforces no uniqueness constraint across the categorical attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeRecord {
    /// Municipality name, matching the boundary file's `NOM_MUN` values.
    pub municipality: String,
    /// Calendar year the counts belong to.
    pub year: i32,
    /// Top-level classification ("Bien jurídico afectado").
    pub legal_category: String,
    /// Crime type ("Tipo de delito").
    pub crime_type: String,
    /// Crime subtype ("Subtipo de delito").
    pub crime_subtype: String,
    /// Modality, the narrowest classification level.
    pub modality: String,
    /// Incident counts for January through December.
    pub monthly_counts: [u32; 12],
}

impl CrimeRecord {
    /// Sums the twelve monthly counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.monthly_counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Returns the count for a single month.
    #[must_use]
    pub const fn count_for(&self, month: Month) -> u32 {
        self.monthly_counts[month.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels_are_spanish() {
        assert_eq!(Month::January.to_string(), "Enero");
        assert_eq!(Month::September.to_string(), "Septiembre");
        assert_eq!(Month::December.to_string(), "Diciembre");
    }

    #[test]
    fn month_parses_from_label() {
        assert_eq!("Enero".parse::<Month>().unwrap(), Month::January);
        assert_eq!("Diciembre".parse::<Month>().unwrap(), Month::December);
        assert!("Smarch".parse::<Month>().is_err());
    }

    #[test]
    fn months_are_in_calendar_order() {
        let all = Month::all();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], Month::January);
        assert_eq!(all[11], Month::December);
        for (i, month) in all.iter().enumerate() {
            assert_eq!(month.index(), i);
        }
    }

    #[test]
    fn record_total_sums_all_months() {
        let record = CrimeRecord {
            municipality: "Campeche".to_string(),
            year: 2022,
            legal_category: "El patrimonio".to_string(),
            crime_type: "Robo".to_string(),
            crime_subtype: "Robo a casa habitación".to_string(),
            modality: "Con violencia".to_string(),
            monthly_counts: [1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0],
        };
        assert_eq!(record.total(), 3);
        assert_eq!(record.count_for(Month::April), 2);
        assert_eq!(record.count_for(Month::May), 0);
    }
}

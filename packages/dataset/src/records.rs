//! CSV loader for the crime incidence table.
//!
//! The source file uses the FGE column layout: six categorical columns
//! (`Municipio`, `Año`, `Bien jurídico afectado`, `Tipo de delito`,
//! `Subtipo de delito`, `Modalidad`) followed by one column per month
//! (`Enero`..`Diciembre`). The categorical columns are required; month
//! columns may be absent or empty, in which case the count is zero.

use std::io::Read;
use std::path::Path;

use campeche_stats_dataset_models::{CrimeRecord, Month};

use crate::LoadError;

/// Header of the municipality column.
pub const MUNICIPALITY_COLUMN: &str = "Municipio";
/// Header of the year column.
pub const YEAR_COLUMN: &str = "Año";
/// Header of the legal category column.
pub const LEGAL_CATEGORY_COLUMN: &str = "Bien jurídico afectado";
/// Header of the crime type column.
pub const CRIME_TYPE_COLUMN: &str = "Tipo de delito";
/// Header of the crime subtype column.
pub const CRIME_SUBTYPE_COLUMN: &str = "Subtipo de delito";
/// Header of the modality column.
pub const MODALITY_COLUMN: &str = "Modalidad";

/// Column positions resolved from the CSV header row.
struct ColumnLayout {
    municipality: usize,
    year: usize,
    legal_category: usize,
    crime_type: usize,
    crime_subtype: usize,
    modality: usize,
    /// Position of each month column, `None` when the column is absent.
    months: [Option<usize>; 12],
}

impl ColumnLayout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let required = |name: &str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    name: name.to_string(),
                })
        };

        let mut months = [None; 12];
        for (slot, month) in months.iter_mut().zip(Month::all()) {
            *slot = headers.iter().position(|h| h == month.as_ref());
        }

        Ok(Self {
            municipality: required(MUNICIPALITY_COLUMN)?,
            year: required(YEAR_COLUMN)?,
            legal_category: required(LEGAL_CATEGORY_COLUMN)?,
            crime_type: required(CRIME_TYPE_COLUMN)?,
            crime_subtype: required(CRIME_SUBTYPE_COLUMN)?,
            modality: required(MODALITY_COLUMN)?,
            months,
        })
    }
}

/// Loads the crime incidence CSV from `path`.
///
/// # Errors
///
/// Returns [`LoadError`] if the file is missing, malformed, missing a
/// required column, or contains no data rows.
pub fn load_records(path: &Path) -> Result<Vec<CrimeRecord>, LoadError> {
    let file = std::fs::File::open(path)?;
    parse_records(file)
}

/// Parses crime records from any CSV reader.
///
/// # Errors
///
/// Returns [`LoadError`] if the CSV is malformed, a required column is
/// absent, or the file contains no data rows.
pub fn parse_records(reader: impl Read) -> Result<Vec<CrimeRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let layout = ColumnLayout::resolve(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (i, row) in csv_reader.records().enumerate() {
        let row = row?;
        // Header occupies line 1
        let line = i + 2;

        let year_raw = row.get(layout.year).unwrap_or_default();
        let year = year_raw.parse::<i32>().map_err(|_| LoadError::Malformed {
            message: format!("line {line}: invalid year '{year_raw}'"),
        })?;

        let mut monthly_counts = [0u32; 12];
        for (count, column) in monthly_counts.iter_mut().zip(&layout.months) {
            *count = match column.and_then(|c| row.get(c)) {
                None | Some("") => 0,
                Some(cell) => cell.parse().map_err(|_| LoadError::Malformed {
                    message: format!("line {line}: invalid monthly count '{cell}'"),
                })?,
            };
        }

        let field = |column: usize| row.get(column).unwrap_or_default().to_string();

        records.push(CrimeRecord {
            municipality: field(layout.municipality),
            year,
            legal_category: field(layout.legal_category),
            crime_type: field(layout.crime_type),
            crime_subtype: field(layout.crime_subtype),
            modality: field(layout.modality),
            monthly_counts,
        });
    }

    if records.is_empty() {
        return Err(LoadError::Malformed {
            message: "dataset contains no rows".to_string(),
        });
    }

    log::info!("Loaded {} crime records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Municipio,Año,Bien jurídico afectado,Tipo de delito,Subtipo de delito,Modalidad,Enero,Febrero,Marzo,Abril,Mayo,Junio,Julio,Agosto,Septiembre,Octubre,Noviembre,Diciembre";

    fn parse(csv: &str) -> Result<Vec<CrimeRecord>, LoadError> {
        parse_records(csv.as_bytes())
    }

    #[test]
    fn parses_complete_row() {
        let data = format!(
            "{HEADER}\nCampeche,2022,El patrimonio,Robo,Robo a casa habitación,Con violencia,1,0,0,2,0,0,0,0,0,0,0,0\n"
        );
        let records = parse(&data).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.municipality, "Campeche");
        assert_eq!(record.year, 2022);
        assert_eq!(record.crime_type, "Robo");
        assert_eq!(record.monthly_counts[0], 1);
        assert_eq!(record.monthly_counts[3], 2);
        assert_eq!(record.total(), 3);
    }

    #[test]
    fn empty_month_cells_parse_as_zero() {
        let data = format!(
            "{HEADER}\nCalkiní,2021,La vida,Homicidio,Homicidio doloso,Con arma de fuego,,,3,,,,,,,,,\n"
        );
        let records = parse(&data).unwrap();
        assert_eq!(records[0].monthly_counts, [0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn absent_month_columns_contribute_zero() {
        let data = "Municipio,Año,Bien jurídico afectado,Tipo de delito,Subtipo de delito,Modalidad,Enero\nCampeche,2022,El patrimonio,Robo,Robo de vehículo,Sin violencia,5\n";
        let records = parse(data).unwrap();
        assert_eq!(records[0].monthly_counts[0], 5);
        assert_eq!(records[0].total(), 5);
    }

    #[test]
    fn missing_required_column_is_rejected() {
        let data = "Municipio,Bien jurídico afectado,Tipo de delito,Subtipo de delito,Modalidad\nCampeche,El patrimonio,Robo,Robo de vehículo,Sin violencia\n";
        let err = parse(data).unwrap_err();
        match err {
            LoadError::MissingColumn { name } => assert_eq!(name, YEAR_COLUMN),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn invalid_year_is_rejected() {
        let data = format!(
            "{HEADER}\nCampeche,veintidós,El patrimonio,Robo,Robo de vehículo,Sin violencia,0,0,0,0,0,0,0,0,0,0,0,0\n"
        );
        assert!(matches!(
            parse(&data).unwrap_err(),
            LoadError::Malformed { .. }
        ));
    }

    #[test]
    fn invalid_month_count_is_rejected() {
        let data = format!(
            "{HEADER}\nCampeche,2022,El patrimonio,Robo,Robo de vehículo,Sin violencia,muchos,0,0,0,0,0,0,0,0,0,0,0\n"
        );
        assert!(matches!(
            parse(&data).unwrap_err(),
            LoadError::Malformed { .. }
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let data = format!("{HEADER}\n");
        assert!(matches!(
            parse(&data).unwrap_err(),
            LoadError::Malformed { .. }
        ));
    }
}

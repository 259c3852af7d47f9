//! Derived selector options and category dependency mappings.
//!
//! Built once from the loaded records, the index answers every cascading
//! selector query: which crime types a legal category offers, which
//! subtypes a crime type offers, and which modalities a full
//! (category, type, subtype) triple offers. Membership is drawn entirely
//! from values present in the records, so the selectors can never point at
//! data that does not exist.

use std::collections::BTreeMap;

use campeche_stats_dataset_models::CrimeRecord;

const EMPTY: &[String] = &[];

/// Immutable option index derived from the loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct OptionIndex {
    years: Vec<i32>,
    municipalities: Vec<String>,
    legal_categories: Vec<String>,
    crime_types: Vec<String>,
    types_by_category: BTreeMap<String, Vec<String>>,
    subtypes_by_type: BTreeMap<String, Vec<String>>,
    modalities_by_triple: BTreeMap<(String, String, String), Vec<String>>,
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

impl OptionIndex {
    /// Builds the index from the loaded records.
    ///
    /// Years are sorted ascending; every other list keeps first-appearance
    /// order, matching how the source dataset is presented.
    #[must_use]
    pub fn build(records: &[CrimeRecord]) -> Self {
        let mut index = Self::default();

        for record in records {
            if !index.years.contains(&record.year) {
                index.years.push(record.year);
            }
            push_unique(&mut index.municipalities, &record.municipality);
            push_unique(&mut index.legal_categories, &record.legal_category);
            push_unique(&mut index.crime_types, &record.crime_type);

            push_unique(
                index
                    .types_by_category
                    .entry(record.legal_category.clone())
                    .or_default(),
                &record.crime_type,
            );
            push_unique(
                index
                    .subtypes_by_type
                    .entry(record.crime_type.clone())
                    .or_default(),
                &record.crime_subtype,
            );
            push_unique(
                index
                    .modalities_by_triple
                    .entry((
                        record.legal_category.clone(),
                        record.crime_type.clone(),
                        record.crime_subtype.clone(),
                    ))
                    .or_default(),
                &record.modality,
            );
        }

        index.years.sort_unstable();
        index
    }

    /// Distinct years, ascending.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Distinct municipalities in first-appearance order.
    #[must_use]
    pub fn municipalities(&self) -> &[String] {
        &self.municipalities
    }

    /// Distinct legal categories in first-appearance order.
    #[must_use]
    pub fn legal_categories(&self) -> &[String] {
        &self.legal_categories
    }

    /// All distinct crime types regardless of category, in
    /// first-appearance order. Used by the home page's standalone crime
    /// type selector.
    #[must_use]
    pub fn crime_types(&self) -> &[String] {
        &self.crime_types
    }

    /// Crime types offered by a legal category; empty for an unknown
    /// category (never "all options").
    #[must_use]
    pub fn crime_types_for(&self, legal_category: &str) -> &[String] {
        self.types_by_category
            .get(legal_category)
            .map_or(EMPTY, Vec::as_slice)
    }

    /// Subtypes offered by a crime type; empty for an unknown type.
    #[must_use]
    pub fn subtypes_for(&self, crime_type: &str) -> &[String] {
        self.subtypes_by_type
            .get(crime_type)
            .map_or(EMPTY, Vec::as_slice)
    }

    /// Modalities offered by a (category, type, subtype) triple; empty for
    /// an unknown triple.
    #[must_use]
    pub fn modalities_for(
        &self,
        legal_category: &str,
        crime_type: &str,
        crime_subtype: &str,
    ) -> &[String] {
        self.modalities_by_triple
            .get(&(
                legal_category.to_string(),
                crime_type.to_string(),
                crime_subtype.to_string(),
            ))
            .map_or(EMPTY, Vec::as_slice)
    }

    /// Years available for the "other selection" comparison: every year
    /// except the primary one. A year cannot be compared against itself.
    #[must_use]
    pub fn comparison_years(&self, primary: i32) -> Vec<i32> {
        self.years
            .iter()
            .copied()
            .filter(|&y| y != primary)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        municipality: &str,
        year: i32,
        category: &str,
        crime_type: &str,
        subtype: &str,
        modality: &str,
    ) -> CrimeRecord {
        CrimeRecord {
            municipality: municipality.to_string(),
            year,
            legal_category: category.to_string(),
            crime_type: crime_type.to_string(),
            crime_subtype: subtype.to_string(),
            modality: modality.to_string(),
            monthly_counts: [0; 12],
        }
    }

    fn sample_records() -> Vec<CrimeRecord> {
        vec![
            record(
                "Campeche",
                2023,
                "El patrimonio",
                "Robo",
                "Robo a casa habitación",
                "Con violencia",
            ),
            record(
                "Campeche",
                2022,
                "El patrimonio",
                "Robo",
                "Robo a casa habitación",
                "Sin violencia",
            ),
            record(
                "Calkiní",
                2022,
                "El patrimonio",
                "Fraude",
                "Fraude",
                "Fraude",
            ),
            record(
                "Carmen",
                2021,
                "La vida y la integridad corporal",
                "Homicidio",
                "Homicidio doloso",
                "Con arma de fuego",
            ),
        ]
    }

    #[test]
    fn years_are_sorted_ascending() {
        let index = OptionIndex::build(&sample_records());
        assert_eq!(index.years(), [2021, 2022, 2023]);
    }

    #[test]
    fn municipalities_keep_first_appearance_order() {
        let index = OptionIndex::build(&sample_records());
        assert_eq!(index.municipalities(), ["Campeche", "Calkiní", "Carmen"]);
    }

    #[test]
    fn category_restricts_crime_types() {
        let index = OptionIndex::build(&sample_records());
        assert_eq!(index.crime_types_for("El patrimonio"), ["Robo", "Fraude"]);
        assert_eq!(
            index.crime_types_for("La vida y la integridad corporal"),
            ["Homicidio"]
        );
    }

    #[test]
    fn unknown_parent_yields_empty_options() {
        let index = OptionIndex::build(&sample_records());
        assert!(index.crime_types_for("La libertad personal").is_empty());
        assert!(index.subtypes_for("Secuestro").is_empty());
        assert!(
            index
                .modalities_for("El patrimonio", "Robo", "Robo de ganado")
                .is_empty()
        );
    }

    #[test]
    fn modalities_require_the_full_triple() {
        let index = OptionIndex::build(&sample_records());
        assert_eq!(
            index.modalities_for("El patrimonio", "Robo", "Robo a casa habitación"),
            ["Con violencia", "Sin violencia"]
        );
        assert!(
            index
                .modalities_for("La vida y la integridad corporal", "Robo", "Robo a casa habitación")
                .is_empty()
        );
    }

    #[test]
    fn comparison_years_exclude_the_primary() {
        let index = OptionIndex::build(&sample_records());
        assert_eq!(index.comparison_years(2022), [2021, 2023]);
        assert_eq!(index.comparison_years(2019), [2021, 2022, 2023]);
    }

    #[test]
    fn index_membership_is_drawn_from_records() {
        let records = sample_records();
        let index = OptionIndex::build(&records);

        for category in index.legal_categories() {
            assert!(records.iter().any(|r| &r.legal_category == category));
            for crime_type in index.crime_types_for(category) {
                assert!(
                    records
                        .iter()
                        .any(|r| &r.legal_category == category && &r.crime_type == crime_type)
                );
            }
        }
        for crime_type in index.crime_types() {
            for subtype in index.subtypes_for(crime_type) {
                assert!(
                    records
                        .iter()
                        .any(|r| &r.crime_type == crime_type && &r.crime_subtype == subtype)
                );
            }
        }
    }
}

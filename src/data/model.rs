use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the mandatory year column in every indicator table.
pub const YEAR_COLUMN: &str = "Year";

// ---------------------------------------------------------------------------
// Pillar – which table a dataset came from
// ---------------------------------------------------------------------------

/// The development pillars, plus the cross-pillar key-indicator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    KeyIndicators,
    Economic,
    Environmental,
    Human,
    Social,
}

impl Pillar {
    /// All pillars, in tab order.
    pub fn all() -> &'static [Pillar] {
        &[
            Pillar::KeyIndicators,
            Pillar::Economic,
            Pillar::Environmental,
            Pillar::Human,
            Pillar::Social,
        ]
    }

    /// File stem of the source table inside the data directory.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Pillar::KeyIndicators => "qatar_vision_key_indicators",
            Pillar::Economic => "economic_development",
            Pillar::Environmental => "environmental_development",
            Pillar::Human => "human_development",
            Pillar::Social => "social_development",
        }
    }

    /// English tab label (translated by the i18n layer).
    pub fn label(&self) -> &'static str {
        match self {
            Pillar::KeyIndicators => "Key Indicators",
            Pillar::Economic => "Economic Development",
            Pillar::Environmental => "Environmental Development",
            Pillar::Human => "Human Development",
            Pillar::Social => "Social Development",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of an indicator table
// ---------------------------------------------------------------------------

/// One year of indicator values.
///
/// Missing cells are simply absent from `values`; NaN is normalised to
/// missing on insertion so downstream code never sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub year: i32,
    values: BTreeMap<String, f64>,
}

impl Record {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert; `None` and NaN leave the field missing.
    pub fn with(mut self, field: &str, value: Option<f64>) -> Self {
        self.set(field, value);
        self
    }

    /// Set or clear a field.
    pub fn set(&mut self, field: &str, value: Option<f64>) {
        match value.filter(|v| !v.is_nan()) {
            Some(v) => {
                self.values.insert(field.to_string(), v);
            }
            None => {
                self.values.remove(field);
            }
        }
    }

    /// Present (non-null) value of `field`, if any.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }

    /// Names of the fields that carry a value in this row.
    pub fn present_fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Dataset – one loaded table
// ---------------------------------------------------------------------------

/// An ordered sequence of records sharing one set of indicator fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    /// Rows in source order.
    pub records: Vec<Record>,
    /// Indicator column names in source order (excludes `Year`).
    pub field_names: Vec<String>,
}

impl Dataset {
    /// Build a dataset with an explicit field list (loader path).
    pub fn new(field_names: Vec<String>, records: Vec<Record>) -> Self {
        Dataset {
            records,
            field_names,
        }
    }

    /// Build a dataset, deriving the field list from the records themselves.
    /// Fields that are missing in every row cannot be recovered this way;
    /// use [`Dataset::new`] when the schema is known.
    pub fn from_records(records: Vec<Record>) -> Self {
        let fields: BTreeSet<String> = records
            .iter()
            .flat_map(|r| r.present_fields().map(str::to_string))
            .collect();
        Dataset {
            records,
            field_names: fields.into_iter().collect(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `field` is part of this dataset's schema.
    pub fn has_field(&self, field: &str) -> bool {
        self.field_names.iter().any(|f| f == field)
    }

    /// Smallest and largest year present.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// True when years are unique and strictly increasing in source order.
    pub fn years_are_ordered(&self) -> bool {
        self.records.windows(2).all(|w| w[0].year < w[1].year)
    }

    /// `[year, value]` points for one field, skipping missing years
    /// (charts connect across the gaps).
    pub fn series(&self, field: &str) -> Vec<[f64; 2]> {
        self.records
            .iter()
            .filter_map(|r| r.get(field).map(|v| [r.year as f64, v]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_stored_as_missing() {
        let rec = Record::new(2020).with("gdp", Some(f64::NAN));
        assert_eq!(rec.get("gdp"), None);
        assert_eq!(rec.present_fields().count(), 0);
    }

    #[test]
    fn set_none_clears_a_value() {
        let mut rec = Record::new(2020).with("gdp", Some(1.0));
        rec.set("gdp", None);
        assert_eq!(rec.get("gdp"), None);
    }

    #[test]
    fn from_records_collects_fields() {
        let ds = Dataset::from_records(vec![
            Record::new(2016).with("b", Some(1.0)),
            Record::new(2017).with("a", Some(2.0)),
        ]);
        assert_eq!(ds.field_names, vec!["a".to_string(), "b".to_string()]);
        assert!(ds.has_field("a"));
        assert!(!ds.has_field("Year"));
    }

    #[test]
    fn year_order_check() {
        let ordered = Dataset::from_records(vec![Record::new(2016), Record::new(2017)]);
        let repeated = Dataset::from_records(vec![Record::new(2016), Record::new(2016)]);
        assert!(ordered.years_are_ordered());
        assert!(!repeated.years_are_ordered());
        assert_eq!(ordered.year_bounds(), Some((2016, 2017)));
        assert_eq!(Dataset::default().year_bounds(), None);
    }

    #[test]
    fn series_skips_gaps() {
        let ds = Dataset::from_records(vec![
            Record::new(2016).with("gdp", Some(1.0)),
            Record::new(2017),
            Record::new(2018).with("gdp", Some(3.0)),
        ]);
        assert_eq!(ds.series("gdp"), vec![[2016.0, 1.0], [2018.0, 3.0]]);
    }

    #[test]
    fn pillar_stems_are_distinct() {
        let stems: BTreeSet<&str> = Pillar::all().iter().map(|p| p.file_stem()).collect();
        assert_eq!(stems.len(), Pillar::all().len());
    }
}

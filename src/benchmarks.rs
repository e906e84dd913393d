//! Reference values that indicators are compared against.
//!
//! The table is read once at startup and never mutated. The query core does
//! not see it: callers look up a global average and pass the number in.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../assets/benchmarks.json");

/// A comparison value: most are numbers, a few are qualitative targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BenchmarkValue {
    Number(f64),
    Text(String),
}

impl BenchmarkValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            BenchmarkValue::Number(v) => Some(*v),
            BenchmarkValue::Text(_) => None,
        }
    }
}

impl fmt::Display for BenchmarkValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkValue::Number(v) => write!(f, "{v}"),
            BenchmarkValue::Text(s) => f.write_str(s),
        }
    }
}

/// Benchmarks for one indicator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSpec {
    #[serde(default)]
    pub global_avg: Option<f64>,
    #[serde(default)]
    pub regional: BTreeMap<String, BenchmarkValue>,
    #[serde(default)]
    pub leading: BTreeMap<String, BenchmarkValue>,
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Global,
    Regional,
    Leading,
    Note,
}

/// One line of a benchmark card.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkEntry {
    pub kind: EntryKind,
    pub label: String,
    pub value: BenchmarkValue,
}

/// A numeric benchmark drawn as a horizontal line on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub kind: EntryKind,
    pub label: String,
    pub value: f64,
}

impl BenchmarkSpec {
    /// Every entry in card order: global, regional, leading, notes.
    pub fn entries(&self) -> Vec<BenchmarkEntry> {
        let mut out = Vec::new();
        if let Some(avg) = self.global_avg {
            out.push(BenchmarkEntry {
                kind: EntryKind::Global,
                label: "Global average".to_string(),
                value: BenchmarkValue::Number(avg),
            });
        }
        let keyed = [
            (EntryKind::Regional, &self.regional),
            (EntryKind::Leading, &self.leading),
        ];
        for (kind, map) in keyed {
            out.extend(map.iter().map(|(label, value)| BenchmarkEntry {
                kind,
                label: label.clone(),
                value: value.clone(),
            }));
        }
        out.extend(self.notes.iter().map(|(label, text)| BenchmarkEntry {
            kind: EntryKind::Note,
            label: label.clone(),
            value: BenchmarkValue::Text(text.clone()),
        }));
        out
    }

    /// Numeric global/regional/leading entries; text values and notes are
    /// skipped.
    pub fn reference_lines(&self) -> Vec<ReferenceLine> {
        self.entries()
            .into_iter()
            .filter(|e| e.kind != EntryKind::Note)
            .filter_map(|e| {
                let value = e.value.as_f64()?;
                let label = match e.kind {
                    EntryKind::Global => format!("Global Average: {value}"),
                    _ => format!("{}: {value}", e.label),
                };
                Some(ReferenceLine {
                    kind: e.kind,
                    label,
                    value,
                })
            })
            .collect()
    }
}

/// Immutable `indicator key → benchmarks` map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTable {
    specs: BTreeMap<String, BenchmarkSpec>,
}

impl BenchmarkTable {
    /// The table compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED).context("parsing embedded benchmarks")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading benchmarks from {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let specs: BTreeMap<String, BenchmarkSpec> = serde_json::from_str(text)?;
        Ok(BenchmarkTable { specs })
    }

    pub fn get(&self, key: &str) -> Option<&BenchmarkSpec> {
        self.specs.get(key)
    }

    /// Shortcut for the value `summarize` compares against.
    pub fn global_avg(&self, key: &str) -> Option<f64> {
        self.get(key)?.global_avg
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses() {
        let table = BenchmarkTable::embedded().unwrap();
        assert_eq!(table.global_avg("gdp_per_capita"), Some(22450.0));
        assert_eq!(table.global_avg("co2_per_capita"), Some(4.8));
        assert_eq!(table.global_avg("energy_production"), None);
        assert_eq!(table.global_avg("missing"), None);
    }

    #[test]
    fn text_values_are_not_drawn() {
        let table = BenchmarkTable::embedded().unwrap();
        let agri = table.get("agriculture_value").unwrap();
        assert!(agri.reference_lines().is_empty());
        // but they still appear on the card
        assert_eq!(agri.entries().len(), 3);
    }

    #[test]
    fn reference_lines_order_and_labels() {
        let spec = BenchmarkSpec {
            global_avg: Some(4.8),
            regional: BTreeMap::from([("Kuwait".to_string(), BenchmarkValue::Number(25.0))]),
            leading: BTreeMap::from([("EU".to_string(), BenchmarkValue::Number(6.5))]),
            notes: BTreeMap::from([("Target".to_string(), "net zero".to_string())]),
        };
        let lines = spec.reference_lines();
        let kinds: Vec<EntryKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![EntryKind::Global, EntryKind::Regional, EntryKind::Leading]);
        assert_eq!(lines[0].label, "Global Average: 4.8");
        assert_eq!(lines[1].label, "Kuwait: 25");
    }

    #[test]
    fn partial_spec_defaults() {
        let table = BenchmarkTable::from_json_str(r#"{"x": {"global_avg": 1.5}}"#).unwrap();
        let spec = table.get("x").unwrap();
        assert!(spec.regional.is_empty());
        assert!(spec.notes.is_empty());
    }
}

use std::fs;
use std::path::Path;

use vision_dash::benchmarks::BenchmarkTable;
use vision_dash::data::loader::{load_file, load_pillar};
use vision_dash::data::{Pillar, YearRange, filter_by_year_range, summarize};
use vision_dash::layout::{self, columns};

const KEY_CSV: &str = "\
Year,GDP per capita,HCI
2016,100000,
2020,,0.64
2023,116000,
";

fn key_dataset(dir: &Path) -> vision_dash::data::Dataset {
    let path = dir.join("key.csv");
    fs::write(&path, KEY_CSV).unwrap();
    load_file(&path).unwrap()
}

#[test]
fn latest_value_and_ratio_over_full_range() {
    let dir = tempfile::tempdir().unwrap();
    let ds = key_dataset(dir.path());

    let kpi = summarize(&ds, YearRange::new(2016, 2023).unwrap(), "GDP per capita", Some(22450.0));
    assert!(kpi.available);
    assert_eq!(kpi.latest_value, Some(116_000.0));
    assert_eq!(kpi.latest_year, Some(2023));
    assert_eq!(kpi.ratio_to_global_avg, Some(5.2));
}

#[test]
fn gap_in_the_selection_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let ds = key_dataset(dir.path());

    let kpi = summarize(&ds, YearRange::new(2017, 2019).unwrap(), "GDP per capita", Some(22450.0));
    assert!(!kpi.available);
    assert_eq!(kpi.latest_value, None);
    assert_eq!(kpi.latest_year, None);
    assert_eq!(kpi.ratio_to_global_avg, None);
}

#[test]
fn selection_past_the_data_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let ds = key_dataset(dir.path());

    let range = YearRange::new(2025, 2030).unwrap();
    assert!(filter_by_year_range(&ds, range).is_empty());
    assert!(!summarize(&ds, range, "GDP per capita", Some(22450.0)).available);
}

#[test]
fn sparse_column_reports_its_own_year() {
    let dir = tempfile::tempdir().unwrap();
    let ds = key_dataset(dir.path());

    let kpi = summarize(&ds, YearRange::new(2016, 2023).unwrap(), "HCI", Some(0.56));
    assert_eq!(kpi.latest_year, Some(2020));
    assert_eq!(kpi.ratio_to_global_avg, Some(1.1));
}

#[test]
fn inverted_range_selects_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let ds = key_dataset(dir.path());

    assert!(YearRange::new(2023, 2016).is_err());
    let inverted = YearRange { min: 2023, max: 2016 };
    assert!(filter_by_year_range(&ds, inverted).is_empty());
    assert!(!summarize(&ds, inverted, "GDP per capita", None).available);
}

/// The bundled tables under `data/` carry every column the tabs ask for.
#[test]
fn bundled_data_covers_the_layout() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let benchmarks = BenchmarkTable::embedded().unwrap();

    for tab in layout::tabs() {
        let ds = load_pillar(&data_dir, tab.pillar).unwrap();
        let range = YearRange::spanning(&ds).unwrap();

        for kpi in &tab.kpis {
            assert!(ds.has_field(kpi.field), "{}: missing KPI column '{}'", tab.pillar, kpi.field);
            let result = kpi.evaluate(&ds, range, &benchmarks);
            assert!(result.available, "{}: '{}' has no data", tab.pillar, kpi.title);
        }
        for chart in &tab.charts {
            for series in &chart.series {
                assert!(
                    ds.has_field(series.field),
                    "{}: chart '{}' needs column '{}'",
                    tab.pillar,
                    chart.title,
                    series.field
                );
            }
        }
    }
}

#[test]
fn bundled_key_indicators_headline_values() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let ds = load_pillar(&data_dir, Pillar::KeyIndicators).unwrap();
    let range = YearRange::spanning(&ds).unwrap();

    let co2 = summarize(&ds, range, columns::CO2_PER_CAPITA, Some(4.8));
    assert_eq!(co2.latest_value, Some(38.84));
    assert_eq!(co2.ratio_to_global_avg, Some(8.1));

    let stem = summarize(&ds, range, columns::STEM_GRADUATES, Some(23.0));
    assert_eq!(stem.latest_year, Some(2021));
}

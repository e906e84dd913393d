use std::fs;
use std::path::Path;

use vision_dash::data::loader::{load_file, load_pillar, write_parquet};
use vision_dash::data::{Dataset, LoadError, Pillar, Record};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn load_error(err: &anyhow::Error) -> Option<&LoadError> {
    err.chain().find_map(|e| e.downcast_ref::<LoadError>())
}

#[test]
fn csv_blank_and_nan_cells_are_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "t.csv",
        "Year,GDP,\"CO₂, per capita\"\n2016,100000,41.2\n2017.0,,nan\n2018,105000,n/a\n",
    );

    let ds = load_file(&path).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.field_names, vec!["GDP".to_string(), "CO₂, per capita".to_string()]);
    assert_eq!(ds.records[1].year, 2017);
    assert_eq!(ds.records[1].get("GDP"), None);
    assert_eq!(ds.records[1].get("CO₂, per capita"), None);
    assert_eq!(ds.records[2].get("CO₂, per capita"), None);
    assert_eq!(ds.records[2].get("GDP"), Some(105_000.0));
}

#[test]
fn csv_without_year_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "t.csv", "year,GDP\n2016,1\n");

    let err = load_file(&path).unwrap_err();
    assert!(matches!(
        load_error(&err),
        Some(LoadError::MissingYearColumn { .. })
    ));
}

#[test]
fn csv_with_bad_year_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "t.csv", "Year,GDP\n2016,1\nsoon,2\n");

    let err = load_file(&path).unwrap_err();
    match load_error(&err) {
        Some(LoadError::InvalidYear { row, value }) => {
            assert_eq!(*row, 1);
            assert_eq!(value, "soon");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "t.xlsx", "");

    let err = load_file(&path).unwrap_err();
    assert!(matches!(
        load_error(&err),
        Some(LoadError::UnsupportedExtension(ext)) if ext == "xlsx"
    ));
}

#[test]
fn json_records_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "t.json",
        r#"[
            {"Year": 2016, "GDP": 100000.0, "HCI": null},
            {"Year": 2020.0, "GDP": null, "HCI": 0.64},
            {"Year": 2023, "GDP": 116000, "HCI": "n/a"}
        ]"#,
    );

    let ds = load_file(&path).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.records[1].year, 2020);
    assert!(ds.has_field("GDP"));
    assert!(ds.has_field("HCI"));
    assert_eq!(ds.records[0].get("HCI"), None);
    assert_eq!(ds.records[1].get("HCI"), Some(0.64));
    assert_eq!(ds.records[2].get("GDP"), Some(116_000.0));
    assert_eq!(ds.records[2].get("HCI"), None);
}

#[test]
fn json_row_without_year_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "t.json", r#"[{"GDP": 1.0}]"#);

    let err = load_file(&path).unwrap_err();
    assert!(matches!(
        load_error(&err),
        Some(LoadError::MissingYearColumn { .. })
    ));
}

#[test]
fn parquet_round_trip_keeps_missing_values() {
    let dir = tempfile::tempdir().unwrap();
    let original = Dataset::new(
        vec!["GDP".to_string(), "HCI".to_string()],
        vec![
            Record::new(2016).with("GDP", Some(100_000.0)),
            Record::new(2020).with("HCI", Some(0.64)),
            Record::new(2023).with("GDP", Some(116_000.0)),
        ],
    );

    let path = dir.path().join("t.parquet");
    write_parquet(&original, &path).unwrap();
    let loaded = load_file(&path).unwrap();

    assert_eq!(loaded.field_names, original.field_names);
    assert_eq!(loaded.records, original.records);
}

#[test]
fn load_pillar_prefers_csv_and_reports_missing_tables() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "social_development.csv", "Year,A\n2016,1\n");
    write(dir.path(), "social_development.json", r#"[{"Year": 1999, "B": 2}]"#);

    let ds = load_pillar(dir.path(), Pillar::Social).unwrap();
    assert!(ds.has_field("A"));
    assert_eq!(ds.records[0].year, 2016);

    let err = load_pillar(dir.path(), Pillar::Economic).unwrap_err();
    match load_error(&err) {
        Some(LoadError::NotFound { stem, .. }) => assert_eq!(stem, "economic_development"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unordered_years_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "t.csv", "Year,A\n2020,1\n2016,2\n2020,3\n");

    let ds = load_file(&path).unwrap();
    assert_eq!(ds.len(), 3);
    assert!(!ds.years_are_ordered());
}

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::LoadError;
use super::model::{Dataset, Pillar, Record, YEAR_COLUMN};

/// Extensions tried, in order, when looking a pillar table up by stem.
const PILLAR_EXTENSIONS: &[&str] = &["csv", "parquet", "pq", "json"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an indicator table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with a `Year` column, one column per indicator
/// * `.json`    – `[{ "Year": 2016, "<indicator>": 1.0, ... }, ...]`
/// * `.parquet` – `Year` column plus numeric indicator columns
///
/// Blank cells, `null`s and NaN all become missing values.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => return Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    if !dataset.years_are_ordered() {
        log::warn!(
            "{}: years are not strictly increasing; latest-value lookups still use the maximum year",
            path.display()
        );
    }
    log::info!(
        "Loaded {} rows with {} indicator fields from {}",
        dataset.len(),
        dataset.field_names.len(),
        path.display()
    );
    Ok(dataset)
}

/// Load the table backing `pillar` from `data_dir`, trying each supported
/// extension in turn.
pub fn load_pillar(data_dir: &Path, pillar: Pillar) -> Result<Dataset> {
    let stem = pillar.file_stem();
    for ext in PILLAR_EXTENSIONS {
        let candidate = data_dir.join(format!("{stem}.{ext}"));
        if candidate.is_file() {
            return load_file(&candidate);
        }
    }
    Err(LoadError::NotFound {
        stem: stem.to_string(),
        dir: data_dir.display().to_string(),
    }
    .into())
}

/// Write a dataset as Parquet: `Year` as Int64, every indicator as a
/// nullable Float64 column.
pub fn write_parquet(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut fields = vec![Field::new(YEAR_COLUMN, DataType::Int64, false)];
    fields.extend(
        dataset
            .field_names
            .iter()
            .map(|name| Field::new(name, DataType::Float64, true)),
    );
    let schema = Arc::new(Schema::new(fields));

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(dataset.field_names.len() + 1);
    columns.push(Arc::new(Int64Array::from(
        dataset
            .records
            .iter()
            .map(|r| r.year as i64)
            .collect::<Vec<_>>(),
    )));
    for name in &dataset.field_names {
        columns.push(Arc::new(Float64Array::from(
            dataset
                .records
                .iter()
                .map(|r| r.get(name))
                .collect::<Vec<_>>(),
        )));
    }

    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row, a `Year` column, every other column an indicator.
/// Years may be written as `2016` or `2016.0` (pandas float export).
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let year_idx = headers
        .iter()
        .position(|h| h == YEAR_COLUMN)
        .ok_or(LoadError::MissingYearColumn { column: YEAR_COLUMN })?;

    let field_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != year_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let year = parse_year(row.get(year_idx).unwrap_or(""), row_no)?;

        let mut record = Record::new(year);
        for (col_idx, cell) in row.iter().enumerate() {
            if col_idx == year_idx {
                continue;
            }
            record.set(&headers[col_idx], parse_cell(cell));
        }
        records.push(record);
    }

    Ok(Dataset::new(field_names, records))
}

fn parse_year(s: &str, row: usize) -> Result<i32, LoadError> {
    let s = s.trim();
    if let Ok(year) = s.parse::<i32>() {
        return Ok(year);
    }
    match s.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => Ok(f as i32),
        _ => Err(LoadError::InvalidYear {
            row,
            value: s.to_string(),
        }),
    }
}

/// Blank and non-numeric cells are missing. `nan` parses to NaN, which
/// [`Record::set`] also treats as missing.
fn parse_cell(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Year": 2016, "GDP per capita": 59000.0, "HCI": null },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut field_names: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let year_val = obj
            .get(YEAR_COLUMN)
            .ok_or(LoadError::MissingYearColumn { column: YEAR_COLUMN })?;
        let year = json_year(year_val, i)?;

        let mut record = Record::new(year);
        for (key, val) in obj {
            if key == YEAR_COLUMN {
                continue;
            }
            if !field_names.iter().any(|f| f == key) {
                field_names.push(key.clone());
            }
            record.set(key, val.as_f64());
        }
        records.push(record);
    }

    Ok(Dataset::new(field_names, records))
}

fn json_year(val: &JsonValue, row: usize) -> Result<i32, LoadError> {
    if let Some(year) = val.as_i64().and_then(|y| i32::try_from(y).ok()) {
        return Ok(year);
    }
    match val.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => Ok(f as i32),
        _ => Err(LoadError::InvalidYear {
            row,
            value: val.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet indicator table.
///
/// Expected schema:
/// - `Year`: Int32, Int64 or integral Float64
/// - any Float32 / Float64 / Int32 / Int64 column: an indicator
/// - other column types are skipped with a warning
///
/// Works with files written by **Pandas** (`df.to_parquet()`), **Polars**
/// (`df.write_parquet()`) and [`write_parquet`].
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let schema = builder.schema().clone();
    if schema.index_of(YEAR_COLUMN).is_err() {
        return Err(LoadError::MissingYearColumn { column: YEAR_COLUMN }.into());
    }

    let mut field_names = Vec::new();
    for field in schema.fields() {
        if field.name() == YEAR_COLUMN {
            continue;
        }
        if is_numeric(field.data_type()) {
            field_names.push(field.name().clone());
        } else {
            log::warn!(
                "{}: skipping non-numeric column '{}' ({:?})",
                path.display(),
                field.name(),
                field.data_type()
            );
        }
    }

    let reader = builder.build().context("building parquet reader")?;
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let batch_schema = batch.schema();
        let year_col = batch.column(
            batch_schema
                .index_of(YEAR_COLUMN)
                .map_err(|_| LoadError::MissingYearColumn { column: YEAR_COLUMN })?,
        );

        let indicator_cols: Vec<(&str, &ArrayRef)> = field_names
            .iter()
            .filter_map(|name| {
                let idx = batch_schema.index_of(name).ok()?;
                Some((name.as_str(), batch.column(idx)))
            })
            .collect();

        for row in 0..batch.num_rows() {
            let year = numeric_value(year_col, row)
                .filter(|y| y.fract() == 0.0)
                .map(|y| y as i32)
                .ok_or_else(|| LoadError::InvalidYear {
                    row: records.len(),
                    value: format!("{:?}", numeric_value(year_col, row)),
                })?;

            let mut record = Record::new(year);
            for (name, col) in &indicator_cols {
                record.set(name, numeric_value(col, row));
            }
            records.push(record);
        }
    }

    Ok(Dataset::new(field_names, records))
}

// -- Arrow helpers --

fn is_numeric(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32
    )
}

/// Read one cell of a numeric column as `f64`; nulls and unsupported types
/// give `None`.
fn numeric_value(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row)),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| a.value(row) as f64),
        _ => None,
    }
}

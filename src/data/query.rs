use serde::Serialize;

use super::filter::{YearRange, filter_by_year_range};
use super::model::Dataset;

// ---------------------------------------------------------------------------
// KpiResult – derived summary for one indicator
// ---------------------------------------------------------------------------

/// Latest-value summary of one indicator over a year selection.
///
/// `available == false` is the single "no data for this selection" outcome:
/// all derived fields are then `None`. A present value with a missing or
/// degenerate benchmark keeps `available == true` and only drops the ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiResult {
    pub indicator_name: String,
    pub latest_value: Option<f64>,
    pub latest_year: Option<i32>,
    pub ratio_to_global_avg: Option<f64>,
    pub available: bool,
}

impl KpiResult {
    fn unavailable(indicator_name: &str) -> Self {
        KpiResult {
            indicator_name: indicator_name.to_string(),
            latest_value: None,
            latest_year: None,
            ratio_to_global_avg: None,
            available: false,
        }
    }
}

/// Value and year of the most recent record where `field` is present.
///
/// Ties on the maximum year resolve to the first such record in dataset
/// order.
pub fn latest_available(dataset: &Dataset, field: &str) -> Option<(f64, i32)> {
    let mut best: Option<(f64, i32)> = None;
    for rec in &dataset.records {
        let Some(value) = rec.get(field) else {
            continue;
        };
        match best {
            Some((_, year)) if rec.year <= year => {}
            _ => best = Some((value, rec.year)),
        }
    }
    best
}

/// `value / benchmark`, rounded to one decimal place.
///
/// `None` when the value is missing, the benchmark is zero, or the quotient
/// would not be finite.
pub fn ratio_to_benchmark(value: Option<f64>, benchmark: f64) -> Option<f64> {
    let value = value?;
    if benchmark == 0.0 || !benchmark.is_finite() || !value.is_finite() {
        return None;
    }
    let ratio = value / benchmark;
    Some((ratio * 10.0).round() / 10.0)
}

/// Filter to `range`, take the latest available `field` value and compare it
/// with `benchmark` (the indicator's global average, if it has one).
pub fn summarize(
    dataset: &Dataset,
    range: YearRange,
    field: &str,
    benchmark: Option<f64>,
) -> KpiResult {
    if !dataset.has_field(field) {
        log::debug!("indicator '{field}' is not a column of this dataset");
        return KpiResult::unavailable(field);
    }

    let filtered = filter_by_year_range(dataset, range);
    let Some((value, year)) = latest_available(&filtered, field) else {
        return KpiResult::unavailable(field);
    };

    KpiResult {
        indicator_name: field.to_string(),
        latest_value: Some(value),
        latest_year: Some(year),
        ratio_to_global_avg: benchmark.and_then(|b| ratio_to_benchmark(Some(value), b)),
        available: true,
    }
}

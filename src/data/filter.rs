use serde::{Deserialize, Serialize};

use super::error::RangeError;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// YearRange – the slider selection
// ---------------------------------------------------------------------------

/// Closed year interval `[min, max]`, both ends inclusive.
///
/// Fields are public so a UI can hold an in-progress selection; an inverted
/// range is never an error for [`filter_by_year_range`], it just selects
/// nothing. Use [`YearRange::new`] to reject it up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Validating constructor.
    pub fn new(min: i32, max: i32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(YearRange { min, max })
    }

    /// Full year extent of a dataset, `None` when it has no rows.
    pub fn spanning(dataset: &Dataset) -> Option<Self> {
        dataset
            .year_bounds()
            .map(|(min, max)| YearRange { min, max })
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Clamp both ends into `bounds`, then swap if that left them inverted.
    pub fn clamp_to(self, bounds: YearRange) -> Self {
        let min = self.min.clamp(bounds.min, bounds.max);
        let max = self.max.clamp(bounds.min, bounds.max);
        if min > max {
            YearRange { min: max, max: min }
        } else {
            YearRange { min, max }
        }
    }
}

/// Records whose year lies in `range`, in original order.
///
/// Returns an empty dataset (same schema) when nothing matches or the range
/// is inverted. The input is never modified.
pub fn filter_by_year_range(dataset: &Dataset, range: YearRange) -> Dataset {
    if range.is_inverted() {
        log::debug!("inverted year range {}..={}, selecting nothing", range.min, range.max);
        return Dataset::new(dataset.field_names.clone(), Vec::new());
    }
    let records = dataset
        .records
        .iter()
        .filter(|r| range.contains(r.year))
        .cloned()
        .collect();
    Dataset::new(dataset.field_names.clone(), records)
}

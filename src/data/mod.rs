/// Data layer: indicator tables, loading, year filtering and KPI queries.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (Year + indicator fields)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  YearRange predicate → Dataset subset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  latest available value + benchmark ratio → KpiResult
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod query;

pub use error::{LoadError, RangeError};
pub use filter::{YearRange, filter_by_year_range};
pub use model::{Dataset, Pillar, Record, YEAR_COLUMN};
pub use query::{KpiResult, latest_available, ratio_to_benchmark, summarize};

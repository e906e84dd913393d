//! Indicator dashboard core: data tables, year-range KPI queries, benchmark
//! and insight catalogs, and the per-tab layout the desktop app renders.

pub mod benchmarks;
pub mod config;
pub mod data;
pub mod i18n;
pub mod insights;
pub mod layout;

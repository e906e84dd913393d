use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use vision_dash::benchmarks::BenchmarkTable;
use vision_dash::config::DashboardConfig;
use vision_dash::data::loader::load_pillar;
use vision_dash::data::{Dataset, Pillar, YearRange};
use vision_dash::i18n::{Language, Translations};
use vision_dash::insights::InsightCatalog;
use vision_dash::layout::{self, Tab};

/// Slider selection used before any data is loaded.
const FALLBACK_RANGE: YearRange = YearRange { min: 2016, max: 2023 };

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub data_dir: PathBuf,

    /// Tables that loaded successfully.
    pub datasets: BTreeMap<Pillar, Dataset>,

    /// Load failures, shown on the affected tab.
    pub load_errors: BTreeMap<Pillar, String>,

    pub tabs: Vec<Tab>,
    pub active: Pillar,

    /// Current slider selection, always inside `bounds` once data exists.
    pub range: YearRange,

    /// Year extent of the key-indicator table (or of everything loaded, if
    /// that table is missing).
    pub bounds: Option<YearRange>,

    pub language: Language,
    pub benchmarks: BenchmarkTable,
    pub insights: InsightCatalog,
    pub translations: Translations,

    pub show_table: bool,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    initial_range: Option<YearRange>,
}

impl AppState {
    /// Build the catalogs from `config` and load every pillar table.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let benchmarks = match &config.benchmarks_path {
            Some(path) => BenchmarkTable::from_path(path)?,
            None => BenchmarkTable::embedded()?,
        };

        let mut state = Self {
            data_dir: config.data_dir.clone(),
            datasets: BTreeMap::new(),
            load_errors: BTreeMap::new(),
            tabs: layout::tabs(),
            active: Pillar::KeyIndicators,
            range: config.initial_range.unwrap_or(FALLBACK_RANGE),
            bounds: None,
            language: config.language,
            benchmarks,
            insights: InsightCatalog::embedded()?,
            translations: Translations::embedded()?,
            show_table: false,
            status_message: None,
            initial_range: config.initial_range,
        };
        state.reload();
        Ok(state)
    }

    /// (Re)load every pillar table from `data_dir`. A failing table only
    /// affects its own tab.
    pub fn reload(&mut self) {
        self.datasets.clear();
        self.load_errors.clear();

        for &pillar in Pillar::all() {
            match load_pillar(&self.data_dir, pillar) {
                Ok(ds) => {
                    self.datasets.insert(pillar, ds);
                }
                Err(e) => {
                    log::error!("Failed to load {pillar}: {e:#}");
                    self.load_errors.insert(pillar, format!("{e:#}"));
                }
            }
        }

        self.bounds = self.compute_bounds();
        let wanted = self.initial_range.unwrap_or(self.range);
        self.range = match self.bounds {
            Some(bounds) if self.initial_range.is_some() => wanted.clamp_to(bounds),
            Some(bounds) => bounds,
            None => wanted,
        };

        self.status_message = if self.datasets.is_empty() {
            Some(format!("No data loaded from {}", self.data_dir.display()))
        } else if !self.load_errors.is_empty() {
            Some(format!(
                "{} of {} tables failed to load",
                self.load_errors.len(),
                Pillar::all().len()
            ))
        } else {
            None
        };
    }

    /// Point at another data directory and reload. The configured initial
    /// range no longer applies: the sliders reset to the new data's extent.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        log::info!("Switching data directory to {}", dir.display());
        self.data_dir = dir;
        self.initial_range = None;
        self.reload();
    }

    fn compute_bounds(&self) -> Option<YearRange> {
        if let Some(key) = self.datasets.get(&Pillar::KeyIndicators) {
            if let Some(span) = YearRange::spanning(key) {
                return Some(span);
            }
        }
        self.datasets
            .values()
            .filter_map(YearRange::spanning)
            .reduce(|a, b| YearRange {
                min: a.min.min(b.min),
                max: a.max.max(b.max),
            })
    }

    /// Update the slider selection, keeping it inside the data bounds.
    pub fn set_range(&mut self, min: i32, max: i32) {
        let wanted = YearRange { min, max };
        self.range = match self.bounds {
            Some(bounds) => wanted.clamp_to(bounds),
            None if wanted.is_inverted() => YearRange { min: max, max: min },
            None => wanted,
        };
    }

    pub fn tr<'a>(&'a self, text: &'a str) -> Cow<'a, str> {
        self.translations.translate(self.language, text)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.pillar == self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(dir: &std::path::Path) -> DashboardConfig {
        DashboardConfig {
            data_dir: dir.to_path_buf(),
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn missing_tables_are_reported_per_tab() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("qatar_vision_key_indicators.csv"),
            "Year,GDP\n2015,1\n2018,2\n2021,3\n",
        )
        .unwrap();

        let state = AppState::new(&config_for(dir.path())).unwrap();
        assert!(state.datasets.contains_key(&Pillar::KeyIndicators));
        assert_eq!(state.load_errors.len(), 4);
        assert_eq!(state.bounds, Some(YearRange { min: 2015, max: 2021 }));
        assert_eq!(state.range, YearRange { min: 2015, max: 2021 });
        assert!(state.status_message.is_some());
    }

    #[test]
    fn range_is_clamped_to_bounds() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("qatar_vision_key_indicators.csv"),
            "Year,GDP\n2016,1\n2023,2\n",
        )
        .unwrap();

        let mut state = AppState::new(&config_for(dir.path())).unwrap();
        state.set_range(2010, 2030);
        assert_eq!(state.range, YearRange { min: 2016, max: 2023 });
        state.set_range(2022, 2018);
        assert_eq!(state.range, YearRange { min: 2018, max: 2022 });
    }

    #[test]
    fn initial_range_from_config_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("qatar_vision_key_indicators.csv"),
            "Year,GDP\n2016,1\n2023,2\n",
        )
        .unwrap();

        let config = DashboardConfig {
            initial_range: Some(YearRange { min: 2019, max: 2040 }),
            ..config_for(dir.path())
        };
        let state = AppState::new(&config).unwrap();
        assert_eq!(state.range, YearRange { min: 2019, max: 2023 });
    }

    #[test]
    fn empty_directory_keeps_fallback_range() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(&config_for(dir.path())).unwrap();
        assert!(state.datasets.is_empty());
        assert_eq!(state.bounds, None);
        assert_eq!(state.range, FALLBACK_RANGE);
    }
}

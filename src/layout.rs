//! What each dashboard tab shows.
//!
//! Tabs are plain descriptors: charts name the columns they plot, KPI cards
//! name the column and benchmark they summarise. Every card goes through
//! [`KpiSpec::evaluate`], so all of them share one "no data" outcome.

use crate::benchmarks::BenchmarkTable;
use crate::data::{Dataset, KpiResult, Pillar, YearRange, summarize};
use crate::i18n::{Language, Translations};

/// Source column names, as they appear in the indicator tables.
pub mod columns {
    pub const GDP_PPP: &str = "GDP per capita, PPP (constant 2021 international $)";
    pub const GDP_CURRENT: &str = "GDP per capita";
    pub const HCI: &str = "Human Capital Index (HCI) (scale 0-1)";
    pub const CO2_TOTAL: &str = "Annual CO₂ emissions";
    pub const CO2_OIL: &str = "Annual CO₂ emissions from oil";
    pub const CO2_PER_CAPITA: &str = "Annual CO₂ emissions (per capita)";
    pub const CO2_OIL_PER_CAPITA: &str = "Annual CO₂ emissions from oil (per capita)";
    pub const ELEC_FOSSIL: &str = "Electricity from fossil fuels - TWh (adapted for visualization of chart elec-fossil-nuclear-renewables)";
    pub const ELEC_NUCLEAR: &str = "Electricity from nuclear - TWh (adapted for visualization of chart elec-fossil-nuclear-renewables)";
    pub const ELEC_RENEWABLES: &str = "Electricity from renewables - TWh (adapted for visualization of chart elec-fossil-nuclear-renewables)";
    pub const ELEC_SOLAR: &str = "Electricity from solar - TWh (adapted for visualization of chart electricity-prod-source-stacked)";
    pub const ELEC_BIOENERGY: &str = "Electricity from bioenergy - TWh (adapted for visualization of chart electricity-prod-source-stacked)";
    pub const SOLAR_CAPACITY: &str = "Solar capacity (total) (GW)";
    pub const ENERGY_CHANGE: &str = "Annual change in primary energy consumption (%)";
    pub const OIL_PRODUCTION: &str = "Oil production (TWh)";
    pub const GAS_PRODUCTION: &str = "Gas production - TWh";
    pub const PRIMARY_ENERGY: &str = "Primary energy consumption - TWh";
    pub const OIL_CONSUMPTION: &str = "Oil consumption - TWh";
    pub const GAS_CONSUMPTION: &str = "Gas consumption - TWh";
    pub const COAL_CONSUMPTION: &str = "Coal consumption - TWh";
    pub const OIL_GROWTH: &str = "Oil (% growth)";
    pub const GAS_GROWTH: &str = "Gas (% growth)";
    pub const COAL_GROWTH: &str = "Coal (% growth)";
    pub const AGRICULTURE_VALUE: &str = "Agriculture, forestry, and fishing, value added per worker (constant 2015 US$)";
    pub const BUSINESS_GRADUATES: &str = "Percentage of graduates from tertiary education graduating from Business, Administration and Law programmes, (%)";
    pub const EXPECTED_YEARS: &str = "Expected Years of School";
    pub const LEARNING_ADJUSTED_YEARS: &str = "Learning-Adjusted Years of School";
    pub const SCHOOL_LIFE_EXPECTANCY: &str = "School life expectancy, primary to tertiary, both sexes (years)";
    pub const TERTIARY_ENROLLMENT: &str = "School enrollment, tertiary (% gross)";
    pub const ATTAIN_PRIMARY: &str = "UIS: Percentage of population age 25+ with at least completed primary education (ISCED 1 or higher). Total";
    pub const ATTAIN_UPPER_SECONDARY: &str = "UIS: Percentage of population age 25+ with at least completed upper secondary education (ISCED 3 or higher). Total";
    pub const ATTAIN_BACHELOR: &str = "UIS: Percentage of population age 25+ with at least a completed bachelor's or equivalent degree (ISCED 6 or higher). Total";
    pub const ATTAIN_MASTER: &str = "UIS: Percentage of population age 25+ with at least a completed master's degree or equivalent (ISCED 7 or higher). Total";
    pub const ATTAIN_DOCTORAL: &str = "UIS: Percentage of population age 25+ with a doctoral degree or equivalent (ISCED 8). Total";
    pub const PRIMARY_COMPLETION: &str = "Primary completion rate, total (% of relevant age group)";
    pub const LOWER_SECONDARY_COMPLETION: &str = "Lower secondary completion rate, total (% of relevant age group)";
    pub const STEM_GRADUATES: &str = "Percentage of graduates from Science, Technology, Engineering and Mathematics programmes in tertiary education, (%)";
    pub const ICT_GRADUATES: &str = "Percentage of graduates from tertiary education graduating from Information and Communication Technologies programmes, (%)";
    pub const SANITATION: &str = "Share of the population using safely managed sanitation services";
    pub const PRIMARY_GPI: &str = "School enrollment, primary (gross), gender parity index (GPI)";
    pub const TERTIARY_GPI: &str = "Gross graduation ratio from first degree programmes (ISCED 6 and 7) in tertiary education, gender parity index (GPI)";
    pub const PROGRAMMING_SKILLS: &str = "Proportion of youth and adults who have wrote a computer program using a specialised programming language, (%)";
}

use columns::*;

// ---------------------------------------------------------------------------
// Units and number formatting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Dollars,
    Tonnes,
    Percent,
    Twh,
    Gw,
    Index,
    Years,
}

impl Unit {
    /// Format `value` in this unit. `word` translates the unit words that
    /// are spelled out ("tonnes", "years").
    pub fn format(&self, value: f64, word: impl Fn(&str) -> String) -> String {
        match self {
            Unit::Dollars => format!("${}", group_thousands(value, 0)),
            Unit::Tonnes => format!("{} {}", group_thousands(value, 1), word("tonnes")),
            Unit::Percent => format!("{value:.1}%"),
            Unit::Twh => format!("{} TWh", group_thousands(value, 1)),
            Unit::Gw => format!("{value:.4} GW"),
            Unit::Index => format!("{value:.2}"),
            Unit::Years => format!("{value:.1} {}", word("years")),
        }
    }
}

/// `1234567.891` with 1 decimal → `"1,234,567.9"`.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = text.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// One plotted column and its legend label.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub y_label: &'static str,
    pub series: Vec<Series>,
    /// Benchmark keys drawn as horizontal reference lines.
    pub benchmarks: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub field: &'static str,
    /// Benchmark key whose global average the value is compared with.
    pub benchmark: Option<&'static str>,
    pub unit: Unit,
    pub higher_is_better: bool,
}

/// What a KPI card shows, already formatted and translated.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiDisplay {
    pub value: String,
    pub comparison: Option<String>,
    /// `Some(true)` when the comparison reads as good news.
    pub favourable: Option<bool>,
    pub available: bool,
}

impl KpiSpec {
    pub fn evaluate(&self, dataset: &Dataset, range: YearRange, benchmarks: &BenchmarkTable) -> KpiResult {
        let global_avg = self.benchmark.and_then(|key| benchmarks.global_avg(key));
        summarize(dataset, range, self.field, global_avg)
    }

    /// Card text for a computed KPI. The year is shown when the latest value
    /// predates the end of the selected range.
    pub fn display(
        &self,
        kpi: &KpiResult,
        range: YearRange,
        translations: &Translations,
        lang: Language,
    ) -> KpiDisplay {
        let tr = |s: &str| translations.translate(lang, s).into_owned();

        let (Some(value), Some(year)) = (kpi.latest_value, kpi.latest_year) else {
            return KpiDisplay {
                value: tr("Data unavailable"),
                comparison: None,
                favourable: None,
                available: false,
            };
        };

        let mut text = self.unit.format(value, tr);
        if year < range.max {
            text.push_str(&format!(" ({year})"));
        }

        let comparison = kpi
            .ratio_to_global_avg
            .map(|ratio| format!("{ratio:.1}{}", tr("x global average")));
        let favourable = kpi
            .ratio_to_global_avg
            .map(|ratio| (ratio >= 1.0) == self.higher_is_better);

        KpiDisplay {
            value: text,
            comparison,
            favourable,
            available: true,
        }
    }
}

/// A benchmark card: English title plus the benchmark key it lists.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkCard {
    pub title: &'static str,
    pub key: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub pillar: Pillar,
    pub kpis: Vec<KpiSpec>,
    pub charts: Vec<ChartSpec>,
    pub benchmark_cards: Vec<BenchmarkCard>,
    /// Insight section shown at the top of the tab.
    pub overall_insights: &'static str,
    /// Insight sections shown below the charts.
    pub insight_sections: Vec<&'static str>,
}

// -- builders --

fn chart(
    title: &'static str,
    y_label: &'static str,
    series: &[(&'static str, &'static str)],
    benchmarks: &[&'static str],
) -> ChartSpec {
    ChartSpec {
        title,
        y_label,
        series: series
            .iter()
            .map(|&(field, label)| Series { field, label })
            .collect(),
        benchmarks: benchmarks.to_vec(),
    }
}

fn kpi(
    title: &'static str,
    subtitle: &'static str,
    field: &'static str,
    benchmark: Option<&'static str>,
    unit: Unit,
) -> KpiSpec {
    KpiSpec {
        title,
        subtitle,
        field,
        benchmark,
        unit,
        higher_is_better: true,
    }
}

fn card(title: &'static str, key: &'static str) -> BenchmarkCard {
    BenchmarkCard { title, key }
}

/// The five dashboard tabs, in display order.
pub fn tabs() -> Vec<Tab> {
    vec![
        key_indicators_tab(),
        economic_tab(),
        environmental_tab(),
        human_tab(),
        social_tab(),
    ]
}

fn key_indicators_tab() -> Tab {
    Tab {
        pillar: Pillar::KeyIndicators,
        kpis: vec![
            kpi("GDP per Capita (PPP)", "Latest value", GDP_PPP, Some("gdp_per_capita"), Unit::Dollars),
            kpi("Human Capital Index", "Scale: 0-1", HCI, Some("human_capital_index"), Unit::Index),
            KpiSpec {
                higher_is_better: false,
                ..kpi("CO₂ Emissions per Capita", "Latest value", CO2_PER_CAPITA, Some("co2_per_capita"), Unit::Tonnes)
            },
            kpi("Sanitation Access", "Latest value", SANITATION, Some("sanitation"), Unit::Percent),
        ],
        charts: vec![
            chart(
                "GDP per Capita (PPP, constant 2021 international $)",
                "GDP per capita (PPP)",
                &[(GDP_PPP, "GDP per capita (PPP)")],
                &["gdp_per_capita"],
            ),
            chart("Human Capital Index (0-1)", "Human Capital Index", &[(HCI, "Human Capital Index")], &["human_capital_index"]),
            chart(
                "CO₂ Emissions per Capita (tonnes)",
                "tonnes",
                &[(CO2_PER_CAPITA, "Per capita")],
                &["co2_per_capita"],
            ),
            chart("Renewable Electricity (TWh)", "TWh", &[(ELEC_RENEWABLES, "Renewables")], &[]),
            chart(
                "Energy Production: Oil & Gas (TWh)",
                "TWh",
                &[(OIL_PRODUCTION, "Oil"), (GAS_PRODUCTION, "Gas")],
                &[],
            ),
            chart(
                "Education Metrics (years / %)",
                "years / %",
                &[
                    (EXPECTED_YEARS, "Expected Years"),
                    (LEARNING_ADJUSTED_YEARS, "Learning-Adjusted Years of School"),
                    (TERTIARY_ENROLLMENT, "Tertiary Enrollment (%)"),
                ],
                &["education_expected_years", "education_learning_adjusted_years"],
            ),
            chart("STEM Graduates (%)", "%", &[(STEM_GRADUATES, "STEM Graduates")], &["stem_graduates"]),
        ],
        benchmark_cards: vec![
            card("GDP per Capita (PPP) Benchmarks", "gdp_per_capita"),
            card("Human Capital Index Benchmarks", "human_capital_index"),
            card("CO₂ Emissions per Capita Benchmarks", "co2_per_capita"),
            card("Renewables Share Benchmarks", "renewables_share"),
            card("STEM Graduates Benchmarks", "stem_graduates"),
        ],
        overall_insights: "key_overall",
        insight_sections: vec![
            "key_gdp",
            "key_hci",
            "key_co2",
            "key_renewables",
            "key_energy_production",
            "key_education",
            "key_stem",
        ],
    }
}

fn economic_tab() -> Tab {
    Tab {
        pillar: Pillar::Economic,
        kpis: vec![
            kpi("GDP per Capita (PPP)", "Latest value", GDP_PPP, Some("gdp_per_capita"), Unit::Dollars),
            kpi("Oil Production", "Latest value", OIL_PRODUCTION, None, Unit::Twh),
            kpi("Gas Production", "Latest value", GAS_PRODUCTION, None, Unit::Twh),
            kpi("Energy Consumption", "Latest value", PRIMARY_ENERGY, None, Unit::Twh),
        ],
        charts: vec![
            chart(
                "GDP per Capita",
                "$",
                &[(GDP_PPP, "GDP per capita (PPP)"), (GDP_CURRENT, "GDP per capita (current US$)")],
                &["gdp_per_capita"],
            ),
            chart(
                "Energy Production: Oil & Gas (TWh)",
                "TWh",
                &[(OIL_PRODUCTION, "Oil"), (GAS_PRODUCTION, "Gas")],
                &[],
            ),
            chart(
                "Energy Consumption",
                "TWh",
                &[
                    (PRIMARY_ENERGY, "Total"),
                    (OIL_CONSUMPTION, "Oil"),
                    (GAS_CONSUMPTION, "Gas"),
                    (COAL_CONSUMPTION, "Coal"),
                ],
                &[],
            ),
            chart(
                "Energy Growth by Source (%)",
                "%",
                &[(OIL_GROWTH, "Oil"), (GAS_GROWTH, "Gas"), (COAL_GROWTH, "Coal")],
                &[],
            ),
            chart(
                "Agriculture Value Added per Worker (2015 US$)",
                "$",
                &[(AGRICULTURE_VALUE, "Agricultural Productivity")],
                &[],
            ),
            chart(
                "Business & Law Graduates (%)",
                "%",
                &[(BUSINESS_GRADUATES, "Business & Law Graduates (%)")],
                &[],
            ),
        ],
        benchmark_cards: vec![
            card("GDP per Capita (PPP) Benchmarks", "gdp_per_capita"),
            card("Agricultural Productivity", "agriculture_value"),
        ],
        overall_insights: "economic_overall",
        insight_sections: vec![
            "economic_gdp",
            "economic_oil",
            "economic_gas",
            "economic_energy_consumption",
            "economic_energy_growth",
            "economic_agriculture",
            "economic_business_graduates",
        ],
    }
}

fn environmental_tab() -> Tab {
    Tab {
        pillar: Pillar::Environmental,
        kpis: vec![
            kpi("CO₂ Emissions", "Latest value", CO2_TOTAL, None, Unit::Tonnes),
            KpiSpec {
                higher_is_better: false,
                ..kpi("CO₂ per Capita", "Latest value", CO2_PER_CAPITA, Some("co2_per_capita"), Unit::Tonnes)
            },
            kpi("Renewable Electricity", "Latest value", ELEC_RENEWABLES, None, Unit::Twh),
            kpi("Solar Capacity", "Latest value", SOLAR_CAPACITY, None, Unit::Gw),
        ],
        charts: vec![
            chart(
                "Total CO₂ Emissions (tonnes)",
                "tonnes",
                &[(CO2_TOTAL, "Total"), (CO2_OIL, "From oil")],
                &[],
            ),
            chart(
                "CO₂ Emissions per Capita (tonnes)",
                "tonnes",
                &[(CO2_PER_CAPITA, "Per capita"), (CO2_OIL_PER_CAPITA, "Per capita from oil")],
                &["co2_per_capita"],
            ),
            chart(
                "Annual Change in Primary Energy Consumption (%)",
                "%",
                &[(ENERGY_CHANGE, "Energy Consumption Change")],
                &[],
            ),
            chart(
                "Electricity Production (TWh)",
                "TWh",
                &[
                    (ELEC_FOSSIL, "Fossil Fuels"),
                    (ELEC_NUCLEAR, "Nuclear"),
                    (ELEC_RENEWABLES, "Renewables"),
                ],
                &[],
            ),
            chart(
                "Renewable Electricity Detail (TWh)",
                "TWh",
                &[(ELEC_SOLAR, "Solar"), (ELEC_BIOENERGY, "Bioenergy")],
                &[],
            ),
        ],
        benchmark_cards: vec![
            card("CO₂ Emissions per Capita Benchmarks", "co2_per_capita"),
            card("Renewables Share Benchmarks", "renewables_share"),
        ],
        overall_insights: "environmental_overall",
        insight_sections: vec![
            "environmental_co2",
            "environmental_energy_change",
            "environmental_agriculture",
            "environmental_electricity",
            "environmental_solar",
            "environmental_renewable_detail",
        ],
    }
}

fn human_tab() -> Tab {
    Tab {
        pillar: Pillar::Human,
        kpis: vec![
            kpi("Bachelor's Degree or Higher", "of adult population", ATTAIN_BACHELOR, None, Unit::Percent),
            kpi("Human Capital Index", "Scale: 0-1", HCI, Some("human_capital_index"), Unit::Index),
            kpi("Expected Years of School", "Latest value", EXPECTED_YEARS, Some("education_expected_years"), Unit::Years),
            kpi(
                "Learning-Adjusted Years",
                "Latest value",
                LEARNING_ADJUSTED_YEARS,
                Some("education_learning_adjusted_years"),
                Unit::Years,
            ),
        ],
        charts: vec![
            chart(
                "Educational Attainment, Age 25+ (%)",
                "%",
                &[
                    (ATTAIN_PRIMARY, "Primary"),
                    (ATTAIN_UPPER_SECONDARY, "Upper Secondary"),
                    (ATTAIN_BACHELOR, "Bachelor's"),
                ],
                &[],
            ),
            chart(
                "Advanced Degrees, Age 25+ (%)",
                "%",
                &[(ATTAIN_MASTER, "Master's"), (ATTAIN_DOCTORAL, "Doctoral")],
                &[],
            ),
            chart(
                "Completion Rates",
                "%",
                &[(PRIMARY_COMPLETION, "Primary"), (LOWER_SECONDARY_COMPLETION, "Lower Secondary")],
                &[],
            ),
            chart(
                "Education Metrics (years / %)",
                "years",
                &[
                    (SCHOOL_LIFE_EXPECTANCY, "School life expectancy"),
                    (EXPECTED_YEARS, "Expected Years"),
                    (LEARNING_ADJUSTED_YEARS, "Learning-Adjusted Years of School"),
                ],
                &["education_expected_years", "education_learning_adjusted_years"],
            ),
        ],
        benchmark_cards: vec![
            card("Human Capital Index Benchmarks", "human_capital_index"),
            card("Tertiary Education", "tertiary_enrollment"),
        ],
        overall_insights: "human_overall",
        insight_sections: vec![
            "human_attainment",
            "human_advanced",
            "human_quality",
            "human_completion",
            "human_capital",
            "human_gender",
        ],
    }
}

fn social_tab() -> Tab {
    Tab {
        pillar: Pillar::Social,
        kpis: vec![
            kpi("Sanitation Access", "of population", SANITATION, Some("sanitation"), Unit::Percent),
            kpi("STEM Graduates", "of all graduates", STEM_GRADUATES, Some("stem_graduates"), Unit::Percent),
            kpi("Gender Parity Index", "Primary education", PRIMARY_GPI, None, Unit::Index),
            kpi("Programming Skills", "of population", PROGRAMMING_SKILLS, None, Unit::Percent),
        ],
        charts: vec![
            chart(
                "Population with Safely Managed Sanitation Services (%)",
                "%",
                &[(SANITATION, "Sanitation Access")],
                &["sanitation"],
            ),
            chart(
                "Gender Parity Index, Primary Education",
                "GPI",
                &[(PRIMARY_GPI, "Primary"), (TERTIARY_GPI, "Tertiary Education")],
                &[],
            ),
            chart(
                "STEM Graduates (%)",
                "%",
                &[(STEM_GRADUATES, "STEM Graduates"), (ICT_GRADUATES, "ICT Graduates")],
                &["stem_graduates"],
            ),
            chart(
                "Digital Skills (%)",
                "%",
                &[(PROGRAMMING_SKILLS, "Programming")],
                &[],
            ),
        ],
        benchmark_cards: vec![
            card("Sanitation Access Benchmarks", "sanitation"),
            card("STEM Graduates Benchmarks", "stem_graduates"),
        ],
        overall_insights: "social_overall",
        insight_sections: vec![
            "social_sanitation",
            "social_gender",
            "social_stem",
            "social_ict",
            "social_digital",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use crate::insights::InsightCatalog;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(116_000.0, 0), "116,000");
        assert_eq!(group_thousands(1_234_567.891, 1), "1,234,567.9");
        assert_eq!(group_thousands(999.0, 0), "999");
        assert_eq!(group_thousands(-12_345.0, 0), "-12,345");
        assert_eq!(group_thousands(-0.01, 1), "0.0");
    }

    #[test]
    fn unit_formatting() {
        let word = |s: &str| s.to_string();
        assert_eq!(Unit::Dollars.format(116_000.0, word), "$116,000");
        assert_eq!(Unit::Tonnes.format(38.84, word), "38.8 tonnes");
        assert_eq!(Unit::Percent.format(99.94, word), "99.9%");
        assert_eq!(Unit::Index.format(0.638, word), "0.64");
    }

    #[test]
    fn every_tab_has_a_pillar_once() {
        let pillars: Vec<Pillar> = tabs().iter().map(|t| t.pillar).collect();
        assert_eq!(pillars, Pillar::all().to_vec());
    }

    #[test]
    fn referenced_benchmarks_exist() {
        let table = BenchmarkTable::embedded().unwrap();
        for tab in tabs() {
            let keys = tab
                .kpis
                .iter()
                .filter_map(|k| k.benchmark)
                .chain(tab.charts.iter().flat_map(|c| c.benchmarks.iter().copied()))
                .chain(tab.benchmark_cards.iter().map(|c| c.key));
            for key in keys {
                assert!(table.get(key).is_some(), "{}: unknown benchmark '{key}'", tab.pillar);
            }
        }
    }

    #[test]
    fn kpi_benchmarks_have_a_global_average() {
        let table = BenchmarkTable::embedded().unwrap();
        for tab in tabs() {
            for key in tab.kpis.iter().filter_map(|k| k.benchmark) {
                assert!(table.global_avg(key).is_some(), "'{key}' has no global average");
            }
        }
    }

    #[test]
    fn referenced_insights_exist_and_match_pillar() {
        let catalog = InsightCatalog::embedded().unwrap();
        for tab in tabs() {
            for id in std::iter::once(tab.overall_insights).chain(tab.insight_sections.iter().copied()) {
                let section = catalog
                    .section(id)
                    .unwrap_or_else(|| panic!("missing insight section '{id}'"));
                assert_eq!(section.pillar, tab.pillar, "section '{id}'");
            }
        }
    }

    fn gdp_dataset() -> Dataset {
        Dataset::new(
            vec![GDP_PPP.to_string()],
            vec![
                Record::new(2016).with(GDP_PPP, Some(100_000.0)),
                Record::new(2020).with(GDP_PPP, None),
                Record::new(2023).with(GDP_PPP, Some(116_000.0)),
            ],
        )
    }

    #[test]
    fn evaluate_uses_the_global_average() {
        let spec = &key_indicators_tab().kpis[0];
        let table = BenchmarkTable::embedded().unwrap();
        let kpi = spec.evaluate(&gdp_dataset(), YearRange { min: 2016, max: 2023 }, &table);
        assert_eq!(kpi.ratio_to_global_avg, Some(5.2));

        let shown = spec.display(
            &kpi,
            YearRange { min: 2016, max: 2023 },
            &Translations::default(),
            Language::English,
        );
        assert_eq!(shown.value, "$116,000");
        assert_eq!(shown.comparison.as_deref(), Some("5.2x global average"));
        assert_eq!(shown.favourable, Some(true));
    }

    #[test]
    fn display_marks_stale_year_and_unavailable() {
        let spec = &key_indicators_tab().kpis[0];
        let table = BenchmarkTable::embedded().unwrap();
        let ds = gdp_dataset();

        let range = YearRange { min: 2016, max: 2021 };
        let stale = spec.display(&spec.evaluate(&ds, range, &table), range, &Translations::default(), Language::English);
        assert_eq!(stale.value, "$100,000 (2016)");

        let gap = YearRange { min: 2017, max: 2019 };
        let missing = spec.display(&spec.evaluate(&ds, gap, &table), gap, &Translations::default(), Language::English);
        assert!(!missing.available);
        assert_eq!(missing.value, "Data unavailable");
        assert_eq!(missing.comparison, None);
    }

    #[test]
    fn lower_is_better_flips_favourable() {
        let spec = &key_indicators_tab().kpis[2];
        let kpi = KpiResult {
            indicator_name: CO2_PER_CAPITA.to_string(),
            latest_value: Some(38.84),
            latest_year: Some(2023),
            ratio_to_global_avg: Some(8.1),
            available: true,
        };
        let range = YearRange { min: 2016, max: 2023 };
        let shown = spec.display(&kpi, range, &Translations::default(), Language::English);
        assert_eq!(shown.favourable, Some(false));
    }
}

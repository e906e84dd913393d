use eframe::egui::{self, Color32, Frame, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use vision_dash::benchmarks::EntryKind;
use vision_dash::data::{Dataset, YEAR_COLUMN, filter_by_year_range};
use vision_dash::insights::InsightSection;
use vision_dash::layout::{BenchmarkCard, KpiSpec, Tab, group_thousands};

use crate::color::{HIGHLIGHT, NEGATIVE, POSITIVE, benchmark_color, pillar_color, sentiment_color};
use crate::state::AppState;

fn card_frame(ui: &Ui) -> Frame {
    Frame::group(ui.style())
        .inner_margin(10.0)
        .corner_radius(6.0)
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// One row of KPI cards for the tab.
pub fn kpi_row(ui: &mut Ui, state: &AppState, tab: &Tab, dataset: Option<&Dataset>) {
    if tab.kpis.is_empty() {
        return;
    }
    ui.columns(tab.kpis.len(), |cols| {
        for (col, spec) in cols.iter_mut().zip(&tab.kpis) {
            kpi_card(col, state, tab, spec, dataset);
        }
    });
}

fn kpi_card(ui: &mut Ui, state: &AppState, tab: &Tab, spec: &KpiSpec, dataset: Option<&Dataset>) {
    let shown = dataset.map(|ds| {
        let kpi = spec.evaluate(ds, state.range, &state.benchmarks);
        spec.display(&kpi, state.range, &state.translations, state.language)
    });

    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(state.tr(spec.title)).strong());

        match shown {
            Some(shown) if shown.available => {
                ui.label(
                    RichText::new(shown.value)
                        .size(22.0)
                        .strong()
                        .color(pillar_color(tab.pillar)),
                );
                if let Some(text) = shown.comparison {
                    let color = match shown.favourable {
                        Some(true) => POSITIVE,
                        Some(false) => NEGATIVE,
                        None => HIGHLIGHT,
                    };
                    ui.label(RichText::new(text).color(color));
                }
            }
            Some(shown) => {
                ui.label(RichText::new(shown.value).size(18.0).weak());
            }
            None => {
                ui.label(RichText::new(state.tr("Data unavailable")).size(18.0).weak());
            }
        }

        ui.label(RichText::new(state.tr(spec.subtitle)).small().weak());
    });
}

// ---------------------------------------------------------------------------
// Benchmark cards
// ---------------------------------------------------------------------------

pub fn benchmark_card(ui: &mut Ui, state: &AppState, card: &BenchmarkCard) {
    let Some(spec) = state.benchmarks.get(card.key) else {
        log::warn!("no benchmarks for '{}'", card.key);
        return;
    };

    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(state.tr(card.title)).strong());
        ui.separator();

        for entry in spec.entries() {
            let color = benchmark_color(entry.kind);
            let text = match entry.kind {
                EntryKind::Global => format!("{} {}", state.tr("Global Average:"), entry.value),
                _ => format!("{}: {}", entry.label, entry.value),
            };
            let mut rich = RichText::new(text).color(color);
            if entry.kind == EntryKind::Note {
                rich = rich.italics();
            }
            ui.label(rich);
        }
    });
}

// ---------------------------------------------------------------------------
// Insight sections
// ---------------------------------------------------------------------------

pub fn insight_section(ui: &mut Ui, state: &AppState, section: &InsightSection, open: bool) {
    egui::CollapsingHeader::new(RichText::new(state.tr(&section.title)).strong())
        .id_salt(&section.id)
        .default_open(open)
        .show(ui, |ui| {
            for insight in &section.insights {
                ui.horizontal_wrapped(|ui| {
                    let color = sentiment_color(insight.sentiment);
                    ui.label(RichText::new(insight.sentiment.icon()).color(color));
                    ui.label(&insight.text);
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Data table
// ---------------------------------------------------------------------------

/// Year-by-year values of every column the tab plots, over the selection.
pub fn data_table(ui: &mut Ui, state: &AppState, tab: &Tab, dataset: &Dataset) {
    let filtered = filter_by_year_range(dataset, state.range);

    let mut columns: Vec<(&str, &str)> = Vec::new();
    for series in tab.charts.iter().flat_map(|c| &c.series) {
        if filtered.has_field(series.field) && !columns.iter().any(|(f, _)| *f == series.field) {
            columns.push((series.field, series.label));
        }
    }

    if filtered.is_empty() {
        ui.label(RichText::new(state.tr("No data for the selected years")).weak());
        return;
    }

    TableBuilder::new(ui)
        .id_salt(("data_table", tab.pillar))
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(50.0))
        .columns(Column::auto().at_least(90.0).clip(true), columns.len())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong(state.tr(YEAR_COLUMN).into_owned());
            });
            for (field, label) in &columns {
                header.col(|ui| {
                    ui.strong(state.tr(label).into_owned()).on_hover_text(*field);
                });
            }
        })
        .body(|mut body| {
            for record in &filtered.records {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(record.year.to_string());
                    });
                    for (field, _) in &columns {
                        row.col(|ui| match record.get(field) {
                            Some(v) => {
                                ui.label(group_thousands(v, 2));
                            }
                            None => {
                                ui.label(RichText::new("–").color(Color32::GRAY));
                            }
                        });
                    }
                });
            }
        });
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use vision_dash::data::Pillar;

use crate::color::pillar_color;
use crate::state::AppState;
use crate::ui::{cards, plot};

// ---------------------------------------------------------------------------
// Left side panel – year range and tab selector
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(state.tr("Select Year Range").into_owned());
    ui.separator();

    match state.bounds {
        Some(bounds) => {
            let mut min = state.range.min;
            let mut max = state.range.max;
            let from = state.tr("From").into_owned();
            let to = state.tr("To").into_owned();

            let changed_min = ui
                .add(egui::Slider::new(&mut min, bounds.min..=bounds.max).text(from))
                .changed();
            let changed_max = ui
                .add(egui::Slider::new(&mut max, bounds.min..=bounds.max).text(to))
                .changed();

            // Dragging one handle past the other pushes it along.
            if changed_min && min > max {
                max = min;
            }
            if changed_max && max < min {
                min = max;
            }
            if changed_min || changed_max {
                state.set_range(min, max);
            }
        }
        None => {
            ui.label(RichText::new(state.tr("No data loaded")).weak());
        }
    }

    ui.add_space(12.0);
    ui.separator();

    for &pillar in Pillar::all() {
        let label = state.tr(pillar.label()).into_owned();
        let mut text = RichText::new(label).color(pillar_color(pillar));
        if state.active == pillar {
            text = text.strong();
        }
        if ui.selectable_label(state.active == pillar, text).clicked() {
            state.active = pillar;
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button(state.tr("File").into_owned(), |ui: &mut Ui| {
            if ui.button(state.tr("Open data folder…").into_owned()).clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button(state.tr("Reload").into_owned()).clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong(state.tr("Qatar Vision 2030 Dashboard").into_owned());
        ui.separator();

        let toggle = state.language.toggle();
        if ui.button(toggle.native_name()).clicked() {
            log::debug!("language switched to {}", toggle.code());
            state.language = toggle;
        }

        let table_label = state.tr("Show data table").into_owned();
        if ui.selectable_label(state.show_table, table_label).clicked() {
            state.show_table = !state.show_table;
        }

        ui.separator();
        ui.label(format!("{}–{}", state.range.min, state.range.max));

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – the active tab
// ---------------------------------------------------------------------------

pub fn tab_view(ui: &mut Ui, state: &AppState) {
    let Some(tab) = state.active_tab() else {
        return;
    };
    let dataset = state.datasets.get(&tab.pillar);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(
                RichText::new(state.tr(tab.pillar.label()))
                    .color(pillar_color(tab.pillar))
                    .strong(),
            );
            ui.label(RichText::new(state.tr("Monitoring progress across the four development pillars")).weak());
            ui.add_space(6.0);

            if let Some(section) = state.insights.section(tab.overall_insights) {
                cards::insight_section(ui, state, section, true);
            }
            ui.add_space(6.0);

            if let Some(err) = state.load_errors.get(&tab.pillar) {
                ui.label(RichText::new(err).color(Color32::RED));
                ui.add_space(6.0);
            }

            cards::kpi_row(ui, state, tab, dataset);
            ui.add_space(10.0);

            if let Some(ds) = dataset {
                for pair in tab.charts.chunks(2) {
                    ui.columns(2, |cols| {
                        for (col, chart) in cols.iter_mut().zip(pair) {
                            plot::indicator_chart(col, state, tab.pillar, chart, ds);
                        }
                    });
                    ui.add_space(8.0);
                }

                if state.show_table {
                    ui.separator();
                    ui.strong(state.tr("Data").into_owned());
                    cards::data_table(ui, state, tab, ds);
                }
            }

            if !tab.benchmark_cards.is_empty() {
                ui.separator();
                ui.heading(state.tr("Benchmarks").into_owned());
                ui.columns(tab.benchmark_cards.len(), |cols| {
                    for (col, card) in cols.iter_mut().zip(&tab.benchmark_cards) {
                        cards::benchmark_card(col, state, card);
                    }
                });
            }

            ui.separator();
            ui.heading(state.tr("Insights").into_owned());
            for id in &tab.insight_sections {
                match state.insights.section(id) {
                    Some(section) => cards::insight_section(ui, state, section, false),
                    None => log::warn!("unknown insight section '{id}'"),
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open indicator data folder")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        state.set_data_dir(dir);
    }
}

use eframe::egui::{RichText, Ui};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};

use vision_dash::data::{Dataset, Pillar, filter_by_year_range};
use vision_dash::layout::ChartSpec;

use crate::color::{benchmark_color, series_colors};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// Indicator chart
// ---------------------------------------------------------------------------

/// Render one chart: a line per series over the selected years, plus a
/// dashed reference line per numeric benchmark.
pub fn indicator_chart(ui: &mut Ui, state: &AppState, pillar: Pillar, chart: &ChartSpec, dataset: &Dataset) {
    ui.strong(state.tr(chart.title).into_owned());

    let filtered = filter_by_year_range(dataset, state.range);
    let series: Vec<(String, Vec<[f64; 2]>)> = chart
        .series
        .iter()
        .map(|s| (state.tr(s.label).into_owned(), filtered.series(s.field)))
        .collect();

    if series.iter().all(|(_, points)| points.is_empty()) {
        ui.add_space(8.0);
        ui.label(RichText::new(state.tr("No data for the selected years")).weak());
        ui.add_space(8.0);
        return;
    }

    let colors = series_colors(pillar, series.len());
    let lines: Vec<_> = chart
        .benchmarks
        .iter()
        .filter_map(|key| state.benchmarks.get(key))
        .flat_map(|spec| spec.reference_lines())
        .collect();

    Plot::new(("indicator_chart", pillar, chart.title))
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(state.tr("Year").into_owned())
        .y_axis_label(state.tr(chart.y_label).into_owned())
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for ((name, points), color) in series.into_iter().zip(colors) {
                if points.is_empty() {
                    continue;
                }
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(&name)
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(Points::new(PlotPoints::from(points)).name(&name).color(color).radius(3.0));
            }

            for line in lines {
                plot_ui.hline(
                    HLine::new(line.value)
                        .name(state.tr(&line.label))
                        .color(benchmark_color(line.kind))
                        .style(LineStyle::dashed_loose()),
                );
            }
        });
}

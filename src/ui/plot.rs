use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::ColorMap;
use crate::data::filter::filtered_indices;
use crate::data::model::ScoreDataset;
use crate::data::series::{build_series, Series};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: summary text, line chart, results table
// ---------------------------------------------------------------------------

/// Render the central results panel.
///
/// Everything here is pulled fresh each frame from the dataset and the
/// filter state; only the dataset itself is cached.
pub fn results_panel(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a scores CSV to view results  (File → Open…)");
            });
            return;
        }
    };

    let visible = filtered_indices(dataset, &state.filters);
    let (series, bounds) = build_series(dataset, &state.filters);
    let colors = ColorMap::new(series.iter().map(|s| s.name.as_str()));

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label(state.filters.summarize());
            ui.separator();

            results_chart(ui, &series, &colors, bounds.chart_height());
            ui.separator();

            results_table(ui, dataset, &visible);
        });
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

fn results_chart(ui: &mut Ui, series: &[Series], colors: &ColorMap, height: f64) {
    Plot::new("results_chart")
        .legend(Legend::default())
        .height(height as f32)
        .x_axis_label("Year")
        .y_axis_label("Points")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in series {
                let points: PlotPoints = s.points.iter().copied().collect();
                let line = Line::new(points)
                    .name(&s.name)
                    .color(colors.color_for(&s.name))
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

fn results_table(ui: &mut Ui, dataset: &ScoreDataset, visible: &[usize]) {
    if visible.is_empty() {
        ui.label("No rows match the current selection.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(70.0), 6)
        .header(20.0, |mut header| {
            for title in ["Division", "Sex", "Event", "Year", "Points", "Shift"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, visible.len(), |mut row| {
                let r = &dataset.records[visible[row.index()]];
                row.col(|ui| {
                    ui.label(&r.division);
                });
                row.col(|ui| {
                    ui.label(r.sex.to_string());
                });
                row.col(|ui| {
                    ui.label(&r.event);
                });
                row.col(|ui| {
                    ui.label(r.year.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", r.points));
                });
                row.col(|ui| {
                    ui.label(r.shift.to_string());
                });
            });
        });
}

use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{filtered_indices, ShiftMode};
use crate::data::model::Sex;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Results");
    ui.separator();

    let dataset = match &state.dataset {
        // Clone the Arc so filter toggles can mutate state inside the loops.
        Some(ds) => Arc::clone(ds),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Events ----
            ui.strong("Choose the events to show results for");
            for event in &dataset.events {
                let mut checked = state.filters.events.contains(event.as_str());
                if ui.checkbox(&mut checked, event).changed() {
                    state.filters.toggle_event(event);
                }
            }
            ui.separator();

            // ---- Divisions ----
            ui.strong("Choose the divisions to show results for");
            for division in &dataset.divisions {
                let mut checked = state.filters.divisions.contains(division.as_str());
                if ui.checkbox(&mut checked, division).changed() {
                    state.filters.toggle_division(division);
                }
            }
            ui.separator();

            // ---- Sexes ----
            ui.strong("Choose to show results for");
            for sex in [Sex::Men, Sex::Women] {
                let mut checked = state.filters.sexes.contains(&sex);
                if ui.checkbox(&mut checked, sex.to_string()).changed() {
                    state.filters.toggle_sex(sex);
                }
            }
            ui.separator();

            // ---- Zero shift ----
            ui.strong("Choose to display results with or without zero shift");
            egui::ComboBox::from_id_salt("shift_mode")
                .selected_text(state.filters.shift_mode.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in ShiftMode::ALL {
                        if ui
                            .selectable_label(state.filters.shift_mode == mode, mode.to_string())
                            .clicked()
                        {
                            state.filters.set_shift_mode(mode);
                        }
                    }
                });
            ui.separator();

            // ---- Notes ----
            ui.heading("Notes");
            ui.label("Description of each field in the table:");
            ui.label("• Sex: Men or Women");
            ui.label("• Division: level of competition");
            ui.label("• Year: season the mark was set");
            ui.label("• Points: World Athletics scoring calculation");
            ui.add_space(4.0);
            ui.label("Pole Vault data is known to be broken in the source table.");
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let matching = filtered_indices(ds, &state.filters).len();
            ui.label(format!("{} rows loaded, {matching} matching", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open scores data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.set_dataset_path(path);
    }
}

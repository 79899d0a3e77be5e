use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct TrackboardApp {
    pub state: AppState,
}

impl eframe::App for TrackboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Lazy mtime observation: the cache re-stats the file at most once
        // per second and reloads only when it changed.
        self.state.poll_dataset();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: summary, chart, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::results_panel(ui, &self.state);
        });

        // The poll above only runs when frames are produced, so keep one
        // scheduled within the poll interval for idle windows.
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }
}

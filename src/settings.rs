//! Side-panel controls: pause/resume, per-planet speeds, and display options.

use crate::app::App;
use chrono::{Duration, Local};
use eframe::egui;

impl App {
    pub(crate) fn show_settings(&mut self, ui: &mut egui::Ui, raw_ms: f64) {
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Simulation").strong());
        ui.horizontal(|ui| {
            let pause_label = if self.clock.is_paused() {
                "\u{25b6} Resume"
            } else {
                "\u{23f8} Pause"
            };
            if ui.button(pause_label).clicked() {
                self.clock.toggle(raw_ms);
            }
            if self.clock.is_paused() {
                ui.label(egui::RichText::new("paused").weak());
            }
        });
        let effective_ms = self.clock.effective_time(raw_ms);
        let sim_ts = self.start_timestamp + Duration::milliseconds(effective_ms as i64);
        ui.label(
            egui::RichText::new(format!(
                "Sim: {}",
                sim_ts.with_timezone(&Local).format("%H:%M:%S")
            ))
            .weak(),
        );

        ui.separator();
        ui.label(egui::RichText::new("Revolution speed").strong());
        for body in self.registry.iter().filter(|b| b.orbit_radius > 0.0) {
            let mut speed = self.params.get(&body.name);
            if ui
                .add(egui::Slider::new(&mut speed, 0.1..=10.0).text(&body.name))
                .changed()
            {
                self.params.set(&body.name, speed);
            }
        }

        ui.separator();
        ui.label(egui::RichText::new("Display").strong());
        ui.checkbox(&mut self.dark_mode, "Dark mode");
    }
}

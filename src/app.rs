//! Application shell and per-frame render driver.
//!
//! `update` is the whole frame loop: advance unpaused state, paint the view,
//! show the controls, ask for the next frame. UI widgets mutate the clock
//! and parameter store between frames, so every mutation is visible to the
//! next advance.

use crate::bodies::{Body, Registry, RegistryError};
use crate::clock::SimulationClock;
use crate::motion::{orbit_position, ROTATION_STEP};
use crate::params::ParameterStore;
use crate::scene::Scene;
use crate::texture::{load_body_texture, BodyTexture};
use chrono::{DateTime, Utc};
use eframe::egui;
use nalgebra::Matrix3;
use std::collections::HashMap;

pub struct App {
    pub(crate) registry: Registry,
    pub(crate) clock: SimulationClock,
    pub(crate) params: ParameterStore,
    pub(crate) scene: Scene,
    pub(crate) textures: HashMap<Body, BodyTexture>,
    pub(crate) sprite_handles: HashMap<Body, egui::TextureHandle>,
    pub(crate) sprites_stale: bool,
    pub(crate) camera: Matrix3<f64>,
    pub(crate) zoom: f64,
    pub(crate) dark_mode: bool,
    pub(crate) start_timestamp: DateTime<Utc>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, RegistryError> {
        let registry = Registry::solar_system()?;
        let params = ParameterStore::from_registry(&registry);
        let scene = Scene::compose(&registry);
        let textures = registry
            .iter()
            .map(|b| (b.body, load_body_texture(b.body)))
            .collect();

        Ok(Self {
            registry,
            clock: SimulationClock::new(),
            params,
            scene,
            textures,
            sprite_handles: HashMap::new(),
            sprites_stale: true,
            camera: crate::math::initial_camera(),
            zoom: 1.0,
            dark_mode: true,
            start_timestamp: Utc::now(),
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.dark_mode {
            let mut vis = egui::Visuals::dark();
            let black = egui::Color32::BLACK;
            vis.window_fill = black;
            vis.panel_fill = black;
            vis.extreme_bg_color = black;
            vis
        } else {
            egui::Visuals::light()
        });

        let raw_ms = ctx.input(|i| i.time) * 1000.0;

        if !self.clock.is_paused() {
            let effective_ms = self.clock.effective_time(raw_ms);
            let center = self.scene.sun_center();
            for (descriptor, state) in self.registry.iter().zip(self.scene.bodies.iter_mut()) {
                let speed = self.params.get(&descriptor.name);
                let [x, z] = orbit_position(
                    effective_ms,
                    speed,
                    descriptor.orbit_radius,
                    descriptor.initial_phase,
                    center,
                );
                state.position = [x, 0.0, z];
                state.spin += ROTATION_STEP;
            }
            self.sprites_stale = true;
        }

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| self.show_settings(ui, raw_ms));

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(ctx.style().visuals.extreme_bg_color))
            .show(ctx, |ui| self.show_view(ui));

        ctx.request_repaint();
    }
}

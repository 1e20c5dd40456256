//! Projected view of the solar system.
//!
//! Body positions live in world space (orbits in the x-z plane); the camera
//! is an orthographic rotation into plot coordinates. Drag rotates, scroll
//! zooms, hovering a body shows its facts.

use crate::app::App;
use crate::math::{rotate_point_matrix, rotation_from_drag};
use crate::scene::{pick_body, ProjectedBody, STAR_FIELD_EXTENT};
use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotImage, PlotPoint, Points};
use nalgebra::Matrix3;
use std::collections::hash_map::Entry;
use std::f64::consts::PI;

// World units visible from center to edge at zoom 1 (Neptune orbits at 160).
const VIEW_EXTENT: f64 = 190.0;
const SPRITE_SIZE: usize = 128;

fn circle_in_orbit_plane(center: [f64; 2], r: f64, camera: &Matrix3<f64>, n: usize) -> Vec<[f64; 2]> {
    (0..=n)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / n as f64;
            let (rx, ry, _) = rotate_point_matrix(
                center[0] + r * a.cos(),
                0.0,
                center[1] + r * a.sin(),
                camera,
            );
            [rx, ry]
        })
        .collect()
}

impl App {
    pub(crate) fn show_view(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (view_w, view_h) = (size.x.max(1.0), size.y.max(1.0));
        let margin = VIEW_EXTENT / self.zoom;

        if self.sprites_stale || self.sprite_handles.len() != self.scene.bodies.len() {
            for state in &self.scene.bodies {
                let tex = &self.textures[&state.body];
                let img = tex.render_sphere(SPRITE_SIZE, state.spin, state.body.is_lit());
                match self.sprite_handles.entry(state.body) {
                    Entry::Occupied(entry) => {
                        entry.into_mut().set(img, egui::TextureOptions::LINEAR)
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(ui.ctx().load_texture(
                            state.body.label(),
                            img,
                            egui::TextureOptions::LINEAR,
                        ));
                    }
                }
            }
            self.sprites_stale = false;
        }

        let mut projected: Vec<ProjectedBody> = self
            .scene
            .bodies
            .iter()
            .map(|s| {
                let (rx, ry, rz) =
                    rotate_point_matrix(s.position[0], s.position[1], s.position[2], &self.camera);
                ProjectedBody {
                    body: s.body,
                    pos: [rx, ry],
                    radius: s.body.visual_radius(),
                    depth: rz,
                }
            })
            .collect();
        // Far bodies first so near ones paint over them.
        projected.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let dark = self.dark_mode;
        let star_pts: Vec<[f64; 2]> = if dark {
            let scale = margin * 1.4 / STAR_FIELD_EXTENT;
            self.scene
                .stars
                .iter()
                .map(|&[x, y, z]| {
                    let (rx, ry, _) = rotate_point_matrix(x, y, z, &self.camera);
                    [rx * scale, ry * scale]
                })
                .collect()
        } else {
            Vec::new()
        };

        let sun_center = self.scene.sun_center();
        let guide_color = if dark {
            egui::Color32::from_gray(110)
        } else {
            egui::Color32::from_gray(160)
        };
        let orbit_rings: Vec<Vec<[f64; 2]>> = self
            .registry
            .iter()
            .filter(|b| b.orbit_radius > 0.0)
            .map(|b| circle_in_orbit_plane(sun_center, b.orbit_radius, &self.camera, 200))
            .collect();

        let mut planet_rings: Vec<Vec<[f64; 2]>> = Vec::new();
        for state in &self.scene.bodies {
            if let Some((inner, outer)) = state.body.ring_params() {
                let center = [state.position[0], state.position[2]];
                let strokes = 5;
                for k in 0..strokes {
                    let r = inner + (outer - inner) * k as f64 / (strokes - 1) as f64;
                    planet_rings.push(circle_in_orbit_plane(center, r, &self.camera, 128));
                }
            }
        }

        let params = &self.params;
        let sprite_handles = &self.sprite_handles;
        let min_hit = margin * 0.015;

        let plot = Plot::new("solar_view")
            .data_aspect(1.0)
            .width(view_w)
            .height(view_h)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .cursor_color(egui::Color32::TRANSPARENT);

        let response = plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-margin, -margin],
                [margin, margin],
            ));

            if !star_pts.is_empty() {
                plot_ui.points(
                    Points::new("", star_pts)
                        .color(egui::Color32::from_gray(235))
                        .radius(0.7),
                );
            }

            for pts in orbit_rings {
                plot_ui.line(Line::new("", pts).color(guide_color).width(1.0));
            }
            for pts in planet_rings {
                plot_ui.line(Line::new("", pts).color(guide_color).width(1.2));
            }

            for p in &projected {
                if let Some(handle) = sprite_handles.get(&p.body) {
                    let d = (p.radius * 2.0) as f32;
                    plot_ui.image(PlotImage::new(
                        "",
                        handle.id(),
                        PlotPoint::new(p.pos[0], p.pos[1]),
                        [d, d],
                    ));
                }
            }

            if plot_ui.response().hovered() {
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let picked = pick_body([pointer.x, pointer.y], &projected, min_hit)
                        .and_then(|body| projected.iter().find(|p| p.body == body));
                    if let Some(hit) = picked {
                        let body = hit.body;
                        let ring: Vec<[f64; 2]> = (0..=64)
                            .map(|i| {
                                let a = 2.0 * PI * i as f64 / 64.0;
                                let r = hit.radius * 1.15;
                                [hit.pos[0] + r * a.cos(), hit.pos[1] + r * a.sin()]
                            })
                            .collect();
                        plot_ui.line(Line::new("", ring).color(body.base_color()).width(2.0));

                        egui::Tooltip::always_open(
                            plot_ui.ctx().clone(),
                            egui::LayerId::background(),
                            egui::Id::new("body_tooltip"),
                            egui::PopupAnchor::Pointer,
                        )
                        .gap(12.0)
                        .show(|ui| {
                            ui.label(egui::RichText::new(body.label()).strong().size(16.0));
                            if body.orbit_radius() > 0.0 {
                                ui.separator();
                                egui::Grid::new("body_tooltip_grid")
                                    .num_columns(2)
                                    .spacing([12.0, 4.0])
                                    .show(ui, |ui| {
                                        ui.label("Orbit radius:");
                                        ui.label(format!("{:.0}", body.orbit_radius()));
                                        ui.end_row();
                                        ui.label("Speed:");
                                        ui.label(format!("{:.2}", params.get(body.label())));
                                        ui.end_row();
                                    });
                            }
                        });
                    }
                }
            }
        });

        let resp = response.response;
        if resp.dragged() && !resp.drag_started() {
            let drag = resp.drag_delta();
            let sens = 0.005;
            self.camera = rotation_from_drag(drag.x as f64 * sens, drag.y as f64 * sens) * self.camera;
        }
        if resp.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let factor = 1.0 + scroll as f64 * 0.001;
                self.zoom = (self.zoom * factor).clamp(0.2, 50.0);
            }
        }
    }
}

//! Planet texture loading and CPU sphere sprite rendering.
//!
//! Textures are optional: a missing or undecodable file degrades to the
//! body's base color instead of aborting startup.

use crate::bodies::Body;
use egui::{Color32, ColorImage};
use std::f64::consts::PI;

pub struct BodyTexture {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl BodyTexture {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        use std::io::Cursor;
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| format!("Failed to guess format: {}", e))?;
        let img = reader
            .decode()
            .map_err(|e| format!("Failed to decode image: {}", e))?
            .to_rgb8();
        let width = img.width();
        let height = img.height();
        let pixels: Vec<[u8; 3]> = img.pixels().map(|p| p.0).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn flat(color: Color32) -> Self {
        Self {
            width: 2,
            height: 1,
            pixels: vec![[color.r(), color.g(), color.b()]; 2],
        }
    }

    fn sample(&self, u: f64, v: f64) -> [u8; 3] {
        let x = ((u * self.width as f64) as u32).min(self.width - 1);
        let y = ((v * self.height as f64) as u32).min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Renders the texture onto a sphere sprite of `size`×`size` pixels,
    /// spun by `spin` radians about the vertical axis. Unlit bodies (the
    /// sun) skip the limb shading.
    pub fn render_sphere(&self, size: usize, spin: f64, lit: bool) -> ColorImage {
        let mut pixels = vec![Color32::TRANSPARENT; size * size];
        let center = size as f64 / 2.0;
        let radius = center;

        for py in 0..size {
            for px in 0..size {
                let dx = px as f64 - center;
                let dy = py as f64 - center;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq >= radius * radius {
                    continue;
                }

                let x = dx / radius;
                let y = -dy / radius;
                let z = (1.0 - x * x - y * y).max(0.0).sqrt();

                let lat = y.asin();
                let lon = (z.atan2(x) + spin).rem_euclid(2.0 * PI);

                let u = lon / (2.0 * PI);
                let vt = (PI / 2.0 - lat) / PI;
                let [r, g, b] = self.sample(u, vt);

                let shade = if lit { (0.3 + 0.7 * z) as f32 } else { 1.0 };
                pixels[py * size + px] = Color32::from_rgb(
                    (r as f32 * shade) as u8,
                    (g as f32 * shade) as u8,
                    (b as f32 * shade) as u8,
                );
            }
        }

        ColorImage {
            size: [size, size],
            pixels,
            source_size: egui::Vec2::ZERO,
        }
    }
}

pub fn asset_path(relative: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Loads a body's texture, or its flat base color if the asset is absent or
/// broken. Missing art is cosmetic, never fatal.
pub fn load_body_texture(body: Body) -> BodyTexture {
    let path = asset_path(body.filename());
    match std::fs::read(&path) {
        Ok(bytes) => match BodyTexture::from_bytes(&bytes) {
            Ok(tex) => tex,
            Err(err) => {
                log::warn!("{}: {err}; using base color", path.display());
                BodyTexture::flat(body.base_color())
            }
        },
        Err(err) => {
            log::warn!("{}: {err}; using base color", path.display());
            BodyTexture::flat(body.base_color())
        }
    }
}

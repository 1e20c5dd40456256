//! Scene composition: starfield, per-body transform slots, hover picking.
//!
//! Built once at startup; the frame loop only writes positions and spins
//! into the slots composed here.

use crate::bodies::{Body, Registry};
use crate::motion::orbit_position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const STAR_COUNT: usize = 2000;
pub const STAR_FIELD_EXTENT: f64 = 1000.0;

// Fixed seed: the sky looks the same every launch.
const STAR_SEED: u64 = 0x534f_4c21;

/// Mutable transform slot for one body, written by the frame loop.
pub struct BodyState {
    pub body: Body,
    pub position: [f64; 3],
    pub spin: f64,
}

pub struct Scene {
    pub stars: Vec<[f64; 3]>,
    pub bodies: Vec<BodyState>,
}

impl Scene {
    pub fn compose(registry: &Registry) -> Self {
        let bodies: Vec<BodyState> = registry
            .iter()
            .map(|b| {
                let [x, z] = orbit_position(0.0, b.default_speed, b.orbit_radius, b.initial_phase, [0.0, 0.0]);
                BodyState {
                    body: b.body,
                    position: [x, 0.0, z],
                    spin: 0.0,
                }
            })
            .collect();
        let stars = scatter_stars(STAR_COUNT);
        log::info!("scene composed: {} bodies, {} stars", bodies.len(), stars.len());
        Self { stars, bodies }
    }

    /// Current (x, z) of the central body, the orbit center for everyone else.
    pub fn sun_center(&self) -> [f64; 2] {
        self.bodies
            .iter()
            .find(|s| s.body == Body::Sun)
            .map(|s| [s.position[0], s.position[2]])
            .unwrap_or([0.0, 0.0])
    }
}

fn scatter_stars(count: usize) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(STAR_SEED);
    (0..count)
        .map(|_| {
            [
                (rng.gen::<f64>() - 0.5) * 2.0 * STAR_FIELD_EXTENT,
                (rng.gen::<f64>() - 0.5) * 2.0 * STAR_FIELD_EXTENT,
                (rng.gen::<f64>() - 0.5) * 2.0 * STAR_FIELD_EXTENT,
            ]
        })
        .collect()
}

/// One body projected into view coordinates, ready for hit testing.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedBody {
    pub body: Body,
    pub pos: [f64; 2],
    pub radius: f64,
    pub depth: f64,
}

/// Nearest body whose hit circle contains the pointer. `min_hit` pads tiny
/// bodies so they stay hoverable when zoomed out.
pub fn pick_body(pointer: [f64; 2], bodies: &[ProjectedBody], min_hit: f64) -> Option<Body> {
    let mut best: Option<(Body, f64)> = None;
    for b in bodies {
        let dx = pointer[0] - b.pos[0];
        let dy = pointer[1] - b.pos[1];
        let dist = (dx * dx + dy * dy).sqrt();
        let hit = b.radius.max(min_hit);
        if dist <= hit && best.map_or(true, |(_, bd)| dist < bd) {
            best = Some((b.body, dist));
        }
    }
    best.map(|(body, _)| body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projected(body: Body, x: f64, y: f64, radius: f64) -> ProjectedBody {
        ProjectedBody {
            body,
            pos: [x, y],
            radius,
            depth: 0.0,
        }
    }

    #[test]
    fn starfield_is_deterministic_and_bounded() {
        let a = scatter_stars(STAR_COUNT);
        let b = scatter_stars(STAR_COUNT);
        assert_eq!(a, b);
        assert_eq!(a.len(), STAR_COUNT);
        assert!(a
            .iter()
            .flatten()
            .all(|c| c.abs() <= STAR_FIELD_EXTENT));
    }

    #[test]
    fn bodies_start_at_their_phase_angles() {
        let registry = Registry::solar_system().unwrap();
        let scene = Scene::compose(&registry);
        let earth = scene
            .bodies
            .iter()
            .find(|s| s.body == Body::Earth)
            .unwrap();
        assert!(earth.position[0].abs() < 1e-9);
        assert!((earth.position[2] - 70.0).abs() < 1e-9);
        assert_eq!(scene.sun_center(), [0.0, 0.0]);
    }

    #[test]
    fn pick_misses_outside_every_hit_circle() {
        let bodies = [projected(Body::Earth, 0.0, 0.0, 4.0)];
        assert_eq!(pick_body([10.0, 0.0], &bodies, 0.0), None);
    }

    #[test]
    fn pick_hits_within_radius() {
        let bodies = [projected(Body::Earth, 0.0, 0.0, 4.0)];
        assert_eq!(pick_body([3.0, 0.0], &bodies, 0.0), Some(Body::Earth));
    }

    #[test]
    fn pick_prefers_the_nearest_of_overlapping_bodies() {
        let bodies = [
            projected(Body::Jupiter, 0.0, 0.0, 10.0),
            projected(Body::Mars, 6.0, 0.0, 10.0),
        ];
        assert_eq!(pick_body([5.0, 0.0], &bodies, 0.0), Some(Body::Mars));
        assert_eq!(pick_body([1.0, 0.0], &bodies, 0.0), Some(Body::Jupiter));
    }

    #[test]
    fn min_hit_pads_small_bodies() {
        let bodies = [projected(Body::Mercury, 0.0, 0.0, 0.5)];
        assert_eq!(pick_body([1.5, 0.0], &bodies, 0.0), None);
        assert_eq!(pick_body([1.5, 0.0], &bodies, 2.0), Some(Body::Mercury));
    }
}

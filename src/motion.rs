//! Pure orbital state advancement.
//!
//! Positions are a function of effective time only; nothing here reads or
//! writes shared state, which keeps the frame loop trivially testable.

/// Effective time is in milliseconds; speeds are radians per second.
pub const MS_TO_SIM: f64 = 0.001;

/// Self-rotation step per unpaused frame, in radians. Spin is frame-count
/// driven rather than derived from effective time, so it is frame-rate
/// dependent; revolution is not.
pub const ROTATION_STEP: f64 = 0.005;

/// Position on a circular orbit of `orbit_radius` around `center` at
/// `effective_ms`, in the orbital (x, z) plane.
pub fn orbit_position(
    effective_ms: f64,
    speed: f64,
    orbit_radius: f64,
    initial_phase: f64,
    center: [f64; 2],
) -> [f64; 2] {
    if orbit_radius == 0.0 {
        // Central body: pinned to the center regardless of speed or phase.
        return center;
    }
    let angle = effective_ms * MS_TO_SIM * speed + initial_phase;
    [
        center[0] + orbit_radius * angle.cos(),
        center[1] + orbit_radius * angle.sin(),
    ]
}

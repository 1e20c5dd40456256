//! Camera rotation helpers for the projected 3D view.

use nalgebra::{Matrix3, Vector3};

pub fn rotate_point_matrix(x: f64, y: f64, z: f64, rot: &Matrix3<f64>) -> (f64, f64, f64) {
    let v = rot * Vector3::new(x, y, z);
    (v.x, v.y, v.z)
}

fn rotation_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

/// Incremental camera rotation from a mouse drag: horizontal motion spins
/// about the vertical axis, vertical motion tilts the view.
pub fn rotation_from_drag(dx: f64, dy: f64) -> Matrix3<f64> {
    rotation_x(dy) * rotation_y(dx)
}

/// Starting camera: tilted down so the orbital plane reads as an ellipse
/// rather than an edge-on line.
pub fn initial_camera() -> Matrix3<f64> {
    rotation_x(0.6)
}

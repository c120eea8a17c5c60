use nalgebra::Vector3;

use crate::CameraError;

use super::ViewParams;

/// Smallest accepted sine of the angle between view direction and view up.
pub const BASIS_EPSILON: f64 = 1e-9;

/// Camera coordinate system.
/// `u` points right, `v` up and `w` backwards (from the scene towards the eye).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalBasis {
    pub u: Vector3<f64>,
    pub v: Vector3<f64>,
    pub w: Vector3<f64>,
}

impl OrthonormalBasis {
    /// Derive basis from gaze `direction` and approximate `up` vector.
    ///
    /// Fails with [`CameraError::DegenerateCameraBasis`] if either vector is zero
    /// or the two are (anti)parallel.
    /// Non-finite inputs are not detected and produce non-finite basis.
    pub fn new(direction: &Vector3<f64>, up: &Vector3<f64>) -> Result<OrthonormalBasis, CameraError> {
        let degenerate = || {
            log::warn!("Cannot derive camera basis, direction {direction:?} up {up:?}");
            CameraError::DegenerateCameraBasis {
                direction: *direction,
                up: *up,
            }
        };

        // scale by largest component first, norm of tiny vectors underflows
        let dir_max = direction.amax();
        let up_max = up.amax();
        if dir_max == 0.0 || up_max == 0.0 {
            return Err(degenerate());
        }

        let forward = (direction / dir_max).normalize();
        let up_unit = (up / up_max).normalize();
        let right = forward.cross(&up_unit);
        // sine of the angle between the two
        let right_len = right.norm();
        if right_len < BASIS_EPSILON {
            return Err(degenerate());
        }

        let w = -forward;
        let u = right / right_len;
        let v = w.cross(&u).normalize();

        log::trace!("Camera basis u {u:?} v {v:?} w {w:?}");

        Ok(OrthonormalBasis { u, v, w })
    }

    pub fn from_view(view: &ViewParams) -> Result<OrthonormalBasis, CameraError> {
        OrthonormalBasis::new(&view.view_direction, &view.view_up)
    }

    /// Forward (gaze) direction, unit length.
    pub fn forward(&self) -> Vector3<f64> {
        -self.w
    }

    /// Check unit lengths and pairwise perpendicularity within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let unit = [self.u, self.v, self.w]
            .iter()
            .all(|axis| (axis.norm() - 1.0).abs() < tolerance);
        let perpendicular = self.u.dot(&self.v).abs() < tolerance
            && self.v.dot(&self.w).abs() < tolerance
            && self.w.dot(&self.u).abs() < tolerance;
        unit && perpendicular
    }
}

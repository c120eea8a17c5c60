use serde::{Deserialize, Serialize};

use crate::common::Ray;

use super::{Camera, OrthonormalBasis, ViewParams};

/// Pinhole projection.
/// All rays start in the view point, the viewing window lies one unit in front of it.
/// Window size is therefore the footprint at unit distance, not an angle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    view: ViewParams,
}

impl PerspectiveCamera {
    pub fn new(view: ViewParams) -> PerspectiveCamera {
        PerspectiveCamera { view }
    }

    /// Horizontal and vertical field of view in radians, implied by the window size.
    pub fn field_of_view(&self) -> (f64, f64) {
        let fov_x = 2.0 * f64::atan(0.5 * self.view.view_width);
        let fov_y = 2.0 * f64::atan(0.5 * self.view.view_height);
        (fov_x, fov_y)
    }

    /// Window size that gives vertical field of view `fov_y` (in degrees) and `aspect` (width / height).
    pub fn set_field_of_view(&mut self, fov_y: f64, aspect: f64) {
        let view_height = 2.0 * f64::tan(f64::to_radians(0.5 * fov_y));
        self.view.set_view_height(view_height);
        self.view.set_view_width(view_height * aspect);
    }
}

impl Camera for PerspectiveCamera {
    fn view(&self) -> &ViewParams {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewParams {
        &mut self.view
    }

    fn project(&self, basis: &OrthonormalBasis, u: f64, v: f64) -> Ray {
        let (su, sv) = self.view.plane_offset(u, v);
        // w points backwards, window center is at -w
        let direction = su * basis.u + sv * basis.v - basis.w;
        Ray::new(self.view.view_point, direction)
    }
}

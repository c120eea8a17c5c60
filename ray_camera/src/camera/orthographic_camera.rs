use serde::{Deserialize, Serialize};

use crate::common::Ray;

use super::{Camera, OrthonormalBasis, ViewParams};

/// Parallel projection.
/// All rays share the gaze direction, origins cover the viewing window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrthographicCamera {
    view: ViewParams,
}

impl OrthographicCamera {
    pub fn new(view: ViewParams) -> OrthographicCamera {
        OrthographicCamera { view }
    }
}

impl Camera for OrthographicCamera {
    fn view(&self) -> &ViewParams {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewParams {
        &mut self.view
    }

    fn project(&self, basis: &OrthonormalBasis, u: f64, v: f64) -> Ray {
        let (su, sv) = self.view.plane_offset(u, v);
        let origin = self.view.view_point + su * basis.u + sv * basis.v;
        Ray::new(origin, -basis.w)
    }
}

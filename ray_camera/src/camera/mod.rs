use nalgebra::{Point3, Vector3};

use crate::{common::Ray, CameraError};

mod basis;
mod orthographic_camera;
mod perspective_camera;
mod projection;
mod view_params;

pub use basis::{OrthonormalBasis, BASIS_EPSILON};
pub use orthographic_camera::OrthographicCamera;
pub use perspective_camera::PerspectiveCamera;
pub use projection::{CameraConfig, ProjectionCamera, ProjectionKind};
pub use view_params::ViewParams;

/// Generates rays through points of the viewing window.
///
/// Image point `(u, v)`: `(0, 0)` is the lower left corner of the window, `(1, 1)` upper right.
/// Values outside `<0;1>` are valid and extrapolate linearly.
pub trait Camera {
    fn view(&self) -> &ViewParams;

    fn view_mut(&mut self) -> &mut ViewParams;

    /// Ray through image point `(u, v)`, using already derived `basis`.
    fn project(&self, basis: &OrthonormalBasis, u: f64, v: f64) -> Ray;

    /// Derive basis from current view parameters.
    fn basis(&self) -> Result<OrthonormalBasis, CameraError> {
        OrthonormalBasis::from_view(self.view())
    }

    /// Write ray through image point `(u, v)` into `out_ray`.
    /// `out_ray` is left untouched on error.
    fn get_ray(&self, out_ray: &mut Ray, u: f64, v: f64) -> Result<(), CameraError> {
        let basis = self.basis()?;
        *out_ray = self.project(&basis, u, v);
        Ok(())
    }

    fn ray(&self, u: f64, v: f64) -> Result<Ray, CameraError> {
        let basis = self.basis()?;
        Ok(self.project(&basis, u, v))
    }

    fn set_view_point(&mut self, view_point: Point3<f64>) {
        self.view_mut().set_view_point(view_point);
    }

    fn set_view_direction(&mut self, view_direction: Vector3<f64>) {
        self.view_mut().set_view_direction(view_direction);
    }

    fn set_view_up(&mut self, view_up: Vector3<f64>) {
        self.view_mut().set_view_up(view_up);
    }

    fn set_view_width(&mut self, view_width: f64) {
        self.view_mut().set_view_width(view_width);
    }

    fn set_view_height(&mut self, view_height: f64) {
        self.view_mut().set_view_height(view_height);
    }
}

use nalgebra::{point, vector, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Parameters of the viewing window, shared by all projections.
///
/// Setters do no validation, bad combinations are reported
/// when the basis is derived (see [`super::OrthonormalBasis::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    /// Position of the eye
    pub view_point: Point3<f64>,
    /// Direction the eye is looking, any non-zero length
    pub view_direction: Vector3<f64>,
    /// Upwards direction from the viewer's perspective, not necessarily perpendicular to `view_direction`
    pub view_up: Vector3<f64>,
    /// Width of the viewing window
    pub view_width: f64,
    /// Height of the viewing window
    pub view_height: f64,
}

impl ViewParams {
    pub fn new(
        view_point: Point3<f64>,
        view_direction: Vector3<f64>,
        view_up: Vector3<f64>,
    ) -> ViewParams {
        ViewParams {
            view_point,
            view_direction,
            view_up,
            ..Default::default()
        }
    }

    pub fn set_view_point(&mut self, view_point: Point3<f64>) {
        self.view_point = view_point;
    }

    pub fn set_view_direction(&mut self, view_direction: Vector3<f64>) {
        self.view_direction = view_direction;
    }

    pub fn set_view_up(&mut self, view_up: Vector3<f64>) {
        self.view_up = view_up;
    }

    pub fn set_view_width(&mut self, view_width: f64) {
        self.view_width = view_width;
    }

    pub fn set_view_height(&mut self, view_height: f64) {
        self.view_height = view_height;
    }

    pub fn with_view_point(mut self, view_point: Point3<f64>) -> ViewParams {
        self.view_point = view_point;
        self
    }

    pub fn with_view_direction(mut self, view_direction: Vector3<f64>) -> ViewParams {
        self.view_direction = view_direction;
        self
    }

    pub fn with_view_up(mut self, view_up: Vector3<f64>) -> ViewParams {
        self.view_up = view_up;
        self
    }

    pub fn with_view_size(mut self, view_width: f64, view_height: f64) -> ViewParams {
        self.view_width = view_width;
        self.view_height = view_height;
        self
    }

    /// Offset of image point `(u, v)` from the window center, in window units.
    /// `(0.5, 0.5)` maps to `(0, 0)`. Inputs outside `<0;1>` extrapolate.
    pub fn plane_offset(&self, u: f64, v: f64) -> (f64, f64) {
        ((u - 0.5) * self.view_width, (v - 0.5) * self.view_height)
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        ViewParams {
            view_point: point![0.0, 0.0, 0.0],
            view_direction: vector![0.0, 0.0, -1.0],
            view_up: vector![0.0, 1.0, 0.0],
            view_width: 1.0,
            view_height: 1.0,
        }
    }
}

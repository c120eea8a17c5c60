use nalgebra::Vector3;

/// Errors raised while deriving camera state from view parameters.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// `direction` is (anti)parallel to `up`, or has zero length.
    /// No orthonormal basis can be built from such a pair.
    #[error("Degenerate camera basis: view direction {direction:?} and view up {up:?} do not span a plane")]
    DegenerateCameraBasis {
        direction: Vector3<f64>,
        up: Vector3<f64>,
    },
}

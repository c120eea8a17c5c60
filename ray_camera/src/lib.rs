//! Primary ray generation for orthographic and perspective cameras.
//!
//! ```
//! use nalgebra::{point, vector};
//! use ray_camera::{Camera, PerspectiveCamera, ViewParams};
//!
//! let view = ViewParams::new(point![0.0, 0.0, 5.0], vector![0.0, 0.0, -1.0], vector![0.0, 1.0, 0.0]);
//! let camera = PerspectiveCamera::new(view);
//! let ray = camera.ray(0.5, 0.5).unwrap();
//! assert_eq!(ray.origin, point![0.0, 0.0, 5.0]);
//! ```

pub mod camera;
pub mod common;
mod error;
pub mod test_helpers;

pub use camera::{
    Camera, CameraConfig, OrthographicCamera, OrthonormalBasis, PerspectiveCamera,
    ProjectionCamera, ProjectionKind, ViewParams,
};
pub use common::{ImagePlane, Ray};
pub use error::CameraError;

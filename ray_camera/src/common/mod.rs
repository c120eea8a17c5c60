mod image_plane;
mod ray;

pub use image_plane::{ImagePlane, PlaneRays};
pub use ray::Ray;

use crate::{
    camera::{Camera, OrthonormalBasis},
    CameraError,
};

use super::Ray;

/// Raster of pixels laid over the viewing window.
/// Pixel `[0, 0]` is in the lower left corner, rows go upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePlane {
    pub resolution: (usize, usize),
}

impl ImagePlane {
    pub fn new(width: usize, height: usize) -> ImagePlane {
        ImagePlane {
            resolution: (width, height),
        }
    }

    /// Number of pixels, saturates at `usize::MAX` for absurd resolutions.
    pub fn pixel_count(&self) -> usize {
        self.resolution.0.saturating_mul(self.resolution.1)
    }

    /// Image point of pixel `[x, y]`.
    /// `offset` is position inside the pixel, `(0.5, 0.5)` being its center.
    /// Offsets outside `<0;1)` are allowed (sample jitter) and land in neighbouring pixels.
    pub fn pixel_to_uv(&self, x: usize, y: usize, offset: (f64, f64)) -> (f64, f64) {
        let (width, height) = self.resolution;
        let u = (x as f64 + offset.0) / width as f64;
        let v = (y as f64 + offset.1) / height as f64;
        (u, v)
    }

    /// Rays through centers of all pixels, row by row from the bottom.
    /// Basis is derived once, so a degenerate camera fails here and not mid-iteration.
    pub fn rays<'a, C>(&self, camera: &'a C) -> Result<PlaneRays<'a, C>, CameraError>
    where
        C: Camera,
    {
        let basis = camera.basis()?;
        log::trace!("Generating {} rays, resolution {:?}", self.pixel_count(), self.resolution);
        Ok(PlaneRays {
            camera,
            basis,
            plane: *self,
            index: 0,
        })
    }
}

/// Iterator over pixel coordinates and their center rays, see [`ImagePlane::rays`].
pub struct PlaneRays<'a, C> {
    camera: &'a C,
    basis: OrthonormalBasis,
    plane: ImagePlane,
    index: usize,
}

impl<'a, C> Iterator for PlaneRays<'a, C>
where
    C: Camera,
{
    type Item = ((usize, usize), Ray);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.plane.pixel_count() {
            return None;
        }
        // pixel_count > 0, so width > 0
        let width = self.plane.resolution.0;
        let x = self.index % width;
        let y = self.index / width;
        self.index += 1;

        let (u, v) = self.plane.pixel_to_uv(x, y, (0.5, 0.5));
        Some(((x, y), self.camera.project(&self.basis, u, v)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.plane.pixel_count() - self.index;
        (rest, Some(rest))
    }
}

impl<'a, C> ExactSizeIterator for PlaneRays<'a, C> where C: Camera {}

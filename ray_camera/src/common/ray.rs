use nalgebra::{Point3, Vector3};

/// Ray cast by camera.
/// Direction is not normalized, see [`Ray::normalized`] when unit length is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Construct new ray using `origin` and `direction`.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Ray {
        Ray { origin, direction }
    }

    /// Returns point `t` units far from ray origin in ray direction
    /// (units of `direction` length).
    pub fn point_from_t(&self, t: f64) -> Point3<f64> {
        self.origin + t * self.direction
    }

    /// Same ray with unit direction.
    pub fn normalized(&self) -> Ray {
        Ray {
            origin: self.origin,
            direction: self.direction.normalize(),
        }
    }

    /// Rays are equivalent if they start in the same point and point the same way.
    /// Direction lengths are ignored.
    ///
    /// # Params
    /// * `other` - Ray to compare against
    /// * `tolerance` - Maximal distance of origins and of normalized directions
    pub fn equivalent(&self, other: &Ray, tolerance: f64) -> bool {
        let origin_dist = (self.origin - other.origin).norm();
        let dir_dist = (self.direction.normalize() - other.direction.normalize()).norm();
        origin_dist < tolerance && dir_dist < tolerance
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray {
            origin: Point3::origin(),
            direction: Vector3::zeros(),
        }
    }
}

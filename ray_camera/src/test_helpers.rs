//! Module with helper functions
//! Saves repetition in unit tests

use nalgebra::{point, vector, Point3, Vector3};

use crate::{
    camera::{OrthographicCamera, PerspectiveCamera, ViewParams},
    common::Ray,
};

/// Reference view, known-good rays below were generated with it
pub fn reference_view() -> ViewParams {
    ViewParams::new(
        point![1.0, 0.5, 2.0],
        vector![15.23, -1.854, 65.221].normalize(),
        vector![1.0, 0.0, 0.0],
    )
}

pub fn reference_orthographic() -> OrthographicCamera {
    OrthographicCamera::new(reference_view())
}

pub fn reference_perspective() -> PerspectiveCamera {
    PerspectiveCamera::new(reference_view())
}

/// Image points of the reference rays
pub const REFERENCE_UV: [(f64, f64); 4] = [
    (0.37123, 0.11343),
    (0.00234, 0.9832),
    (0.2345, 0.78201),
    (0.55523, 0.12555),
];

/// Shared by all orthographic reference rays
pub const REFERENCE_ORTHOGRAPHIC_DIRECTION: Vector3<f64> =
    vector![0.22730915261287413, -0.027671120744863338, 0.9734294315537928];

pub const REFERENCE_ORTHOGRAPHIC_ORIGINS: [Point3<f64>; 4] = [
    point![0.6235493799051484, 0.36878515466141304, 2.084176425089877],
    point![1.4705511166404994, 0.005661926354425948, 1.8760675810709173],
    point![1.2746277432055346, 0.2364287075632546, 1.928378256923414],
    point![0.635352111386452, 0.552789156075998, 2.0866509013806787],
];

/// Normalized directions, all perspective reference rays start in the view point
pub const REFERENCE_PERSPECTIVE_DIRECTIONS: [Vector3<f64>; 4] = [
    vector![-0.13811656557506483, -0.14714072701594028, 0.9794250460177998],
    vector![0.5734153111840217, -0.4289226336993767, 0.698011644029039],
    vector![0.46805451959738786, -0.27158260116709737, 0.8409327306198586],
    vector![-0.12844581009091482, 0.02349159814594461, 0.991438257627089],
];

pub fn reference_orthographic_rays() -> Vec<Ray> {
    REFERENCE_ORTHOGRAPHIC_ORIGINS
        .iter()
        .map(|&origin| Ray::new(origin, REFERENCE_ORTHOGRAPHIC_DIRECTION))
        .collect()
}

pub fn reference_perspective_rays() -> Vec<Ray> {
    REFERENCE_PERSPECTIVE_DIRECTIONS
        .iter()
        .map(|&direction| Ray::new(point![1.0, 0.5, 2.0], direction))
        .collect()
}

use serde::{Deserialize, Serialize};

use crate::common::Ray;

use super::{Camera, OrthographicCamera, OrthonormalBasis, PerspectiveCamera, ViewParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    Orthographic,
    Perspective,
}

/// One of the supported cameras, dispatched statically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionCamera {
    Orthographic(OrthographicCamera),
    Perspective(PerspectiveCamera),
}

impl ProjectionCamera {
    pub fn new(kind: ProjectionKind, view: ViewParams) -> ProjectionCamera {
        match kind {
            ProjectionKind::Orthographic => {
                ProjectionCamera::Orthographic(OrthographicCamera::new(view))
            }
            ProjectionKind::Perspective => {
                ProjectionCamera::Perspective(PerspectiveCamera::new(view))
            }
        }
    }

    pub fn kind(&self) -> ProjectionKind {
        match self {
            ProjectionCamera::Orthographic(_) => ProjectionKind::Orthographic,
            ProjectionCamera::Perspective(_) => ProjectionKind::Perspective,
        }
    }
}

impl Camera for ProjectionCamera {
    fn view(&self) -> &ViewParams {
        match self {
            ProjectionCamera::Orthographic(camera) => camera.view(),
            ProjectionCamera::Perspective(camera) => camera.view(),
        }
    }

    fn view_mut(&mut self) -> &mut ViewParams {
        match self {
            ProjectionCamera::Orthographic(camera) => camera.view_mut(),
            ProjectionCamera::Perspective(camera) => camera.view_mut(),
        }
    }

    fn project(&self, basis: &OrthonormalBasis, u: f64, v: f64) -> Ray {
        match self {
            ProjectionCamera::Orthographic(camera) => camera.project(basis, u, v),
            ProjectionCamera::Perspective(camera) => camera.project(basis, u, v),
        }
    }
}

impl From<OrthographicCamera> for ProjectionCamera {
    fn from(camera: OrthographicCamera) -> Self {
        ProjectionCamera::Orthographic(camera)
    }
}

impl From<PerspectiveCamera> for ProjectionCamera {
    fn from(camera: PerspectiveCamera) -> Self {
        ProjectionCamera::Perspective(camera)
    }
}

/// Camera description as handed over by a scene loader.
///
/// ```json
/// { "kind": "perspective", "view_point": [0.0, 0.0, 5.0], "view_width": 2.0 }
/// ```
/// Missing view fields take [`ViewParams::default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub kind: ProjectionKind,
    #[serde(flatten)]
    pub view: ViewParams,
}

impl CameraConfig {
    pub fn build(&self) -> ProjectionCamera {
        log::debug!("Building {:?} camera from {:?}", self.kind, self.view);
        ProjectionCamera::new(self.kind, self.view)
    }
}

impl From<CameraConfig> for ProjectionCamera {
    fn from(config: CameraConfig) -> Self {
        config.build()
    }
}

#[cfg(test)]
mod test {

    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn dispatch_matches_variants() {
        let view = ViewParams::new(
            point![0.0, 1.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![0.0, 0.0, 1.0],
        );
        let ortho = OrthographicCamera::new(view);
        let persp = PerspectiveCamera::new(view);

        let ortho_any = ProjectionCamera::from(ortho);
        let persp_any = ProjectionCamera::from(persp);

        for (u, v) in [(0.0, 0.0), (0.3, 0.8), (1.2, -0.1)] {
            assert_eq!(ortho_any.ray(u, v), ortho.ray(u, v));
            assert_eq!(persp_any.ray(u, v), persp.ray(u, v));
        }
        assert_eq!(ortho_any.kind(), ProjectionKind::Orthographic);
        assert_eq!(persp_any.kind(), ProjectionKind::Perspective);
    }

    #[test]
    fn setters_through_enum() {
        let mut camera = ProjectionCamera::new(ProjectionKind::Perspective, ViewParams::default());
        camera.set_view_point(point![0.0, 0.0, 3.0]);
        camera.set_view_width(2.0);

        let ray = camera.ray(0.5, 0.5).unwrap();

        assert_eq!(ray.origin, point![0.0, 0.0, 3.0]);
        assert_eq!(camera.view().view_width, 2.0);
    }

    #[test]
    fn config_from_json() {
        let json = r#"{
            "kind": "orthographic",
            "view_point": [1.0, 0.5, 2.0],
            "view_direction": [0.0, 0.0, 1.0],
            "view_up": [1.0, 0.0, 0.0],
            "view_height": 2.0
        }"#;
        let config: CameraConfig = serde_json::from_str(json).unwrap();

        let camera = config.build();

        assert_eq!(camera.kind(), ProjectionKind::Orthographic);
        assert_eq!(camera.view().view_point, point![1.0, 0.5, 2.0]);
        assert_eq!(camera.view().view_up, vector![1.0, 0.0, 0.0]);
        assert_eq!(camera.view().view_width, 1.0);
        assert_eq!(camera.view().view_height, 2.0);
    }

    #[test]
    fn config_roundtrip() {
        let config = CameraConfig {
            kind: ProjectionKind::Perspective,
            view: ViewParams::default().with_view_size(3.0, 1.5),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: CameraConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back, config);
        assert!(json.contains("\"perspective\""));
    }

    #[test]
    fn unknown_kind_rejected() {
        let json = r#"{ "kind": "fisheye" }"#;
        let res = serde_json::from_str::<CameraConfig>(json);

        assert!(res.is_err());
    }
}

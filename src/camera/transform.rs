//! Transform pipeline: camera parameters + viewport → matrices.
//!
//! All matrices are `glam` column-major `DMat4`s acting on column vectors.
//!
//! - rotation-only `R`: orientation about the origin
//! - view `V = T(origin) · R · T(0, 0, -distance)`: camera-to-world
//! - scene-to-raster `S = Viewport · Projection · V⁻¹`
//!
//! Everything is recomputed from scratch by [`Transforms::compute`]; the
//! matrices are outputs only and never feed back into the parameters.

use glam::{DMat4, DVec2, DVec3, DVec4};

use super::parameters::CameraParameters;
use super::projection::Projection;
use crate::host::Viewport;

/// Rotation-only matrix for a set of parameters.
#[must_use]
pub fn rotation_only(params: &CameraParameters) -> DMat4 {
    DMat4::from_quat(params.rotation().to_quat())
}

/// Camera-to-world matrix for a set of parameters.
#[must_use]
pub fn view(params: &CameraParameters) -> DMat4 {
    DMat4::from_translation(params.origin())
        * rotation_only(params)
        * DMat4::from_translation(DVec3::new(0.0, 0.0, -params.distance()))
}

/// Maps normalized device coordinates onto the viewport's pixels.
///
/// NDC `(-1, -1)` lands on the viewport's top-left corner since camera +Y
/// points down. Depth passes through unchanged.
#[must_use]
pub fn viewport_matrix(viewport: &Viewport) -> DMat4 {
    let half = DVec2::new(viewport.width * 0.5, viewport.height * 0.5);
    let center = viewport.center();
    DMat4::from_cols(
        DVec4::new(half.x, 0.0, 0.0, 0.0),
        DVec4::new(0.0, half.y, 0.0, 0.0),
        DVec4::Z,
        DVec4::new(center.x, center.y, 0.0, 1.0),
    )
}

/// The derived matrices of a rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transforms {
    rotation_only: DMat4,
    view: DMat4,
    view_inverse: DMat4,
    scene_to_raster: DMat4,
    raster_to_scene: DMat4,
}

impl Transforms {
    /// Recompute every matrix.
    ///
    /// Without a viewport (rig detached, or an empty host surface) the
    /// raster stage is skipped and scene-to-raster ends in normalized
    /// device coordinates with aspect ratio 1. With an unsupported
    /// projection the projection stage is skipped.
    #[must_use]
    pub fn compute(
        params: &CameraParameters,
        projection: &Projection,
        viewport: Option<Viewport>,
    ) -> Self {
        let rotation_only = rotation_only(params);
        let view = view(params);
        let view_inverse = view.inverse();

        let viewport = viewport.filter(|vp| !vp.is_empty());
        let aspect = viewport.map_or(1.0, |vp| vp.aspect());
        let projection = projection
            .matrix(params.field_of_view(), aspect)
            .unwrap_or(DMat4::IDENTITY);
        let raster = viewport.map_or(DMat4::IDENTITY, |vp| viewport_matrix(&vp));

        let scene_to_raster = raster * projection * view_inverse;
        Self {
            rotation_only,
            view,
            view_inverse,
            scene_to_raster,
            raster_to_scene: scene_to_raster.inverse(),
        }
    }

    /// Orientation only, centered on the origin.
    #[must_use]
    pub const fn rotation_only(&self) -> DMat4 {
        self.rotation_only
    }

    /// Camera-to-world (rotation + translation).
    #[must_use]
    pub const fn view(&self) -> DMat4 {
        self.view
    }

    /// World-to-camera.
    #[must_use]
    pub const fn view_inverse(&self) -> DMat4 {
        self.view_inverse
    }

    /// Scene point → raster `(x, y, depth)`.
    #[must_use]
    pub const fn scene_to_raster(&self) -> DMat4 {
        self.scene_to_raster
    }

    /// Raster `(x, y, depth)` → scene point.
    #[must_use]
    pub const fn raster_to_scene(&self) -> DMat4 {
        self.raster_to_scene
    }

    /// Camera position in world space.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.view.w_axis.truncate()
    }

    /// Unit viewing direction in world space.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        self.view.z_axis.truncate().normalize()
    }

    /// Project a scene point to raster `(x, y)` plus depth in `[0, 1]`.
    #[must_use]
    pub fn project(&self, point: DVec3) -> DVec3 {
        self.scene_to_raster.project_point3(point)
    }

    /// Scene point at raster position `raster` and depth `depth`.
    #[must_use]
    pub fn unproject(&self, raster: DVec2, depth: f64) -> DVec3 {
        self.raster_to_scene.project_point3(raster.extend(depth))
    }

    /// Ray through a raster position, for picking: origin on the near
    /// plane and unit direction into the scene.
    #[must_use]
    pub fn pick_ray(&self, raster: DVec2) -> (DVec3, DVec3) {
        let near = self.unproject(raster, 0.0);
        let far = self.unproject(raster, 1.0);
        (near, (far - near).normalize_or_zero())
    }
}

use glam::DMat4;

use super::parameters::CameraParameters;
use super::transform::Transforms;
use crate::host::Viewport;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the rig's matrices in single precision.
pub struct RigUniform {
    /// World-to-camera matrix.
    pub world_to_camera: [[f32; 4]; 4],
    /// Camera-to-world matrix.
    pub camera_to_world: [[f32; 4]; 4],
    /// Scene-to-raster matrix.
    pub scene_to_raster: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in radians.
    pub fovy: f32,
    /// Viewport width and height in pixels.
    pub viewport: [f32; 2],
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl Default for RigUniform {
    fn default() -> Self {
        Self::new()
    }
}

fn to_f32(m: DMat4) -> [[f32; 4]; 4] {
    m.as_mat4().to_cols_array_2d()
}

impl RigUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            world_to_camera: to_f32(DMat4::IDENTITY),
            camera_to_world: to_f32(DMat4::IDENTITY),
            scene_to_raster: to_f32(DMat4::IDENTITY),
            position: [0.0; 3],
            fovy: 45f32.to_radians(),
            viewport: [0.0; 2],
            _pad: [0.0; 2],
        }
    }

    /// Update uniform fields from the rig's current state.
    pub fn update(
        &mut self,
        params: &CameraParameters,
        transforms: &Transforms,
        viewport: Option<Viewport>,
    ) {
        self.world_to_camera = to_f32(transforms.view_inverse());
        self.camera_to_world = to_f32(transforms.view());
        self.scene_to_raster = to_f32(transforms.scene_to_raster());
        self.position = transforms.eye().as_vec3().to_array();
        self.fovy = params.field_of_view() as f32;
        self.viewport = viewport.map_or([0.0; 2], |vp| {
            [vp.width as f32, vp.height as f32]
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::projection::Projection;

    #[test]
    fn uniform_is_tightly_packed() {
        assert_eq!(size_of::<RigUniform>(), 224);
        assert_eq!(size_of::<RigUniform>() % 16, 0);
    }

    #[test]
    fn update_copies_eye_and_viewport() {
        let params = CameraParameters::default();
        let vp = Viewport::new(320.0, 240.0);
        let transforms = Transforms::compute(&params, &Projection::default(), Some(vp));
        let mut uniform = RigUniform::new();
        uniform.update(&params, &transforms, Some(vp));
        assert_eq!(uniform.position, [0.0, 0.0, -10.0]);
        assert_eq!(uniform.viewport, [320.0, 240.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 224);
    }
}

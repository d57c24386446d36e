/// Camera uniform buffer data for GPU
///
/// vec3 fields are padded to 16 bytes to satisfy WGSL/std140 alignment.
/// The final slot carries the vertical field of view so the shader side
/// can build its projection without a second upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub front: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

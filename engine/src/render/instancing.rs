//! GPU Instance Buffer System for Block Rendering
//!
//! GPU-compatible instance data for rendering every brick and prop of
//! the scene as one instanced cube draw.

use glam::{EulerRot, Quat};

use crate::castle::{BlockVisual, Prop};
use crate::sim::BlockState;

/// Maximum instances in the shared buffer (blocks plus props).
pub const MAX_INSTANCES: usize = 4096;

/// Total instance buffer size in bytes.
pub const INSTANCE_BUFFER_SIZE: usize = MAX_INSTANCES * std::mem::size_of::<BlockInstance>();

/// GPU instance data for a single block or prop.
///
/// Layout (48 bytes total, 16-byte aligned):
/// - position:     vec3<f32> (12 bytes) - world position
/// - _pad0:        u32 (4 bytes) - alignment padding
/// - rotation:     vec4<f32> (16 bytes) - quaternion rotation
/// - half_extents: vec3<f32> (12 bytes) - per-axis half size
/// - color:        u32 (4 bytes) - packed RGBA (0xRRGGBBAA)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlockInstance {
    pub position: [f32; 3],
    pub _pad0: u32,
    pub rotation: [f32; 4],
    pub half_extents: [f32; 3],
    pub color: u32,
}

static_assertions::assert_eq_size!(BlockInstance, [u8; 48]);

impl BlockInstance {
    /// Instance for a simulated block: live position, accumulated
    /// rotation angles composed as yaw-pitch-roll, visual size/color.
    pub fn from_block(block: &BlockState, visual: &BlockVisual) -> Self {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            block.rotation.y,
            block.rotation.x,
            block.rotation.z,
        );
        Self {
            position: block.position.to_array(),
            _pad0: 0,
            rotation: rotation.to_array(),
            half_extents: visual.half_extents.to_array(),
            color: pack_color(visual.color),
        }
    }

    /// Instance for a static prop.
    pub fn from_prop(prop: &Prop) -> Self {
        Self {
            position: prop.position.to_array(),
            _pad0: 0,
            rotation: Quat::from_rotation_y(prop.yaw).to_array(),
            half_extents: prop.half_extents.to_array(),
            color: pack_color(prop.color),
        }
    }

    /// Vertex buffer layout for the per-instance attributes
    /// (shader locations 2..=5).
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        // Offsets are explicit: the quaternion is 16-byte aligned, so
        // there is padding after `position` that a packed attr list
        // would miss.
        const ATTRIBUTES: [wgpu::VertexAttribute; 4] = [
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 2,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 16,
                shader_location: 3,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 32,
                shader_location: 4,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Uint32,
                offset: 44,
                shader_location: 5,
            },
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BlockInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Pack RGBA color components into a single u32 value.
/// Format: 0xRRGGBBAA
#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32)
}

/// Pack a float RGBA color, clamping each channel to `[0, 1]`.
#[inline]
pub fn pack_color(color: [f32; 4]) -> u32 {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    pack_rgba(q(color[0]), q(color[1]), q(color[2]), q(color[3]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_pack_rgba_layout() {
        assert_eq!(pack_rgba(0xFF, 0x00, 0x00, 0xFF), 0xFF0000FF);
        assert_eq!(pack_rgba(0x12, 0x34, 0x56, 0x78), 0x12345678);
    }

    #[test]
    fn test_pack_color_clamps() {
        assert_eq!(pack_color([2.0, -1.0, 1.0, 1.0]), 0xFF00FFFF);
    }

    #[test]
    fn test_instance_mirrors_block_state() {
        let mut block = BlockState::new(Vec3::new(1.0, 2.0, 3.0), 0.0);
        block.position = Vec3::new(4.0, 5.0, 6.0);
        let visual = BlockVisual {
            half_extents: Vec3::new(0.5, 0.25, 0.25),
            color: [1.0, 1.0, 1.0, 1.0],
        };
        let instance = BlockInstance::from_block(&block, &visual);
        assert_eq!(instance.position, [4.0, 5.0, 6.0]);
        assert_eq!(instance.half_extents, [0.5, 0.25, 0.25]);
        assert_eq!(instance.color, 0xFFFFFFFF);
    }

    #[test]
    fn test_instance_attributes_span_stride() {
        let layout = BlockInstance::layout();
        assert_eq!(layout.array_stride, 48);
        assert_eq!(layout.attributes.len(), 4);
    }
}

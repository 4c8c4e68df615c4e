//! Vertex types for 3D scene rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Scene vertex with position, normal, color and a lighting switch
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    /// 1.0 = shaded by the sun light, 0.0 = flat color
    pub lit: f32,
}

impl Vertex {
    pub fn lit(position: Vec3, normal: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
            color,
            lit: 1.0,
        }
    }

    pub fn unlit(position: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            normal: [0.0, 0.0, 1.0],
            color,
            lit: 0.0,
        }
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
            0 => Float32x3,
            1 => Float32x3,
            2 => Float32x3,
            3 => Float32,
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const CLEAR: [f32; 4] = [0.8, 0.9, 1.0, 1.0];
    pub const SKY_TOP: [f32; 3] = [0.7, 0.9, 1.0];
    pub const SKY_HORIZON: [f32; 3] = [0.4, 0.7, 1.0];
    pub const SUN_GLOW: [f32; 3] = [1.0, 0.7, 0.0];
    pub const SUN_CORE: [f32; 3] = [1.0, 0.9, 0.0];
    pub const CLOUD: [f32; 3] = [1.0, 1.0, 1.0];
    pub const WATER: [f32; 3] = [0.0, 0.5, 1.0];
    pub const WAVE: [f32; 3] = [0.8, 0.9, 1.0];
    pub const ICEBERG: [f32; 3] = [0.7, 0.9, 1.0];
    pub const ICEBERG_CRACK: [f32; 3] = [0.5, 0.7, 0.8];
    pub const HULL: [f32; 3] = [1.0, 1.0, 0.0];
    pub const HULL_BOTTOM: [f32; 3] = [0.7, 0.7, 0.0];
    pub const RUDDER: [f32; 3] = [1.0, 0.0, 0.0];
    pub const SAIL: [f32; 3] = [0.3, 0.3, 0.3];
}

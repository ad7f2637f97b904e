/// Vertex types - caller-facing GUI vertices and GPU-ready mesh records

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Linear RGBA color, channels in `[0, 1]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Fully transparent black
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Create a color from its channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xAARRGGBB` value
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }

    /// Channels as `[r, g, b, a]`
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex submitted by GUI widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in widget space
    pub position: Vec3,
    /// Texture coordinate
    pub tex_coords: Vec2,
    /// Vertex color
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Vec3, tex_coords: Vec2, color: Color) -> Self {
        Self { position, tex_coords, color }
    }
}

/// Vertex record as stored in a mesh
///
/// Layout: position (12 bytes), texture coordinate (8 bytes), color (16 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

impl MeshVertex {
    /// Size of one record in bytes
    pub const STRIDE: usize = std::mem::size_of::<MeshVertex>();

    /// View a slice of records as raw bytes for upload
    pub fn as_bytes(vertices: &[MeshVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

impl From<&Vertex> for MeshVertex {
    fn from(vertex: &Vertex) -> Self {
        Self {
            position: vertex.position.to_array(),
            tex_coords: vertex.tex_coords.to_array(),
            color: vertex.color.to_array(),
        }
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;

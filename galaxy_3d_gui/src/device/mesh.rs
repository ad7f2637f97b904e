/// Mesh trait - growable vertex buffer with a primitive mode

use crate::error::Result;
use crate::device::MeshVertex;

/// How consecutive vertices form primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveMode {
    /// Every three vertices form a triangle
    #[default]
    Triangles,
    /// Each vertex after the first two forms a triangle with its predecessors
    TriangleStrip,
    /// Every two vertices form a line
    Lines,
    /// One point per vertex
    Points,
}

/// Growable vertex buffer owned by exactly one batch
pub trait Mesh: Send + Sync {
    /// Primitive mode used when the mesh is drawn
    fn mode(&self) -> PrimitiveMode;

    /// Set the primitive mode
    fn set_mode(&self, mode: PrimitiveMode);

    /// Append vertex records at the end of the buffer, in order
    fn append(&self, vertices: &[MeshVertex]) -> Result<()>;

    /// Number of vertices stored
    fn element_count(&self) -> u32;
}

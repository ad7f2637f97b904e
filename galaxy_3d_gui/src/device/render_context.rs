/// RenderContext trait - the renderer state a geometry buffer draws into

use std::sync::Arc;
use glam::Mat4;
use crate::error::Result;
use crate::device::{Material, Mesh};
use crate::geometry::ClipRect;

/// Active rendering context
///
/// Mirrors a fixed-function style matrix stack: a geometry buffer pushes the
/// world matrix, multiplies its own transform in, draws, and pops. Every push
/// issued by a draw is matched by exactly one pop.
pub trait RenderContext {
    /// Duplicate the top of the world matrix stack
    fn push_world_matrix(&mut self) -> Result<()>;

    /// Post-multiply the top of the world matrix stack
    fn multiply_world_matrix(&mut self, matrix: &Mat4) -> Result<()>;

    /// Restore the previous world matrix
    fn pop_world_matrix(&mut self) -> Result<()>;

    /// Restrict rendering to `rect` until the matching pop
    fn push_clip_rect(&mut self, rect: ClipRect) -> Result<()>;

    /// Remove the innermost clip rectangle
    fn pop_clip_rect(&mut self) -> Result<()>;

    /// Issue one draw call for a mesh with a material
    fn render_material(&mut self, material: &Arc<dyn Material>, mesh: &Arc<dyn Mesh>) -> Result<()>;
}

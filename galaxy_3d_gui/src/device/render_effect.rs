/// RenderEffect trait - optional multi-pass wrapper around a geometry buffer draw

use crate::error::Result;
use crate::device::RenderContext;

/// Multi-pass render effect
///
/// A geometry buffer without an effect draws its batches once. With an effect
/// it draws them `pass_count()` times, calling `perform_pre_render` before each
/// pass and `perform_post_render` once after the last one.
pub trait RenderEffect: Send + Sync {
    /// Number of passes to draw
    fn pass_count(&self) -> u32;

    /// Set up state for `pass`
    fn perform_pre_render(&self, pass: u32, ctx: &mut dyn RenderContext) -> Result<()>;

    /// Restore state after all passes
    fn perform_post_render(&self, ctx: &mut dyn RenderContext) -> Result<()>;
}

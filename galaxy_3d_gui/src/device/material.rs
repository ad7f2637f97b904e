/// Material trait - blend state plus texture bindings for one draw call

use std::sync::Arc;
use crate::device::GpuTexture;

/// Name of the texture binding the geometry buffer writes by default
pub const DEFAULT_TEXTURE_PARAMETER: &str = "u_texture";

/// Framebuffer blend mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source replaces destination
    None,
    /// Standard `src_alpha, one_minus_src_alpha` blending
    #[default]
    Alpha,
    /// Source added to destination
    Additive,
    /// Source multiplied with destination
    Multiply,
}

/// Shareable material resource
///
/// Materials are shared through `Arc` between every batch that draws with the
/// same texture. Setters exist for initial configuration only: once a material
/// is referenced by more than one batch, mutating it changes all of them.
pub trait Material: Send + Sync {
    /// Current blend mode
    fn blend_mode(&self) -> BlendMode;

    /// Set the blend mode
    fn set_blend_mode(&self, mode: BlendMode);

    /// Texture bound to the named parameter, if any
    fn texture_parameter(&self, name: &str) -> Option<Arc<dyn GpuTexture>>;

    /// Bind a texture to the named parameter
    ///
    /// Creates the parameter if it does not exist yet, otherwise rebinds it.
    fn set_texture_parameter(&self, name: &str, texture: Arc<dyn GpuTexture>);
}

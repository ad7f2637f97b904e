/// Texture traits - GPU textures and the GUI textures that wrap them

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter backing `TextureId::new_unique`
static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a GUI texture
///
/// Two GUI textures are the same texture iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(u64);

impl TextureId {
    /// Allocate an id never returned before in this process
    pub fn new_unique() -> Self {
        Self(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Backend texture object bound to material parameters
pub trait GpuTexture: Send + Sync {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;
}

/// Texture as seen by the GUI layer
///
/// Owned by the GUI renderer. Geometry buffers only keep a weak reference
/// to it and never release it.
pub trait GuiTexture: Send + Sync {
    /// Stable identity used to group vertices into batches
    fn id(&self) -> TextureId;

    /// Underlying GPU texture, or `None` when nothing has been loaded yet
    fn gpu_texture(&self) -> Option<Arc<dyn GpuTexture>>;
}

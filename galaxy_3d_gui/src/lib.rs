/*!
# Galaxy 3D GUI

GUI geometry batching for the Galaxy3D engine.

Widgets append textured, colored vertices to a [`GeometryBuffer`](geometry::GeometryBuffer).
Consecutive vertices sharing a texture are grouped into batches (one material
plus one mesh, drawn with a single draw call). At draw time the buffer applies
its cached model transform and clip rectangle and replays every batch in
submission order, once per pass of an optional render effect.

## Architecture

- **ResourceFactory**: creates materials and meshes (implemented by the backend)
- **Material** / **Mesh**: shared GPU resources making up a batch
- **GuiTexture**: texture identity plus its backing GPU texture
- **RenderContext**: world matrix stack, clip stack and draw calls
- **RenderEffect**: optional multi-pass wrapper around a draw
- **GeometryBuffer**: batching, transform cache and draw orchestration
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod device;
pub mod geometry;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Backend collaborator traits
    pub mod device {
        pub use crate::device::*;
    }

    // GUI geometry
    pub mod gui {
        pub use crate::geometry::*;
    }
}

// Re-export math library at crate root
pub use glam;

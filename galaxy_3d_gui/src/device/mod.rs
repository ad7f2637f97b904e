/// Device module - backend collaborator traits consumed by the GUI geometry buffer
///
/// The geometry buffer never talks to a GPU API directly. The surrounding
/// renderer implements these traits on top of its engine objects.

// Module declarations
pub mod texture;
pub mod factory;
pub mod material;
pub mod mesh;
pub mod vertex;
pub mod render_context;
pub mod render_effect;

// Re-export from modules
pub use texture::*;
pub use factory::*;
pub use material::*;
pub use mesh::*;
pub use vertex::*;
pub use render_context::*;
pub use render_effect::*;

// Mock device for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;

/// ResourceFactory trait - creates the materials and meshes batches are made of

use std::sync::Arc;
use crate::error::Result;
use crate::device::{Material, Mesh};

/// Factory for batch resources
///
/// Implemented by the GUI renderer on top of its engine. Every call returns a
/// fresh, unshared object; the geometry buffer configures it before sharing.
pub trait ResourceFactory: Send + Sync {
    /// Create an empty material
    fn create_material(&self) -> Result<Arc<dyn Material>>;

    /// Create an empty mesh
    fn create_mesh(&self) -> Result<Arc<dyn Mesh>>;
}

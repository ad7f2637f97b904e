/// One draw call worth of GUI geometry.

use std::sync::Arc;
use crate::device::{Material, Mesh};

/// A (material, mesh) pair drawn with a single draw call
///
/// The material may be shared with other batches that use the same texture;
/// the mesh belongs to this batch alone.
#[derive(Clone)]
pub struct Batch {
    material: Arc<dyn Material>,
    mesh: Arc<dyn Mesh>,
}

impl Batch {
    pub(crate) fn new(material: Arc<dyn Material>, mesh: Arc<dyn Mesh>) -> Self {
        Self { material, mesh }
    }

    pub fn material(&self) -> &Arc<dyn Material> {
        &self.material
    }

    pub fn mesh(&self) -> &Arc<dyn Mesh> {
        &self.mesh
    }

    /// Whether this batch draws with exactly `material` (same object)
    pub fn uses_material(&self, material: &Arc<dyn Material>) -> bool {
        Arc::ptr_eq(&self.material, material)
    }
}

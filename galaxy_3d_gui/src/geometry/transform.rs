/// Model transform of a geometry buffer with a lazily rebuilt matrix.
///
/// The matrix places local geometry by rotating it about `pivot`, then moving
/// the pivot by `translation`. It is rebuilt only when an input changed since
/// the last rebuild.

use glam::{Mat4, Vec3};

/// Translation, rotation about a pivot, and the cached matrix built from them
#[derive(Debug, Clone)]
pub struct Transform {
    translation: Vec3,
    /// Degrees per axis
    rotation: Vec3,
    pivot: Vec3,
    matrix: Mat4,
    /// `matrix` matches the inputs above
    valid: bool,
}

impl Transform {
    /// Identity transform, matrix not built yet
    pub fn new() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            pivot: Vec3::ZERO,
            matrix: Mat4::IDENTITY,
            valid: false,
        }
    }

    // ===== INPUTS =====

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation in degrees about X, Y and Z
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
        self.valid = false;
    }

    /// Set the rotation in degrees about X, Y and Z
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.valid = false;
    }

    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.pivot = pivot;
        self.valid = false;
    }

    // ===== MATRIX =====

    /// Whether the cached matrix reflects the current inputs
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Cached matrix, or `None` when it is stale
    pub fn cached_matrix(&self) -> Option<&Mat4> {
        self.valid.then_some(&self.matrix)
    }

    /// Current matrix, rebuilt first if stale
    pub fn matrix(&mut self) -> &Mat4 {
        if !self.valid {
            self.matrix = Self::compose(self.translation, self.rotation, self.pivot);
            self.valid = true;
        }
        &self.matrix
    }

    /// Build `T(translation + pivot) * Rz * Ry * Rx * T(-pivot)`.
    ///
    /// Rotation angles are in degrees; zero angles are skipped.
    pub fn compose(translation: Vec3, rotation: Vec3, pivot: Vec3) -> Mat4 {
        let mut matrix = Mat4::from_translation(translation + pivot);
        if rotation.z != 0.0 {
            matrix *= Mat4::from_rotation_z(rotation.z.to_radians());
        }
        if rotation.y != 0.0 {
            matrix *= Mat4::from_rotation_y(rotation.y.to_radians());
        }
        if rotation.x != 0.0 {
            matrix *= Mat4::from_rotation_x(rotation.x.to_radians());
        }
        matrix * Mat4::from_translation(-pivot)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;

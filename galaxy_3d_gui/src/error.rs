//! Error types for the Galaxy3D GUI module
//!
//! The geometry buffer itself never fails: missing textures and absent render
//! effects degrade silently. Errors only come from the backend collaborators
//! (resource factory, meshes, render context) and are propagated unchanged.

use std::fmt;

/// Result type for Galaxy3D GUI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D GUI errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (render context, mesh upload, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, material, mesh)
    InvalidResource(String),

    /// Initialization failed (backend, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_gui::engine_err;
/// # let id = 1;
/// let err = engine_err!("galaxy3d::gui::Mesh", "Mesh {} is locked", id);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return `Err(Error::BackendError)` from the current function
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_gui::engine_bail;
/// # fn f() -> galaxy_3d_gui::galaxy3d::Result<()> {
/// # let id = 1;
/// engine_bail!("galaxy3d::gui::Mesh", "Mesh {} is locked", id);
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

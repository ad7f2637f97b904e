//! GUI geometry module
//!
//! Batches textured GUI vertices into (material, mesh) pairs and replays
//! them under a cached transform, a clip rectangle and an optional
//! multi-pass render effect.

mod rect;
mod transform;
mod batch;
mod geometry_buffer;

pub use rect::{Rect, ClipRect, pixel_aligned};
pub use transform::Transform;
pub use batch::Batch;
pub use geometry_buffer::{GeometryBuffer, GeometryBufferConfig, DrawStats};

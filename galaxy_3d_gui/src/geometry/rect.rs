/// Rectangles in GUI space and device clip space

/// Round a coordinate to the nearest pixel boundary
///
/// Halfway values round away from zero (`2.5 -> 3`, `-2.5 -> -3`).
pub fn pixel_aligned(value: f32) -> f32 {
    value.round()
}

/// Axis-aligned rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Clip rectangle in device pixels
///
/// A zero width or zero height disables clipping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ClipRect {
    /// Clip rectangle that disables clipping
    pub const NONE: ClipRect = ClipRect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a device clip rectangle from a GUI region.
    ///
    /// Every edge is pixel-aligned, then clamped to be non-negative.
    pub fn from_region(region: &Rect) -> Self {
        let edge = |v: f32| pixel_aligned(v).max(0.0);
        let aligned = Rect::new(
            edge(region.left),
            edge(region.top),
            edge(region.right),
            edge(region.bottom),
        );

        Self {
            x: aligned.left,
            y: aligned.top,
            width: aligned.width(),
            height: aligned.height(),
        }
    }

    /// Whether this rectangle restricts rendering
    pub fn is_enabled(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }
}

#[cfg(test)]
#[path = "rect_tests.rs"]
mod tests;

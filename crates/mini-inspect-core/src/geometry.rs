#![forbid(unsafe_code)]

//! Viewport geometry.
//!
//! Everything is in CSS pixels relative to the viewport, the coordinate space
//! shared by `getBoundingClientRect` and `MouseEvent.clientX/clientY`.

/// Bounding box of an element in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ClientRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: PointerPosition) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }
}

/// Pointer location in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

//! Drawing surface abstraction and viewport geometry.
//!
//! Provides the [`DrawSurface`] trait the renderer draws through, together with
//! the [`Rect`] and [`Viewport`] value types.

use crate::{BAR_NODES, THICKNESS_DIVISOR};
use palette::Srgb;

/// Trait for abstracting a 2D drawing backend.
///
/// Implement this for your canvas, framebuffer or display driver. The renderer
/// only ever fills axis-aligned rectangles inside a `save`/`restore` scope with
/// a translated origin. Handle any backend errors internally - these methods
/// cannot fail.
pub trait DrawSurface {
    /// Pushes the current transform onto the surface's state stack.
    fn save(&mut self);

    /// Pops the transform pushed by the matching `save`.
    fn restore(&mut self);

    /// Moves the drawing origin by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Fills `rect` (relative to the current origin) with `color`.
    ///
    /// Widths may be zero. Color components are in the range 0.0-1.0.
    fn fill_rect(&mut self, rect: Rect, color: Srgb);
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent; may be zero.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its origin and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Viewport validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewportError {
    /// Width or height is NaN or infinite.
    NonFinite,

    /// Width or height is zero or negative.
    NonPositive,
}

impl core::fmt::Display for ViewportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViewportError::NonFinite => {
                write!(f, "viewport dimensions must be finite")
            }
            ViewportError::NonPositive => {
                write!(f, "viewport dimensions must be greater than zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ViewportError {}

/// The drawable area, fixed for the lifetime of a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a validated viewport.
    ///
    /// # Errors
    /// * `NonFinite` - A dimension is NaN or infinite
    /// * `NonPositive` - A dimension is zero or negative
    pub fn new(width: f64, height: f64) -> Result<Self, ViewportError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::NonFinite);
        }

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::NonPositive);
        }

        Ok(Self { width, height })
    }

    /// Viewport width in surface units.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in surface units.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Horizontal slot width of one unit.
    #[inline]
    pub fn gap(&self) -> f64 {
        self.width / BAR_NODES as f64
    }

    /// Vertical thickness of a bar.
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.height / THICKNESS_DIVISOR
    }

    /// The whole viewport as a rectangle at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

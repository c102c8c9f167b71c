//! Physical pixel coordinates for the slide track.
//!
//! All geometry in this crate is expressed in physical pixels relative to the
//! widget's own top-left corner:
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative coordinates are allowed while an element animates off its track
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel value
//! - [`PxPosition`] - A touch point or element origin
//! - [`PxSize`] - Width and height of an element
//! - [`PxRect`] - An edge-based rectangle (left, top, right, bottom)
//!
//! # Example
//!
//! ```
//! use slide_action::px::{Px, PxPosition, PxRect};
//!
//! let rect = PxRect::new(Px(4), Px(0), Px(54), Px(50));
//! assert_eq!(rect.center_x(), Px(29));
//! assert!(rect.contains(PxPosition::new(Px(10), Px(10))));
//!
//! let moved = rect.offset_to(Px(100), Px(0));
//! assert_eq!(moved.width(), rect.width());
//! ```

use std::ops::Neg;

/// A physical pixel coordinate value.
///
/// Supports negative values and the usual integer arithmetic. Conversions from
/// floating point truncate toward zero unless stated otherwise.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, rounding to the nearest pixel and
    /// saturating at the numeric bounds.
    ///
    /// ```
    /// use slide_action::px::Px;
    ///
    /// assert_eq!(Px::round_from_f32(41.6), Px(42));
    /// assert_eq!(Px::round_from_f32(f32::MAX), Px(i32::MAX));
    /// ```
    pub fn round_from_f32(value: f32) -> Self {
        Px(value.round().clamp(i32::MIN as f32, i32::MAX as f32) as i32)
    }

    /// Saturating integer addition.
    ///
    /// Computes `self + rhs`, clamping at the numeric bounds instead of
    /// overflowing.
    ///
    /// ```
    /// use slide_action::px::Px;
    ///
    /// assert_eq!(Px(i32::MAX).saturating_add(Px(1)), Px(i32::MAX));
    /// ```
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating integer subtraction.
    ///
    /// Computes `self - rhs`, clamping at the numeric bounds instead of
    /// overflowing. Touch coordinates come straight from the host, so drag
    /// math goes through this.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Multiplies the pixel value by a scalar, truncating the result.
    pub fn mul_f32(self, rhs: f32) -> Self {
        Px((self.0 as f32 * rhs) as i32)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// A constant representing zero size (0×0).
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// An edge-based rectangle in physical pixel space.
///
/// The rectangle covers `left..right` horizontally and `top..bottom`
/// vertically; the right and bottom edges are exclusive for hit-testing.
/// Widths and heights are never negative for rectangles produced by layout,
/// but animation interpolation may briefly produce any combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// Left edge
    pub left: Px,
    /// Top edge
    pub top: Px,
    /// Right edge (exclusive)
    pub right: Px,
    /// Bottom edge (exclusive)
    pub bottom: Px,
}

impl PxRect {
    /// A constant representing an empty rectangle at the origin.
    pub const ZERO: Self = Self {
        left: Px::ZERO,
        top: Px::ZERO,
        right: Px::ZERO,
        bottom: Px::ZERO,
    };

    /// Creates a new rectangle from its four edges.
    pub const fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> Px {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> Px {
        self.bottom - self.top
    }

    /// Horizontal center, rounded toward the left edge.
    ///
    /// Defined as `left + width / 2` so that
    /// `rect.with_center_x(c).center_x() == c` holds for every `c`.
    pub fn center_x(&self) -> Px {
        self.left + self.width() / 2
    }

    /// Vertical center, rounded toward the top edge.
    pub fn center_y(&self) -> Px {
        self.top + self.height() / 2
    }

    /// Returns the rectangle translated by the given deltas.
    pub fn offset(&self, dx: Px, dy: Px) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Returns the rectangle moved so its top-left corner sits at
    /// `(left, top)`, keeping its size.
    pub fn offset_to(&self, left: Px, top: Px) -> Self {
        self.offset(left - self.left, top - self.top)
    }

    /// Returns the rectangle moved horizontally so that its center lies at
    /// `center_x`, keeping its size and vertical position.
    pub fn with_center_x(&self, center_x: Px) -> Self {
        self.offset_to(center_x - self.width() / 2, self.top)
    }

    /// Returns the rectangle shrunk by `dx` on the left and right and by `dy`
    /// on the top and bottom. Negative values grow the rectangle.
    ///
    /// ```
    /// use slide_action::px::{Px, PxRect};
    ///
    /// let rect = PxRect::new(Px(10), Px(10), Px(20), Px(20));
    /// assert_eq!(rect.inset(Px(-4), Px(-2)), PxRect::new(Px(6), Px(8), Px(24), Px(22)));
    /// ```
    pub fn inset(&self, dx: Px, dy: Px) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right - dx,
            bottom: self.bottom - dy,
        }
    }

    /// Check if a point is inside the rectangle.
    pub fn contains(&self, point: PxPosition) -> bool {
        self.left <= point.x && point.x < self.right && self.top <= point.y && point.y < self.bottom
    }
}

impl std::ops::Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Px;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Px;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

//! # Density-Independent Pixels (Dp)
//!
//! Margins around sliders and captions are specified in [`Dp`] so that the
//! track looks the same on screens of different pixel density. The conversion
//! to physical pixels is controlled by a [`Density`] value that the host
//! supplies in the widget configuration.
//!
//! ```
//! use slide_action::{Density, Dp, Px};
//!
//! let margin = Dp(4.0);
//! assert_eq!(margin.to_px(Density(1.0)), Px(4));
//! assert_eq!(margin.to_px(Density(2.625)), Px(10));
//! ```

use crate::Px;

/// Number of physical pixels per density-independent pixel.
///
/// A density of `1.0` maps one dp to one physical pixel; `2.0` is a typical
/// high-density phone screen.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(pub f64);

impl Density {
    /// One physical pixel per dp.
    pub const STANDARD: Density = Density(1.0);

    /// Returns `true` if the density can be used for conversions.
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Density-independent pixels (dp) for UI scaling.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// A constant representing zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Converts this dp value to physical pixels, truncating toward zero.
    pub fn to_px(self, density: Density) -> Px {
        Px((self.0 * density.0) as i32)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

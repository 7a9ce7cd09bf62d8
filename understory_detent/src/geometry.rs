// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry context and boundary limits.

use kurbo::{Insets, Size};

/// Container geometry a sheet is resolved against.
///
/// This is owned by the host and supplied on every resolution call. The sheet
/// hangs off the bottom edge of the container, so the bottom safe-area inset
/// counts towards the space it can occupy.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Size of the container the sheet is presented in.
    pub size: Size,
    /// Safe-area insets of the container. Only `y1` (bottom) affects sizing.
    pub safe_area: Insets,
    /// Height of auxiliary content pinned below the sheet (for example a footer).
    pub footer_height: f64,
}

impl Geometry {
    /// Create a geometry with no footer.
    pub const fn new(size: Size, safe_area: Insets) -> Self {
        Self {
            size,
            safe_area,
            footer_height: 0.0,
        }
    }

    /// Create a geometry for a container without safe-area insets.
    pub const fn from_size(size: Size) -> Self {
        Self::new(size, Insets::ZERO)
    }

    /// Return a copy with the given footer height.
    #[must_use]
    pub const fn with_footer_height(mut self, footer_height: f64) -> Self {
        self.footer_height = footer_height;
        self
    }

    /// Height available to the sheet: container height plus the bottom inset.
    #[inline]
    pub fn available_height(&self) -> f64 {
        self.size.height + self.safe_area.y1
    }

    /// Bottom safe-area inset.
    #[inline]
    pub fn bottom_inset(&self) -> f64 {
        self.safe_area.y1
    }
}

/// Smallest and largest resolved detent sizes of a set.
///
/// Produced by [`DetentSet::limits`](crate::DetentSet::limits). `min <= max`
/// always holds; an empty set yields `(0, 0)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Limits {
    /// Smallest resolved size.
    pub min: f64,
    /// Largest resolved size.
    pub max: f64,
}

impl Limits {
    /// Zero limits, used before any geometry is known.
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    /// Create limits, swapping the bounds if given out of order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// True if `t` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.min <= t && t <= self.max
    }

    /// Clamp `t` into `[min, max]`.
    #[inline]
    pub fn clamp(&self, t: f64) -> f64 {
        t.max(self.min).min(self.max)
    }

    /// Distance between the bounds.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

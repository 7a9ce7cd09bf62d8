// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Detent`] value type and its sizing rules.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::geometry::Geometry;

/// Height of the drag indicator strip at the top of a sheet.
pub const DRAG_INDICATOR_HEIGHT: f64 = 14.0;

/// Margin added above the footer for [`Detent::Bottom`].
pub const BOTTOM_MARGIN: f64 = 6.0;

/// One resting height of a sheet.
///
/// Detents are compared by their resolved [`size`](Detent::size), never by
/// declaration order. Equality and hashing go by case and payload; float
/// payloads compare by bit pattern so `Eq` and `Hash` agree.
///
/// ## Sizing
///
/// With `available = container height + bottom inset`:
///
/// | Detent          | Size                                                    |
/// |-----------------|---------------------------------------------------------|
/// | `Hidden`        | `0`                                                     |
/// | `NotPresented`  | `0`                                                     |
/// | `Medium`        | `available / 2`                                         |
/// | `Large`         | `available`                                             |
/// | `Bottom`        | `bottom inset + footer + DRAG_INDICATOR_HEIGHT + BOTTOM_MARGIN` |
/// | `FullScreen`    | `available + DRAG_INDICATOR_HEIGHT`                     |
/// | `Fraction(f)`   | `min(available * f, available)`                         |
/// | `Height(h)`     | `min(h, available)`                                     |
#[derive(Copy, Clone, Debug, Default)]
pub enum Detent {
    /// Zero height while the sheet stays mounted.
    Hidden,
    /// The sheet is not mounted at all.
    #[default]
    NotPresented,
    /// Half of the available height.
    Medium,
    /// The full available height.
    Large,
    /// Just enough to show the drag indicator above the footer.
    Bottom,
    /// Full height with the drag indicator pushed past the top edge.
    FullScreen,
    /// A fraction of the available height, clamped to the available height.
    Fraction(f64),
    /// A fixed height, clamped to the available height.
    Height(f64),
}

impl Detent {
    /// Resolved height of this detent in `geometry`.
    pub fn size(&self, geometry: &Geometry) -> f64 {
        let available = geometry.available_height();
        match *self {
            Self::Hidden | Self::NotPresented => 0.0,
            Self::Medium => available / 2.0,
            Self::Large => available,
            Self::FullScreen => available + DRAG_INDICATOR_HEIGHT,
            Self::Fraction(f) => (available * f).min(available),
            Self::Height(h) => h.min(available),
            Self::Bottom => {
                geometry.bottom_inset()
                    + geometry.footer_height
                    + DRAG_INDICATOR_HEIGHT
                    + BOTTOM_MARGIN
            }
        }
    }

    /// False only for [`Detent::NotPresented`].
    #[inline]
    pub fn is_presented(&self) -> bool {
        !matches!(self, Self::NotPresented)
    }

    /// Order two detents by their resolved size in `geometry`.
    pub fn cmp_in(&self, other: &Self, geometry: &Geometry) -> Ordering {
        self.size(geometry).total_cmp(&other.size(geometry))
    }

    fn payload_bits(&self) -> Option<u64> {
        match *self {
            Self::Fraction(v) | Self::Height(v) => Some(v.to_bits()),
            _ => None,
        }
    }
}

impl PartialEq for Detent {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
            && self.payload_bits() == other.payload_bits()
    }
}

impl Eq for Detent {}

impl Hash for Detent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        self.payload_bits().hash(state);
    }
}

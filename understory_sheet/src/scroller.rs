// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic scrolling of the sheet's content by item key.
//!
//! Content items report their layout rectangle (in the scroll content's
//! coordinate space) with [`Scroller::mark`] whenever their layout changes.
//! [`Scroller::scroll_to`] later turns a key into a request to reveal the last
//! known rectangle. Unknown keys produce no request.
//!
//! ```
//! use kurbo::Rect;
//! use understory_sheet::scroller::{Scroller, ScrollRequest};
//!
//! let mut scroller: Scroller<u32> = Scroller::new();
//! scroller.mark(7, Rect::new(0.0, 600.0, 390.0, 660.0));
//!
//! assert_eq!(
//!     scroller.scroll_to(&7, true),
//!     Some(ScrollRequest { rect: Rect::new(0.0, 600.0, 390.0, 660.0), animated: true }),
//! );
//! assert_eq!(scroller.scroll_to(&8, true), None);
//! ```

use alloc::collections::BTreeMap;

use kurbo::Rect;

/// A request to reveal `rect` in the scroll view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Rectangle to make visible, in content coordinates.
    pub rect: Rect,
    /// Whether the scroll should animate.
    pub animated: bool,
}

/// A scroll view that can reveal a rectangle of its content.
pub trait ScrollTarget {
    /// Scroll the minimum distance that makes `rect` visible.
    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool);
}

/// Last known layout rectangle per item key.
#[derive(Clone, Debug)]
pub struct Scroller<K> {
    marks: BTreeMap<K, Rect>,
}

impl<K: Ord> Default for Scroller<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Scroller<K> {
    /// Create a scroller with no marks.
    pub const fn new() -> Self {
        Self {
            marks: BTreeMap::new(),
        }
    }

    /// Record the layout rectangle of `key`, returning the previous one.
    pub fn mark(&mut self, key: K, rect: Rect) -> Option<Rect> {
        self.marks.insert(key, rect)
    }

    /// Forget `key`, for example when its item leaves the content.
    pub fn forget(&mut self, key: &K) -> Option<Rect> {
        self.marks.remove(key)
    }

    /// Last known rectangle of `key`.
    pub fn rect_of(&self, key: &K) -> Option<Rect> {
        self.marks.get(key).copied()
    }

    /// Number of marked items.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True if nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Forget all marks.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Build a request revealing `key`, if it was marked.
    pub fn scroll_to(&self, key: &K, animated: bool) -> Option<ScrollRequest> {
        self.rect_of(key).map(|rect| ScrollRequest { rect, animated })
    }

    /// Reveal `key` in `target`. Returns `false` if `key` was never marked.
    pub fn scroll_to_in(&self, target: &mut impl ScrollTarget, key: &K, animated: bool) -> bool {
        match self.scroll_to(key, animated) {
            Some(req) => {
                target.scroll_rect_to_visible(req.rect, req.animated);
                true
            }
            None => false,
        }
    }
}

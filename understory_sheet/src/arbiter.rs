// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture arbitration between the sheet drag and the inner scroll view.
//!
//! ## Overview
//!
//! A sheet with scrollable content has two candidates for every vertical touch
//! sequence: the sheet's own drag, which moves the sheet between detents, and
//! the inner scroll view, which moves the content. Exactly one of them owns a
//! sequence.
//!
//! The host calls [`should_scroll_begin`] every time its scroll gesture is
//! about to be recognized, with the scroll view's current offset and velocity
//! and the sheet's live translation. Results must not be cached: translation
//! and limits change continuously while the sheet is open.
//!
//! Scroll velocity uses the host's native units; only its sign is consulted.
//! Positive means the finger moves down the screen.
//!
//! ## Rules
//!
//! - Content at (or past) the top and the finger moving down: the sheet owns
//!   the sequence, so pulling down collapses the sheet instead of
//!   rubber-banding the content.
//! - Sheet not fully expanded and the finger moving up: the sheet owns the
//!   sequence, so the sheet expands before any content scrolls.
//! - Otherwise the scroll view owns it.

/// Scroll view state at a recognition attempt.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollProbe {
    /// Vertical content offset; `0` is the top, negative while over-scrolled.
    pub offset_y: f64,
    /// Vertical pan velocity; positive when the finger moves down.
    pub velocity_y: f64,
}

impl ScrollProbe {
    /// Create a probe.
    pub const fn new(offset_y: f64, velocity_y: f64) -> Self {
        Self {
            offset_y,
            velocity_y,
        }
    }
}

/// Owner of a touch sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GestureOwner {
    /// The sheet drag moves the sheet.
    SheetDrag,
    /// The inner scroll view scrolls its content.
    InnerScroll,
}

/// Decide whether the inner scroll view may begin its gesture.
///
/// `translation` is the sheet's live translation and `max_limit` its largest
/// detent size.
pub fn should_scroll_begin(probe: ScrollProbe, translation: f64, max_limit: f64) -> bool {
    // Negative offsets (transient over-scroll) count as the top.
    if probe.offset_y <= 0.0 && probe.velocity_y >= 0.0 {
        return false;
    }
    if translation != max_limit && probe.velocity_y < 0.0 {
        return false;
    }
    true
}

/// Tracks which gesture owns the current touch sequence.
///
/// Ownership is decided per recognition attempt with [`GestureArbiter::arbitrate`]
/// (or taken outright by the drag handle with [`GestureArbiter::claim_sheet`])
/// and held until [`GestureArbiter::release`].
#[derive(Clone, Debug, Default)]
pub struct GestureArbiter {
    owner: Option<GestureOwner>,
}

impl GestureArbiter {
    /// Create an arbiter with no active sequence.
    pub const fn new() -> Self {
        Self { owner: None }
    }

    /// Owner of the active sequence, if any.
    pub fn owner(&self) -> Option<GestureOwner> {
        self.owner
    }

    /// Evaluate a recognition attempt and record the winner.
    pub fn arbitrate(
        &mut self,
        probe: ScrollProbe,
        translation: f64,
        max_limit: f64,
    ) -> GestureOwner {
        let owner = if should_scroll_begin(probe, translation, max_limit) {
            GestureOwner::InnerScroll
        } else {
            GestureOwner::SheetDrag
        };
        log::trace!(
            "arbiter: offset={} velocity={} translation={translation} max={max_limit} -> {owner:?}",
            probe.offset_y,
            probe.velocity_y,
        );
        self.owner = Some(owner);
        owner
    }

    /// Give the sequence to the sheet drag unconditionally.
    pub fn claim_sheet(&mut self) {
        self.owner = Some(GestureOwner::SheetDrag);
    }

    /// End the sequence, returning its owner.
    pub fn release(&mut self) -> Option<GestureOwner> {
        self.owner.take()
    }

    /// True unless the inner scroll view owns the active sequence.
    pub fn routes_to_sheet(&self) -> bool {
        self.owner != Some(GestureOwner::InnerScroll)
    }
}

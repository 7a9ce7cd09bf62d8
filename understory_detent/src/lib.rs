// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_detent --heading-base-level=0

//! Understory Detent: sizing and snap resolution for draggable sheets.
//!
//! A detent is one resting height of a bottom sheet. This crate answers two
//! questions for a set of detents laid out in some container:
//!
//! - What are the smallest and largest heights the sheet may rest at? See
//!   [`DetentSet::limits`].
//! - Given where a drag was released and how fast, which detent should the
//!   sheet settle into? See [`DetentSet::resolve`].
//!
//! Everything here is pure and deterministic: geometry is passed in on every
//! call and nothing is cached. Gesture tracking, presentation and state
//! notifications live in `understory_sheet`, which builds on this crate.
//!
//! ## Conventions
//!
//! - Translation is the height of the visible sheet above the bottom edge of
//!   the container, in points. `0` is fully hidden.
//! - Velocity is in points per millisecond and is positive when the sheet
//!   grows (the finger moves up the screen).
//! - Detents are ordered by their resolved [`size`](Detent::size), never by
//!   declaration order.
//!
//! ## API overview
//!
//! - [`Detent`]: named or parametric resting height.
//! - [`Geometry`]: container size, safe-area insets and footer height.
//! - [`Limits`]: `(min, max)` of a set's resolved sizes.
//! - [`DetentSet`]: unique detents with limits and resolution.
//!
//! # Example
//!
//! ```rust
//! use understory_detent::{Detent, DetentSet, Geometry};
//! use kurbo::Size;
//!
//! let geometry = Geometry::from_size(Size::new(400.0, 800.0));
//! let detents = DetentSet::from([Detent::Height(200.0), Detent::Medium, Detent::Large]);
//!
//! let limits = detents.limits(&geometry);
//! assert_eq!((limits.min, limits.max), (200.0, 800.0));
//!
//! // Released slowly just above the short detent: snap back down.
//! assert_eq!(detents.resolve(250.0, 0.2, &geometry), Detent::Height(200.0));
//!
//! // Same spot, flicked upwards: open to the next detent instead.
//! assert_eq!(detents.resolve(250.0, 2.5, &geometry), Detent::Medium);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod detent;
mod geometry;
mod set;

pub use detent::{BOTTOM_MARGIN, DRAG_INDICATOR_HEIGHT, Detent};
pub use geometry::{Geometry, Limits};
pub use set::{DEFAULT_FLICK_VELOCITY, DetentSet};

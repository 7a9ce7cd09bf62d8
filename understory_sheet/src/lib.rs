// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet --heading-base-level=0

//! Understory Sheet: a headless, `no_std` engine for draggable bottom sheets.
//!
//! ## Overview
//!
//! This crate owns the numeric and state logic of a bottom sheet: where the
//! sheet is, which detent it is heading for, who owns the current touch
//! sequence, and whether it is mounted. It does not render anything. A host
//! toolkit forwards input events and applies the resulting state.
//!
//! Detent sizing and snap resolution come from [`understory_detent`].
//!
//! ## Flow
//!
//! 1) Raw drag samples go to the [`drag::DragTracker`] (through
//!    [`Sheet::drag_moved`]), which produces a live translation, with a damped
//!    bounce below the smallest detent, and a velocity estimate.
//! 2) The live detent follows the finger; on release, [`Sheet::magnetize`]
//!    resolves the final detent and commits detents and translation in one
//!    notification, with a [`Transition`] when the renderer should animate.
//! 3) The [`presentation::Presenter`] mounts the sheet when a presented detent
//!    is selected and unmounts it only after the exit transition finished.
//! 4) In parallel, [`arbiter::should_scroll_begin`] decides, on every
//!    recognition attempt, whether the inner scroll view or the sheet owns a
//!    touch sequence.
//!
//! ## Units and signs
//!
//! - Translation: visible sheet height above the container's bottom edge.
//! - Drag samples: cumulative screen-space distance, down positive.
//! - Velocity: points per millisecond, positive while the sheet grows.
//!
//! ## Time
//!
//! The crate never reads a clock. Samples carry timestamps, and deadline-based
//! fallbacks fire from [`Sheet::tick`].
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Size;
//! use understory_detent::{Detent, DetentSet, Geometry};
//! use understory_sheet::{DragSample, Sheet, SheetConfig};
//!
//! let geometry = Geometry::from_size(Size::new(400.0, 800.0));
//! let detents = DetentSet::from([Detent::Height(200.0), Detent::Medium, Detent::Large]);
//! let mut sheet = Sheet::new(detents, Detent::Medium, geometry, SheetConfig::default()).unwrap();
//! assert_eq!(sheet.state().translation(), 400.0);
//!
//! // Drag the handle up by 150pt over 200ms and let go.
//! let t0 = Duration::from_millis(0);
//! sheet.drag_began(t0);
//! sheet.drag_moved(DragSample::new(Duration::from_millis(200), -150.0));
//! let end = DragSample::new(Duration::from_millis(200), -150.0);
//! let settled = sheet.drag_ended(Some(end), Duration::from_millis(200));
//!
//! // 550pt is below the 600pt midpoint and the release was slow: back to Medium.
//! assert_eq!(settled, Some(Detent::Medium));
//! assert_eq!(sheet.state().selected_detent(), Detent::Medium);
//! assert_eq!(sheet.state().translation(), 400.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arbiter;
pub mod drag;
pub mod presentation;
pub mod scroller;

mod config;
mod observe;
mod sheet;
mod state;

pub use arbiter::{GestureOwner, ScrollProbe};
pub use config::{
    ConfigError, DEFAULT_BOUNCE_DAMPING, DEFAULT_SETTLE_DURATION, DEFAULT_UNMOUNT_DELAY,
    SheetConfig,
};
pub use drag::{DragSample, DragUpdate};
pub use observe::{Changes, Observer, SheetChange, SubscriptionId};
pub use presentation::{Phase, Transition, TransitionId};
pub use sheet::Sheet;
pub use state::{Orientation, SheetLayout, SheetState};

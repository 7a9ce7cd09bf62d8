// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The externally observed state of a sheet.

use understory_detent::{Detent, DetentSet, Geometry, Limits};

use crate::presentation::Phase;

/// Device orientation as reported by the host.
///
/// The sheet only cares that it changed; see
/// [`Sheet::set_orientation`](crate::Sheet::set_orientation).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Not known yet.
    #[default]
    Unknown,
    /// Upright portrait.
    Portrait,
    /// Upside-down portrait.
    PortraitUpsideDown,
    /// Landscape, rotated left.
    LandscapeLeft,
    /// Landscape, rotated right.
    LandscapeRight,
    /// Lying flat, screen up.
    FaceUp,
    /// Lying flat, screen down.
    FaceDown,
}

/// Frame the renderer should give the sheet.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SheetLayout {
    /// Height of the sheet's frame: the largest detent size.
    pub height: f64,
    /// Distance from the container's top edge to the sheet's top edge.
    pub offset_y: f64,
}

/// Observable sheet state.
///
/// Owned by a [`Sheet`](crate::Sheet) and mutated only by it.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetState {
    pub(crate) detents: DetentSet,
    pub(crate) default_detent: Detent,
    pub(crate) selected_detent: Detent,
    pub(crate) current_detent: Detent,
    pub(crate) translation: f64,
    pub(crate) limits: Limits,
    pub(crate) geometry: Geometry,
    pub(crate) orientation: Orientation,
    pub(crate) phase: Phase,
    pub(crate) dragging: bool,
}

impl SheetState {
    /// Detents the sheet can rest at.
    pub fn detents(&self) -> &DetentSet {
        &self.detents
    }

    /// Detent restored by [`Sheet::handle_tapped`](crate::Sheet::handle_tapped).
    pub fn default_detent(&self) -> Detent {
        self.default_detent
    }

    /// Committed target detent; changes on gesture end or external request.
    pub fn selected_detent(&self) -> Detent {
        self.selected_detent
    }

    /// Live detent; follows the finger during a drag.
    pub fn current_detent(&self) -> Detent {
        self.current_detent
    }

    /// Live translation: visible height of the sheet above the bottom edge.
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Smallest and largest detent sizes for the current geometry.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Geometry the sheet is laid out in.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Last reported device orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Mount phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the sheet is rendered, including during its exit.
    pub fn is_presented(&self) -> bool {
        self.phase != Phase::NotMounted
    }

    /// True while a drag run is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Frame for the renderer.
    pub fn layout(&self) -> SheetLayout {
        SheetLayout {
            height: self.limits.max,
            offset_y: self.geometry.size.height - self.translation,
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications for [`SheetState`].
//!
//! Every mutation of a sheet's state is announced to all subscribers,
//! synchronously, before the mutating call returns. One input produces at most
//! one notification, so observers never see intermediate states (for example a
//! committed detent with a stale translation).
//!
//! Observers receive shared references only and cannot call back into the
//! sheet while it is being mutated.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::presentation::Transition;
use crate::state::SheetState;

bitflags::bitflags! {
    /// Which parts of the state changed in a notification.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changes: u16 {
        /// [`SheetState::current_detent`] changed.
        const CURRENT_DETENT  = 1 << 0;
        /// [`SheetState::selected_detent`] changed.
        const SELECTED_DETENT = 1 << 1;
        /// [`SheetState::translation`] changed.
        const TRANSLATION     = 1 << 2;
        /// [`SheetState::phase`] changed.
        const PRESENTED       = 1 << 3;
        /// [`SheetState::limits`] changed.
        const LIMITS          = 1 << 4;
        /// [`SheetState::geometry`] changed.
        const GEOMETRY        = 1 << 5;
        /// [`SheetState::orientation`] changed.
        const ORIENTATION     = 1 << 6;
        /// A drag sample moved the sheet.
        const DRAG            = 1 << 7;
        /// The sheet finished its exit and was unmounted.
        const DISMISSED       = 1 << 8;
    }
}

/// A single notification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetChange {
    /// What changed.
    pub changes: Changes,
    /// Animation the renderer should run, if the translation change is animated.
    pub transition: Option<Transition>,
}

/// Handle returned by [`Sheet::subscribe`](crate::Sheet::subscribe).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked on every change.
pub type Observer = Box<dyn FnMut(&SheetState, &SheetChange)>;

#[derive(Default)]
pub(crate) struct Observers {
    next: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl core::fmt::Debug for Observers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Deliver `change` in subscription order. Empty change sets are dropped.
    pub(crate) fn notify(&mut self, state: &SheetState, change: &SheetChange) {
        if change.changes.is_empty() && change.transition.is_none() {
            return;
        }
        for (_, observer) in &mut self.entries {
            observer(state, change);
        }
    }
}

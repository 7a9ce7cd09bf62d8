// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Sheet`] controller.

use alloc::boxed::Box;
use core::time::Duration;

use understory_detent::{Detent, DetentSet, Geometry};

use crate::arbiter::{GestureArbiter, GestureOwner, ScrollProbe, should_scroll_begin};
use crate::config::{ConfigError, SheetConfig};
use crate::drag::{DragSample, DragTracker, DragUpdate};
use crate::observe::{Changes, Observers, SheetChange, SubscriptionId};
use crate::presentation::{Phase, Presenter, Settled, Transition, TransitionId};
use crate::state::{Orientation, SheetState};

/// A bottom sheet: state, gestures and presentation.
///
/// ## Usage
///
/// - Construct with [`Sheet::new`] from a detent set, the detent to show
///   first, the container geometry and a [`SheetConfig`].
/// - Subscribe a renderer with [`Sheet::subscribe`]. Each input produces at
///   most one notification; animate when it carries a [`Transition`].
/// - Forward drag-handle gestures to [`Sheet::drag_began`],
///   [`Sheet::drag_moved`] and [`Sheet::drag_ended`] (or
///   [`Sheet::drag_cancelled`]).
/// - Before the inner scroll view starts scrolling, ask
///   [`Sheet::scroll_began`]. When it returns `false`, forward the content
///   pan to the drag methods instead.
/// - Forward geometry, footer and orientation changes, and drive deadlines
///   with [`Sheet::tick`].
pub struct Sheet {
    config: SheetConfig,
    state: SheetState,
    tracker: DragTracker,
    arbiter: GestureArbiter,
    presenter: Presenter,
    observers: Observers,
}

impl core::fmt::Debug for Sheet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sheet")
            .field("state", &self.state)
            .field("owner", &self.arbiter.owner())
            .field("pending", &self.presenter.pending())
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

impl Sheet {
    /// Create a sheet resting at `initial`.
    ///
    /// `initial` is also the default detent restored by
    /// [`Sheet::handle_tapped`]. Passing [`Detent::NotPresented`] creates an
    /// unmounted sheet.
    pub fn new(
        detents: DetentSet,
        initial: Detent,
        geometry: Geometry,
        config: SheetConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if detents.is_empty() {
            return Err(ConfigError::NoDetents);
        }
        let limits = detents.limits(&geometry);
        let presenter = Presenter::new(initial, config.completion_hooks, config.unmount_delay);
        let state = SheetState {
            translation: initial.size(&geometry),
            limits,
            geometry,
            orientation: Orientation::Unknown,
            phase: presenter.phase(),
            detents,
            default_detent: initial,
            selected_detent: initial,
            current_detent: initial,
            dragging: false,
        };
        Ok(Self {
            tracker: DragTracker::new(config.bounce_damping),
            arbiter: GestureArbiter::new(),
            presenter,
            observers: Observers::default(),
            config,
            state,
        })
    }

    /// Current state.
    pub fn state(&self) -> &SheetState {
        &self.state
    }

    /// Configuration in use.
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Owner of the active touch sequence, if any.
    pub fn gesture_owner(&self) -> Option<GestureOwner> {
        self.arbiter.owner()
    }

    /// Identifier of the settle still waiting to finish, if any.
    pub fn pending_transition(&self) -> Option<TransitionId> {
        self.presenter.pending()
    }

    /// Register `observer` for every change notification.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&SheetState, &SheetChange) + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Call `f` once each time the sheet finishes its exit and unmounts.
    pub fn on_dismiss<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut() + 'static,
    {
        self.subscribe(move |_, change| {
            if change.changes.contains(Changes::DISMISSED) {
                f();
            }
        })
    }

    /// Call `f` with the live translation and detent for every drag sample.
    pub fn on_drag<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(f64, Detent) + 'static,
    {
        self.subscribe(move |state, change| {
            if change.changes.contains(Changes::DRAG) {
                f(state.translation(), state.current_detent());
            }
        })
    }

    /// Remove a subscription; returns `true` if it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    // --- gestures ---------------------------------------------------------

    /// The drag handle was touched at `time`.
    ///
    /// The handle always owns its touch sequence. A sheet that is exiting can
    /// be caught: the drag starts from the exit target, and its release
    /// settles like any other, mounting the sheet again unless it resolves to
    /// [`Detent::NotPresented`].
    pub fn drag_began(&mut self, time: Duration) {
        if !self.state.is_presented() {
            return;
        }
        self.arbiter.claim_sheet();
        self.tracker.begin(time, self.state.translation);
        self.state.dragging = true;
    }

    /// A drag moved.
    ///
    /// Returns `None` when the sample was not routed to the sheet: the sheet
    /// is unmounted, or the inner scroll view owns the sequence.
    pub fn drag_moved(&mut self, sample: DragSample) -> Option<DragUpdate> {
        if !self.state.is_presented() || !self.arbiter.routes_to_sheet() {
            return None;
        }
        let update = self
            .tracker
            .update(sample, self.state.translation, self.state.limits);
        let detent = self.state.detents.resolve_with(
            update.candidate,
            update.velocity,
            &self.state.geometry,
            self.config.flick_velocity,
        );
        log::trace!(
            "drag: candidate={} displayed={} velocity={} -> {detent:?}",
            update.candidate,
            update.displayed,
            update.velocity,
        );

        let mut changes = Changes::DRAG;
        if self.state.translation != update.displayed {
            self.state.translation = update.displayed;
            changes |= Changes::TRANSLATION;
        }
        if self.state.current_detent != detent {
            self.state.current_detent = detent;
            changes |= Changes::CURRENT_DETENT;
        }
        self.state.dragging = true;
        self.emit(changes, None);
        Some(update)
    }

    /// A drag ended; `sample` is the final position, if known.
    ///
    /// Settles the sheet and returns the committed detent, or `None` if the
    /// sequence belonged to the inner scroll view.
    pub fn drag_ended(&mut self, sample: Option<DragSample>, now: Duration) -> Option<Detent> {
        let owner = self.arbiter.release();
        if owner == Some(GestureOwner::InnerScroll) || !self.tracker.is_active() {
            self.tracker.reset();
            self.state.dragging = false;
            return None;
        }
        let velocity = self.tracker.end(sample);
        self.state.dragging = false;
        Some(self.magnetize(velocity, now))
    }

    /// The platform cancelled the drag. Treated like an end without a final
    /// sample.
    pub fn drag_cancelled(&mut self, now: Duration) -> Option<Detent> {
        self.drag_ended(None, now)
    }

    /// Whether the inner scroll view may begin with `probe`, given the live
    /// sheet state. Pure; does not record ownership.
    pub fn should_scroll_begin(&self, probe: ScrollProbe) -> bool {
        should_scroll_begin(probe, self.state.translation, self.state.limits.max)
    }

    /// The inner scroll view is attempting to recognize a pan.
    ///
    /// Records the owner of the sequence and returns `true` if the scroll
    /// view may proceed. On `false` the host should route the pan to
    /// [`Sheet::drag_moved`].
    pub fn scroll_began(&mut self, probe: ScrollProbe) -> bool {
        let owner = self
            .arbiter
            .arbitrate(probe, self.state.translation, self.state.limits.max);
        owner == GestureOwner::InnerScroll
    }

    /// The inner scroll view's sequence ended.
    pub fn scroll_ended(&mut self) {
        if self.arbiter.owner() == Some(GestureOwner::InnerScroll) {
            let _ = self.arbiter.release();
        }
    }

    // --- settling ---------------------------------------------------------

    /// Resolve the detent for the live translation and `velocity`, and settle
    /// there.
    ///
    /// Calling it again with the same inputs resolves the same detent and runs
    /// no second transition. Ends any drag run in progress.
    pub fn magnetize(&mut self, velocity: f64, now: Duration) -> Detent {
        let detent = self.state.detents.resolve_with(
            self.state.translation,
            velocity,
            &self.state.geometry,
            self.config.flick_velocity,
        );
        self.commit(detent, now, Changes::empty());
        detent
    }

    /// Request `detent` from outside, for example to show or hide the sheet.
    ///
    /// Any drag run in progress is abandoned. Requesting the already selected
    /// detent while resting at its size does nothing.
    pub fn set_selected_detent(&mut self, detent: Detent, now: Duration) {
        let size = detent.size(&self.state.geometry);
        if detent == self.state.selected_detent
            && size == self.state.translation
            && !self.state.dragging
        {
            return;
        }
        self.commit(detent, now, Changes::empty());
    }

    /// The drag handle was tapped: return to the default detent.
    pub fn handle_tapped(&mut self, now: Duration) {
        if self.state.selected_detent != self.state.default_detent {
            self.set_selected_detent(self.state.default_detent, now);
        }
    }

    /// The renderer finished transition `id`.
    ///
    /// Returns `true` if it was the pending settle.
    pub fn transition_finished(&mut self, id: TransitionId) -> bool {
        match self.presenter.complete(id) {
            Some(settled) => {
                self.apply_settled(settled);
                true
            }
            None => false,
        }
    }

    /// Advance time; fires the pending settle's deadline once it passes.
    pub fn tick(&mut self, now: Duration) {
        if let Some(settled) = self.presenter.tick(now) {
            self.apply_settled(settled);
        }
    }

    // --- environment ------------------------------------------------------

    /// The container geometry changed. Recomputes limits.
    ///
    /// The footer height is kept; use [`Sheet::set_footer_height`] to change it.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        let geometry = geometry.with_footer_height(self.state.geometry.footer_height);
        if geometry == self.state.geometry {
            return;
        }
        self.state.geometry = geometry;
        let changes = Changes::GEOMETRY | self.refresh_limits();
        self.emit(changes, None);
    }

    /// The footer's measured height changed. Recomputes limits.
    pub fn set_footer_height(&mut self, footer_height: f64) {
        if footer_height == self.state.geometry.footer_height {
            return;
        }
        self.state.geometry.footer_height = footer_height;
        let changes = Changes::GEOMETRY | self.refresh_limits();
        self.emit(changes, None);
    }

    /// The device orientation changed. Re-settles at the selected detent.
    pub fn set_orientation(&mut self, orientation: Orientation, now: Duration) {
        if orientation == self.state.orientation {
            return;
        }
        self.state.orientation = orientation;
        let detent = self.state.selected_detent;
        self.commit(detent, now, Changes::ORIENTATION);
    }

    // --- derived ----------------------------------------------------------

    /// False while resting at [`Detent::FullScreen`] with
    /// [`SheetConfig::hide_main_content_in_full_screen`] set.
    pub fn main_content_visible(&self) -> bool {
        !(self.config.hide_main_content_in_full_screen
            && self.state.current_detent == Detent::FullScreen)
    }

    /// Opacity of the background scrim: `0.5` at full container height,
    /// scaled linearly by translation. `0` when the scrim is disabled or the
    /// sheet is not presented.
    pub fn scrim_opacity(&self) -> f64 {
        let height = self.state.geometry.size.height;
        if !self.config.scrim || !self.state.is_presented() || height <= 0.0 {
            return 0.0;
        }
        0.5 * self.state.translation / height
    }

    // --- internals --------------------------------------------------------

    fn refresh_limits(&mut self) -> Changes {
        let limits = self.state.detents.limits(&self.state.geometry);
        if limits == self.state.limits {
            return Changes::empty();
        }
        self.state.limits = limits;
        Changes::LIMITS
    }

    /// Settle at `detent`: one atomic update of detents and translation, plus
    /// presentation bookkeeping.
    fn commit(&mut self, detent: Detent, now: Duration, mut changes: Changes) {
        let from = self.state.translation;
        let to = detent.size(&self.state.geometry);
        let animated = from != to;
        let settle = self.presenter.begin(detent, animated, now);
        // Every settle ends the drag run; later samples start a fresh one.
        self.tracker.reset();
        self.state.dragging = false;

        if self.state.current_detent != detent {
            self.state.current_detent = detent;
            changes |= Changes::CURRENT_DETENT;
        }
        if self.state.selected_detent != detent {
            self.state.selected_detent = detent;
            changes |= Changes::SELECTED_DETENT;
        }
        if animated {
            self.state.translation = to;
            changes |= Changes::TRANSLATION;
        }
        if settle.phase != self.state.phase {
            self.state.phase = settle.phase;
            changes |= Changes::PRESENTED;
        }
        if settle.previous == Phase::NotMounted && settle.phase == Phase::Mounted {
            log::debug!("sheet mounted at {detent:?}");
        }

        let transition = animated.then_some(Transition {
            id: settle.id,
            from,
            to,
            duration: self.config.settle_duration,
        });
        log::debug!(
            "sheet settling at {detent:?}: {from} -> {to} (transition {}, animated: {animated})",
            settle.id.get(),
        );
        self.emit(changes, transition);
    }

    fn apply_settled(&mut self, settled: Settled) {
        let phase = self.presenter.phase();
        if phase == self.state.phase {
            return;
        }
        self.state.phase = phase;
        let mut changes = Changes::PRESENTED;
        if settled.unmounted {
            log::debug!("sheet dismissed after transition {}", settled.id.get());
            self.tracker.reset();
            let _ = self.arbiter.release();
            self.state.dragging = false;
            changes |= Changes::DISMISSED;
        }
        self.emit(changes, None);
    }

    fn emit(&mut self, changes: Changes, transition: Option<Transition>) {
        let change = SheetChange {
            changes,
            transition,
        };
        self.observers.notify(&self.state, &change);
    }
}

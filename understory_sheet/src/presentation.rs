// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation lifecycle: mount, settle, exit, unmount.
//!
//! ## States
//!
//! `NotMounted → Mounted → Exiting → NotMounted`
//!
//! - Settling towards any presented detent mounts immediately.
//! - Settling towards [`Detent::NotPresented`] starts the exit.
//! - The exit completes when its settle finishes, and only then is the sheet
//!   unmounted.
//!
//! ## Finishing a settle
//!
//! Every settle gets a fresh [`TransitionId`]. It finishes either when the
//! host reports completion for that id, or at a fixed deadline. The deadline
//! is used when no completion will be reported: the settle was not animated,
//! or the host has no completion hooks. A deadline is a best-effort guess and
//! may fire before a slow animation ends.
//!
//! Only the latest settle is pending. Starting a new one supersedes the old:
//! its completion id and deadline are ignored from then on.

use core::time::Duration;

use understory_detent::Detent;

/// Identifier of a settle transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    /// Raw value, for logging and host bookkeeping.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// An animated translation change the renderer should perform.
///
/// Report its end with [`Sheet::transition_finished`](crate::Sheet::transition_finished)
/// when completion hooks are available.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Identifier to report on completion.
    pub id: TransitionId,
    /// Translation at the start of the animation.
    pub from: f64,
    /// Translation at the end of the animation.
    pub to: f64,
    /// Suggested duration.
    pub duration: Duration,
}

/// Mount state of a sheet.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Nothing is rendered.
    #[default]
    NotMounted,
    /// The sheet is rendered.
    Mounted,
    /// The sheet is animating out; still rendered.
    Exiting,
}

/// Outcome of beginning a settle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settle {
    /// Identifier of the new settle.
    pub id: TransitionId,
    /// Phase before the settle began.
    pub previous: Phase,
    /// Phase after the settle began.
    pub phase: Phase,
}

/// A settle that finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    /// Identifier of the finished settle.
    pub id: TransitionId,
    /// Detent the settle targeted.
    pub detent: Detent,
    /// True if finishing unmounted the sheet.
    pub unmounted: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Pending {
    id: TransitionId,
    detent: Detent,
    deadline: Option<Duration>,
}

/// Presentation state machine.
#[derive(Clone, Debug)]
pub struct Presenter {
    phase: Phase,
    pending: Option<Pending>,
    next_id: u64,
    completion_hooks: bool,
    unmount_delay: Duration,
}

impl Presenter {
    /// Create a presenter for a sheet starting at `initial`.
    pub fn new(initial: Detent, completion_hooks: bool, unmount_delay: Duration) -> Self {
        Self {
            phase: if initial.is_presented() {
                Phase::Mounted
            } else {
                Phase::NotMounted
            },
            pending: None,
            next_id: 1,
            completion_hooks,
            unmount_delay,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while anything is rendered.
    pub fn is_presented(&self) -> bool {
        self.phase != Phase::NotMounted
    }

    /// Identifier of the pending settle, if any.
    pub fn pending(&self) -> Option<TransitionId> {
        self.pending.map(|p| p.id)
    }

    /// Deadline of the pending settle, if it waits on one.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.and_then(|p| p.deadline)
    }

    /// Begin settling towards `detent`, superseding any pending settle.
    ///
    /// `animated` tells whether the renderer will run a transition for it.
    pub fn begin(&mut self, detent: Detent, animated: bool, now: Duration) -> Settle {
        let previous = self.phase;
        self.phase = match (previous, detent.is_presented()) {
            (_, true) => Phase::Mounted,
            (Phase::NotMounted, false) => Phase::NotMounted,
            (Phase::Mounted | Phase::Exiting, false) => Phase::Exiting,
        };

        let id = TransitionId(self.next_id);
        self.next_id += 1;
        let deadline = if animated && self.completion_hooks {
            None
        } else {
            Some(now + self.unmount_delay)
        };
        if let Some(old) = self.pending.replace(Pending {
            id,
            detent,
            deadline,
        }) {
            log::trace!("settle {} superseded by {}", old.id.0, id.0);
        }

        Settle {
            id,
            previous,
            phase: self.phase,
        }
    }

    /// Report that transition `id` finished.
    ///
    /// Returns `None` for stale or unknown ids.
    pub fn complete(&mut self, id: TransitionId) -> Option<Settled> {
        match self.pending {
            Some(p) if p.id == id => {
                self.pending = None;
                Some(self.finish(p))
            }
            _ => {
                log::debug!("ignoring completion of stale transition {}", id.0);
                None
            }
        }
    }

    /// Fire the pending deadline if it has passed.
    pub fn tick(&mut self, now: Duration) -> Option<Settled> {
        let p = self.pending?;
        let deadline = p.deadline?;
        if now < deadline {
            return None;
        }
        self.pending = None;
        Some(self.finish(p))
    }

    fn finish(&mut self, p: Pending) -> Settled {
        let unmounted = !p.detent.is_presented() && self.phase != Phase::NotMounted;
        self.phase = if p.detent.is_presented() {
            Phase::Mounted
        } else {
            Phase::NotMounted
        };
        Settled {
            id: p.id,
            detent: p.detent,
            unmounted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn initial_phase_follows_detent() {
        let p = Presenter::new(Detent::Medium, true, ms(500));
        assert_eq!(p.phase(), Phase::Mounted);
        let p = Presenter::new(Detent::NotPresented, true, ms(500));
        assert_eq!(p.phase(), Phase::NotMounted);
        assert!(!p.is_presented());
        // Hidden has no height but stays mounted.
        let p = Presenter::new(Detent::Hidden, true, ms(500));
        assert!(p.is_presented());
    }

    #[test]
    fn mounts_immediately() {
        let mut p = Presenter::new(Detent::NotPresented, true, ms(500));
        let s = p.begin(Detent::Medium, true, ms(0));
        assert_eq!(s.previous, Phase::NotMounted);
        assert_eq!(s.phase, Phase::Mounted);
        let done = p.complete(s.id).unwrap();
        assert!(!done.unmounted);
        assert_eq!(p.phase(), Phase::Mounted);
    }

    #[test]
    fn exit_waits_for_completion() {
        let mut p = Presenter::new(Detent::Medium, true, ms(500));
        let s = p.begin(Detent::NotPresented, true, ms(0));
        assert_eq!(s.phase, Phase::Exiting);
        assert!(p.is_presented());
        // Hooks available: no deadline, ticking does nothing.
        assert_eq!(p.deadline(), None);
        assert_eq!(p.tick(ms(10_000)), None);
        let done = p.complete(s.id).unwrap();
        assert!(done.unmounted);
        assert_eq!(p.phase(), Phase::NotMounted);
        assert_eq!(p.pending(), None);
    }

    #[test]
    fn exit_without_hooks_uses_deadline() {
        let mut p = Presenter::new(Detent::Medium, false, ms(500));
        let _ = p.begin(Detent::NotPresented, true, ms(1000));
        assert_eq!(p.deadline(), Some(ms(1500)));
        assert_eq!(p.tick(ms(1499)), None);
        assert_eq!(p.phase(), Phase::Exiting);
        let done = p.tick(ms(1500)).unwrap();
        assert!(done.unmounted);
        // Fire-once.
        assert_eq!(p.tick(ms(2000)), None);
    }

    #[test]
    fn unanimated_settle_uses_deadline_even_with_hooks() {
        let mut p = Presenter::new(Detent::Hidden, true, ms(500));
        let _ = p.begin(Detent::NotPresented, false, ms(0));
        assert_eq!(p.deadline(), Some(ms(500)));
        assert!(p.tick(ms(500)).unwrap().unmounted);
    }

    #[test]
    fn superseded_settle_is_ignored() {
        let mut p = Presenter::new(Detent::Medium, false, ms(500));
        let exit = p.begin(Detent::NotPresented, true, ms(0));
        // Re-presented before the exit deadline fires.
        let back = p.begin(Detent::Large, true, ms(100));
        assert_eq!(back.previous, Phase::Exiting);
        assert_eq!(back.phase, Phase::Mounted);
        assert_eq!(p.complete(exit.id), None);
        // The old deadline (500ms) no longer applies; the new one is 600ms.
        assert_eq!(p.tick(ms(550)), None);
        let done = p.tick(ms(600)).unwrap();
        assert_eq!(done.id, back.id);
        assert!(!done.unmounted);
        assert_eq!(p.phase(), Phase::Mounted);
    }

    #[test]
    fn dismissing_unmounted_sheet_does_not_report_unmount() {
        let mut p = Presenter::new(Detent::NotPresented, false, ms(500));
        let s = p.begin(Detent::NotPresented, false, ms(0));
        assert_eq!(s.phase, Phase::NotMounted);
        assert!(!p.tick(ms(500)).unwrap().unmounted);
    }

    #[test]
    fn ids_are_fresh() {
        let mut p = Presenter::new(Detent::Medium, true, ms(500));
        let a = p.begin(Detent::Large, true, ms(0)).id;
        let b = p.begin(Detent::Large, true, ms(0)).id;
        assert!(b > a);
        assert_eq!(p.pending(), Some(b));
    }
}

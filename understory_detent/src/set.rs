// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detent sets: limits and snap resolution.
//!
//! ## Resolution
//!
//! [`DetentSet::resolve`] maps a raw translation and release velocity to one
//! member of the set:
//!
//! 1. Members are sorted ascending by resolved size. An empty set resolves to
//!    [`Detent::NotPresented`].
//! 2. Below the smallest size the smallest detent wins; above the largest size
//!    the largest wins. Velocity is not consulted for either bound.
//! 3. Otherwise the first consecutive pair `(lower, upper)` whose closed range
//!    contains the translation decides. A flick (`|velocity| > threshold`)
//!    snaps towards its direction, positive meaning `upper`. A slow release
//!    snaps to `upper` only when strictly past the midpoint.
//!
//! Velocity is in points per millisecond, positive when the sheet grows.

use alloc::vec::Vec;

use crate::detent::Detent;
use crate::geometry::{Geometry, Limits};

/// Release speed above which a drag counts as a flick, in points per millisecond.
pub const DEFAULT_FLICK_VELOCITY: f64 = 1.8;

/// A set of unique detents.
///
/// Insertion order does not matter; all queries order members by resolved size.
/// Duplicates (by value) are dropped on insert. Two distinct members may still
/// resolve to the same size; they are then ordered by insertion.
#[derive(Clone, Debug, Default)]
pub struct DetentSet {
    members: Vec<Detent>,
}

impl DetentSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Insert a detent; returns `false` if an equal detent was already present.
    pub fn insert(&mut self, detent: Detent) -> bool {
        if self.members.contains(&detent) {
            return false;
        }
        self.members.push(detent);
        true
    }

    /// Remove a detent; returns `true` if it was present.
    pub fn remove(&mut self, detent: &Detent) -> bool {
        match self.members.iter().position(|d| d == detent) {
            Some(i) => {
                self.members.remove(i);
                true
            }
            None => false,
        }
    }

    /// True if the set contains `detent`.
    pub fn contains(&self, detent: &Detent) -> bool {
        self.members.contains(detent)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Detent> + '_ {
        self.members.iter()
    }

    /// Members paired with their resolved sizes, ascending by size.
    pub fn sorted(&self, geometry: &Geometry) -> Vec<(Detent, f64)> {
        let mut out: Vec<(Detent, f64)> = self
            .members
            .iter()
            .map(|d| (*d, d.size(geometry)))
            .collect();
        // Stable, so equal sizes keep insertion order.
        out.sort_by(|a, b| a.1.total_cmp(&b.1));
        out
    }

    /// Smallest and largest resolved sizes; `(0, 0)` when empty.
    pub fn limits(&self, geometry: &Geometry) -> Limits {
        let mut it = self.members.iter().map(|d| d.size(geometry));
        let Some(first) = it.next() else {
            return Limits::ZERO;
        };
        let (min, max) = it.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
        Limits { min, max }
    }

    /// Resolve with the [default flick threshold](DEFAULT_FLICK_VELOCITY).
    pub fn resolve(&self, translation: f64, velocity: f64, geometry: &Geometry) -> Detent {
        self.resolve_with(translation, velocity, geometry, DEFAULT_FLICK_VELOCITY)
    }

    /// Resolve `translation` and release `velocity` to a member of the set.
    ///
    /// Below the smallest or above the largest size, the nearest bound wins.
    /// Between two neighbors, a release faster than `flick_velocity` snaps in
    /// its direction, otherwise the closer neighbor wins (ties go down).
    /// An empty set yields [`Detent::NotPresented`].
    pub fn resolve_with(
        &self,
        translation: f64,
        velocity: f64,
        geometry: &Geometry,
        flick_velocity: f64,
    ) -> Detent {
        let sorted = self.sorted(geometry);
        let (Some(&(min_detent, min_size)), Some(&(max_detent, max_size))) =
            (sorted.first(), sorted.last())
        else {
            return Detent::NotPresented;
        };

        if translation < min_size {
            return min_detent;
        }
        if translation > max_size {
            return max_detent;
        }

        for pair in sorted.windows(2) {
            let (lower, lower_size) = pair[0];
            let (upper, upper_size) = pair[1];
            if !(lower_size..=upper_size).contains(&translation) {
                continue;
            }
            if velocity > flick_velocity || velocity < -flick_velocity {
                return if velocity > 0.0 { upper } else { lower };
            }
            let middle = lower_size + (upper_size - lower_size) / 2.0;
            return if translation > middle { upper } else { lower };
        }

        // Single member sets, or a NaN translation.
        min_detent
    }
}

impl PartialEq for DetentSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.members.iter().all(|d| other.contains(d))
    }
}

impl Eq for DetentSet {}

impl FromIterator<Detent> for DetentSet {
    fn from_iter<I: IntoIterator<Item = Detent>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Detent> for DetentSet {
    fn extend<I: IntoIterator<Item = Detent>>(&mut self, iter: I) {
        for d in iter {
            self.insert(d);
        }
    }
}

impl<const N: usize> From<[Detent; N]> for DetentSet {
    fn from(detents: [Detent; N]) -> Self {
        detents.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a DetentSet {
    type Item = &'a Detent;
    type IntoIter = core::slice::Iter<'a, Detent>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    // 800pt tall container, no insets: Medium = 400, Large = 800.
    fn geometry() -> Geometry {
        Geometry::from_size(Size::new(400.0, 800.0))
    }

    fn pair() -> DetentSet {
        DetentSet::from([Detent::Height(400.0), Detent::Height(200.0)])
    }

    #[test]
    fn duplicates_are_dropped() {
        let mut set = DetentSet::new();
        assert!(set.insert(Detent::Medium));
        assert!(!set.insert(Detent::Medium));
        assert!(set.insert(Detent::Fraction(0.5)));
        assert!(!set.insert(Detent::Fraction(0.5)));
        assert_eq!(set.len(), 2);
        assert!(set.remove(&Detent::Medium));
        assert!(!set.remove(&Detent::Medium));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = DetentSet::from([Detent::Medium, Detent::Large]);
        let b = DetentSet::from([Detent::Large, Detent::Medium, Detent::Large]);
        assert_eq!(a, b);
        assert_ne!(a, DetentSet::from([Detent::Medium]));
    }

    #[test]
    fn limits_are_ordered() {
        let g = geometry();
        let set = DetentSet::from([Detent::Large, Detent::Height(100.0), Detent::Medium]);
        let l = set.limits(&g);
        assert_eq!(l, Limits { min: 100.0, max: 800.0 });
        assert!(l.min <= l.max);
    }

    #[test]
    fn empty_set_has_zero_limits_and_fallback() {
        let g = geometry();
        let set = DetentSet::new();
        assert_eq!(set.limits(&g), Limits::ZERO);
        assert_eq!(set.resolve(300.0, 0.0, &g), Detent::NotPresented);
    }

    #[test]
    fn below_min_and_above_max_are_hard_bounds() {
        let g = geometry();
        let set = pair();
        assert_eq!(set.resolve(-50.0, 0.0, &g), Detent::Height(200.0));
        // Velocity never overrides the floor or the ceiling.
        assert_eq!(set.resolve(150.0, 5.0, &g), Detent::Height(200.0));
        assert_eq!(set.resolve(450.0, -5.0, &g), Detent::Height(400.0));
    }

    #[test]
    fn flick_overrides_midpoint() {
        let g = geometry();
        let set = pair();
        assert_eq!(set.resolve(250.0, 2.0, &g), Detent::Height(400.0));
        assert_eq!(set.resolve(350.0, -2.0, &g), Detent::Height(200.0));
    }

    #[test]
    fn slow_release_snaps_to_midpoint_side() {
        let g = geometry();
        let set = pair();
        assert_eq!(set.resolve(250.0, 0.5, &g), Detent::Height(200.0));
        assert_eq!(set.resolve(350.0, -0.5, &g), Detent::Height(400.0));
        // Exactly on the midpoint snaps down.
        assert_eq!(set.resolve(300.0, 0.0, &g), Detent::Height(200.0));
    }

    #[test]
    fn threshold_is_exclusive() {
        let g = geometry();
        let set = pair();
        assert_eq!(set.resolve(250.0, 1.8, &g), Detent::Height(200.0));
        assert_eq!(set.resolve_with(250.0, 1.8, &g, 1.0), Detent::Height(400.0));
    }

    #[test]
    fn bounds_of_a_pair_are_inclusive() {
        let g = geometry();
        let set = pair();
        assert_eq!(set.resolve(200.0, 0.0, &g), Detent::Height(200.0));
        assert_eq!(set.resolve(400.0, 0.0, &g), Detent::Height(400.0));
        // A downward flick resting on the upper bound goes to the lower detent.
        assert_eq!(set.resolve(400.0, -3.0, &g), Detent::Height(200.0));
    }

    #[test]
    fn ordering_uses_resolved_size() {
        let g = geometry();
        // Declared out of order and mixing cases.
        let set = DetentSet::from([Detent::Large, Detent::Hidden, Detent::Medium]);
        let order: Vec<Detent> = set.sorted(&g).into_iter().map(|(d, _)| d).collect();
        assert_eq!(order, [Detent::Hidden, Detent::Medium, Detent::Large]);
        assert_eq!(set.resolve(450.0, 0.0, &g), Detent::Medium);
        assert_eq!(set.resolve(650.0, 0.0, &g), Detent::Large);
        assert_eq!(set.resolve(150.0, 0.0, &g), Detent::Hidden);
    }

    #[test]
    fn single_member_set() {
        let g = geometry();
        let set = DetentSet::from([Detent::Medium]);
        assert_eq!(set.resolve(400.0, 10.0, &g), Detent::Medium);
        assert_eq!(set.resolve(0.0, 0.0, &g), Detent::Medium);
    }

    #[test]
    fn nan_translation_falls_back_to_smallest() {
        let g = geometry();
        assert_eq!(pair().resolve(f64::NAN, 0.0, &g), Detent::Height(200.0));
    }

    #[test]
    fn resolution_is_pure() {
        let g = geometry();
        let set = DetentSet::from([Detent::Hidden, Detent::Medium, Detent::Large]);
        for t in [-10.0, 0.0, 100.0, 399.0, 401.0, 700.0, 900.0] {
            for v in [-3.0, -1.0, 0.0, 1.0, 3.0] {
                assert_eq!(set.resolve(t, v, &g), set.resolve(t, v, &g));
                let l = set.limits(&g);
                let d = set.resolve(t, v, &g);
                assert!(l.contains(d.size(&g)), "resolved size must lie within limits");
            }
        }
    }
}

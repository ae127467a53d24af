//! The match forest produced by a matching run.
//!
//! Matches live in an arena owned by `Comparison` and are addressed by
//! `MatchId`. A match sits either in the root set or in exactly one parent's
//! submatch list; the forest keeps no parent pointers.

mod invariants;
mod json;
mod printer;


use std::fmt::Debug;

use indexmap::IndexSet;

use idmatch_core::Side;

use crate::diagnostics::Diagnostics;

pub use json::{ComparisonView, MatchView};
pub use printer::ComparisonPrinter;

/// Handle to a match inside a `Comparison`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct MatchId(u32);

impl MatchId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One logical entity across up to three sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<E> {
    left: Option<E>,
    right: Option<E>,
    origin: Option<E>,
    submatches: IndexSet<MatchId>,
}

impl<E: Copy> Match<E> {
    fn new() -> Self {
        Self {
            left: None,
            right: None,
            origin: None,
            submatches: IndexSet::new(),
        }
    }

    pub fn get(&self, side: Side) -> Option<E> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Origin => self.origin,
        }
    }

    pub fn left(&self) -> Option<E> {
        self.left
    }

    pub fn right(&self) -> Option<E> {
        self.right
    }

    pub fn origin(&self) -> Option<E> {
        self.origin
    }

    /// Filled slots in left, right, origin order.
    pub fn sides(&self) -> impl Iterator<Item = (Side, E)> + '_ {
        Side::ALL
            .into_iter()
            .filter_map(move |side| self.get(side).map(|e| (side, e)))
    }

    pub fn submatches(
        &self,
    ) -> impl DoubleEndedIterator<Item = MatchId> + ExactSizeIterator + '_ {
        self.submatches.iter().copied()
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<E> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Origin => &mut self.origin,
        }
    }
}

/// Caller-owned result of one or more matching runs.
#[derive(Clone, Debug)]
pub struct Comparison<E> {
    matches: Vec<Match<E>>,
    roots: IndexSet<MatchId>,
    diagnostics: Diagnostics,
}

impl<E> Default for Comparison<E> {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            roots: IndexSet::new(),
            diagnostics: Diagnostics::new(),
        }
    }
}

impl<E: Copy + Eq> Comparison<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a match with a single slot set. It is not attached anywhere.
    pub fn create_match(&mut self, side: Side, element: E) -> MatchId {
        let id = MatchId(self.matches.len() as u32);
        let mut m = Match::new();
        *m.slot_mut(side) = Some(element);
        self.matches.push(m);
        id
    }

    /// Returns `false` if `id` already was a root.
    pub fn add_root(&mut self, id: MatchId) -> bool {
        self.ensure_match(id);
        self.roots.insert(id)
    }

    /// Returns `false` if `id` was not a root. Order of remaining roots is kept.
    pub fn remove_root(&mut self, id: MatchId) -> bool {
        self.roots.shift_remove(&id)
    }

    /// Returns `false` if `child` already was a submatch of `parent`.
    pub fn add_submatch(&mut self, parent: MatchId, child: MatchId) -> bool {
        self.ensure_match(child);
        self.match_mut(parent).submatches.insert(child)
    }

    /// Overwrite one slot, returning the element it held before.
    pub fn set_side(&mut self, id: MatchId, side: Side, element: E) -> Option<E> {
        self.match_mut(id).slot_mut(side).replace(element)
    }

    pub fn roots(
        &self,
    ) -> impl DoubleEndedIterator<Item = MatchId> + ExactSizeIterator + '_ {
        self.roots.iter().copied()
    }

    pub fn is_root(&self, id: MatchId) -> bool {
        self.roots.contains(&id)
    }

    pub fn get(&self, id: MatchId) -> &Match<E> {
        self.ensure_match(id)
    }

    pub fn submatches(
        &self,
        id: MatchId,
    ) -> impl DoubleEndedIterator<Item = MatchId> + ExactSizeIterator + '_ {
        self.ensure_match(id).submatches()
    }

    /// Every match reachable from the roots, in pre-order.
    pub fn all_matches(&self) -> Vec<MatchId> {
        let mut out = Vec::with_capacity(self.matches.len());
        let mut stack: Vec<MatchId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.get(id).submatches.iter().rev().copied());
        }
        out
    }

    /// The reachable match holding `element` in its `side` slot.
    pub fn match_of(&self, side: Side, element: E) -> Option<MatchId> {
        self.all_matches()
            .into_iter()
            .find(|&id| self.get(id).get(side) == Some(element))
    }

    /// Whether `target` is `root` or one of its descendants.
    pub fn contains_in_subtree(&self, root: MatchId, target: MatchId) -> bool {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            stack.extend(self.get(id).submatches.iter().copied());
        }
        false
    }

    /// Number of allocated matches, attached or not.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}

impl<E: Copy + Eq + Debug> Comparison<E> {
    pub fn printer(&self) -> ComparisonPrinter<'_, E> {
        ComparisonPrinter::new(self)
    }

    /// Outline with `Debug` labels.
    pub fn dump(&self) -> String {
        self.printer().render()
    }
}

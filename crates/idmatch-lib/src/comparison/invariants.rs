//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Comparison, Match, MatchId};

impl<E> Comparison<E> {
    pub(crate) fn ensure_match(&self, id: MatchId) -> &Match<E> {
        self.matches.get(id.index()).unwrap_or_else(|| {
            panic!(
                "Comparison: match {} not found \
                 (ids must come from the comparison that is queried)",
                id.as_u32()
            )
        })
    }

    pub(crate) fn match_mut(&mut self, id: MatchId) -> &mut Match<E> {
        let len = self.matches.len();
        self.matches.get_mut(id.index()).unwrap_or_else(|| {
            panic!("Comparison: match {} not found (arena holds {len})", id.as_u32())
        })
    }
}

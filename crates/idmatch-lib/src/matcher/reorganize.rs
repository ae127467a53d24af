//! Post-pass that nests root matches whose parent only became known on
//! another side.

use std::collections::HashSet;

use idmatch_core::{Model, Side};

use crate::comparison::MatchId;

use super::computation::MatchComputation;

impl<M: Model> MatchComputation<'_, M> {
    /// Move each root of this run under the first parent found via its left,
    /// right, then origin element. Returns the number of moved matches.
    pub(super) fn reorganize(&mut self) -> usize {
        let snapshot: Vec<MatchId> = self.roots.iter().copied().collect();
        let mut moved = HashSet::new();

        for id in snapshot {
            let Some(parent) = self.better_parent(id) else {
                continue;
            };
            self.comparison.add_submatch(parent, id);
            moved.insert(id);
            tracing::trace!(
                id = id.as_u32(),
                parent = parent.as_u32(),
                "match_reparented"
            );
        }

        self.roots.retain(|id| !moved.contains(id));
        moved.len()
    }

    /// Candidates inside the match's own subtree are skipped, otherwise the
    /// move would detach the subtree from the forest.
    fn better_parent(&self, id: MatchId) -> Option<MatchId> {
        let m = self.comparison.get(id);
        Side::ALL.into_iter().find_map(|side| {
            let element = m.get(side)?;
            let parent_element = self.parent.parent_of(self.model, element)?;
            let parent = *self.processed[side].get(&parent_element)?;
            (!self.comparison.contains_in_subtree(id, parent)).then_some(parent)
        })
    }
}

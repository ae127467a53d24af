//! One identifier matching run.
//!
//! All scratch state (identifier table, processed maps, leftovers) lives in
//! `MatchComputation` and is dropped when the run ends.

use std::collections::HashMap;

use indexmap::IndexSet;
use tracing::{Level, trace};

use idmatch_core::{Model, PerSide, Side};

use crate::comparison::{Comparison, MatchId};

use super::identifier::IdentifierFunction;
use super::parent::ParentFunction;
use super::report::report_duplicate;
use super::table::IdentifierTable;

pub(crate) struct MatchComputation<'a, M: Model> {
    pub(super) model: &'a M,
    pub(super) identifier: &'a dyn IdentifierFunction<M>,
    pub(super) parent: &'a dyn ParentFunction<M>,
    pub(super) comparison: &'a mut Comparison<M::Element>,
    table: IdentifierTable,
    /// Element → match, per side. Only identified elements are recorded.
    pub(super) processed: PerSide<HashMap<M::Element, MatchId>>,
    unidentified: PerSide<Vec<M::Element>>,
    /// Root-level matches created by this run, in creation order.
    pub(super) roots: IndexSet<MatchId>,
}

impl<'a, M: Model> MatchComputation<'a, M> {
    pub(crate) fn new(
        model: &'a M,
        identifier: &'a dyn IdentifierFunction<M>,
        parent: &'a dyn ParentFunction<M>,
        comparison: &'a mut Comparison<M::Element>,
    ) -> Self {
        Self {
            model,
            identifier,
            parent,
            comparison,
            table: IdentifierTable::new(),
            processed: PerSide::default(),
            unidentified: PerSide::default(),
            roots: IndexSet::new(),
        }
    }

    /// Build, nest, and reorganize matches for all identified elements.
    ///
    /// New roots are appended to the comparison. Elements without an
    /// identifier are returned per side, in input order.
    pub(crate) fn run(
        mut self,
        left: &mut dyn Iterator<Item = M::Element>,
        right: &mut dyn Iterator<Item = M::Element>,
        origin: &mut dyn Iterator<Item = M::Element>,
    ) -> PerSide<Vec<M::Element>> {
        let span = tracing::span!(Level::DEBUG, "idmatch.identifier");
        let _guard = span.enter();

        self.compute_left(left);
        self.compute_side(Side::Right, right);
        self.compute_side(Side::Origin, origin);
        let moved = self.reorganize();

        tracing::debug!(
            left = self.processed.left.len(),
            right = self.processed.right.len(),
            origin = self.processed.origin.len(),
            identifiers = self.table.len(),
            roots = self.roots.len(),
            moved,
            unidentified = self.unidentified.iter().map(|(_, v)| v.len()).sum::<usize>(),
            "identifier_matching_done"
        );

        for id in self.roots {
            self.comparison.add_root(id);
        }
        self.unidentified
    }

    /// Every identified left element gets a fresh match.
    fn compute_left(&mut self, elements: &mut dyn Iterator<Item = M::Element>) {
        for element in elements {
            let Some(identifier) = self.identifier.identify(self.model, element) else {
                self.unidentified.left.push(element);
                continue;
            };

            let id = self.comparison.create_match(Side::Left, element);
            trace!(side = %Side::Left, ?element, %identifier, "match_created");
            self.attach(Side::Left, element, id);

            let proxy = self.model.is_proxy(element);
            if self.table.insert(proxy, identifier.clone(), id).is_some() {
                self.report(Side::Left, element, &identifier);
            }
            self.processed.left.insert(element, id);
        }
    }

    /// Right and origin elements join the match registered under their
    /// identifier, or start a new one.
    fn compute_side(&mut self, side: Side, elements: &mut dyn Iterator<Item = M::Element>) {
        for element in elements {
            let Some(identifier) = self.identifier.identify(self.model, element) else {
                self.unidentified[side].push(element);
                continue;
            };

            let proxy = self.model.is_proxy(element);
            if let Some(id) = self.table.get(proxy, &identifier) {
                if self.comparison.get(id).get(side).is_some() {
                    self.report(side, element, &identifier);
                }
                self.comparison.set_side(id, side, element);
                trace!(%side, ?element, %identifier, "match_joined");
                self.processed[side].insert(element, id);
                continue;
            }

            let id = self.comparison.create_match(side, element);
            trace!(%side, ?element, %identifier, "match_created");
            self.attach(side, element, id);
            self.processed[side].insert(element, id);
            self.table.insert(proxy, identifier, id);
        }
    }

    /// Nest `id` under the match of `element`'s parent on the same side, or
    /// make it a root.
    fn attach(&mut self, side: Side, element: M::Element, id: MatchId) {
        let parent = self
            .parent
            .parent_of(self.model, element)
            .and_then(|p| self.processed[side].get(&p).copied());
        match parent {
            Some(parent) => {
                self.comparison.add_submatch(parent, id);
            }
            None => {
                self.roots.insert(id);
            }
        }
    }

    fn report(&mut self, side: Side, element: M::Element, identifier: &str) {
        report_duplicate(
            self.comparison.diagnostics_mut(),
            self.model,
            side,
            element,
            identifier,
        );
    }
}

//! Identifier-based matching.
//!
//! `IdentifierMatcher` runs three single-pass stages (left, right, origin),
//! then a reorganization pass, then hands elements without an identifier to
//! the delegate (or turns each into a singleton match).

mod computation;
mod identifier;
mod parent;
mod reorganize;
mod report;
mod table;

#[cfg(test)]
mod identifier_tests;
#[cfg(test)]
mod reorganize_tests;

use idmatch_core::{Model, PerSide};

use crate::comparison::Comparison;

use computation::MatchComputation;

pub use identifier::{AttributeIdentifier, DefaultIdentifier, IdentifierFunction};
pub use parent::{Containment, ParentFunction};
pub use report::resource_location;

/// Builds matches between left, right, and origin elements.
///
/// Each input must yield elements in containment order (parents before
/// children) and is consumed exactly once. Matches are appended to
/// `comparison`, diagnostics go to `comparison.diagnostics_mut()`.
pub trait Matcher<M: Model> {
    fn create_matches(
        &self,
        model: &M,
        comparison: &mut Comparison<M::Element>,
        left: &mut dyn Iterator<Item = M::Element>,
        right: &mut dyn Iterator<Item = M::Element>,
        origin: &mut dyn Iterator<Item = M::Element>,
    );
}

/// Matches elements that compute equal identifiers.
pub struct IdentifierMatcher<M: Model> {
    identifier: Box<dyn IdentifierFunction<M>>,
    parent: Box<dyn ParentFunction<M>>,
    delegate: Option<Box<dyn Matcher<M>>>,
}

impl<M: Model> IdentifierMatcher<M> {
    /// Default identifier policy, native containment, no delegate.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> IdentifierMatcherBuilder<M> {
        IdentifierMatcherBuilder {
            identifier: Box::new(DefaultIdentifier),
            parent: Box::new(Containment),
            delegate: None,
        }
    }

    /// Identifier of `element` under this matcher's policy.
    pub fn identify(&self, model: &M, element: M::Element) -> Option<String> {
        self.identifier.identify(model, element)
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    fn delegate_leftovers(
        &self,
        model: &M,
        comparison: &mut Comparison<M::Element>,
        leftovers: PerSide<Vec<M::Element>>,
    ) {
        if leftovers.iter().all(|(_, elements)| elements.is_empty()) {
            return;
        }

        if let Some(delegate) = &self.delegate {
            tracing::debug!(
                left = leftovers.left.len(),
                right = leftovers.right.len(),
                origin = leftovers.origin.len(),
                "delegating_unidentified"
            );
            let PerSide {
                left,
                right,
                origin,
            } = leftovers;
            delegate.create_matches(
                model,
                comparison,
                &mut left.into_iter(),
                &mut right.into_iter(),
                &mut origin.into_iter(),
            );
            return;
        }

        for (side, elements) in leftovers {
            for element in elements {
                let id = comparison.create_match(side, element);
                comparison.add_root(id);
            }
        }
    }
}

impl<M: Model> Default for IdentifierMatcher<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> Matcher<M> for IdentifierMatcher<M> {
    fn create_matches(
        &self,
        model: &M,
        comparison: &mut Comparison<M::Element>,
        left: &mut dyn Iterator<Item = M::Element>,
        right: &mut dyn Iterator<Item = M::Element>,
        origin: &mut dyn Iterator<Item = M::Element>,
    ) {
        let leftovers =
            MatchComputation::new(model, &*self.identifier, &*self.parent, comparison)
                .run(left, right, origin);
        self.delegate_leftovers(model, comparison, leftovers);
    }
}

#[must_use = "builder does nothing until .build()"]
pub struct IdentifierMatcherBuilder<M: Model> {
    identifier: Box<dyn IdentifierFunction<M>>,
    parent: Box<dyn ParentFunction<M>>,
    delegate: Option<Box<dyn Matcher<M>>>,
}

impl<M: Model> IdentifierMatcherBuilder<M> {
    pub fn identifier(mut self, identifier: impl IdentifierFunction<M> + 'static) -> Self {
        self.identifier = Box::new(identifier);
        self
    }

    pub fn parent(mut self, parent: impl ParentFunction<M> + 'static) -> Self {
        self.parent = Box::new(parent);
        self
    }

    /// Matcher for elements without an identifier.
    pub fn delegate(mut self, delegate: impl Matcher<M> + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    pub fn build(self) -> IdentifierMatcher<M> {
        IdentifierMatcher {
            identifier: self.identifier,
            parent: self.parent,
            delegate: self.delegate,
        }
    }
}

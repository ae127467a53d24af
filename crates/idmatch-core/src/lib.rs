#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core element model for identifier-based tree matching.
//!
//! Two layers:
//! - **Model trait** (`Model`): the capability set the matcher needs from
//!   any hierarchical element model (container, proxy target, identifiers)
//! - **JSON model** (`ResourceSet`): a concrete, serde-backed implementation
//!   used by the CLI and by tests
//!
//! The matcher never owns or mutates elements. It only holds `Copy` handles
//! (`Model::Element`) and asks the model about them.

use std::fmt;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

pub mod colors;
mod invariants;
mod resource;
mod uri;

#[cfg(test)]
mod resource_tests;

pub use colors::Colors;
pub use resource::{
    ElementId, ModelError, RawElement, RawResource, RawType, ResourceId, ResourceSet,
    parse_resource,
};
pub use uri::Uri;

// ============================================================================
// Sides
// ============================================================================

/// One of the three versions taking part in a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Origin,
}

impl Side {
    /// All sides in processing order.
    pub const ALL: [Side; 3] = [Side::Left, Side::Right, Side::Origin];

    /// Lowercase name, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Origin => "origin",
        }
    }

    /// Single-letter tag used by compact dumps.
    pub fn letter(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
            Side::Origin => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per side, indexable by `Side`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerSide<T> {
    pub left: T,
    pub right: T,
    pub origin: T,
}

impl<T> PerSide<T> {
    pub fn new(left: T, right: T, origin: T) -> Self {
        Self {
            left,
            right,
            origin,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [
            (Side::Left, &self.left),
            (Side::Right, &self.right),
            (Side::Origin, &self.origin),
        ]
        .into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(Side, T) -> U) -> PerSide<U> {
        PerSide {
            left: f(Side::Left, self.left),
            right: f(Side::Right, self.right),
            origin: f(Side::Origin, self.origin),
        }
    }
}

impl<T> IntoIterator for PerSide<T> {
    type Item = (Side, T);
    type IntoIter = std::array::IntoIter<(Side, T), 3>;

    fn into_iter(self) -> Self::IntoIter {
        [
            (Side::Left, self.left),
            (Side::Right, self.right),
            (Side::Origin, self.origin),
        ]
        .into_iter()
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Origin => &self.origin,
        }
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Origin => &mut self.origin,
        }
    }
}

// ============================================================================
// Model Trait
// ============================================================================

/// Capabilities the matcher needs from an element model.
///
/// Elements are opaque `Copy` handles. Two handles are the same element iff
/// they compare equal, so handles must be unique across every side that takes
/// part in one comparison.
pub trait Model {
    type Element: Copy + Eq + Hash + fmt::Debug;

    /// Native structural container of `element`, `None` for roots.
    fn container(&self, element: Self::Element) -> Option<Self::Element>;

    /// Target of an unresolved reference. `Some` iff `element` is a proxy.
    fn proxy_uri(&self, element: Self::Element) -> Option<&Uri>;

    fn is_proxy(&self, element: Self::Element) -> bool {
        self.proxy_uri(element).is_some()
    }

    /// Identifier held by the owning resource's explicit ID registry.
    ///
    /// Returns `None` when the resource keeps no registry, or when it has no
    /// entry for `element`.
    fn registered_id(&self, element: Self::Element) -> Option<&str>;

    /// Value of the attribute the element's type designates as its ID.
    fn id_attribute(&self, element: Self::Element) -> Option<&str>;

    /// Value of an arbitrary attribute.
    fn attribute(&self, element: Self::Element, name: &str) -> Option<&str>;

    /// Location of the resource owning `element`.
    fn resource_uri(&self, element: Self::Element) -> Option<&Uri>;
}

impl<T: Model + ?Sized> Model for &T {
    type Element = T::Element;

    fn container(&self, element: Self::Element) -> Option<Self::Element> {
        (*self).container(element)
    }
    fn proxy_uri(&self, element: Self::Element) -> Option<&Uri> {
        (*self).proxy_uri(element)
    }
    fn is_proxy(&self, element: Self::Element) -> bool {
        (*self).is_proxy(element)
    }
    fn registered_id(&self, element: Self::Element) -> Option<&str> {
        (*self).registered_id(element)
    }
    fn id_attribute(&self, element: Self::Element) -> Option<&str> {
        (*self).id_attribute(element)
    }
    fn attribute(&self, element: Self::Element, name: &str) -> Option<&str> {
        (*self).attribute(element, name)
    }
    fn resource_uri(&self, element: Self::Element) -> Option<&Uri> {
        (*self).resource_uri(element)
    }
}

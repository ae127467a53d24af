//! Serializable snapshot of a match forest.
//!
//! Elements are opaque handles, so the caller supplies their labels.

use crate::Result;
use crate::diagnostics::Diagnostics;

use super::{Comparison, MatchId};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submatches: Vec<MatchView>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ComparisonView<'c> {
    pub matches: Vec<MatchView>,
    pub diagnostics: &'c Diagnostics,
}

impl<E: Copy + Eq> Comparison<E> {
    pub fn view(&self, label: impl Fn(E) -> String) -> ComparisonView<'_> {
        ComparisonView {
            matches: self.roots().map(|id| self.view_match(id, &label)).collect(),
            diagnostics: self.diagnostics(),
        }
    }

    pub fn to_json(&self, label: impl Fn(E) -> String, pretty: bool) -> Result<String> {
        let view = self.view(label);
        let json = if pretty {
            serde_json::to_string_pretty(&view)?
        } else {
            serde_json::to_string(&view)?
        };
        Ok(json)
    }

    fn view_match(&self, id: MatchId, label: &impl Fn(E) -> String) -> MatchView {
        let m = self.get(id);
        MatchView {
            left: m.left().map(label),
            right: m.right().map(label),
            origin: m.origin().map(label),
            submatches: m
                .submatches()
                .map(|child| self.view_match(child, label))
                .collect(),
        }
    }
}

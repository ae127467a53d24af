//! idmatch: identifier-based correspondence for three-way model comparison.
//!
//! # Example
//!
//! ```
//! use idmatch_core::{ElementId, ResourceSet};
//! use idmatch_lib::{Comparison, IdentifierMatcher, Matcher};
//!
//! let doc = r#"{
//!     "types": { "Class": { "id": "name" } },
//!     "contents": [{ "type": "Class", "attrs": { "name": "Person" } }]
//! }"#;
//!
//! let mut set = ResourceSet::new();
//! let left = set.load(doc).expect("valid resource");
//! let right = set.load(doc).expect("valid resource");
//!
//! let mut comparison = Comparison::new();
//! IdentifierMatcher::new().create_matches(
//!     &set,
//!     &mut comparison,
//!     &mut set.elements(left),
//!     &mut set.elements(right),
//!     &mut std::iter::empty::<ElementId>(),
//! );
//! println!("{}", comparison.printer().labels(|e| set.describe(e)).render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod comparison;
pub mod diagnostics;
pub mod matcher;

pub use comparison::{Comparison, ComparisonPrinter, Match, MatchId};
pub use diagnostics::{DiagnosticKind, DiagnosticMessage, Diagnostics, DiagnosticsPrinter, Severity};
pub use matcher::{
    AttributeIdentifier, Containment, DefaultIdentifier, IdentifierFunction, IdentifierMatcher,
    IdentifierMatcherBuilder, Matcher, ParentFunction,
};

/// Errors at the edges of matching (loading models, serializing results).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] idmatch_core::ModelError),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

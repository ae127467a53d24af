//! Shared logic for the match and ids commands.

use std::path::Path;

use idmatch_core::{ResourceId, ResourceSet};
use idmatch_lib::{AttributeIdentifier, IdentifierMatcher};
use tracing_subscriber::EnvFilter;

use super::model_loader::load_model;

/// Install the stderr logger.
///
/// `--log-level` wins over `RUST_LOG`; with neither, only warnings are shown.
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|e| {
            eprintln!("error: invalid log filter '{}': {}", level, e);
            std::process::exit(1);
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load a model file or exit with an error message.
pub fn load_or_exit(set: &mut ResourceSet, path: &Path) -> ResourceId {
    load_model(set, path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

pub fn build_matcher(id_attribute: Option<&str>) -> IdentifierMatcher<ResourceSet> {
    let builder = IdentifierMatcher::builder();
    match id_attribute {
        Some(name) => builder.identifier(AttributeIdentifier::new(name)).build(),
        None => builder.build(),
    }
}

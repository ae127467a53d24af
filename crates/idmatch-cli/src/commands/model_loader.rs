use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use idmatch_core::{ModelError, ResourceId, ResourceSet, Uri, parse_resource};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to load '{}': {source}", .path.display())]
    Model {
        path: PathBuf,
        source: ModelError,
    },
}

/// Read a model file (`-` for stdin) into `set`.
pub fn load_model(set: &mut ResourceSet, path: &Path) -> Result<ResourceId, LoadError> {
    let text = read_text(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    load_model_text(set, path, &text)
}

/// Add model JSON to `set`. A resource without a `uri` is located at `path`.
pub fn load_model_text(
    set: &mut ResourceSet,
    path: &Path,
    text: &str,
) -> Result<ResourceId, LoadError> {
    let model_err = |source: ModelError| LoadError::Model {
        path: path.to_owned(),
        source,
    };

    let mut raw = parse_resource(text).map_err(|e| model_err(e.into()))?;
    if raw.uri.is_none() && path.as_os_str() != "-" {
        raw.uri = Some(Uri::parse(path.to_string_lossy()));
    }
    let id = set.add(raw).map_err(model_err)?;

    tracing::debug!(path = %path.display(), elements = set.elements(id).count(), "model_loaded");
    Ok(id)
}

fn read_text(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    fs::read_to_string(path)
}

use idmatch_core::{Model, Side};

use crate::diagnostics::{DiagnosticKind, Diagnostics, IDENTIFIER_SOURCE};

/// Record that `element` collided with an earlier element of the same side.
pub(crate) fn report_duplicate<M: Model>(
    diagnostics: &mut Diagnostics,
    model: &M,
    side: Side,
    element: M::Element,
    identifier: &str,
) {
    let location = resource_location(model, element);
    let detail = match &location {
        Some(location) => format!("`{identifier}` on {side} side in resource `{location}`"),
        None => format!("`{identifier}` on {side} side"),
    };

    tracing::debug!(%side, identifier, location = ?location, "duplicate_identifier");

    let mut builder = diagnostics
        .report(DiagnosticKind::DuplicateIdentifier, IDENTIFIER_SOURCE)
        .message(detail)
        .side(side)
        .identifier(identifier);
    if let Some(location) = location {
        builder = builder.location(location);
    }
    builder.emit();
}

/// Platform-relative path for `platform:` resources, the full URI otherwise.
pub fn resource_location<M: Model>(model: &M, element: M::Element) -> Option<String> {
    let uri = model.resource_uri(element)?;
    if uri.is_platform() {
        uri.to_platform_string(true)
    } else {
        Some(uri.to_string())
    }
}

//! Diagnostics collected while matching.
//!
//! The matcher only ever appends. Reading, filtering, and rendering are left
//! to the caller.

mod message;
mod printer;


use idmatch_core::Side;

pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

/// Source tag of diagnostics produced by the identifier matcher.
pub const IDENTIFIER_SOURCE: &str = "idmatch.identifier";

#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind, attributed to `source`.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, source: &str) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, source),
        }
    }

    /// Create a free-form error diagnostic.
    pub fn error(&mut self, source: &str, msg: impl Into<String>) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::new(DiagnosticKind::Custom, source, msg),
        }
    }

    /// Create a free-form warning diagnostic.
    pub fn warning(&mut self, source: &str, msg: impl Into<String>) -> DiagnosticBuilder<'_> {
        let mut message = DiagnosticMessage::new(DiagnosticKind::Custom, source, msg);
        message.severity = Severity::Warning;
        DiagnosticBuilder {
            diagnostics: self,
            message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[DiagnosticMessage] {
        &self.messages
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn filter_by_kind(&self, kind: DiagnosticKind) -> Vec<&DiagnosticMessage> {
        self.messages.iter().filter(|d| d.kind == kind).collect()
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }

    pub fn render_colored(&self, colored: bool) -> String {
        self.printer().colored(colored).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.message.severity = severity;
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.message.side = Some(side);
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.message.identifier = Some(identifier.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.message.location = Some(location.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

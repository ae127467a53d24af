use idmatch_core::Side;

/// Diagnostic kinds emitted while building a match forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Two elements of the same side computed the same identifier.
    DuplicateIdentifier,

    /// Free-form message from a collaborator (e.g. a delegate matcher).
    Custom,
}

impl DiagnosticKind {
    /// Default severity for this kind. Can be overridden per message.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DuplicateIdentifier => Severity::Warning,
            Self::Custom => Severity::Error,
        }
    }

    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::DuplicateIdentifier => "duplicate identifier",
            Self::Custom => "matching failed",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateIdentifier => "duplicate identifier {}".to_string(),
            Self::Custom => "{}".to_string(),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) severity: Severity,
    /// Component that produced the message.
    pub(crate) source: String,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) identifier: Option<String>,
    /// Resource location, when the element belongs to a located resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, source: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            source: source.to_owned(),
            message: message.into(),
            side: None,
            identifier: None,
            location: None,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, source: &str) -> Self {
        Self::new(kind, source, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.source, self.message)
    }
}

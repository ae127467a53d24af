//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use idmatch_core::Colors;

use super::Diagnostics;
use super::message::Severity;

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
    show_source: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
            show_source: true,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Include the `[source]` tag after the severity.
    pub fn show_source(mut self, value: bool) -> Self {
        self.show_source = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = Colors::new(self.colored);

        for diag in self.diagnostics {
            let level = match diag.severity() {
                Severity::Error => c.red,
                Severity::Warning => c.yellow,
            };
            write!(w, "{level}{}{}", diag.severity(), c.reset)?;
            if self.show_source {
                write!(w, "{}[{}]{}", c.dim, diag.source(), c.reset)?;
            }
            writeln!(w, ": {}", diag.message())?;
        }

        Ok(())
    }
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }
}

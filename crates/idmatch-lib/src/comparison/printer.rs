use std::fmt::{self, Debug, Write};

use idmatch_core::{Colors, Side};

use super::{Comparison, MatchId};

type Label<'c, E> = Box<dyn Fn(E) -> String + 'c>;

/// Indented outline of a match forest, one line per match:
///
/// ```text
/// L: Package#_p | R: Package#_p | O: -
///   L: Class#_c | R: - | O: -
/// ```
pub struct ComparisonPrinter<'c, E> {
    comparison: &'c Comparison<E>,
    label: Label<'c, E>,
    colored: bool,
    hide_empty: bool,
}

impl<'c, E: Copy + Eq + Debug + 'c> ComparisonPrinter<'c, E> {
    pub fn new(comparison: &'c Comparison<E>) -> Self {
        Self {
            comparison,
            label: Box::new(|e| format!("{e:?}")),
            colored: false,
            hide_empty: false,
        }
    }

    /// How elements are rendered. Defaults to their `Debug` form.
    pub fn labels(mut self, label: impl Fn(E) -> String + 'c) -> Self {
        self.label = Box::new(label);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Leave out empty slots instead of printing `-`.
    pub fn hide_empty(mut self, value: bool) -> Self {
        self.hide_empty = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        let mut stack: Vec<(MatchId, usize)> =
            self.comparison.roots().rev().map(|id| (id, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            self.format_match(id, depth, w)?;
            stack.extend(
                self.comparison
                    .submatches(id)
                    .rev()
                    .map(|child| (child, depth + 1)),
            );
        }
        Ok(())
    }

    fn format_match(&self, id: MatchId, depth: usize, w: &mut impl Write) -> fmt::Result {
        let c = Colors::new(self.colored);
        let m = self.comparison.get(id);

        write!(w, "{:indent$}", "", indent = depth * 2)?;
        let mut first = true;
        for side in Side::ALL {
            let element = m.get(side);
            if element.is_none() && self.hide_empty {
                continue;
            }
            if !first {
                write!(w, " {}|{} ", c.dim, c.reset)?;
            }
            first = false;

            write!(w, "{}{}{}: ", c.side(side), side.letter(), c.reset)?;
            match element {
                Some(e) => write!(w, "{}", (self.label)(e))?,
                None => write!(w, "{}-{}", c.dim, c.reset)?,
            }
        }
        writeln!(w)
    }
}

use std::fmt;

/// Parsed custom-logic formula, e.g. `1 AND (2 OR 10)`.
///
/// Leaves are criterion positions. Author parentheses survive as
/// [`Formula::Group`] so rendering reproduces the author's grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    Placeholder(u32),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Group(Box<Formula>),
}

impl Formula {
    #[must_use]
    pub fn and(self, other: Formula) -> Formula {
        Formula::And(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn or(self, other: Formula) -> Formula {
        Formula::Or(Box::new(self), Box::new(other))
    }

    /// Wrap in explicit parentheses.
    #[must_use]
    pub fn group(self) -> Formula {
        Formula::Group(Box::new(self))
    }

    /// Positions referenced by the formula, in left-to-right order and
    /// including repeats.
    #[must_use]
    pub fn placeholders(&self) -> Vec<u32> {
        let mut out = Vec::new();
        self.collect_placeholders(&mut out);
        out
    }

    fn collect_placeholders(&self, out: &mut Vec<u32>) {
        match self {
            Formula::Placeholder(n) => out.push(*n),
            Formula::And(a, b) | Formula::Or(a, b) => {
                a.collect_placeholders(out);
                b.collect_placeholders(out);
            }
            Formula::Group(inner) => inner.collect_placeholders(out),
        }
    }

    /// Render as an evaluator expression, writing each leaf with `leaf`.
    pub(crate) fn render(&self, out: &mut String, leaf: &impl Fn(&mut String, u32)) {
        match self {
            Formula::Placeholder(n) => leaf(out, *n),
            Formula::And(a, b) => {
                a.render(out, leaf);
                out.push_str(" && ");
                b.render(out, leaf);
            }
            Formula::Or(a, b) => {
                a.render(out, leaf);
                out.push_str(" || ");
                b.render(out, leaf);
            }
            Formula::Group(inner) => {
                out.push('(');
                inner.render(out, leaf);
                out.push(')');
            }
        }
    }
}

/// Renders in the authoring notation (`AND`/`OR` and bare numerals).
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Placeholder(n) => write!(f, "{n}"),
            Formula::And(a, b) => write!(f, "{a} AND {b}"),
            Formula::Or(a, b) => write!(f, "{a} OR {b}"),
            Formula::Group(inner) => write!(f, "({inner})"),
        }
    }
}

#[must_use]
pub fn placeholder(position: u32) -> Formula {
    Formula::Placeholder(position)
}

use std::fmt;

/// A custom-logic formula that does not match the `AND`/`OR` grammar.
///
/// Raised for an empty formula, a connective missing its operand (`1 AND`),
/// an unclosed or stray parenthesis, an unknown word such as `NOT` or `XOR`,
/// a criterion numeral too large for `u32`, and trailing input after a
/// complete expression. The message carries winnow's rendering of the input
/// with the failing offset marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

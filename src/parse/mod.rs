mod error;
mod grammar;

pub use error::ParseError;

use crate::Formula;

/// Parse a custom-logic formula such as `"1 AND (2 OR 10)"` into a
/// [`Formula`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a well-formed formula.
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    use winnow::Parser;
    grammar::parse_formula
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}

use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, delimited, preceded, repeat, terminated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::Formula;

// -- Whitespace --------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

// -- Leaves ------------------------------------------------------------------

fn placeholder(input: &mut &str) -> ModalResult<Formula> {
    digit1
        .try_map(|s: &str| s.parse::<u32>())
        .map(Formula::Placeholder)
        .parse_next(input)
}

// -- Expressions (precedence: OR < AND < primary) ----------------------------

fn primary(input: &mut &str) -> ModalResult<Formula> {
    ws.parse_next(input)?;
    alt((
        delimited('(', formula, (ws, cut_err(')'))).map(Formula::group),
        placeholder,
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "criterion number or '('",
    )))
    .parse_next(input)
}

fn and_expr(input: &mut &str) -> ModalResult<Formula> {
    let first = primary(input)?;
    let rest: Vec<Formula> =
        repeat(0.., preceded((ws, alt(("AND", "and"))), cut_err(primary))).parse_next(input)?;
    Ok(rest.into_iter().fold(first, Formula::and))
}

fn or_expr(input: &mut &str) -> ModalResult<Formula> {
    let first = and_expr(input)?;
    let rest: Vec<Formula> =
        repeat(0.., preceded((ws, alt(("OR", "or"))), cut_err(and_expr))).parse_next(input)?;
    Ok(rest.into_iter().fold(first, Formula::or))
}

fn formula(input: &mut &str) -> ModalResult<Formula> {
    ws.parse_next(input)?;
    or_expr(input)
}

// -- Top-level parser --------------------------------------------------------

pub fn parse_formula(input: &mut &str) -> ModalResult<Formula> {
    terminated(formula, ws).parse_next(input)
}

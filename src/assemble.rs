use std::collections::{BTreeMap, BTreeSet};

use crate::{CombinationMode, Formula, RuleError};

/// Combine per-criterion predicates, keyed by criterion position, into one
/// boolean expression.
///
/// Uniform modes join every predicate in descending position order with
/// `" && "` or `" || "`. Custom mode parses `formula` and replaces each
/// numeral with the predicate of the criterion at that position.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use audience_formula::{assemble, CombinationMode};
///
/// let predicates = BTreeMap::from([
///     (1, "A".to_owned()),
///     (2, "B".to_owned()),
///     (10, "J".to_owned()),
/// ]);
/// let expr = assemble(CombinationMode::Custom, Some("1 AND (2 OR 10)"), &predicates).unwrap();
/// assert_eq!(expr, "A && (B || J)");
/// ```
///
/// # Errors
///
/// Returns [`RuleError::NoCriteria`] when `predicates` is empty. In custom
/// mode, also [`RuleError::MissingFormula`], [`RuleError::FormulaSyntax`] or
/// [`RuleError::DuplicatePlaceholder`]. A criterion position missing from the
/// formula, or a formula numeral with no criterion, is
/// [`RuleError::PlaceholderNotFound`].
pub fn assemble(
    mode: CombinationMode,
    formula: Option<&str>,
    predicates: &BTreeMap<u32, String>,
) -> Result<String, RuleError> {
    if predicates.is_empty() {
        return Err(RuleError::NoCriteria);
    }

    if let Some(joiner) = mode.joiner() {
        let parts: Vec<&str> = predicates.values().rev().map(String::as_str).collect();
        return Ok(parts.join(joiner));
    }

    let source = formula
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or(RuleError::MissingFormula)?;
    let parsed = crate::parse::parse(source)?;
    substitute(&parsed, source, predicates)
}

fn substitute(
    formula: &Formula,
    source: &str,
    predicates: &BTreeMap<u32, String>,
) -> Result<String, RuleError> {
    let mut referenced = BTreeSet::new();
    for position in formula.placeholders() {
        if !referenced.insert(position) {
            return Err(RuleError::DuplicatePlaceholder { position });
        }
    }

    // Highest position first, the order the criteria are substituted in.
    if let Some(&position) = predicates.keys().rev().find(|p| !referenced.contains(*p)) {
        return Err(RuleError::PlaceholderNotFound {
            position,
            formula: source.to_owned(),
        });
    }
    if let Some(&position) = referenced.iter().find(|p| !predicates.contains_key(*p)) {
        return Err(RuleError::PlaceholderNotFound {
            position,
            formula: source.to_owned(),
        });
    }

    let capacity = predicates.values().map(String::len).sum::<usize>() + source.len() * 2;
    let mut out = String::with_capacity(capacity);
    formula.render(&mut out, &|out: &mut String, position| {
        if let Some(predicate) = predicates.get(&position) {
            out.push_str(predicate);
        }
    });
    Ok(out)
}

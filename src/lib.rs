//! Translate declarative audience rules into boolean expressions for a
//! runtime rule evaluator.
//!
//! A [`Rule`] names a set of [`Criterion`] values and how they combine: all
//! must match, any may match, or an author-written formula over criterion
//! numbers such as `1 AND (2 OR 10)`. Each criterion becomes a predicate like
//! `User.Department == 'Sales'`, and the predicates are assembled into one
//! expression per rule. Field-based criteria also record the entity fields
//! they read in a [`FieldRegistry`] shared by the whole run.

mod assemble;
mod error;
pub mod parse;
mod predicate;
mod translate;
mod types;

pub use assemble::assemble;
pub use error::TranslateError;
pub use types::{
    CombinationMode, Criterion, CriterionKind, CriterionValue, FieldRegistry, FieldSnapshot,
    Formula, Operator, PermissionKind, QuotePolicy, Rule, RuleError, TranslateOptions,
    TranslatedRule, Translation, Translator, map_operator, placeholder,
};

/// Render a criterion as a predicate with default [`TranslateOptions`].
///
/// # Errors
///
/// See [`Translator::build_predicate()`].
pub fn build_predicate(
    criterion: &Criterion,
    registry: &mut FieldRegistry,
) -> Result<String, RuleError> {
    predicate::build(criterion, &TranslateOptions::default(), registry)
}

use super::criterion::Criterion;
use super::error::RuleError;
use super::field_registry::{FieldRegistry, FieldSnapshot};
use super::options::TranslateOptions;
use super::rule::{Rule, TranslatedRule};
use crate::TranslateError;

/// Translates audience rules into evaluator expressions.
///
/// # Example
///
/// ```
/// use audience_formula::{Criterion, Operator, Rule, Translator};
///
/// let rule = Rule::custom(
///     "Sales_EMEA",
///     "1 AND (2 OR 3)",
///     vec![
///         Criterion::field_based(1, Operator::Equal, "User", "Department", "Sales"),
///         Criterion::field_based(2, Operator::Equal, "User", "Country", "DE"),
///         Criterion::field_based(3, Operator::Equal, "User", "Country", "FR"),
///     ],
/// );
///
/// let out = Translator::default().translate_all([&rule]).unwrap();
/// assert_eq!(
///     out.rules()[0].expression(),
///     "User.Department == 'Sales' && (User.Country == 'DE' || User.Country == 'FR')"
/// );
/// assert_eq!(out.fields().fields("User").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    #[must_use]
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Render a single criterion as a predicate, registering its field when
    /// it is field-based.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if the operator, kind, permission kind or
    /// payload is not translatable.
    pub fn build_predicate(
        &self,
        criterion: &Criterion,
        registry: &mut FieldRegistry,
    ) -> Result<String, RuleError> {
        crate::predicate::build(criterion, &self.options, registry)
    }

    /// Translate one rule, adding the fields it reads to `registry`.
    ///
    /// On failure `registry` is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] naming the rule and the validation failure.
    pub fn translate(
        &self,
        rule: &Rule,
        registry: &mut FieldRegistry,
    ) -> Result<TranslatedRule, TranslateError> {
        crate::translate::translate(rule, &self.options, registry)
    }

    /// Translate a batch of rules over one shared field registry.
    ///
    /// The run stops at the first failing rule and returns nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] for the first rule that fails.
    pub fn translate_all<'a>(
        &self,
        rules: impl IntoIterator<Item = &'a Rule>,
    ) -> Result<Translation, TranslateError> {
        crate::translate::translate_all(rules, &self.options)
    }
}

/// Output of a complete run: rules in input order plus the fields they read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    rules: Vec<TranslatedRule>,
    fields: FieldSnapshot,
}

impl Translation {
    pub(crate) fn new(rules: Vec<TranslatedRule>, fields: FieldSnapshot) -> Self {
        Self { rules, fields }
    }

    #[must_use]
    pub fn rules(&self) -> &[TranslatedRule] {
        &self.rules
    }

    #[must_use]
    pub fn fields(&self) -> &FieldSnapshot {
        &self.fields
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<TranslatedRule>, FieldSnapshot) {
        (self.rules, self.fields)
    }
}

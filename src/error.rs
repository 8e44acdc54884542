use thiserror::Error;

use crate::RuleError;

/// Failure of a translation run, naming the rule that stopped it.
///
/// Returned by [`Translator::translate()`](crate::Translator::translate) and
/// [`Translator::translate_all()`](crate::Translator::translate_all).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("rule '{rule}': {source}")]
    Rule {
        rule: String,
        #[source]
        source: RuleError,
    },
}

impl TranslateError {
    pub(crate) fn in_rule(rule: &str, source: RuleError) -> Self {
        TranslateError::Rule {
            rule: rule.to_owned(),
            source,
        }
    }

    /// Name of the rule that failed.
    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            TranslateError::Rule { rule, .. } => rule,
        }
    }

    /// The underlying validation failure.
    #[must_use]
    pub fn rule_error(&self) -> &RuleError {
        match self {
            TranslateError::Rule { source, .. } => source,
        }
    }
}

/// What to do with a literal containing a single quote.
///
/// The evaluator reads `\'` inside a quoted literal as a quote and rejects any
/// other backslash escape, so a backslash can never be emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuotePolicy {
    /// Emit `'` as `\'`.
    #[default]
    Escape,
    /// Fail the translation.
    Reject,
}

/// Knobs for a [`Translator`](crate::Translator).
///
/// # Example
///
/// ```
/// use audience_formula::{QuotePolicy, TranslateOptions, Translator};
///
/// let translator = Translator::new(
///     TranslateOptions::new()
///         .quote_policy(QuotePolicy::Reject)
///         .field_marker("$"),
/// );
/// assert_eq!(translator.options().quote_policy, QuotePolicy::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TranslateOptions {
    pub quote_policy: QuotePolicy,
    /// Marker the storage format puts in front of qualified field references,
    /// e.g. the `$` of `$User.Department`.
    pub field_marker: String,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            quote_policy: QuotePolicy::default(),
            field_marker: "$".to_owned(),
        }
    }
}

impl TranslateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn quote_policy(mut self, policy: QuotePolicy) -> Self {
        self.quote_policy = policy;
        self
    }

    #[must_use]
    pub fn field_marker(mut self, marker: &str) -> Self {
        self.field_marker = marker.to_owned();
        self
    }
}

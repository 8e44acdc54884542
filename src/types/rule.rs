use super::criterion::Criterion;
use super::operator::CombinationMode;

/// A named audience rule: criteria plus the way they combine.
///
/// `formula_filter_type` keeps its storage spelling (`"AllCriteriaMatch"`,
/// `"AnyCriterionMatches"`, `"CustomLogicMatches"`). `formula` is only read in
/// custom mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Rule {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub criteria: Vec<Criterion>,
    pub formula_filter_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub formula: Option<String>,
}

impl Rule {
    /// Rule that matches when every criterion matches.
    #[must_use]
    pub fn all_match(name: &str, criteria: Vec<Criterion>) -> Self {
        Self::with_mode(name, CombinationMode::AllMatch, criteria, None)
    }

    /// Rule that matches when any criterion matches.
    #[must_use]
    pub fn any_match(name: &str, criteria: Vec<Criterion>) -> Self {
        Self::with_mode(name, CombinationMode::AnyMatch, criteria, None)
    }

    /// Rule combining criteria with an author-written formula such as
    /// `"1 AND (2 OR 3)"`.
    #[must_use]
    pub fn custom(name: &str, formula: &str, criteria: Vec<Criterion>) -> Self {
        Self::with_mode(
            name,
            CombinationMode::Custom,
            criteria,
            Some(formula.to_owned()),
        )
    }

    fn with_mode(
        name: &str,
        mode: CombinationMode,
        criteria: Vec<Criterion>,
        formula: Option<String>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            criteria,
            formula_filter_type: mode.as_str().to_owned(),
            formula,
        }
    }
}

/// The translator's output for one rule. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslatedRule {
    name: String,
    expression: String,
}

impl TranslatedRule {
    pub(crate) fn new(name: String, expression: String) -> Self {
        Self { name, expression }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The boolean expression the rule translates to.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

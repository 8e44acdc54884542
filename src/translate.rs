use std::collections::BTreeMap;

use crate::{
    CombinationMode, FieldRegistry, Rule, RuleError, TranslateError, TranslateOptions,
    TranslatedRule, Translation,
};

pub(crate) fn translate(
    rule: &Rule,
    options: &TranslateOptions,
    registry: &mut FieldRegistry,
) -> Result<TranslatedRule, TranslateError> {
    // Fields land in a scratch registry so a failing rule contributes nothing.
    let mut scratch = FieldRegistry::new();
    let expression = translate_inner(rule, options, &mut scratch)
        .map_err(|e| TranslateError::in_rule(&rule.name, e))?;
    registry.merge(scratch);

    tracing::debug!(rule = %rule.name, %expression, "translated rule");
    Ok(TranslatedRule::new(rule.name.clone(), expression))
}

fn translate_inner(
    rule: &Rule,
    options: &TranslateOptions,
    registry: &mut FieldRegistry,
) -> Result<String, RuleError> {
    let mode = rule
        .formula_filter_type
        .parse::<CombinationMode>()
        .map_err(|mode| RuleError::UnknownCombinationMode { mode })?;

    let mut predicates = BTreeMap::new();
    for criterion in &rule.criteria {
        let predicate = crate::predicate::build(criterion, options, registry)?;
        if predicates.insert(criterion.position, predicate).is_some() {
            return Err(RuleError::DuplicatePosition {
                position: criterion.position,
            });
        }
    }

    crate::assemble::assemble(mode, rule.formula.as_deref(), &predicates)
}

pub(crate) fn translate_all<'a>(
    rules: impl IntoIterator<Item = &'a Rule>,
    options: &TranslateOptions,
) -> Result<Translation, TranslateError> {
    let mut registry = FieldRegistry::new();
    let mut translated = Vec::new();
    for rule in rules {
        translated.push(translate(rule, options, &mut registry)?);
    }

    let fields = registry.snapshot();
    tracing::info!(
        rules = translated.len(),
        fields = registry.len(),
        "translation run complete"
    );
    Ok(Translation::new(translated, fields))
}

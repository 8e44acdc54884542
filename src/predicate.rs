use crate::types::{
    map_operator, Criterion, CriterionKind, FieldRegistry, PermissionKind, QuotePolicy, RuleError,
    TranslateOptions,
};

/// Render one criterion as a predicate, registering the field it reads when
/// it is field-based.
pub(crate) fn build(
    criterion: &Criterion,
    options: &TranslateOptions,
    registry: &mut FieldRegistry,
) -> Result<String, RuleError> {
    let position = criterion.position;
    let symbol = map_operator(position, &criterion.operator)?;
    let kind = criterion
        .kind
        .parse::<CriterionKind>()
        .map_err(|kind| RuleError::UnknownCriterionKind { position, kind })?;
    let value = &criterion.value;

    let predicate = match kind {
        CriterionKind::AudienceReference => {
            let name = required(position, value.audience_name.as_deref(), "audienceDeveloperName")?;
            format!("Audience {symbol} {}", quote(position, name, options)?)
        }
        CriterionKind::FieldBased => {
            let entity_type = required(position, value.entity_type.as_deref(), "entityType")?;
            let entity_field = required(position, value.entity_field.as_deref(), "entityField")?;
            let field = qualify(entity_type, entity_field, &options.field_marker);
            let literal = quote(position, value.field_value.as_deref().unwrap_or(""), options)?;
            registry.register(entity_type, &field);
            format!("{field} {symbol} {literal}")
        }
        CriterionKind::Permission => {
            let raw_kind = required(position, value.permission_type.as_deref(), "permissionType")?;
            let PermissionKind::Custom = raw_kind.parse::<PermissionKind>().map_err(|kind| {
                RuleError::UnsupportedPermissionKind { position, kind }
            })?;
            let name = required(position, value.permission_name.as_deref(), "permissionName")?;
            format!("Permission {symbol} {}", quote(position, name, options)?)
        }
        CriterionKind::Profile => {
            let profile = required(position, value.profile.as_deref(), "profile")?;
            format!("Profile {symbol} {}", quote(position, profile, options)?)
        }
    };

    tracing::trace!(position, %predicate, "built predicate");
    Ok(predicate)
}

fn required<'a>(
    position: u32,
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, RuleError> {
    value.ok_or(RuleError::MissingValue { position, field })
}

/// Fully qualify a field reference as `<entity>.<field>`. A reference that
/// already begins with the entity type name is used as-is, dot or not.
pub(crate) fn qualify(entity_type: &str, entity_field: &str, marker: &str) -> String {
    let field = entity_field.strip_prefix(marker).unwrap_or(entity_field);
    if field.starts_with(entity_type) {
        field.to_owned()
    } else {
        format!("{entity_type}.{field}")
    }
}

/// Wrap a literal in single quotes. Backslashes are never representable.
fn quote(position: u32, literal: &str, options: &TranslateOptions) -> Result<String, RuleError> {
    let unsupported = || RuleError::UnsupportedLiteral {
        position,
        literal: literal.to_owned(),
    };
    if literal.contains('\\') {
        return Err(unsupported());
    }
    if literal.contains('\'') {
        return match options.quote_policy {
            QuotePolicy::Escape => Ok(format!("'{}'", literal.replace('\'', "\\'"))),
            QuotePolicy::Reject => Err(unsupported()),
        };
    }
    Ok(format!("'{literal}'"))
}

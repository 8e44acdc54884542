use super::operator::{CriterionKind, Operator, PermissionKind};

/// One atomic test within a rule, as decoded from a stored record.
///
/// `operator` and `kind` keep their storage spelling; they are validated when
/// the criterion is translated, not when it is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Criterion {
    /// Number the rule author gave this criterion; custom formulas refer to it.
    #[cfg_attr(feature = "serde", serde(rename = "criteriaNumber"))]
    pub position: u32,
    pub operator: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(rename = "criterionValue", default))]
    pub value: CriterionValue,
}

/// Kind-dependent payload of a [`Criterion`]. Only the subset matching the
/// criterion's kind is expected to be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CriterionValue {
    #[cfg_attr(feature = "serde", serde(rename = "audienceDeveloperName"))]
    pub audience_name: Option<String>,
    pub entity_type: Option<String>,
    pub entity_field: Option<String>,
    pub field_value: Option<String>,
    pub permission_type: Option<String>,
    pub permission_name: Option<String>,
    pub profile: Option<String>,
}

impl Criterion {
    /// Criterion matching membership in another, named audience.
    #[must_use]
    pub fn audience(position: u32, op: Operator, audience_name: &str) -> Self {
        Self::with_value(
            position,
            op,
            CriterionKind::AudienceReference,
            CriterionValue {
                audience_name: Some(audience_name.to_owned()),
                ..CriterionValue::default()
            },
        )
    }

    /// Criterion comparing a field of an entity to a literal.
    #[must_use]
    pub fn field_based(
        position: u32,
        op: Operator,
        entity_type: &str,
        entity_field: &str,
        field_value: &str,
    ) -> Self {
        Self::with_value(
            position,
            op,
            CriterionKind::FieldBased,
            CriterionValue {
                entity_type: Some(entity_type.to_owned()),
                entity_field: Some(entity_field.to_owned()),
                field_value: Some(field_value.to_owned()),
                ..CriterionValue::default()
            },
        )
    }

    /// Criterion testing a custom permission.
    #[must_use]
    pub fn permission(position: u32, op: Operator, permission_name: &str) -> Self {
        Self::with_value(
            position,
            op,
            CriterionKind::Permission,
            CriterionValue {
                permission_type: Some(PermissionKind::Custom.as_str().to_owned()),
                permission_name: Some(permission_name.to_owned()),
                ..CriterionValue::default()
            },
        )
    }

    /// Criterion testing the user's profile.
    #[must_use]
    pub fn profile(position: u32, op: Operator, profile: &str) -> Self {
        Self::with_value(
            position,
            op,
            CriterionKind::Profile,
            CriterionValue {
                profile: Some(profile.to_owned()),
                ..CriterionValue::default()
            },
        )
    }

    fn with_value(position: u32, op: Operator, kind: CriterionKind, value: CriterionValue) -> Self {
        Self {
            position,
            operator: op.as_str().to_owned(),
            kind: kind.as_str().to_owned(),
            value,
        }
    }
}

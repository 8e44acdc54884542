use std::fmt;
use std::str::FromStr;

use super::error::RuleError;

/// Comparison operators a criterion can carry.
///
/// Parsed from the storage spelling (`"Equal"`, `"NotEqual"`, ...) and
/// displayed as the evaluator's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    StartsWith,
    EndsWith,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::StartsWith,
        Operator::EndsWith,
    ];

    /// The symbol the downstream evaluator understands.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::StartsWith => "=~",
            Operator::EndsWith => "~=",
        }
    }

    /// The spelling used by stored rule records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "Equal",
            Operator::NotEqual => "NotEqual",
            Operator::StartsWith => "StartsWith",
            Operator::EndsWith => "EndsWith",
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| s.to_owned())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Map a stored operator spelling to its evaluator symbol.
///
/// # Errors
///
/// Returns [`RuleError::UnknownOperator`] for anything but the four
/// recognized spellings. `position` is only used for the error report.
pub fn map_operator(position: u32, operator: &str) -> Result<&'static str, RuleError> {
    operator
        .parse::<Operator>()
        .map(Operator::symbol)
        .map_err(|operator| RuleError::UnknownOperator { position, operator })
}

/// Semantic type of a criterion; selects which value fields are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionKind {
    AudienceReference,
    FieldBased,
    Permission,
    Profile,
}

impl CriterionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CriterionKind::AudienceReference => "Audience",
            CriterionKind::FieldBased => "FieldBased",
            CriterionKind::Permission => "Permission",
            CriterionKind::Profile => "Profile",
        }
    }
}

impl FromStr for CriterionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Audience" => Ok(CriterionKind::AudienceReference),
            "FieldBased" => Ok(CriterionKind::FieldBased),
            "Permission" => Ok(CriterionKind::Permission),
            "Profile" => Ok(CriterionKind::Profile),
            other => Err(other.to_owned()),
        }
    }
}

/// Kind of permission a `Permission` criterion tests. Only custom
/// permissions can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionKind {
    Custom,
}

impl PermissionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PermissionKind::Custom => "Custom",
        }
    }
}

impl FromStr for PermissionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Custom" => Ok(PermissionKind::Custom),
            other => Err(other.to_owned()),
        }
    }
}

/// How a rule's criteria are combined into one expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinationMode {
    AllMatch,
    AnyMatch,
    Custom,
}

impl CombinationMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CombinationMode::AllMatch => "AllCriteriaMatch",
            CombinationMode::AnyMatch => "AnyCriterionMatches",
            CombinationMode::Custom => "CustomLogicMatches",
        }
    }

    /// Joiner for the uniform modes; `None` for custom logic.
    #[must_use]
    pub(crate) fn joiner(self) -> Option<&'static str> {
        match self {
            CombinationMode::AllMatch => Some(" && "),
            CombinationMode::AnyMatch => Some(" || "),
            CombinationMode::Custom => None,
        }
    }
}

impl FromStr for CombinationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AllCriteriaMatch" => Ok(CombinationMode::AllMatch),
            "AnyCriterionMatches" => Ok(CombinationMode::AnyMatch),
            "CustomLogicMatches" => Ok(CombinationMode::Custom),
            other => Err(other.to_owned()),
        }
    }
}

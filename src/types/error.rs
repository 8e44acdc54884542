use thiserror::Error;

use crate::parse::ParseError;

/// Validation failures found while translating a single rule.
///
/// Criterion-level variants carry the criterion's `position` so a report can
/// name the offending criterion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("unknown operator '{operator}' in criterion {position}")]
    UnknownOperator { position: u32, operator: String },

    #[error("unknown criterion kind '{kind}' in criterion {position}")]
    UnknownCriterionKind { position: u32, kind: String },

    #[error("unsupported permission kind '{kind}' in criterion {position}; only 'Custom' is supported")]
    UnsupportedPermissionKind { position: u32, kind: String },

    #[error("criterion {position} is missing its '{field}' value")]
    MissingValue { position: u32, field: &'static str },

    #[error("literal {literal:?} in criterion {position} cannot be quoted")]
    UnsupportedLiteral { position: u32, literal: String },

    #[error("duplicate criterion position {position}")]
    DuplicatePosition { position: u32 },

    #[error("rule has no criteria")]
    NoCriteria,

    #[error("unknown combination mode '{mode}'")]
    UnknownCombinationMode { mode: String },

    #[error("custom logic selected but no formula given")]
    MissingFormula,

    #[error(transparent)]
    FormulaSyntax(#[from] ParseError),

    #[error("placeholder {position} not found in formula '{formula}'")]
    PlaceholderNotFound { position: u32, formula: String },

    #[error("formula references position {position} more than once")]
    DuplicatePlaceholder { position: u32 },
}

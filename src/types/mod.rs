mod criterion;
mod error;
mod field_registry;
mod formula;
mod operator;
mod options;
mod rule;
mod translator;

pub use criterion::{Criterion, CriterionValue};
pub use error::RuleError;
pub use field_registry::{FieldRegistry, FieldSnapshot};
pub use formula::{Formula, placeholder};
pub use operator::{CombinationMode, CriterionKind, Operator, PermissionKind, map_operator};
pub use options::{QuotePolicy, TranslateOptions};
pub use rule::{Rule, TranslatedRule};
pub use translator::{Translation, Translator};

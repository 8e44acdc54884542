use std::collections::{BTreeMap, HashMap, HashSet};

/// Accumulates, per entity type, the qualified field paths referenced by
/// field-based criteria (e.g. `"User"` -> `{"User.Department"}`).
///
/// One registry is shared by every rule of a translation run. Membership is
/// all that matters; insertion order is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    fields: HashMap<String, HashSet<String>>,
}

impl FieldRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from an emitted snapshot, re-qualifying every
    /// local field name with its entity type.
    #[must_use]
    pub fn from_snapshot(snapshot: &FieldSnapshot) -> Self {
        let mut reg = Self::new();
        for (entity_type, locals) in snapshot.iter() {
            for local in locals {
                reg.register(entity_type, &format!("{entity_type}.{local}"));
            }
        }
        reg
    }

    /// Add a qualified field path under `entity_type`. Returns `false` if it
    /// was already registered.
    pub fn register(&mut self, entity_type: &str, field_path: &str) -> bool {
        self.fields
            .entry(entity_type.to_owned())
            .or_default()
            .insert(field_path.to_owned())
    }

    /// Fold every field of `other` into this registry.
    pub fn merge(&mut self, other: FieldRegistry) {
        for (entity_type, paths) in other.fields {
            self.fields.entry(entity_type).or_default().extend(paths);
        }
    }

    #[must_use]
    pub fn contains(&self, entity_type: &str, field_path: &str) -> bool {
        self.fields
            .get(entity_type)
            .is_some_and(|set| set.contains(field_path))
    }

    /// Total number of registered fields across all entity types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.values().map(HashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all registered (entity type, qualified path) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().flat_map(|(entity, paths)| {
            paths.iter().map(move |p| (entity.as_str(), p.as_str()))
        })
    }

    /// Produce the interpreter-context listing: entity type to local field
    /// names, with the `"<entity>."` qualifier stripped back off.
    #[must_use]
    pub fn snapshot(&self) -> FieldSnapshot {
        let mut entries = BTreeMap::new();
        for (entity_type, paths) in &self.fields {
            let prefix = format!("{entity_type}.");
            let locals: Vec<String> = paths
                .iter()
                .map(|p| p.strip_prefix(prefix.as_str()).unwrap_or(p.as_str()).to_owned())
                .collect();
            entries.insert(entity_type.clone(), locals);
        }
        FieldSnapshot::from(entries)
    }
}

/// Entity type to local field names, as emitted for the evaluator context.
///
/// Field lists are kept sorted and de-duplicated so two snapshots holding the
/// same sets compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldSnapshot {
    entries: BTreeMap<String, Vec<String>>,
}

impl FieldSnapshot {
    /// Local field names for one entity type.
    #[must_use]
    pub fn fields(&self, entity_type: &str) -> Option<&[String]> {
        self.entries.get(entity_type).map(Vec::as_slice)
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(entity, locals)| (entity.as_str(), locals.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, Vec<String>>> for FieldSnapshot {
    fn from(mut entries: BTreeMap<String, Vec<String>>) -> Self {
        for locals in entries.values_mut() {
            locals.sort_unstable();
            locals.dedup();
        }
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_contains() {
        let mut reg = FieldRegistry::new();
        assert!(reg.register("User", "User.Department"));
        assert!(reg.contains("User", "User.Department"));
        assert!(!reg.contains("Account", "User.Department"));
    }

    #[test]
    fn duplicate_register_is_idempotent() {
        let mut reg = FieldRegistry::new();
        assert!(reg.register("User", "User.Title"));
        assert!(!reg.register("User", "User.Title"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn multiple_entities() {
        let mut reg = FieldRegistry::new();
        reg.register("User", "User.Title");
        reg.register("User", "User.Department");
        reg.register("Account", "Account.Industry");
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.iter().filter(|(e, _)| *e == "User").count(), 2);
    }

    #[test]
    fn merge_unions_sets() {
        let mut a = FieldRegistry::new();
        a.register("User", "User.Title");
        let mut b = FieldRegistry::new();
        b.register("User", "User.Title");
        b.register("User", "User.Department");
        b.register("Account", "Account.Industry");
        a.merge(b);
        assert_eq!(a.len(), 3);
        assert!(a.contains("Account", "Account.Industry"));
    }

    #[test]
    fn empty_registry() {
        let reg = FieldRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.snapshot().is_empty());
    }

    #[test]
    fn snapshot_strips_entity_prefix() {
        let mut reg = FieldRegistry::new();
        reg.register("User", "User.Department");
        reg.register("User", "User.Contact.Email");
        let snap = reg.snapshot();
        let fields: HashSet<&str> = snap
            .fields("User")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(fields, HashSet::from(["Department", "Contact.Email"]));
    }

    #[test]
    fn snapshot_round_trip_is_idempotent() {
        let mut reg = FieldRegistry::new();
        reg.register("User", "User.Department");
        reg.register("Account", "Account.Industry");
        let first = reg.snapshot();
        let second = FieldRegistry::from_snapshot(&first).snapshot();
        let third = FieldRegistry::from_snapshot(&second).snapshot();
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(FieldRegistry::from_snapshot(&first), reg);
    }
}

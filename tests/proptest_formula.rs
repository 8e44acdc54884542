
use std::collections::{BTreeMap, HashSet};

use audience_formula::{assemble, parse, CombinationMode, FieldRegistry, RuleError};
use proptest::prelude::*;
use strategies::{arb_fields, arb_formula, arb_positions, predicate_for, substitute_tokens};

// ---------------------------------------------------------------------------
// Invariant 1: Custom substitution is whole-token
//
// Every numeral is replaced by exactly its own predicate, no matter how the
// positions share digits.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn custom_matches_token_substitution(gen in arb_formula()) {
        let text = gen.text();
        let expr = assemble(CombinationMode::Custom, Some(text.as_str()), &gen.predicates)
            .expect("generated formula should assemble");
        prop_assert_eq!(expr, substitute_tokens(&text, &gen.predicates));
    }

    #[test]
    fn parse_display_is_a_fixpoint(gen in arb_formula()) {
        let text = gen.text();
        let parsed = parse::parse(&text).expect("generated formula should parse");
        prop_assert_eq!(parsed.to_string(), text);
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Placeholder consistency
//
// A criterion absent from the formula, or a numeral with no criterion, is
// always reported instead of producing an expression.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn extra_criterion_is_reported(gen in arb_formula(), extra in 151_u32..=300) {
        let mut predicates = gen.predicates.clone();
        predicates.insert(extra, predicate_for(extra));
        let res = assemble(CombinationMode::Custom, Some(gen.text().as_str()), &predicates);
        let is_not_found = matches!(res, Err(RuleError::PlaceholderNotFound { position, .. }) if position == extra);
        prop_assert!(is_not_found);
    }

    #[test]
    fn missing_criterion_is_reported(gen in arb_formula(), pick in any::<prop::sample::Index>()) {
        let mut predicates = gen.predicates.clone();
        let keys: Vec<u32> = predicates.keys().copied().collect();
        let removed = keys[pick.index(keys.len())];
        predicates.remove(&removed);
        let res = assemble(CombinationMode::Custom, Some(gen.text().as_str()), &predicates);
        if predicates.is_empty() {
            prop_assert_eq!(res, Err(RuleError::NoCriteria));
        } else {
            let is_not_found = matches!(res, Err(RuleError::PlaceholderNotFound { position, .. }) if position == removed);
            prop_assert!(is_not_found);
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Uniform modes join in descending position order
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn uniform_modes_are_descending(positions in arb_positions()) {
        let predicates: BTreeMap<u32, String> = positions.iter().map(|&p| (p, predicate_for(p))).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let parts: Vec<String> = sorted.iter().map(|&p| predicate_for(p)).collect();

        let all_match = assemble(CombinationMode::AllMatch, None, &predicates).unwrap();
        let any_match = assemble(CombinationMode::AnyMatch, None, &predicates).unwrap();
        prop_assert_eq!(all_match, parts.join(" && "));
        prop_assert_eq!(any_match, parts.join(" || "));
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Registry snapshots are stable
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn snapshot_round_trip(fields in arb_fields()) {
        let mut registry = FieldRegistry::new();
        for (entity, local) in &fields {
            registry.register(entity, &format!("{entity}.{local}"));
        }
        let first = registry.snapshot();
        let second = FieldRegistry::from_snapshot(&first).snapshot();
        let third = FieldRegistry::from_snapshot(&second).snapshot();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&second, &third);

        for (entity, local) in &fields {
            let listed: HashSet<&str> = first
                .fields(entity)
                .unwrap_or_default()
                .iter()
                .map(String::as_str)
                .collect();
            prop_assert!(listed.contains(local.as_str()));
        }
    }
}

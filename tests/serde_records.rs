#![cfg(feature = "serde")]

use audience_formula::{QuotePolicy, Rule, RuleError, TranslateOptions, Translation, Translator};

const RECORD: &str = r#"{
    "name": "Sales_EMEA",
    "formulaFilterType": "CustomLogicMatches",
    "formula": "1 AND (2 OR 10)",
    "criteria": [
        {
            "criteriaNumber": 1,
            "operator": "Equal",
            "type": "FieldBased",
            "criterionValue": {
                "entityType": "User",
                "entityField": "$User.Department",
                "fieldValue": "Sales"
            }
        },
        {
            "criteriaNumber": 2,
            "operator": "StartsWith",
            "type": "Profile",
            "criterionValue": { "profile": "EMEA" }
        },
        {
            "criteriaNumber": 10,
            "operator": "NotEqual",
            "type": "Audience",
            "criterionValue": { "audienceDeveloperName": "Contractors" }
        }
    ]
}"#;

#[test]
fn decode_and_translate_record() {
    let rule: Rule = serde_json::from_str(RECORD).unwrap();
    assert_eq!(rule.criteria.len(), 3);
    assert_eq!(rule.criteria[2].position, 10);

    let out = Translator::default().translate_all([&rule]).unwrap();
    assert_eq!(
        out.rules()[0].expression(),
        "User.Department == 'Sales' && (Profile =~ 'EMEA' || Audience != 'Contractors')"
    );
}

#[test]
fn unknown_spellings_survive_decoding() {
    let json = r#"{
        "name": "Odd",
        "formulaFilterType": "AllCriteriaMatch",
        "criteria": [
            { "criteriaNumber": 1, "operator": "Contains", "type": "Profile",
              "criterionValue": { "profile": "X" } }
        ]
    }"#;
    let rule: Rule = serde_json::from_str(json).unwrap();
    let err = Translator::default().translate_all([&rule]).unwrap_err();
    assert!(matches!(err.rule_error(), RuleError::UnknownOperator { .. }));
}

#[test]
fn translation_serializes() {
    let rule: Rule = serde_json::from_str(RECORD).unwrap();
    let out = Translator::default().translate_all([&rule]).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["rules"][0]["name"], "Sales_EMEA");
    assert_eq!(json["fields"]["User"][0], "Department");

    let back: Translation = serde_json::from_value(json).unwrap();
    assert_eq!(back, out);
}

#[test]
fn options_from_partial_json() {
    let options: TranslateOptions =
        serde_json::from_str(r#"{ "quote_policy": "reject" }"#).unwrap();
    assert_eq!(options.quote_policy, QuotePolicy::Reject);
    assert_eq!(options.field_marker, "$");
}

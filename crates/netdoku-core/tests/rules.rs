//! Override-rule evaluation.

use netdoku_core::{apply_rules, DecodeCache};
use netdoku_model::{OverrideRule, Record, SelectArm, Value};

fn sentinels() -> Vec<String> {
    vec!["Sonstige".to_string(), "Sonstiges".to_string()]
}

fn art_fallback() -> Vec<OverrideRule> {
    vec![OverrideRule::OtherFallback {
        field: "ART".to_string(),
        replacement: "ART_SONST".to_string(),
        triggers: sentinels(),
    }]
}

fn farbe_discriminated() -> Vec<OverrideRule> {
    vec![OverrideRule::Discriminated {
        target: "LR_FARBE".to_string(),
        discriminant: "TYP".to_string(),
        arms: vec![
            SelectArm {
                keywords: vec!["schutzrohr".to_string(), "rohrverband".to_string()],
                source: "M_FARB".to_string(),
                fallback: "M_FARB_SON".to_string(),
                triggers: sentinels(),
            },
            SelectArm {
                keywords: vec!["einzelrohr".to_string()],
                source: "ER_FARB".to_string(),
                fallback: "ER_FARB_SON".to_string(),
                triggers: sentinels(),
            },
        ],
    }]
}

#[test]
fn trigger_value_is_replaced_by_free_text() {
    let cache = DecodeCache::default();
    let source = Record::new().with("ART_SONST", "Custom Label");
    let mut staging = Record::new().with("ART", "Sonstiges");
    apply_rules(&art_fallback(), &source, &mut staging, &cache);
    assert_eq!(staging.get("ART"), Some(&Value::Text("Custom Label".into())));
}

#[test]
fn absent_replacement_keeps_trigger_value() {
    let cache = DecodeCache::default();
    let source = Record::new();
    let mut staging = Record::new().with("ART", "Sonstiges");
    apply_rules(&art_fallback(), &source, &mut staging, &cache);
    assert_eq!(staging.get("ART"), Some(&Value::Text("Sonstiges".into())));
}

#[test]
fn empty_replacement_keeps_trigger_value() {
    let cache = DecodeCache::default();
    let source = Record::new().with("ART_SONST", "");
    let mut staging = Record::new().with("ART", "Sonstiges");
    apply_rules(&art_fallback(), &source, &mut staging, &cache);
    assert_eq!(staging.get("ART"), Some(&Value::Text("Sonstiges".into())));
}

#[test]
fn non_trigger_values_are_untouched() {
    let cache = DecodeCache::default();
    let source = Record::new().with("ART_SONST", "Custom Label");
    let mut staging = Record::new().with("ART", "Schacht");
    apply_rules(&art_fallback(), &source, &mut staging, &cache);
    assert_eq!(staging.get("ART"), Some(&Value::Text("Schacht".into())));
}

#[test]
fn trigger_match_is_case_sensitive() {
    let cache = DecodeCache::default();
    let source = Record::new().with("ART_SONST", "Custom Label");
    let mut staging = Record::new().with("ART", "sonstiges");
    apply_rules(&art_fallback(), &source, &mut staging, &cache);
    assert_eq!(staging.get("ART"), Some(&Value::Text("sonstiges".into())));
}

#[test]
fn unset_trigger_field_leaves_rule_idle() {
    let cache = DecodeCache::default();
    let source = Record::new().with("ART_SONST", "Custom Label");
    let mut staging = Record::new();
    apply_rules(&art_fallback(), &source, &mut staging, &cache);
    assert!(staging.get("ART").is_none());
}

#[test]
fn schutzrohr_discriminant_selects_first_pair() {
    let cache = DecodeCache::default();
    let source = Record::new()
        .with("TYP", "Schutzrohr 50mm")
        .with("M_FARB", "blau")
        .with("ER_FARB", "rot");
    let mut staging = Record::new();
    apply_rules(&farbe_discriminated(), &source, &mut staging, &cache);
    assert_eq!(staging.get("LR_FARBE"), Some(&Value::Text("blau".into())));
}

#[test]
fn einzelrohr_discriminant_selects_second_pair() {
    let cache = DecodeCache::default();
    let source = Record::new()
        .with("TYP", "Einzelrohr")
        .with("M_FARB", "blau")
        .with("ER_FARB", "rot");
    let mut staging = Record::new();
    apply_rules(&farbe_discriminated(), &source, &mut staging, &cache);
    assert_eq!(staging.get("LR_FARBE"), Some(&Value::Text("rot".into())));
}

#[test]
fn unknown_discriminant_leaves_target_unset() {
    let cache = DecodeCache::default();
    let source = Record::new()
        .with("TYP", "Kabelkanal")
        .with("M_FARB", "blau")
        .with("ER_FARB", "rot");
    let mut staging = Record::new();
    apply_rules(&farbe_discriminated(), &source, &mut staging, &cache);
    assert!(staging.get("LR_FARBE").is_none());
}

#[test]
fn discriminant_keywords_match_case_insensitively() {
    let cache = DecodeCache::default();
    let source = Record::new()
        .with("TYP", "ROHRVERBAND 4x")
        .with("M_FARB", "gelb");
    let mut staging = Record::new();
    apply_rules(&farbe_discriminated(), &source, &mut staging, &cache);
    assert_eq!(staging.get("LR_FARBE"), Some(&Value::Text("gelb".into())));
}

#[test]
fn selected_pair_applies_its_own_free_text_fallback() {
    let cache = DecodeCache::default();
    let source = Record::new()
        .with("TYP", "Einzelrohr DN32")
        .with("ER_FARB", "Sonstige")
        .with("ER_FARB_SON", "violett gestreift");
    let mut staging = Record::new();
    apply_rules(&farbe_discriminated(), &source, &mut staging, &cache);
    assert_eq!(
        staging.get("LR_FARBE"),
        Some(&Value::Text("violett gestreift".into()))
    );
}

#[test]
fn empty_free_text_keeps_decoded_trigger_in_selected_pair() {
    let cache = DecodeCache::default();
    let source = Record::new()
        .with("TYP", "Einzelrohr DN32")
        .with("ER_FARB", "Sonstige")
        .with("ER_FARB_SON", "");
    let mut staging = Record::new();
    apply_rules(&farbe_discriminated(), &source, &mut staging, &cache);
    assert_eq!(staging.get("LR_FARBE"), Some(&Value::Text("Sonstige".into())));
}

#[test]
fn empty_decoded_source_leaves_target_unset() {
    let cache = DecodeCache::default();
    let rules = vec![OverrideRule::DerivedSelect {
        target: "LR_FARBE".to_string(),
        source: "ER_FARB".to_string(),
        fallback: "ER_FARB_SON".to_string(),
        triggers: sentinels(),
    }];
    let source = Record::new().with("ER_FARB", "");
    let mut staging = Record::new();
    apply_rules(&rules, &source, &mut staging, &cache);
    assert!(staging.get("LR_FARBE").is_none());
}

#[test]
fn derived_select_copies_decoded_source() {
    let cache = DecodeCache::default();
    let rules = vec![OverrideRule::DerivedSelect {
        target: "LR_FARBE".to_string(),
        source: "ER_FARB".to_string(),
        fallback: "ER_FARB_SON".to_string(),
        triggers: sentinels(),
    }];
    let source = Record::new().with("ER_FARB", "gruen");
    let mut staging = Record::new();
    apply_rules(&rules, &source, &mut staging, &cache);
    assert_eq!(staging.get("LR_FARBE"), Some(&Value::Text("gruen".into())));

    // Absent source leaves the target unset.
    let mut staging = Record::new();
    apply_rules(&rules, &Record::new(), &mut staging, &cache);
    assert!(staging.get("LR_FARBE").is_none());
}

#[test]
fn rules_apply_independently_in_order() {
    let cache = DecodeCache::default();
    let rules = vec![
        OverrideRule::OtherFallback {
            field: "ART".to_string(),
            replacement: "V_A_SONST".to_string(),
            triggers: sentinels(),
        },
        OverrideRule::DerivedSelect {
            target: "LR_FARBE".to_string(),
            source: "ER_FARB".to_string(),
            fallback: "ER_FARB_SON".to_string(),
            triggers: sentinels(),
        },
    ];
    let source = Record::new()
        .with("V_A_SONST", "Spleissung")
        .with("ER_FARB", "Sonstiges")
        .with("ER_FARB_SON", "natur");
    let mut staging = Record::new().with("ART", "Sonstige").with("TYP", "K-7");
    apply_rules(&rules, &source, &mut staging, &cache);
    assert_eq!(staging.get("ART"), Some(&Value::Text("Spleissung".into())));
    assert_eq!(staging.get("LR_FARBE"), Some(&Value::Text("natur".into())));
    assert_eq!(staging.get("TYP"), Some(&Value::Text("K-7".into())));
}

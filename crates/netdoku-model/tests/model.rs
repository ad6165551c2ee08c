//! Tests for netdoku-model types.

use netdoku_model::{
    ExportOutcome, FieldDef, FieldKind, FieldMapping, FieldNameSet, LookupRef, Record,
    SourceSchema, Value,
};

#[test]
fn value_key_string_matches_raw_form() {
    assert_eq!(Value::Int(42).key_string(), "42");
    assert_eq!(Value::Text("Beton".into()).key_string(), "Beton");
    assert_eq!(Value::Bool(true).key_string(), "true");
}

#[test]
fn record_builder_sets_attributes() {
    let record = Record::new().with("ART", 3i64).with("BEMERKUNG", "test");
    assert_eq!(record.get("ART"), Some(&Value::Int(3)));
    assert_eq!(record.get("BEMERKUNG"), Some(&Value::Text("test".into())));
    assert_eq!(record.get("MISSING"), None);
}

#[test]
fn schema_lookup_is_case_sensitive_by_field_name() {
    let schema = SourceSchema::new(vec![
        FieldDef::new("ART", FieldKind::Int).with_lookup(LookupRef {
            layer: "lookup_art".into(),
            key_field: "id".into(),
            value_field: "bezeichnung".into(),
        }),
        FieldDef::text("BEMERKUNG", 200),
    ]);
    assert!(schema.field("ART").is_some_and(FieldDef::is_coded));
    assert!(schema.field("BEMERKUNG").is_some_and(|f| !f.is_coded()));
    assert!(!schema.contains("art"));
}

#[test]
fn field_mapping_preserves_declaration_order() {
    let mapping = FieldMapping::from_pairs(&[("id", "ID"), ("ART", "ART"), ("LQ", "LAGEQUALITAET")]);
    let pairs: Vec<_> = mapping.iter().collect();
    assert_eq!(
        pairs,
        vec![("id", "ID"), ("ART", "ART"), ("LQ", "LAGEQUALITAET")]
    );
}

#[test]
fn field_name_set_ignores_case() {
    let set = FieldNameSet::new(["Art", "BEMERKUNG"]);
    assert!(set.contains("ART"));
    assert!(set.contains("bemerkung"));
    assert!(!set.contains("LAGEQUALITAET"));
}

#[test]
fn field_name_set_from_schema_covers_every_field() {
    let schema = SourceSchema::new(vec![
        FieldDef::new("ART", FieldKind::Int),
        FieldDef::text("Bemerkung", 200),
    ]);
    let set = FieldNameSet::from_schema(&schema);
    assert!(set.contains("art"));
    assert!(set.contains("BEMERKUNG"));
}

#[test]
fn outcome_serializes() {
    let outcome = ExportOutcome::success("PUNKT→GDB", 12, "/tmp/Job_7.gdb/COM_DOKU_PUNKT");
    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    let round: ExportOutcome = serde_json::from_str(&json).expect("deserialize outcome");
    assert_eq!(round, outcome);
    assert!(!json.contains("error"));

    let failed = ExportOutcome::failure("BAUTEN→GDB", "BAUTEN layer not found");
    let json = serde_json::to_string(&failed).expect("serialize failure");
    assert!(json.contains("BAUTEN layer not found"));
    assert!(!json.contains("count"));
}

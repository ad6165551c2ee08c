//! Override rules and the per-shape export configuration.

use netdoku_model::{FieldMapping, LayerExport, LayerMatch, OverrideRule, SelectArm};

use crate::tables;

/// Trigger strings marking a coded value as "other / free text". Every rule
/// carries its own copy of this set; additional spellings are a data
/// change here, not a code change.
pub const OTHER_SENTINELS: &[&str] = &["Sonstige", "Sonstiges"];

fn sentinels() -> Vec<String> {
    OTHER_SENTINELS.iter().map(|s| (*s).to_string()).collect()
}

fn other_fallback(field: &str, replacement: &str) -> OverrideRule {
    OverrideRule::OtherFallback {
        field: field.to_string(),
        replacement: replacement.to_string(),
        triggers: sentinels(),
    }
}

/// One export entry per source shape, replacing the per-shape procedures
/// of earlier exporters with declarative configuration.
pub fn layer_exports() -> Vec<LayerExport> {
    vec![
        LayerExport {
            label: "PUNKT→GDB".to_string(),
            layer: "PUNKT".to_string(),
            matching: LayerMatch::Exact,
            feature_class: tables::FC_PUNKT.to_string(),
            mapping: FieldMapping::from_pairs(tables::PUNKT_TO_COM_DOKU_PUNKT),
            derived_fields: vec![],
            rules: vec![],
        },
        LayerExport {
            label: "ROHRMUFFE→GDB".to_string(),
            layer: "ROHRMUFFE".to_string(),
            matching: LayerMatch::Exact,
            feature_class: tables::FC_PUNKT.to_string(),
            mapping: FieldMapping::from_pairs(tables::ROHRMUFFE_TO_COM_DOKU_PUNKT),
            derived_fields: vec![],
            rules: vec![],
        },
        LayerExport {
            label: "MESSPUNKT→GDB".to_string(),
            layer: "MESSPUNKT".to_string(),
            matching: LayerMatch::Exact,
            feature_class: tables::FC_PUNKT.to_string(),
            mapping: FieldMapping::from_pairs(tables::MESSPUNKT_TO_COM_DOKU_PUNKT),
            derived_fields: vec![],
            rules: vec![],
        },
        LayerExport {
            label: "BAUTEN→GDB".to_string(),
            layer: "BAUTEN".to_string(),
            matching: LayerMatch::Exact,
            feature_class: tables::FC_PUNKT.to_string(),
            mapping: FieldMapping::from_pairs(tables::BAUTEN_TO_COM_DOKU_PUNKT),
            derived_fields: vec![],
            rules: vec![other_fallback("ART", "ART_SONST")],
        },
        LayerExport {
            label: "NETZTECHNIK→GDB".to_string(),
            layer: "NETZTECHNIK".to_string(),
            matching: LayerMatch::Exact,
            feature_class: tables::FC_PUNKT.to_string(),
            mapping: FieldMapping::from_pairs(tables::NETZTECHNIK_TO_COM_DOKU_PUNKT),
            derived_fields: vec![],
            rules: vec![other_fallback("ART", "ART_SONST")],
        },
        LayerExport {
            label: "ENDVERBRAUCHER→GDB".to_string(),
            layer: "ENDVERBRAUCHER".to_string(),
            matching: LayerMatch::Exact,
            feature_class: tables::FC_PUNKT.to_string(),
            mapping: FieldMapping::from_pairs(tables::ENDVERBRAUCHER_TO_COM_DOKU_PUNKT),
            derived_fields: vec![],
            rules: vec![],
        },
        LayerExport {
            label: "Leerrohre→GDB".to_string(),
            layer: "leerrohr".to_string(),
            matching: LayerMatch::Substring,
            feature_class: tables::FC_ROHR.to_string(),
            mapping: FieldMapping::from_pairs(tables::LEERROHRE_TO_COM_DOKU_ROHR),
            derived_fields: vec!["LR_FARBE".to_string()],
            rules: vec![
                OverrideRule::Discriminated {
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
                },
                other_fallback("LR_HERST", "LR_HER_SON"),
            ],
        },
        LayerExport {
            label: "Verbindungen→GDB".to_string(),
            layer: "verbindung".to_string(),
            matching: LayerMatch::Substring,
            feature_class: tables::FC_KABEL.to_string(),
            mapping: FieldMapping::from_pairs(tables::VERBINDUNGEN_TO_COM_DOKU_KABEL),
            derived_fields: vec!["LR_FARBE".to_string()],
            rules: vec![
                other_fallback("ART", "V_A_SONST"),
                OverrideRule::DerivedSelect {
                    target: "LR_FARBE".to_string(),
                    source: "ER_FARB".to_string(),
                    fallback: "ER_FARB_SON".to_string(),
                    triggers: sentinels(),
                },
            ],
        },
    ]
}

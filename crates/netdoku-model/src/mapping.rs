use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One source-field to destination-field rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    pub source: String,
    pub dest: String,
}

/// Ordered, declarative field mapping for one (source shape, destination
/// shape) pair. Order drives destination schema derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub pairs: Vec<FieldMap>,
}

impl FieldMapping {
    pub fn new(pairs: Vec<FieldMap>) -> Self {
        Self { pairs }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            pairs: pairs
                .iter()
                .map(|(source, dest)| FieldMap {
                    source: (*source).to_string(),
                    dest: (*dest).to_string(),
                })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|pair| (pair.source.as_str(), pair.dest.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// One arm of a discriminated select: matches when the decoded discriminant
/// contains one of the keywords (case-insensitive substring).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectArm {
    pub keywords: Vec<String>,
    /// Source field whose decoded value is copied to the target.
    pub source: String,
    /// Free-text companion consulted when the decoded value is a trigger.
    pub fallback: String,
    pub triggers: Vec<String>,
}

/// Post-mapping correction applied to one destination attribute.
/// Rules run in declaration order, independently, after base mapping, and
/// may read source attributes that are not in the field mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverrideRule {
    /// If the mapped output `field` holds one of `triggers` (case-sensitive
    /// exact), replace it with the raw source `replacement` value when that
    /// value is present. An absent replacement keeps the trigger value.
    OtherFallback {
        field: String,
        replacement: String,
        triggers: Vec<String>,
    },
    /// Write the decoded `source` value (after its own trigger fallback to
    /// `fallback`) into `target` whenever it is present.
    DerivedSelect {
        target: String,
        source: String,
        fallback: String,
        triggers: Vec<String>,
    },
    /// Pick the value-field pair by matching the decoded discriminant
    /// against each arm's keywords; no matching arm leaves `target` unset.
    Discriminated {
        target: String,
        discriminant: String,
        arms: Vec<SelectArm>,
    },
}

/// How a source layer is located in the host project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerMatch {
    /// Case-insensitive exact name match.
    Exact,
    /// Case-insensitive substring match on the layer name.
    Substring,
}

/// Declarative export configuration for one source shape. The per-shape
/// bespoke procedures of older exporters collapse into one of these
/// entries driving a single generic pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerExport {
    /// Outcome label, e.g. "PUNKT→GDB".
    pub label: String,
    /// Layer name (or name fragment for substring matching).
    pub layer: String,
    pub matching: LayerMatch,
    /// Destination feature class receiving the records.
    pub feature_class: String,
    pub mapping: FieldMapping,
    /// Text(254) fields added to the derived schema for rule outputs that
    /// have no mapping-table entry (e.g. LR_FARBE).
    pub derived_fields: Vec<String>,
    pub rules: Vec<OverrideRule>,
}

impl LayerExport {
    /// Check that every rule writes to a field the derived schema will
    /// actually carry (a mapped destination field or a derived field).
    pub fn validate(&self) -> Result<()> {
        let dests: BTreeSet<&str> = self
            .mapping
            .pairs
            .iter()
            .map(|pair| pair.dest.as_str())
            .chain(self.derived_fields.iter().map(String::as_str))
            .collect();
        for rule in &self.rules {
            let target = match rule {
                OverrideRule::OtherFallback { field, .. } => field,
                OverrideRule::DerivedSelect { target, .. } => target,
                OverrideRule::Discriminated { target, .. } => target,
            };
            if !dests.contains(target.as_str()) {
                return Err(ModelError::RuleTargetUnknown {
                    label: self.label.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(())
    }
}

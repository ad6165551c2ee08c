//! Decode-cache construction for coded (value-relation backed) fields.

use std::collections::HashMap;

use netdoku_model::Value;
use netdoku_source::{SourceLayer, SourceProvider};
use tracing::{debug, warn};

/// Key→label tables for the coded fields of one source layer. Built fresh
/// per export call and discarded with it; threaded explicitly through
/// mapping and rule evaluation instead of living on shared state.
#[derive(Debug, Clone, Default)]
pub struct DecodeCache {
    tables: HashMap<String, HashMap<String, Value>>,
}

impl DecodeCache {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn has_table(&self, field: &str) -> bool {
        self.tables.contains_key(field)
    }

    /// Resolve a raw value through the field's table. Lookup is by the
    /// exact stringified key; a miss (or a field without a table) yields
    /// the raw value unchanged.
    pub fn decode(&self, field: &str, raw: &Value) -> Value {
        match self
            .tables
            .get(field)
            .and_then(|table| table.get(&raw.key_string()))
        {
            Some(display) => display.clone(),
            None => raw.clone(),
        }
    }
}

/// Materialize the decode cache for `layer`.
///
/// For every coded field, the related lookup layer is resolved by id or
/// name; a missing lookup layer is non-fatal (the field is omitted and raw
/// codes pass through). Duplicate keys in the lookup layer resolve
/// last-wins.
pub fn build_decode_cache(provider: &dyn SourceProvider, layer: &dyn SourceLayer) -> DecodeCache {
    let mut cache = DecodeCache::default();
    for field in &layer.schema().fields {
        let Some(lookup) = &field.lookup else {
            continue;
        };
        let Some(related) = provider.layer_by_id_or_name(&lookup.layer) else {
            warn!(
                layer = layer.name(),
                field = %field.name,
                lookup = %lookup.layer,
                "lookup layer not found; raw codes will pass through"
            );
            continue;
        };
        let mut table = HashMap::new();
        for record in related.all_records() {
            let Some(key) = record.get(&lookup.key_field) else {
                continue;
            };
            let Some(value) = record.get(&lookup.value_field) else {
                continue;
            };
            table.insert(key.key_string(), value.clone());
        }
        debug!(
            layer = layer.name(),
            field = %field.name,
            entries = table.len(),
            "built decode table"
        );
        cache.tables.insert(field.name.clone(), table);
    }
    cache
}

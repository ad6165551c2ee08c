//! Destination schema derivation and per-record attribute mapping.

use netdoku_model::{FieldDef, FieldMapping, Record, SourceSchema};
use tracing::debug;

use crate::decode::DecodeCache;

/// Decoded display labels are textual whatever the coded field's native
/// type; destination text fields are bounded to this length.
pub const DECODED_TEXT_LENGTH: u32 = 254;

/// Result of mapping one source record: the staging record plus the source
/// fields that were skipped (mapped in the table but absent from the
/// source schema). Skips are minor faults; they never abort the record.
#[derive(Debug, Clone)]
pub struct MapOutcome {
    pub record: Record,
    pub skipped: Vec<String>,
}

/// Derive the destination-shaped schema for one source layer.
///
/// One field per mapping pair present in the source schema: coded fields
/// become bounded text, everything else copies the source's kind, length
/// and precision. Pairs whose source field is missing are skipped. The
/// configured derived fields (rule outputs without a mapping entry) are
/// appended as bounded text.
pub fn derive_schema(
    source: &SourceSchema,
    mapping: &FieldMapping,
    derived_fields: &[String],
) -> SourceSchema {
    let mut fields = Vec::with_capacity(mapping.len() + derived_fields.len());
    for (src, dst) in mapping.iter() {
        let Some(field) = source.field(src) else {
            continue;
        };
        if field.is_coded() {
            fields.push(FieldDef::text(dst, DECODED_TEXT_LENGTH));
        } else {
            fields.push(FieldDef {
                name: dst.to_string(),
                kind: field.kind,
                length: field.length,
                precision: field.precision,
                lookup: None,
            });
        }
    }
    for name in derived_fields {
        fields.push(FieldDef::text(name.clone(), DECODED_TEXT_LENGTH));
    }
    SourceSchema::new(fields)
}

/// Map one source record into a destination-shaped staging record.
///
/// Geometry is copied verbatim. For every mapping pair: a null/absent raw
/// value leaves the destination attribute unset; a present value is
/// decoded through the cache (miss passes the raw value through).
pub fn map_record(
    source_record: &Record,
    mapping: &FieldMapping,
    source_schema: &SourceSchema,
    cache: &DecodeCache,
) -> MapOutcome {
    let mut staging = Record {
        geometry: source_record.geometry.clone(),
        attributes: Default::default(),
    };
    let mut skipped = Vec::new();
    for (src, dst) in mapping.iter() {
        if !source_schema.contains(src) {
            skipped.push(src.to_string());
            continue;
        }
        let Some(raw) = source_record.get(src) else {
            continue;
        };
        staging.set(dst, cache.decode(src, raw));
    }
    if !skipped.is_empty() {
        debug!(?skipped, "mapping pairs without a source field");
    }
    MapOutcome {
        record: staging,
        skipped,
    }
}

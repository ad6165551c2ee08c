//! Routing staged batches into shared destination feature classes.
//!
//! Several source layers append into the same feature class within one
//! job. The class schema is fixed at provisioning time; appends only ever
//! drop stray attributes, never add fields. Nothing de-duplicates rows
//! across layers that share a class.

use anyhow::{anyhow, Result};
use netdoku_model::{FieldNameSet, Record, SourceSchema};
use netdoku_store::{AppendMode, DestinationStore};
use tracing::warn;

/// Append one source layer's staged batch to `feature_class`.
///
/// The destination schema is fetched once for the batch. Every staging
/// attribute must sit in both the derived (expected) schema and the
/// destination schema; anything else is dropped silently for the write.
/// Record order follows the order of `records`.
pub fn append_batch(
    store: &mut dyn DestinationStore,
    feature_class: &str,
    records: Vec<Record>,
    expected: &SourceSchema,
) -> Result<usize> {
    let destination = store
        .collection_schema(feature_class)
        .ok_or_else(|| anyhow!("feature class {feature_class} not present in output store"))?;
    let destination = FieldNameSet::from_schema(destination);
    let expected = FieldNameSet::from_schema(expected);

    let mut dropped = 0usize;
    let mut batch = Vec::with_capacity(records.len());
    for mut record in records {
        let before = record.attributes.len();
        record
            .attributes
            .retain(|name, _| expected.contains(name) && destination.contains(name));
        dropped += before - record.attributes.len();
        batch.push(record);
    }
    if dropped > 0 {
        warn!(
            feature_class,
            dropped, "dropped staging attributes outside the destination schema"
        );
    }

    let result = store.append(feature_class, batch, AppendMode::NoNewFields)?;
    Ok(result.written)
}

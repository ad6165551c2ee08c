//! Append-only destination store seam.

use std::collections::BTreeMap;

use netdoku_model::{FieldNameSet, Record, SourceSchema};
use tracing::warn;

use crate::error::{Result, StoreError};

/// Write behavior for appends. Only `NoNewFields` is used by the export
/// engine: the destination schema is fixed at provisioning time and is
/// never extended for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendMode {
    NoNewFields,
}

/// Driver-level result of one append batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendResult {
    pub written: usize,
}

/// A schema-fixed record store that the engine only appends to.
pub trait DestinationStore {
    /// Path (or other identifier) of the backing store, for reporting.
    fn path(&self) -> String;

    /// Schema of a feature class, `None` when the class does not exist.
    fn collection_schema(&self, name: &str) -> Option<&SourceSchema>;

    /// Append records to a feature class. Implementations must never add
    /// fields; callers are expected to have reduced each record's
    /// attribute set to the collection schema.
    fn append(
        &mut self,
        collection: &str,
        records: Vec<Record>,
        mode: AppendMode,
    ) -> Result<AppendResult>;
}

/// In-memory destination store with fixed per-collection schemas. Stands in
/// for the physical store in embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    path: String,
    schemas: BTreeMap<String, SourceSchema>,
    rows: BTreeMap<String, Vec<Record>>,
    /// When set, the next append to this collection fails with the given
    /// driver message. Lets tests exercise write-failure reporting.
    fail_next: Option<(String, String)>,
}

impl MemoryStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_collection(mut self, name: impl Into<String>, schema: SourceSchema) -> Self {
        let name = name.into();
        self.schemas.insert(name.clone(), schema);
        self.rows.insert(name, Vec::new());
        self
    }

    pub fn fail_next_append(&mut self, collection: impl Into<String>, message: impl Into<String>) {
        self.fail_next = Some((collection.into(), message.into()));
    }

    pub fn rows(&self, collection: &str) -> &[Record] {
        self.rows.get(collection).map_or(&[], Vec::as_slice)
    }
}

impl DestinationStore for MemoryStore {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn collection_schema(&self, name: &str) -> Option<&SourceSchema> {
        self.schemas.get(name)
    }

    fn append(
        &mut self,
        collection: &str,
        records: Vec<Record>,
        mode: AppendMode,
    ) -> Result<AppendResult> {
        debug_assert!(matches!(mode, AppendMode::NoNewFields));
        if let Some((failing, message)) = self.fail_next.take_if(|(c, _)| c.as_str() == collection) {
            return Err(StoreError::Write {
                collection: failing,
                code: 1,
                message,
            });
        }
        let schema = self
            .schemas
            .get(collection)
            .ok_or_else(|| StoreError::UnknownCollection {
                name: collection.to_string(),
            })?;

        // The schema is fixed; any stray attribute is dropped, never added.
        // Field names match case-insensitively, like the physical driver.
        let fields = FieldNameSet::from_schema(schema);
        let mut dropped = 0usize;
        let mut accepted = Vec::with_capacity(records.len());
        for mut record in records {
            let before = record.attributes.len();
            record.attributes.retain(|name, _| fields.contains(name));
            dropped += before - record.attributes.len();
            accepted.push(record);
        }
        if dropped > 0 {
            warn!(collection, dropped, "dropped attributes absent from destination schema");
        }
        let written = accepted.len();
        self.rows
            .entry(collection.to_string())
            .or_default()
            .extend(accepted);
        Ok(AppendResult { written })
    }
}

//! In-memory project implementation used by embedding hosts and tests.

use netdoku_model::{LayerMatch, Record, SourceSchema};

use crate::provider::{JobFilter, SourceLayer, SourceProvider};

#[derive(Debug, Clone)]
pub struct MemoryLayer {
    id: String,
    name: String,
    schema: SourceSchema,
    records: Vec<Record>,
}

impl MemoryLayer {
    pub fn new(name: impl Into<String>, schema: SourceSchema) -> Self {
        let name = name.into();
        Self {
            id: format!("{}_mem", name.to_ascii_lowercase()),
            name,
            schema,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }
}

impl SourceLayer for MemoryLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn schema(&self) -> &SourceSchema {
        &self.schema
    }

    fn records(&self, filter: JobFilter) -> Box<dyn Iterator<Item = Record> + '_> {
        Box::new(
            self.records
                .iter()
                .filter(move |record| filter.matches(record))
                .cloned(),
        )
    }

    fn all_records(&self) -> Box<dyn Iterator<Item = Record> + '_> {
        Box::new(self.records.iter().cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryProject {
    layers: Vec<MemoryLayer>,
}

impl MemoryProject {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layer(mut self, layer: MemoryLayer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn add_layer(&mut self, layer: MemoryLayer) {
        self.layers.push(layer);
    }
}

impl SourceProvider for MemoryProject {
    fn find_layer(&self, name: &str, matching: LayerMatch) -> Option<&dyn SourceLayer> {
        let needle = name.to_ascii_lowercase();
        self.layers
            .iter()
            .find(|layer| match matching {
                LayerMatch::Exact => layer.name.eq_ignore_ascii_case(name),
                LayerMatch::Substring => layer.name.to_ascii_lowercase().contains(&needle),
            })
            .map(|layer| layer as &dyn SourceLayer)
    }

    fn layer_by_id_or_name(&self, key: &str) -> Option<&dyn SourceLayer> {
        self.layers
            .iter()
            .find(|layer| layer.id == key || layer.name == key)
            .map(|layer| layer as &dyn SourceLayer)
    }
}

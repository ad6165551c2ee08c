//! Export orchestration: one outcome per configured source layer.

use anyhow::Result;
use netdoku_model::{ExportOutcome, LayerExport};
use netdoku_source::{JobFilter, SourceError, SourceLayer, SourceProvider};
use netdoku_store::DestinationStore;
use tracing::{info, warn};

use crate::decode::build_decode_cache;
use crate::mapper::{derive_schema, map_record};
use crate::multiplex::append_batch;
use crate::rules::apply_rules;

/// Drives the per-layer pipeline: locate → decode cache → map → rules →
/// append → report. Failures are downgraded to a failed outcome for that
/// layer; the remaining layers are always attempted.
pub struct Exporter<'a> {
    provider: &'a dyn SourceProvider,
    store: &'a mut dyn DestinationStore,
}

impl<'a> Exporter<'a> {
    pub fn new(provider: &'a dyn SourceProvider, store: &'a mut dyn DestinationStore) -> Self {
        Self { provider, store }
    }

    /// Export every configured layer for one job. Always yields exactly
    /// one outcome per configuration entry, in configuration order.
    pub fn export_all(&mut self, job_id: i64, configs: &[LayerExport]) -> Vec<ExportOutcome> {
        configs
            .iter()
            .map(|config| self.export_layer(job_id, config))
            .collect()
    }

    /// Export one source layer's job-scoped records.
    pub fn export_layer(&mut self, job_id: i64, config: &LayerExport) -> ExportOutcome {
        let Some(layer) = self.provider.find_layer(&config.layer, config.matching) else {
            let error = SourceError::LayerNotFound {
                layer: config.layer.clone(),
            };
            warn!(label = %config.label, %error, "export skipped");
            return ExportOutcome::failure(&config.label, error.to_string());
        };
        match self.run(job_id, config, layer) {
            Ok((count, destination)) => {
                info!(label = %config.label, count, "export finished");
                ExportOutcome::success(&config.label, count, destination)
            }
            Err(error) => {
                warn!(label = %config.label, %error, "export failed");
                ExportOutcome::failure(&config.label, error.to_string())
            }
        }
    }

    fn run(
        &mut self,
        job_id: i64,
        config: &LayerExport,
        layer: &dyn SourceLayer,
    ) -> Result<(usize, String)> {
        let cache = build_decode_cache(self.provider, layer);
        let expected = derive_schema(layer.schema(), &config.mapping, &config.derived_fields);

        let mut staged = Vec::new();
        for source_record in layer.records(JobFilter::new(job_id)) {
            let mapped = map_record(&source_record, &config.mapping, layer.schema(), &cache);
            let mut staging = mapped.record;
            apply_rules(&config.rules, &source_record, &mut staging, &cache);
            staged.push(staging);
        }

        let written = append_batch(self.store, &config.feature_class, staged, &expected)?;
        let destination = format!("{}/{}", self.store.path(), config.feature_class);
        Ok((written, destination))
    }
}

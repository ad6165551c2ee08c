//! Host-project seam: layer discovery and job-scoped record access.

use netdoku_model::{LayerMatch, Record, SourceSchema};

/// Restricts which records of a layer participate in one export run.
/// Records carry the job under the `job_id` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobFilter {
    pub job_id: i64,
}

impl JobFilter {
    pub fn new(job_id: i64) -> Self {
        Self { job_id }
    }

    /// Whether a record falls inside this job's scope.
    pub fn matches(&self, record: &Record) -> bool {
        record
            .get("job_id")
            .and_then(netdoku_model::Value::as_int)
            .is_some_and(|id| id == self.job_id)
    }
}

/// One named source layer with a typed schema and geometry-bearing records.
pub trait SourceLayer {
    fn name(&self) -> &str;

    /// Stable layer identifier inside the host project, where one exists.
    fn id(&self) -> &str {
        self.name()
    }

    fn schema(&self) -> &SourceSchema;

    /// Finite, single-pass iteration over the records in job scope, in the
    /// order the host yields them.
    fn records(&self, filter: JobFilter) -> Box<dyn Iterator<Item = Record> + '_>;

    /// Full iteration, used to materialize lookup tables.
    fn all_records(&self) -> Box<dyn Iterator<Item = Record> + '_>;
}

/// The host application's in-memory project.
pub trait SourceProvider {
    /// Locate a layer by name. `Exact` compares case-insensitively on the
    /// whole name; `Substring` matches a case-insensitive fragment.
    fn find_layer(&self, name: &str, matching: LayerMatch) -> Option<&dyn SourceLayer>;

    /// Resolve a lookup descriptor's layer reference, which may be either
    /// a layer id or a layer name.
    fn layer_by_id_or_name(&self, key: &str) -> Option<&dyn SourceLayer>;
}

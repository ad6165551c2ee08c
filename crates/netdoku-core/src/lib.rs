pub mod decode;
pub mod export;
pub mod mapper;
pub mod multiplex;
pub mod rules;

pub use decode::{build_decode_cache, DecodeCache};
pub use export::Exporter;
pub use mapper::{derive_schema, map_record, MapOutcome};
pub use multiplex::append_batch;
pub use rules::apply_rules;

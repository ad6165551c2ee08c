pub mod error;
pub mod fields;
pub mod mapping;
pub mod outcome;
pub mod schema;
pub mod value;

pub use error::{ModelError, Result};
pub use fields::FieldNameSet;
pub use mapping::{
    FieldMap, FieldMapping, LayerExport, LayerMatch, OverrideRule, SelectArm,
};
pub use outcome::ExportOutcome;
pub use schema::{FieldDef, FieldKind, LookupRef, SourceSchema};
pub use value::{Geometry, Record, Value};

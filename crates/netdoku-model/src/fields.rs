use std::collections::HashSet;

use crate::schema::SourceSchema;

/// Field-name membership with geodatabase semantics: the driver treats
/// field names case-insensitively, so "Art" and "ART" address the same
/// destination field. Anything filtering attributes against a schema goes
/// through this set rather than comparing names directly.
#[derive(Debug, Clone)]
pub struct FieldNameSet {
    names: HashSet<String>,
}

impl FieldNameSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_ascii_uppercase())
                .collect(),
        }
    }

    pub fn from_schema(schema: &SourceSchema) -> Self {
        Self::new(schema.field_names())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_ascii_uppercase())
    }
}

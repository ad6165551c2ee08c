use serde::{Deserialize, Serialize};

/// Storage kind of a source or destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Int,
    Real,
    Text,
    Bool,
    Date,
}

/// Descriptor of the lookup backing a coded field: which related layer
/// holds the code table and which of its fields carry key and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRef {
    /// Layer id or layer name, resolved against the host project.
    pub layer: String,
    pub key_field: String,
    pub value_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    /// Present when the field is coded (value-relation backed).
    pub lookup: Option<LookupRef>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            length: None,
            precision: None,
            lookup: None,
        }
    }

    pub fn text(name: impl Into<String>, length: u32) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            length: Some(length),
            precision: None,
            lookup: None,
        }
    }

    #[must_use]
    pub fn with_lookup(mut self, lookup: LookupRef) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn is_coded(&self) -> bool {
        self.lookup.is_some()
    }
}

/// Ordered field list of one layer or feature class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSchema {
    pub fields: Vec<FieldDef>,
}

impl SourceSchema {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

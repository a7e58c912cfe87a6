use super::{Field, FieldId, ForeignKey, KeyType, PrimaryKey};

use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: String,

    /// Resolved table name, including any configured prefix
    pub table_name: String,

    /// Fields contained by the model
    pub fields: Vec<Field>,

    /// The model's primary key, empty if it declares none
    pub primary_key: PrimaryKey,

    /// Foreign keys declared by the model
    pub foreign_keys: Vec<ForeignKey>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    /// Iterate over the fields used for the model's primary key.
    pub fn primary_key_fields(&self) -> impl ExactSizeIterator<Item = &'_ Field> {
        self.primary_key
            .fields
            .iter()
            .map(|pk_field| &self.fields[pk_field.index])
    }

    /// Classifies how the model's primary key becomes known.
    ///
    /// No key fields is `None`. Composite keys are never assigned by the
    /// store, so they are always `Manual`. A single key field is `Auto` when
    /// the store increments it and `Manual` otherwise.
    pub fn key_type(&self) -> KeyType {
        match &self.primary_key.fields[..] {
            [] => KeyType::None,
            [field] if self.field(*field).is_auto_increment() => KeyType::Auto,
            _ => KeyType::Manual,
        }
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<FieldId> for ModelId {
    fn from(value: FieldId) -> Self {
        value.model
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}

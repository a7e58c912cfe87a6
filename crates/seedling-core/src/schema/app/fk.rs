use super::{Field, FieldId, ModelId, Schema};

/// A foreign key declared on a model. Composite keys list one entry per
/// referenced primary-key field, in the target's primary-key order.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub fields: Vec<ForeignKeyField>,
}

#[derive(Debug, Clone)]
pub struct ForeignKeyField {
    /// The field on the source model that is acting as the foreign key
    pub source: FieldId,

    /// The primary-key field on the target model that this FK field maps to.
    pub target: FieldId,
}

impl ForeignKey {
    /// The model the foreign key references.
    pub fn target(&self) -> ModelId {
        self.fields[0].target.model
    }
}

impl ForeignKeyField {
    pub fn source<'a>(&self, schema: &'a Schema) -> &'a Field {
        schema.field(self.source)
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Field {
        schema.field(self.target)
    }
}

use super::Symbol;
use crate::schema::app::{FieldId, ModelId};

/// A primary-key value produced by a written operation, named by the model
/// and field that own it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSymbol {
    pub field: FieldId,
    pub value: Symbol,
}

impl ColumnSymbol {
    pub fn new(field: FieldId, value: impl Into<Symbol>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// The model owning the column.
    pub fn model(&self) -> ModelId {
        self.field.model
    }

    /// Matching is exact on both the owning model and the field.
    pub fn matches(&self, target: FieldId) -> bool {
        self.field == target
    }
}

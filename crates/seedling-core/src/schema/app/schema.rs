use super::{Field, FieldId, Model, ModelId};

use indexmap::IndexMap;

/// The metadata provider: key and foreign-key declarations for every
/// registered model.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model).field(id)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        let id = id.into();
        self.models
            .get(&id)
            .unwrap_or_else(|| panic!("no model with id {id:?} in schema"))
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models.values().find(|model| model.name == name)
    }
}

use seedling_core::schema::app::{KeyType, Model, ModelId};

use std::collections::HashMap;

/// Key types of the models in a batch, resolved once per model.
#[derive(Debug, Default)]
pub(crate) struct KeyTypes {
    resolved: HashMap<ModelId, KeyType>,
}

impl KeyTypes {
    pub(crate) fn resolve(&mut self, model: &Model) -> KeyType {
        *self
            .resolved
            .entry(model.id)
            .or_insert_with(|| model.key_type())
    }
}

use super::{AutoStrategy, ModelId};
use crate::stmt;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Column type
    pub ty: stmt::Type,

    /// True if the field can be null.
    pub nullable: bool,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// Specified if and how the store populates this field for new records
    pub auto: Option<AutoStrategy>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

impl Field {
    pub fn is_auto_increment(&self) -> bool {
        self.auto
            .as_ref()
            .map(|auto| auto.is_increment())
            .unwrap_or(false)
    }

    /// The column name in the backing store.
    pub fn column_name(&self) -> &str {
        self.name.storage_name()
    }
}

impl FieldName {
    pub fn new(app_name: impl Into<String>) -> FieldName {
        FieldName {
            app_name: app_name.into(),
            storage_name: None,
        }
    }

    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.app_name)
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}

use crate::{
    schema::app::ModelId,
    stmt::{IdentityId, Symbol},
};

/// One queued insert command.
#[derive(Debug, Clone)]
pub struct Insert {
    /// Model the row belongs to
    pub model: ModelId,

    /// Table to insert into
    pub table: String,

    /// Column values. Pending values refer to identities assigned earlier in
    /// the same batch.
    pub columns: Vec<Column>,

    /// Columns to read back after the insert, in order
    pub returning: Vec<String>,

    /// Identity the store assigns to this row, and the column receiving it
    pub identity: Option<(IdentityId, String)>,
}

/// A named column value ready for the write command.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub value: Symbol,
}

impl Column {
    pub fn new(name: impl Into<String>, value: impl Into<Symbol>) -> Column {
        Column {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Insert {
    pub fn column(&self, name: &str) -> Option<&Symbol> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| &column.value)
    }
}

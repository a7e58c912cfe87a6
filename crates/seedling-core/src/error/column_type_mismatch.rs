use super::Error;
use crate::stmt::{Type, Value};

/// Error when a value read back from the flat result array cannot be
/// converted to the declared type of the property it is assigned to.
#[derive(Debug)]
pub(super) struct ColumnTypeMismatch {
    model: Box<str>,
    table: Box<str>,
    column: Box<str>,
    value: Value,
    ty: Type,
}

impl std::error::Error for ColumnTypeMismatch {}

impl core::fmt::Display for ColumnTypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column type mismatch: {} (table `{}`) column `{}` cannot hold {:?} as {:?}",
            self.model,
            self.table,
            self.column,
            self.value.infer_ty(),
            self.ty
        )
    }
}

impl Error {
    /// Creates a column type mismatch error.
    pub fn column_type_mismatch(
        model: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
        value: Value,
        ty: Type,
    ) -> Error {
        Error::from(super::ErrorKind::ColumnTypeMismatch(ColumnTypeMismatch {
            model: model.into().into(),
            table: table.into().into(),
            column: column.into().into(),
            value,
            ty,
        }))
    }

    /// Returns `true` if this error is a column type mismatch error.
    pub fn is_column_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ColumnTypeMismatch(_))
    }
}

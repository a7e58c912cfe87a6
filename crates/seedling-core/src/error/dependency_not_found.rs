use super::Error;

/// Error when a foreign key declares a target model that has no operation
/// among the prerequisites of the record being written.
///
/// This is a configuration error: either the record graph is missing an edge
/// in `primary_key_dependencies`, or the foreign-key metadata points at the
/// wrong model. The batch is aborted before anything is queued for the
/// offending operation.
#[derive(Debug)]
pub(super) struct DependencyNotFound {
    model: Box<str>,
    table: Box<str>,
    column: Box<str>,
    target: Box<str>,
    target_column: Box<str>,
}

impl std::error::Error for DependencyNotFound {}

impl core::fmt::Display for DependencyNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "dependency not found: {} (table `{}`) column `{}` references {} column `{}`, \
             but no operation for {} is a prerequisite in this batch",
            self.model, self.table, self.column, self.target, self.target_column, self.target
        )
    }
}

impl Error {
    /// Creates a dependency not found error.
    pub fn dependency_not_found(
        model: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
        target: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::DependencyNotFound(DependencyNotFound {
            model: model.into().into(),
            table: table.into().into(),
            column: column.into().into(),
            target: target.into().into(),
            target_column: target_column.into().into(),
        }))
    }

    /// Returns `true` if this error is a dependency not found error.
    pub fn is_dependency_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DependencyNotFound(_))
    }
}

use super::Error;

/// Error when a foreign key could not be linked because of a reference cycle:
/// either its prerequisite was still being written higher up the same
/// traversal, or the referenced key was itself left unlinked by the cycle.
///
/// Only raised when the engine is configured to reject cycles; otherwise the
/// condition is reported in the write summary.
#[derive(Debug)]
pub(super) struct UnresolvedCycle {
    model: Box<str>,
    table: Box<str>,
    column: Box<str>,
    target: Box<str>,
    target_column: Box<str>,
}

impl std::error::Error for UnresolvedCycle {}

impl core::fmt::Display for UnresolvedCycle {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved cycle: {} (table `{}`) column `{}` references {} column `{}`, \
             whose value depends on the same cycle",
            self.model, self.table, self.column, self.target, self.target_column
        )
    }
}

impl Error {
    /// Creates an unresolved cycle error.
    pub fn unresolved_cycle(
        model: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
        target: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvedCycle(UnresolvedCycle {
            model: model.into().into(),
            table: table.into().into(),
            column: column.into().into(),
            target: target.into().into(),
            target_column: target_column.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolved cycle error.
    pub fn is_unresolved_cycle(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedCycle(_))
    }
}

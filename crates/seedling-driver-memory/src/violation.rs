use seedling_core::stmt::Value;

use std::fmt;

/// A constraint the memory store refused to break.
#[derive(Debug)]
pub(crate) enum Violation {
    DuplicateKey {
        table: String,
        key: Vec<Value>,
    },
    MissingReference {
        table: String,
        column: String,
        target: String,
        key: Vec<Value>,
    },
    UnknownColumn {
        table: String,
        column: String,
    },
    UnassignedIdentity {
        table: String,
        column: String,
        identity: usize,
    },
    IdentityExhausted {
        table: String,
        column: String,
    },
}

impl std::error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateKey { table, key } => {
                write!(f, "duplicate primary key {key:?} in `{table}`")
            }
            Violation::MissingReference {
                table,
                column,
                target,
                key,
            } => write!(
                f,
                "`{table}`.`{column}` references {key:?} in `{target}`, which does not exist"
            ),
            Violation::UnknownColumn { table, column } => {
                write!(f, "table `{table}` has no column `{column}`")
            }
            Violation::UnassignedIdentity {
                table,
                column,
                identity,
            } => write!(
                f,
                "`{table}`.`{column}` uses identity #{identity} before it was assigned"
            ),
            Violation::IdentityExhausted { table, column } => {
                write!(f, "`{table}`.`{column}` has no identities left")
            }
        }
    }
}

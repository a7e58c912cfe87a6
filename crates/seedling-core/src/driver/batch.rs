use super::{Column, Insert};
use crate::{
    schema::app::ModelId,
    stmt::{IdentityId, Symbol},
};

/// Accumulates every command of one write pass so the store can execute them
/// in a single call.
#[derive(Debug, Default)]
pub struct Batch {
    inserts: Vec<Insert>,

    /// Number of identities requested so far
    identities: usize,
}

impl Batch {
    pub fn new() -> Batch {
        Batch::default()
    }

    pub fn queue_insert(
        &mut self,
        model: ModelId,
        table: impl Into<String>,
        columns: Vec<Column>,
        returning: Vec<String>,
    ) {
        self.inserts.push(Insert {
            model,
            table: table.into(),
            columns,
            returning,
            identity: None,
        });
    }

    /// Requests the identity the most recently queued insert will produce in
    /// `column`. The returned symbol stays pending until the batch executes.
    #[track_caller]
    pub fn request_identity(&mut self, column: impl Into<String>) -> Symbol {
        let id = IdentityId(self.identities);

        let Some(insert) = self.inserts.last_mut() else {
            panic!("identity requested before any insert was queued");
        };

        assert!(
            insert.identity.is_none(),
            "insert into `{}` already requested an identity",
            insert.table
        );

        insert.identity = Some((id, column.into()));
        self.identities += 1;

        Symbol::Pending(id)
    }

    pub fn inserts(&self) -> &[Insert] {
        &self.inserts
    }

    pub fn into_inserts(self) -> Vec<Insert> {
        self.inserts
    }

    /// Number of identities the store must assign.
    pub fn num_identities(&self) -> usize {
        self.identities
    }

    pub fn len(&self) -> usize {
        self.inserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty()
    }
}

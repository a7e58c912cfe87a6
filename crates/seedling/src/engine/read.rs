use super::{Binding, OpId, Plan};
use crate::{Graph, Result};
use seedling_core::{driver::ResultCursor, Error};

impl Plan {
    /// Consumes the operation's share of the result stream, then resolves the
    /// foreign keys that were pending when it was written.
    pub(super) fn read_op(
        &mut self,
        graph: &mut Graph,
        cursor: &mut ResultCursor<'_>,
        id: OpId,
    ) -> Result<()> {
        let schema = self.schema.clone();
        let op = &self.ops[id.0];
        let model = schema.model(op.model);

        assert!(!op.read, "read twice: {} operation {:?}", model.name, op.id);

        for field_id in &op.read_back {
            let field = model.field(*field_id);
            let value = cursor.next(field.column_name())?;

            let value = field.ty.cast(value.clone()).map_err(|_| {
                Error::column_type_mismatch(
                    &model.name,
                    &model.table_name,
                    field.column_name(),
                    value,
                    field.ty.clone(),
                )
            })?;

            graph.record_mut(op.node)[field.id.index] = value;
        }

        for binding in op.bindings.iter().filter(|binding| binding.is_pending()) {
            let Binding::Linked {
                source,
                symbol,
                prerequisite,
            } = binding
            else {
                continue;
            };

            let upstream = &self.ops[prerequisite.0];
            debug_assert!(upstream.read, "prerequisite read after its dependent");

            let value = graph.node(upstream.node).record()[symbol.field.index].clone();
            graph.record_mut(op.node)[source.index] = value;
        }

        self.ops[id.0].read = true;

        Ok(())
    }
}

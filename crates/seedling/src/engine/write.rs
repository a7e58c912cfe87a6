use super::{
    operation::WriteState, resolve, Binding, CyclePolicy, OpId, Plan, ReadPolicy,
    UnlinkedReference,
};
use crate::{Graph, NodeId, Result};
use seedling_core::{
    driver::{Batch, Column},
    schema::app::Model,
    stmt::{ColumnSymbol, Symbol, Value},
    Error,
};

impl Plan {
    /// Guarded entry point of the recursive write.
    pub(super) fn write_op(&mut self, graph: &mut Graph, batch: &mut Batch, id: OpId) -> Result<()> {
        if !self.guard.enter(id) {
            tracing::trace!(op = id.0, "operation already being written; skipping reentrant write");
            return Ok(());
        }

        let res = self.write_entered(graph, batch, id);

        let left = self.guard.leave();
        debug_assert_eq!(left, id);

        res
    }

    fn write_entered(&mut self, graph: &mut Graph, batch: &mut Batch, id: OpId) -> Result<()> {
        if self.ops[id.0].state == WriteState::Written {
            return Ok(());
        }

        let schema = self.schema.clone();
        let node_id = self.ops[id.0].node;
        let key_type = self.ops[id.0].key_type;
        let model = schema.model(self.ops[id.0].model);

        let prerequisites = resolve::prerequisites(graph.node(node_id), &self.ops);
        resolve::check_dependencies(&schema, model, graph.node(node_id), &prerequisites, &self.ops)?;

        self.ops[id.0].state = WriteState::Writing;

        for prerequisite in &prerequisites {
            self.write_op(graph, batch, *prerequisite)?;
        }

        let bindings = resolve::bind_foreign_keys(
            &schema,
            model,
            graph.node(node_id),
            &prerequisites,
            &self.ops,
        )?;

        self.unlink(model, node_id, &bindings)?;

        // The value written for each field, `None` if the column is omitted
        let mut written: Vec<Option<Symbol>> = Vec::with_capacity(model.fields.len());
        let mut read_back = vec![];

        let node = graph.node(node_id);

        for field in &model.fields {
            let index = field.id.index;
            let explicit = node.is_explicitly_set(index);
            let is_auto_key = field.primary_key && key_type.is_auto() && !explicit;

            let value = match bindings.iter().find(|binding| binding.source() == field.id) {
                Some(Binding::Linked { symbol, .. }) => Some(symbol.value.clone()),
                Some(Binding::Null { .. }) => Some(Symbol::Known(Value::Null)),
                Some(Binding::Unlinked { .. }) => None,
                Some(Binding::Explicit { .. }) => Some(node.record()[index].clone().into()),
                None if is_auto_key => None,
                None => Some(node.record()[index].clone().into()),
            };

            let read = match &value {
                _ if is_auto_key => true,
                Some(Symbol::Pending(_)) => true,
                Some(Symbol::Known(Value::Null)) | None => {
                    self.config.read_policy == ReadPolicy::Unset && !explicit
                }
                Some(Symbol::Known(_)) => false,
            };

            if read {
                read_back.push(field.id);
            }

            written.push(value);
        }

        // Linked keys that are already known are copied onto the record now
        let record = graph.record_mut(node_id);
        for (field, value) in model.fields.iter().zip(&written) {
            if let Some(Symbol::Known(value)) = value {
                record[field.id.index] = value.clone();
            }
        }

        let columns = model
            .fields
            .iter()
            .zip(&written)
            .filter_map(|(field, value)| {
                let value = value.clone()?;
                Some(Column::new(field.column_name(), value))
            })
            .collect();

        let returning = read_back
            .iter()
            .map(|field| model.field(*field).column_name().to_string())
            .collect();

        let op = &mut self.ops[id.0];
        assert!(
            op.order.is_none(),
            "double write of {} operation {:?}",
            model.name,
            op.id
        );

        let order = self.counter.next_order();
        debug_assert_eq!(order, self.ordered.len());
        op.order = Some(order);
        self.ordered.push(id);

        batch.queue_insert(model.id, &model.table_name, columns, returning);

        // An explicitly set auto key is written as-is and never requested
        for field in model.primary_key_fields() {
            match &written[field.id.index] {
                Some(value) => op.captured.push(ColumnSymbol::new(field.id, value.clone())),
                None if key_type.is_auto() => op.captured.push(ColumnSymbol::new(
                    field.id,
                    batch.request_identity(field.column_name()),
                )),
                None => op.unresolved_keys.push(field.id),
            }
        }

        op.bindings = bindings;
        op.read_back = read_back;
        op.state = WriteState::Written;

        tracing::debug!(
            model = %model.name,
            table = %model.table_name,
            order,
            read_back = op.read_back.len(),
            "queued insert"
        );

        Ok(())
    }

    /// Applies the cycle policy to foreign keys left unlinked by a reference
    /// cycle.
    fn unlink(&mut self, model: &Model, node: NodeId, bindings: &[Binding]) -> Result<()> {
        for binding in bindings {
            let Binding::Unlinked {
                source,
                prerequisite,
            } = binding
            else {
                continue;
            };

            let field = model.field(*source);
            let target = &self.ops[prerequisite.0];
            let target_model = &self.schema.model(target.model).name;
            let target_column = model
                .foreign_keys
                .iter()
                .flat_map(|fk| &fk.fields)
                .find(|fk_field| fk_field.source == *source)
                .map(|fk_field| self.schema.field(fk_field.target).column_name())
                .unwrap_or_default();

            match self.config.cycle_policy {
                CyclePolicy::Reject => {
                    return Err(Error::unresolved_cycle(
                        &model.name,
                        &model.table_name,
                        field.column_name(),
                        target_model,
                        target_column,
                    ));
                }
                CyclePolicy::Report => {
                    tracing::warn!(
                        model = %model.name,
                        column = field.column_name(),
                        target = %target_model,
                        target_column,
                        "foreign key left unlinked by a reference cycle"
                    );

                    self.unlinked.push(UnlinkedReference {
                        node,
                        field: *source,
                        target: target.node,
                    });
                }
            }
        }

        Ok(())
    }
}

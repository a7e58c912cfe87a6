use super::{operation::WriteState, InsertOperation, OpId};
use crate::RecordNode;
use seedling_core::{
    schema::app::{FieldId, ForeignKey, ForeignKeyField, Model, Schema},
    stmt::ColumnSymbol,
    Error, Result,
};

/// How one foreign-key field receives its value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Binding {
    /// Matched a key symbol captured by a prerequisite.
    Linked {
        source: FieldId,
        symbol: ColumnSymbol,
        prerequisite: OpId,
    },

    /// The caller set the value on the record.
    Explicit { source: FieldId },

    /// Optional reference with no prerequisite of the target model.
    Null { source: FieldId },

    /// The prerequisite is still being written further up a cycle, or the
    /// key it references was itself left unlinked by one.
    Unlinked { source: FieldId, prerequisite: OpId },
}

impl Binding {
    pub(crate) fn source(&self) -> FieldId {
        match self {
            Binding::Linked { source, .. }
            | Binding::Explicit { source }
            | Binding::Null { source }
            | Binding::Unlinked { source, .. } => *source,
        }
    }

    /// `true` if linked to a key the store has not assigned yet.
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Binding::Linked { symbol, .. } if symbol.value.is_pending())
    }
}

/// Peer operations owning the records that `node`'s keys derive from, in
/// dependency order.
pub(super) fn prerequisites(node: &RecordNode, ops: &[InsertOperation]) -> Vec<OpId> {
    node.primary_key_dependencies()
        .iter()
        .map(|dep| ops[dep.index()].id)
        .collect()
}

/// Fails if a required foreign key has no prerequisite of its target model.
///
/// Runs before any prerequisite is written so that nothing is queued for an
/// operation that cannot be linked.
pub(super) fn check_dependencies(
    schema: &Schema,
    model: &Model,
    node: &RecordNode,
    prerequisites: &[OpId],
    ops: &[InsertOperation],
) -> Result<()> {
    for fk in &model.foreign_keys {
        if is_explicit(fk, node) || candidates(fk, prerequisites, ops).next().is_some() {
            continue;
        }

        let missing = fk.fields.iter().find(|fk_field| {
            let field = fk_field.source(schema);
            !node.is_explicitly_set(field.id.index) && !field.nullable
        });

        if let Some(fk_field) = missing {
            return Err(dependency_not_found(schema, model, fk_field));
        }
    }

    Ok(())
}

/// Matches every foreign-key field of `model` to the key symbol of the
/// prerequisite it references.
///
/// Matching is exact on the target model and field. When several
/// prerequisites share the target model, the first written one in dependency
/// order wins.
pub(super) fn bind_foreign_keys(
    schema: &Schema,
    model: &Model,
    node: &RecordNode,
    prerequisites: &[OpId],
    ops: &[InsertOperation],
) -> Result<Vec<Binding>> {
    let mut bindings = vec![];

    for fk in &model.foreign_keys {
        let explicit = |source: FieldId| {
            node.is_explicitly_set(source.index)
                .then_some(Binding::Explicit { source })
        };

        let candidates: Vec<_> = candidates(fk, prerequisites, ops).collect();

        let Some(first) = candidates.first() else {
            bindings.extend(fk.fields.iter().map(|fk_field| {
                explicit(fk_field.source).unwrap_or(Binding::Null {
                    source: fk_field.source,
                })
            }));
            continue;
        };

        let Some(written) = candidates.iter().find(|op| op.state == WriteState::Written) else {
            debug_assert_eq!(first.state, WriteState::Writing);

            bindings.extend(fk.fields.iter().map(|fk_field| {
                explicit(fk_field.source).unwrap_or(Binding::Unlinked {
                    source: fk_field.source,
                    prerequisite: first.id,
                })
            }));
            continue;
        };

        for fk_field in &fk.fields {
            if let Some(binding) = explicit(fk_field.source) {
                bindings.push(binding);
                continue;
            }

            // The referenced key was left without a value by a cycle
            if written.unresolved_keys.contains(&fk_field.target) {
                bindings.push(Binding::Unlinked {
                    source: fk_field.source,
                    prerequisite: written.id,
                });
                continue;
            }

            let Some(symbol) = written
                .captured
                .iter()
                .find(|symbol| symbol.matches(fk_field.target))
            else {
                return Err(dependency_not_found(schema, model, fk_field));
            };

            bindings.push(Binding::Linked {
                source: fk_field.source,
                symbol: symbol.clone(),
                prerequisite: written.id,
            });
        }
    }

    Ok(bindings)
}

fn dependency_not_found(schema: &Schema, model: &Model, fk_field: &ForeignKeyField) -> Error {
    Error::dependency_not_found(
        &model.name,
        &model.table_name,
        fk_field.source(schema).column_name(),
        &schema.model(fk_field.target.model).name,
        fk_field.target(schema).column_name(),
    )
}

fn is_explicit(fk: &ForeignKey, node: &RecordNode) -> bool {
    fk.fields
        .iter()
        .all(|fk_field| node.is_explicitly_set(fk_field.source.index))
}

fn candidates<'a>(
    fk: &'a ForeignKey,
    prerequisites: &'a [OpId],
    ops: &'a [InsertOperation],
) -> impl Iterator<Item = &'a InsertOperation> + 'a {
    prerequisites
        .iter()
        .map(move |id| &ops[id.0])
        .filter(move |op| op.model == fk.target())
}

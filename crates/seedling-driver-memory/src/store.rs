use super::{Config, Violation};
use seedling_core::{
    driver::{Batch, FlatResults, Insert},
    schema::app::{Model, Schema},
    stmt::{Symbol, Value},
    Error, Result,
};

use indexmap::IndexMap;

#[derive(Debug, Default, Clone)]
pub(crate) struct Store {
    tables: IndexMap<String, Table>,
}

#[derive(Debug, Default, Clone)]
struct Table {
    rows: Vec<Row>,

    /// Last identity handed out, if any
    last_identity: Option<i64>,
}

/// One stored row, with a value for every column of its model.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    values: IndexMap<String, Value>,
}

impl Store {
    /// Applies every insert of `batch` to a copy of the store.
    ///
    /// Returns the copy together with the flat result array: the `returning`
    /// columns of each insert, concatenated in queue order.
    pub(crate) fn stage(
        &self,
        schema: &Schema,
        config: &Config,
        batch: Batch,
    ) -> Result<(Store, FlatResults)> {
        let mut staged = self.clone();
        let mut identities = vec![None; batch.num_identities()];
        let mut results = FlatResults::new();

        for insert in batch.into_inserts() {
            let model = schema.model(insert.model);
            let row = staged.insert(model, config, &insert, &mut identities)?;

            if config.enforce_foreign_keys {
                staged.check_references(schema, model, &row)?;
            }

            for column in &insert.returning {
                let Some(value) = row.get(column) else {
                    return Err(Error::driver(Violation::UnknownColumn {
                        table: insert.table.clone(),
                        column: column.clone(),
                    }));
                };
                results.push(column, value.clone());
            }

            tracing::trace!(table = %insert.table, "row inserted");
            staged.table(&insert.table).rows.push(row);
        }

        Ok((staged, results))
    }

    pub(crate) fn rows(&self, table: &str) -> Vec<Row> {
        self.tables
            .get(table)
            .map(|table| table.rows.clone())
            .unwrap_or_default()
    }

    pub(crate) fn clear(&mut self) {
        self.tables.clear();
    }

    fn table(&mut self, name: &str) -> &mut Table {
        self.tables.entry(name.to_string()).or_default()
    }

    /// Builds the row for `insert` without storing it.
    fn insert(
        &mut self,
        model: &Model,
        config: &Config,
        insert: &Insert,
        identities: &mut [Option<Value>],
    ) -> Result<Row> {
        let mut values: IndexMap<_, _> = model
            .fields
            .iter()
            .map(|field| (field.column_name().to_string(), Value::Null))
            .collect();

        for column in &insert.columns {
            let value = match &column.value {
                Symbol::Known(value) => value.clone(),
                Symbol::Pending(id) => match identities.get(id.0).cloned().flatten() {
                    Some(value) => value,
                    None => {
                        return Err(Error::driver(Violation::UnassignedIdentity {
                            table: insert.table.clone(),
                            column: column.name.clone(),
                            identity: id.0,
                        }))
                    }
                },
            };

            let Some(slot) = values.get_mut(&column.name) else {
                return Err(Error::driver(Violation::UnknownColumn {
                    table: insert.table.clone(),
                    column: column.name.clone(),
                }));
            };
            *slot = value;
        }

        if let Some((id, column)) = &insert.identity {
            let Some(field) = model.fields.iter().find(|f| f.column_name() == column) else {
                return Err(Error::driver(Violation::UnknownColumn {
                    table: insert.table.clone(),
                    column: column.clone(),
                }));
            };

            let table = self.table(&insert.table);
            let next = match table.last_identity {
                Some(last) => last.checked_add(1).ok_or_else(|| {
                    Error::driver(Violation::IdentityExhausted {
                        table: insert.table.clone(),
                        column: column.clone(),
                    })
                })?,
                None => config
                    .identity_start
                    .get(&insert.table)
                    .copied()
                    .unwrap_or(1),
            };
            table.last_identity = Some(next);

            let value = field.ty.cast(Value::I64(next))?;
            identities[id.0] = Some(value.clone());
            values[column.as_str()] = value;
        }

        for (column, value) in values.iter_mut() {
            if !value.is_null() {
                continue;
            }

            if let Some(default) = config
                .column_defaults
                .get(&(insert.table.clone(), column.clone()))
            {
                *value = default.clone();
            }
        }

        let row = Row { values };

        if !model.primary_key.is_empty() {
            let key = row.key(model, model.primary_key.fields.iter().copied());
            let table = self.table(&insert.table);

            if table
                .rows
                .iter()
                .any(|existing| existing.key(model, model.primary_key.fields.iter().copied()) == key)
            {
                return Err(Error::driver(Violation::DuplicateKey {
                    table: insert.table.clone(),
                    key,
                }));
            }
        }

        Ok(row)
    }

    fn check_references(&self, schema: &Schema, model: &Model, row: &Row) -> Result<()> {
        for fk in &model.foreign_keys {
            let key = row.key(model, fk.fields.iter().map(|fk_field| fk_field.source));

            if key.iter().any(Value::is_null) {
                continue;
            }

            let target = schema.model(fk.target());
            let found = self.tables.get(&target.table_name).is_some_and(|table| {
                table.rows.iter().any(|candidate| {
                    candidate.key(target, fk.fields.iter().map(|fk_field| fk_field.target)) == key
                })
            });

            if !found {
                let column = model.field(fk.fields[0].source).column_name();

                return Err(Error::driver(Violation::MissingReference {
                    table: model.table_name.clone(),
                    column: column.to_string(),
                    target: target.table_name.clone(),
                    key,
                }));
            }
        }

        Ok(())
    }
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }

    fn key(
        &self,
        model: &Model,
        fields: impl Iterator<Item = seedling_core::schema::app::FieldId>,
    ) -> Vec<Value> {
        fields
            .map(|field| {
                let column = model.field(field).column_name();
                self.values.get(column).cloned().unwrap_or_default()
            })
            .collect()
    }
}

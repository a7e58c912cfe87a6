use super::app::{FieldId, Schema};
use crate::{Error, Result};

use std::collections::HashSet;

pub(super) fn verify(schema: &Schema) -> Result<()> {
    for model in schema.models() {
        for field in &model.fields {
            if field.is_auto_increment() && !field.ty.is_integer() {
                return Err(Error::invalid_schema(format!(
                    "auto-increment field `{}::{}` must be an integer, found {:?}",
                    model.name, field.name, field.ty
                )));
            }
        }

        let mut sources = HashSet::<FieldId>::new();

        for fk in &model.foreign_keys {
            let target = schema.model(fk.target());

            if fk.fields.len() != target.primary_key.fields.len() {
                return Err(Error::invalid_schema(format!(
                    "foreign key on `{}` must cover the whole primary key of `{}`",
                    model.name, target.name
                )));
            }

            for fk_field in &fk.fields {
                let source = fk_field.source(schema);
                let target_field = fk_field.target(schema);

                if !sources.insert(fk_field.source) {
                    return Err(Error::invalid_schema(format!(
                        "field `{}::{}` belongs to more than one foreign key",
                        model.name, source.name
                    )));
                }

                if !target_field.primary_key {
                    return Err(Error::invalid_schema(format!(
                        "foreign key `{}::{}` targets `{}::{}`, which is not a primary-key field",
                        model.name, source.name, target.name, target_field.name
                    )));
                }

                if source.ty != target_field.ty {
                    return Err(Error::invalid_schema(format!(
                        "foreign key `{}::{}` is {:?} but `{}::{}` is {:?}",
                        model.name,
                        source.name,
                        source.ty,
                        target.name,
                        target_field.name,
                        target_field.ty
                    )));
                }
            }
        }
    }

    Ok(())
}

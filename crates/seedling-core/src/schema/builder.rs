use super::app::{self, AutoStrategy, FieldName, ModelId, PrimaryKey};
use crate::{stmt, Error, Result};

use heck::ToSnakeCase;
use indexmap::IndexMap;

/// Declares models and resolves them into a verified [`app::Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Prefix prepended to every table name
    table_name_prefix: Option<String>,

    models: Vec<ModelBuilder>,
}

#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    table_name: Option<String>,
    fields: Vec<FieldBuilder>,
    foreign_keys: Vec<ForeignKeyDecl>,
}

#[derive(Debug)]
pub struct FieldBuilder {
    name: String,
    column_name: Option<String>,
    ty: stmt::Type,
    nullable: bool,
    primary_key: bool,
    auto: Option<AutoStrategy>,
}

/// Foreign key as declared, still naming fields and models by string.
#[derive(Debug)]
struct ForeignKeyDecl {
    source: Vec<String>,
    target_model: String,
    target: Vec<String>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Declare a model. Models receive ids in declaration order.
    pub fn model(&mut self, name: &str, f: impl FnOnce(&mut ModelBuilder)) -> &mut Self {
        let mut model = ModelBuilder {
            name: name.to_string(),
            table_name: None,
            fields: vec![],
            foreign_keys: vec![],
        };
        f(&mut model);
        self.models.push(model);
        self
    }

    pub fn build(&self) -> Result<app::Schema> {
        let mut ids = IndexMap::new();

        for (index, model) in self.models.iter().enumerate() {
            if ids.insert(model.name.as_str(), ModelId(index)).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is declared more than once",
                    model.name
                )));
            }
        }

        let mut schema = app::Schema::default();

        for (index, model) in self.models.iter().enumerate() {
            let model = self.build_model(model, ModelId(index), &ids)?;
            schema.models.insert(model.id, model);
        }

        super::verify::verify(&schema)?;

        Ok(schema)
    }

    fn build_model(
        &self,
        model: &ModelBuilder,
        id: ModelId,
        ids: &IndexMap<&str, ModelId>,
    ) -> Result<app::Model> {
        let mut fields = Vec::with_capacity(model.fields.len());

        for (index, field) in model.fields.iter().enumerate() {
            if model.fields[..index].iter().any(|f| f.name == field.name) {
                return Err(Error::invalid_schema(format!(
                    "field `{}::{}` is declared more than once",
                    model.name, field.name
                )));
            }

            fields.push(app::Field {
                id: id.field(index),
                name: FieldName {
                    app_name: field.name.clone(),
                    storage_name: field.column_name.clone(),
                },
                ty: field.ty.clone(),
                nullable: field.nullable,
                primary_key: field.primary_key,
                auto: field.auto.clone(),
            });
        }

        let primary_key = PrimaryKey {
            fields: fields
                .iter()
                .filter(|field| field.primary_key)
                .map(|field| field.id)
                .collect(),
        };

        let foreign_keys = model
            .foreign_keys
            .iter()
            .map(|decl| self.resolve_foreign_key(model, id, decl, ids))
            .collect::<Result<Vec<_>>>()?;

        let table_name = model
            .table_name
            .clone()
            .unwrap_or_else(|| model.name.to_snake_case());

        Ok(app::Model {
            id,
            name: model.name.clone(),
            table_name: match &self.table_name_prefix {
                Some(prefix) => format!("{prefix}{table_name}"),
                None => table_name,
            },
            fields,
            primary_key,
            foreign_keys,
        })
    }

    fn resolve_foreign_key(
        &self,
        model: &ModelBuilder,
        id: ModelId,
        decl: &ForeignKeyDecl,
        ids: &IndexMap<&str, ModelId>,
    ) -> Result<app::ForeignKey> {
        let Some(&target_id) = ids.get(decl.target_model.as_str()) else {
            return Err(Error::invalid_schema(format!(
                "foreign key on `{}` references unknown model `{}`",
                model.name, decl.target_model
            )));
        };

        if decl.source.is_empty() || decl.source.len() != decl.target.len() {
            return Err(Error::invalid_schema(format!(
                "foreign key on `{}` maps {} field(s) to {} field(s) of `{}`",
                model.name,
                decl.source.len(),
                decl.target.len(),
                decl.target_model
            )));
        }

        let target_model = &self.models[target_id.0];

        let fields = decl
            .source
            .iter()
            .zip(&decl.target)
            .map(|(source, target)| {
                let source = model.field_index(source).ok_or_else(|| {
                    Error::invalid_schema(format!(
                        "foreign key source field `{}::{}` not found",
                        model.name, source
                    ))
                })?;

                let target = target_model.field_index(target).ok_or_else(|| {
                    Error::invalid_schema(format!(
                        "foreign key target field `{}::{}` not found",
                        target_model.name, target
                    ))
                })?;

                Ok(app::ForeignKeyField {
                    source: id.field(source),
                    target: target_id.field(target),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(app::ForeignKey { fields })
    }
}

impl ModelBuilder {
    /// Override the table name derived from the model name.
    pub fn table_name(&mut self, name: &str) -> &mut Self {
        self.table_name = Some(name.to_string());
        self
    }

    /// Declare a field. Fields are indexed in declaration order.
    pub fn field(&mut self, name: &str, ty: stmt::Type) -> &mut FieldBuilder {
        self.fields.push(FieldBuilder {
            name: name.to_string(),
            column_name: None,
            ty,
            nullable: false,
            primary_key: false,
            auto: None,
        });
        self.fields.last_mut().unwrap()
    }

    /// Declare a foreign key from `source` fields of this model to the
    /// `target` primary-key fields of `target_model`.
    pub fn foreign_key<const N: usize>(
        &mut self,
        source: [&str; N],
        target_model: &str,
        target: [&str; N],
    ) -> &mut Self {
        self.foreign_keys.push(ForeignKeyDecl {
            source: source.iter().map(|name| name.to_string()).collect(),
            target_model: target_model.to_string(),
            target: target.iter().map(|name| name.to_string()).collect(),
        });
        self
    }

    fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

impl FieldBuilder {
    pub fn primary_key(&mut self) -> &mut Self {
        self.primary_key = true;
        self
    }

    /// The store assigns this field on insert.
    pub fn auto_increment(&mut self) -> &mut Self {
        self.auto = Some(AutoStrategy::Increment);
        self
    }

    pub fn nullable(&mut self) -> &mut Self {
        self.nullable = true;
        self
    }

    /// Store the field under a different column name.
    pub fn column_name(&mut self, name: &str) -> &mut Self {
        self.column_name = Some(name.to_string());
        self
    }
}

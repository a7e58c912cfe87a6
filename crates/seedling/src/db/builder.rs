use super::Db;
use crate::{
    engine::{Config, CyclePolicy, ReadPolicy},
    Result,
};
use seedling_core::{
    driver::Driver,
    schema::{self, app, ModelBuilder},
};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    config: Config,
}

impl Builder {
    /// Declare a model.
    pub fn model(&mut self, name: &str, f: impl FnOnce(&mut ModelBuilder)) -> &mut Self {
        self.core.model(name, f);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    pub fn read_policy(&mut self, policy: ReadPolicy) -> &mut Self {
        self.config.read_policy = policy;
        self
    }

    pub fn cycle_policy(&mut self, policy: CyclePolicy) -> &mut Self {
        self.config.cycle_policy = policy;
        self
    }

    pub fn build_app_schema(&self) -> Result<app::Schema> {
        self.core.build()
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let schema = self.build_app_schema()?;

        tracing::debug!(models = schema.models.len(), "built schema");

        Ok(Db {
            schema: Arc::new(schema),
            driver: Arc::new(driver),
            config: self.config.clone(),
        })
    }
}

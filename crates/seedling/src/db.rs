mod builder;
pub use builder::Builder;

use crate::{
    engine::{Config, Plan, WriteSummary},
    Graph, Result,
};
use seedling_core::{
    bail,
    driver::{Batch, Driver},
    Schema,
};

use std::sync::Arc;

/// A handle to a backing store and the schema of the records persisted into
/// it.
#[derive(Debug, Clone)]
pub struct Db {
    schema: Arc<Schema>,
    driver: Arc<dyn Driver>,
    config: Config,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starts an empty record graph over this database's schema.
    pub fn graph(&self) -> Graph {
        Graph::new(self.schema.clone())
    }

    /// Persists every record of `graph` with one batch execution.
    ///
    /// Store-assigned keys, and foreign keys referencing them, are written
    /// back into the graph once the batch has executed.
    pub async fn insert_graph(&self, graph: &mut Graph) -> Result<WriteSummary> {
        if !Arc::ptr_eq(&self.schema, graph.schema()) {
            bail!("graph was not created from this database");
        }

        let mut plan = Plan::build(graph, self.config.clone());
        let mut batch = Batch::new();
        let summary = plan.write_all(graph, &mut batch)?;

        tracing::debug!(
            inserts = batch.len(),
            identities = batch.num_identities(),
            unlinked = summary.unlinked.len(),
            "executing batch"
        );

        let mut connection = self.driver.connect().await?;
        let results = connection.exec(&self.schema, batch).await?;

        plan.read_all(graph, &results)?;

        Ok(summary)
    }

    /// Drops all data held by the backing store.
    pub async fn reset_db(&self) -> Result<()> {
        self.driver.connect().await?.reset_db().await
    }
}

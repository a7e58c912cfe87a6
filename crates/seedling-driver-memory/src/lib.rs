mod builder;
pub use builder::Builder;

mod store;
pub use store::Row;
use store::Store;

mod violation;
use violation::Violation;

use seedling_core::{
    async_trait,
    driver::{Batch, Driver, FlatResults},
    Result, Schema,
};
use tokio::sync::Mutex;

use std::{collections::HashMap, sync::Arc};

/// A backing store that keeps every table in process memory.
///
/// Clones share the same tables, so a test can keep a handle to inspect rows
/// after handing the driver to a `Db`.
#[derive(Debug, Clone)]
pub struct Memory {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    config: Config,
    store: Mutex<Store>,
}

#[derive(Debug, Clone, Default)]
struct Config {
    /// Reject rows whose non-null foreign keys reference no existing row
    enforce_foreign_keys: bool,

    /// First identity assigned per table
    identity_start: HashMap<String, i64>,

    /// Values stored in place of null, per table and column
    column_defaults: HashMap<(String, String), seedling_core::stmt::Value>,
}

#[derive(Debug)]
pub struct Connection {
    shared: Arc<Shared>,
}

impl Memory {
    pub fn new() -> Memory {
        Builder::default().build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Snapshot of the rows stored in `table`, in insertion order.
    pub async fn rows(&self, table: &str) -> Vec<Row> {
        self.shared.store.lock().await.rows(table)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Memory::new()
    }
}

#[async_trait]
impl Driver for Memory {
    async fn connect(&self) -> Result<Box<dyn seedling_core::Connection>> {
        Ok(Box::new(Connection {
            shared: self.shared.clone(),
        }))
    }
}

#[async_trait]
impl seedling_core::Connection for Connection {
    async fn exec(&mut self, schema: &Arc<Schema>, batch: Batch) -> Result<FlatResults> {
        let mut store = self.shared.store.lock().await;

        let span = tracing::debug_span!(
            "exec",
            inserts = batch.len(),
            identities = batch.num_identities()
        );

        // Every insert lands in a staged copy; the store only sees the batch
        // once all of it succeeded.
        let (staged, results) = span.in_scope(|| store.stage(schema, &self.shared.config, batch))?;
        *store = staged;

        tracing::debug!(results = results.len(), "batch committed");

        Ok(results)
    }

    async fn reset_db(&mut self) -> Result<()> {
        self.shared.store.lock().await.clear();
        Ok(())
    }
}

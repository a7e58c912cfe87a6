use crate::{ExecLog, Executed};
use seedling_core::{
    async_trait,
    driver::{Batch, Connection, Driver, FlatResults},
    Result, Schema,
};

use std::sync::Arc;

/// A driver wrapper that logs every executed batch for testing purposes
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,
    log: ExecLog,
}

impl LoggingDriver {
    pub fn new(inner: Box<dyn Driver>, log: ExecLog) -> Self {
        LoggingDriver { inner, log }
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            log: self.log.clone(),
        }))
    }
}

#[derive(Debug)]
struct LoggingConnection {
    inner: Box<dyn Connection>,
    log: ExecLog,
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn exec(&mut self, schema: &Arc<Schema>, batch: Batch) -> Result<FlatResults> {
        let inserts = batch.inserts().to_vec();
        let results = self.inner.exec(schema, batch).await?;

        self.log.push(Executed {
            inserts,
            results: results.clone(),
        });

        Ok(results)
    }

    async fn reset_db(&mut self) -> Result<()> {
        self.inner.reset_db().await
    }
}

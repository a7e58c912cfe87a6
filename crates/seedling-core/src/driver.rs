mod batch;
pub use batch::Batch;

mod response;
pub use response::{FlatResults, ResultCursor, ResultEntry};

pub mod operation;
pub use operation::{Column, Insert};

use crate::{async_trait, schema::app::Schema};

use std::{fmt::Debug, sync::Arc};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a connection to the backing store.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute every insert queued in `batch` exactly once, in queue order.
    ///
    /// The returned array holds, for each insert in queue order, one entry per
    /// column in its `returning` list, in that order.
    async fn exec(&mut self, schema: &Arc<Schema>, batch: Batch) -> crate::Result<FlatResults>;

    /// Drop all stored data.
    async fn reset_db(&mut self) -> crate::Result<()>;
}

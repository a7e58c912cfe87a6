#[macro_use]
mod macros;

pub mod db;

mod exec_log;
pub use exec_log::{ExecLog, Executed};

pub mod fixtures;

mod logging_driver;
pub use logging_driver::LoggingDriver;

use seedling::{db::Builder, Db};
use seedling_core::stmt::Value;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    async fn setup(&self, builder: Builder) -> Db {
        let db = self.connect(builder).await.unwrap();
        db.reset_db().await.unwrap();
        db
    }

    async fn connect(&self, builder: Builder) -> seedling::Result<Db>;

    /// Every batch executed through databases connected by this setup
    fn exec_log(&self) -> ExecLog;

    /// Values stored in `column` of `table`, in insertion order
    async fn stored_column(&self, table: &str, column: &str) -> Vec<Value>;
}

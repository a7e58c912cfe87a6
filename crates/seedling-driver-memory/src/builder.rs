use super::{Config, Memory, Shared, Store};
use seedling_core::stmt::Value;
use tokio::sync::Mutex;

use std::sync::Arc;

#[derive(Debug)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Reject rows whose foreign keys reference a row that does not exist.
    /// Enabled by default. Null foreign keys are never checked.
    pub fn enforce_foreign_keys(&mut self, enforce: bool) -> &mut Self {
        self.config.enforce_foreign_keys = enforce;
        self
    }

    /// First identity assigned in `table`. Identities start at 1 otherwise.
    pub fn identity_start(&mut self, table: &str, start: i64) -> &mut Self {
        self.config.identity_start.insert(table.to_string(), start);
        self
    }

    /// Stores `value` in `table.column` whenever a row is inserted with that
    /// column null or omitted.
    pub fn column_default(
        &mut self,
        table: &str,
        column: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.config
            .column_defaults
            .insert((table.to_string(), column.to_string()), value.into());
        self
    }

    pub fn build(&mut self) -> Memory {
        Memory {
            shared: Arc::new(Shared {
                config: self.config.clone(),
                store: Mutex::new(Store::default()),
            }),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            config: Config {
                enforce_foreign_keys: true,
                ..Config::default()
            },
        }
    }
}

use seedling::{db, Db};
use seedling_core::stmt::Value;
use seedling_driver_memory::Memory;

use crate::{ExecLog, LoggingDriver, Setup};

pub struct SetupMemory {
    memory: Memory,
    log: ExecLog,
}

impl SetupMemory {
    pub fn new() -> Self {
        Self::with(Memory::new())
    }

    pub fn with(memory: Memory) -> Self {
        SetupMemory {
            memory,
            log: ExecLog::default(),
        }
    }
}

impl Default for SetupMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for SetupMemory {
    async fn connect(&self, mut builder: db::Builder) -> seedling::Result<Db> {
        builder.build(LoggingDriver::new(
            Box::new(self.memory.clone()),
            self.log.clone(),
        ))
    }

    fn exec_log(&self) -> ExecLog {
        self.log.clone()
    }

    async fn stored_column(&self, table: &str, column: &str) -> Vec<Value> {
        self.memory
            .rows(table)
            .await
            .iter()
            .map(|row| row.get(column).cloned().unwrap_or_default())
            .collect()
    }
}

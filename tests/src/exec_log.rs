use seedling_core::driver::{FlatResults, Insert};

use std::sync::{Arc, Mutex};

/// One successfully executed batch.
#[derive(Debug, Clone)]
pub struct Executed {
    pub inserts: Vec<Insert>,
    pub results: FlatResults,
}

/// A wrapper around the execution log that provides a clean API for tests
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    batches: Arc<Mutex<Vec<Executed>>>,
}

impl ExecLog {
    pub(crate) fn push(&self, executed: Executed) {
        self.batches.lock().unwrap().push(executed);
    }

    /// Number of batches executed
    pub fn len(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.lock().unwrap().is_empty()
    }

    #[track_caller]
    pub fn last(&self) -> Executed {
        self.batches
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no batch executed")
    }

    /// Tables of the last batch's inserts, in queue order
    #[track_caller]
    pub fn last_tables(&self) -> Vec<String> {
        self.last()
            .inserts
            .iter()
            .map(|insert| insert.table.clone())
            .collect()
    }
}

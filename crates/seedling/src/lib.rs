pub mod db;
pub use db::Db;

pub mod engine;

pub mod graph;
pub use graph::{Graph, NodeId, RecordNode};

pub use seedling_core::{driver, schema, stmt, Error, Result};

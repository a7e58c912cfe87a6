//! Dependency-ordered persistence of a record graph.
//!
//! A [`Plan`] wraps every node of a [`Graph`](crate::Graph) in an
//! [`InsertOperation`]. Writing walks each operation's prerequisites depth
//! first, so records owning a referenced key are queued before the records
//! referencing them. Keys the store assigns stay pending until the batch
//! executes; reading then walks the operations in write order, consuming the
//! store's flat result array positionally and resolving pending foreign keys
//! from the now-populated upstream records.

mod counter;
pub use counter::OrderCounter;

mod guard;
pub use guard::ReentrancyGuard;

mod key;
use key::KeyTypes;

mod operation;
pub use operation::{InsertOperation, OpId};

mod plan;
pub use plan::Plan;

mod read;

mod resolve;
use resolve::Binding;

mod write;

use crate::NodeId;
use seedling_core::schema::app::FieldId;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub read_policy: ReadPolicy,
    pub cycle_policy: CyclePolicy,
}

/// Which properties are read back from the store after the batch executes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Store-assigned keys and foreign keys that were pending at write time.
    #[default]
    Keys,

    /// Everything `Keys` reads, plus every property the caller did not set
    /// that was written as null and may have been filled by a store default.
    Unset,
}

/// What to do when a foreign key cannot be linked because its prerequisite is
/// still being written further up a reference cycle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Write the column without a value and list it in the summary.
    #[default]
    Report,

    /// Abort the batch with an unresolved cycle error.
    Reject,
}

/// Outcome of the write pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WriteSummary {
    /// Number of operations queued
    pub written: usize,

    /// Foreign keys left without a value because of a reference cycle
    pub unlinked: Vec<UnlinkedReference>,
}

/// A foreign key written without a value because its target was still being
/// written when the referencing record was queued.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlinkedReference {
    /// Record holding the foreign key
    pub node: NodeId,

    /// Foreign-key field left without a value
    pub field: FieldId,

    /// Record the foreign key should have referenced
    pub target: NodeId,
}

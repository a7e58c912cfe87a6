use super::Binding;
use crate::NodeId;
use seedling_core::{
    schema::app::{FieldId, KeyType, ModelId},
    stmt::ColumnSymbol,
};

/// Identifies an operation within its plan. Operation `n` wraps node `n`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpId(pub usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum WriteState {
    Unwritten,
    Writing,
    Written,
}

/// Writes and reads back one record.
#[derive(Debug)]
pub struct InsertOperation {
    pub(super) id: OpId,

    /// The record written by this operation
    pub(super) node: NodeId,

    pub(super) model: ModelId,

    pub(super) key_type: KeyType,

    /// Position in the batch, assigned once when the insert is queued
    pub(super) order: Option<usize>,

    pub(super) state: WriteState,

    pub(super) read: bool,

    /// Key values this operation produced, known or pending
    pub(super) captured: Vec<ColumnSymbol>,

    /// Key fields written without a value because of a reference cycle
    pub(super) unresolved_keys: Vec<FieldId>,

    /// How each foreign key was resolved at write time
    pub(super) bindings: Vec<Binding>,

    /// Fields read back from the result stream, in declaration order
    pub(super) read_back: Vec<FieldId>,
}

impl InsertOperation {
    pub(super) fn new(id: OpId, node: NodeId, model: ModelId, key_type: KeyType) -> Self {
        InsertOperation {
            id,
            node,
            model,
            key_type,
            order: None,
            state: WriteState::Unwritten,
            read: false,
            captured: vec![],
            unresolved_keys: vec![],
            bindings: vec![],
            read_back: vec![],
        }
    }

    pub fn id(&self) -> OpId {
        self.id
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn order(&self) -> Option<usize> {
        self.order
    }

    pub fn is_written(&self) -> bool {
        self.state == WriteState::Written
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Key symbols captured when the operation was written.
    pub fn captured_key_symbols(&self) -> &[ColumnSymbol] {
        &self.captured
    }

    /// Fields this operation consumes from the result stream.
    pub fn read_back(&self) -> &[FieldId] {
        &self.read_back
    }
}

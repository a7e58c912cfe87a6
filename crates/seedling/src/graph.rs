use crate::Result;
use seedling_core::{
    err,
    schema::app::{Field, Model, ModelId, Schema},
    stmt::{Value, ValueRecord},
};

use std::sync::Arc;

/// The working set of records written together in one batch.
///
/// Nodes are never removed; a `NodeId` stays valid for the lifetime of the
/// graph.
#[derive(Debug)]
pub struct Graph {
    schema: Arc<Schema>,
    nodes: Vec<RecordNode>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// One in-memory record participating in a batch.
#[derive(Debug)]
pub struct RecordNode {
    model: ModelId,

    /// Field values, indexed like the model's fields
    record: ValueRecord,

    /// Records this record's keys are derived from. They are written first.
    primary_key_dependencies: Vec<NodeId>,

    /// `true` for each field the caller fixed by hand
    explicitly_set: Vec<bool>,
}

impl Graph {
    pub fn new(schema: Arc<Schema>) -> Graph {
        Graph {
            schema,
            nodes: vec![],
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Adds a record of the named model with every field null.
    pub fn insert(&mut self, model: &str) -> Result<NodeId> {
        let Some(model) = self.schema.model_by_name(model) else {
            return Err(err!("model `{model}` is not part of the schema"));
        };

        let id = model.id;
        Ok(self.insert_model(id))
    }

    #[track_caller]
    pub fn insert_model(&mut self, model: ModelId) -> NodeId {
        let len = self.schema.model(model).fields.len();
        let id = NodeId(self.nodes.len());

        self.nodes.push(RecordNode {
            model,
            record: ValueRecord::nulls(len),
            primary_key_dependencies: vec![],
            explicitly_set: vec![false; len],
        });

        id
    }

    /// Fixes a field's value. The engine never overwrites it with a linked
    /// key.
    pub fn set(&mut self, node: NodeId, field: &str, value: impl Into<Value>) -> Result<()> {
        let index = self.store(node, field, value.into())?;
        self.nodes[node.0].explicitly_set[index] = true;
        Ok(())
    }

    /// Stores a generated value. Unlike [`Graph::set`], the field stays
    /// eligible for linking and read-back.
    pub fn assign(&mut self, node: NodeId, field: &str, value: impl Into<Value>) -> Result<()> {
        self.store(node, field, value.into()).map(|_| ())
    }

    /// Declares that `node`'s keys derive from `dependency`, which must be
    /// written first.
    pub fn depends_on(&mut self, node: NodeId, dependency: NodeId) -> &mut Self {
        assert!(dependency.0 < self.nodes.len(), "unknown node {dependency:?}");

        let deps = &mut self.nodes[node.0].primary_key_dependencies;
        if !deps.contains(&dependency) {
            deps.push(dependency);
        }
        self
    }

    pub fn get(&self, node: NodeId, field: &str) -> Result<&Value> {
        let index = self.field(node, field)?.id.index;
        Ok(&self.nodes[node.0].record[index])
    }

    pub fn node(&self, id: NodeId) -> &RecordNode {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &RecordNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn record_mut(&mut self, id: NodeId) -> &mut ValueRecord {
        &mut self.nodes[id.0].record
    }

    fn store(&mut self, node: NodeId, field: &str, value: Value) -> Result<usize> {
        let field = self.field(node, field)?;
        let index = field.id.index;
        let value = field.ty.cast(value)?;

        self.nodes[node.0].record[index] = value;
        Ok(index)
    }

    fn field(&self, node: NodeId, name: &str) -> Result<&Field> {
        let model = self.model_of(node);
        model
            .field_by_name(name)
            .ok_or_else(|| err!("model `{}` has no field `{name}`", model.name))
    }

    fn model_of(&self, node: NodeId) -> &Model {
        self.schema.model(self.nodes[node.0].model)
    }
}

impl RecordNode {
    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn record(&self) -> &ValueRecord {
        &self.record
    }

    pub fn primary_key_dependencies(&self) -> &[NodeId] {
        &self.primary_key_dependencies
    }

    pub fn is_explicitly_set(&self, index: usize) -> bool {
        self.explicitly_set[index]
    }
}

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

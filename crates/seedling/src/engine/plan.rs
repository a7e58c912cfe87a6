use super::{
    Config, InsertOperation, KeyTypes, OpId, OrderCounter, ReentrancyGuard, UnlinkedReference,
    WriteSummary,
};
use crate::{Graph, NodeId, Result};
use seedling_core::{
    bail,
    driver::{Batch, FlatResults},
    err,
    schema::app::Schema,
};

use std::sync::Arc;

/// State of one write and read pass over a [`Graph`].
///
/// A plan is created fresh for every batch and must not be reused: the order
/// counter, the reentrancy guard and the ordered slots only describe the batch
/// they were built for.
#[derive(Debug)]
pub struct Plan {
    pub(super) schema: Arc<Schema>,

    pub(super) config: Config,

    /// One operation per graph node, indexed like the nodes
    pub(super) ops: Vec<InsertOperation>,

    pub(super) counter: OrderCounter,

    pub(super) guard: ReentrancyGuard,

    /// Operations in the order their inserts were queued
    pub(super) ordered: Vec<OpId>,

    /// Cyclic references left without a value so far
    pub(super) unlinked: Vec<UnlinkedReference>,
}

impl Plan {
    /// Wraps every node of `graph` in an operation. Key types are resolved
    /// once per model.
    pub fn build(graph: &Graph, config: Config) -> Plan {
        let schema = graph.schema().clone();
        let mut key_types = KeyTypes::default();

        let ops = graph
            .nodes()
            .map(|(node, record)| {
                let model = schema.model(record.model());
                InsertOperation::new(
                    OpId(node.index()),
                    node,
                    model.id,
                    key_types.resolve(model),
                )
            })
            .collect();

        Plan {
            schema,
            config,
            ops,
            counter: OrderCounter::new(),
            guard: ReentrancyGuard::new(),
            ordered: vec![],
            unlinked: vec![],
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn operations(&self) -> &[InsertOperation] {
        &self.ops
    }

    /// The operation wrapping `node`.
    #[track_caller]
    pub fn operation(&self, node: NodeId) -> &InsertOperation {
        &self.ops[node.index()]
    }

    /// Written operations, in the order their inserts were queued.
    pub fn ordered(&self) -> impl ExactSizeIterator<Item = &InsertOperation> + '_ {
        self.ordered.iter().map(|id| &self.ops[id.0])
    }

    /// Writes the operation wrapping `node`, and first every prerequisite it
    /// needs. Writing an operation twice is a no-op.
    pub fn write(&mut self, graph: &mut Graph, batch: &mut Batch, node: NodeId) -> Result<()> {
        self.check_graph(graph)?;
        self.write_op(graph, batch, OpId(node.index()))
    }

    /// Writes every operation of the plan into `batch`.
    pub fn write_all(&mut self, graph: &mut Graph, batch: &mut Batch) -> Result<WriteSummary> {
        self.check_graph(graph)?;

        for index in 0..self.ops.len() {
            self.write_op(graph, batch, OpId(index))?;
        }

        debug_assert_eq!(self.counter.count(), self.ordered.len());
        debug_assert_eq!(self.guard.depth(), 0);

        Ok(WriteSummary {
            written: self.ordered.len(),
            unlinked: self.unlinked.clone(),
        })
    }

    /// Reads the flat result array of the executed batch back into the graph.
    ///
    /// Operations consume their slots in the order they were written. Every
    /// slot must be consumed.
    pub fn read_all(&mut self, graph: &mut Graph, results: &FlatResults) -> Result<()> {
        self.check_graph(graph)?;

        let mut cursor = results.cursor();

        for order in 0..self.ordered.len() {
            let id = self.ordered[order];

            self.read_op(graph, &mut cursor, id).map_err(|e| {
                let model = self.schema.model(self.ops[id.0].model);
                e.context(err!("reading {} (order {order})", model.name))
            })?;
        }

        cursor.finish()
    }

    fn check_graph(&self, graph: &Graph) -> Result<()> {
        if !Arc::ptr_eq(&self.schema, graph.schema()) {
            bail!("graph was built for a different schema than the plan");
        }

        if graph.len() != self.ops.len() {
            bail!(
                "graph has {} nodes but the plan was built for {}",
                graph.len(),
                self.ops.len()
            );
        }

        Ok(())
    }
}

use crate::transition::*;

use log::{debug, info};
use measure_time::debug_time;
use petgraph::Direction;
use smallvec::SmallVec;

pub type TrellisIx = petgraph::graph::NodeIndex;
pub type TrellisGraph = petgraph::Graph<TrellisNode, TrellisEdge>;

/// The trellis nodes of a single non-empty observation.
#[derive(Clone, Debug, PartialEq)]
pub struct TrellisLayer {
    pub observation: usize,
    pub nodes: SmallVec<[TrellisIx; 8]>,
}

/// The layered transition graph.
///
/// A single `start` sentinel connects to every candidate of the first
/// non-empty layer, every candidate of a non-empty layer connects to every
/// candidate of the next non-empty layer, and every candidate of the last
/// non-empty layer connects to a single `target` sentinel.
///
/// ```text
///                 ┌───┐      ┌───┐
///             ┌──►│0:0├─────►│2:0├───┐
///  ┌─────┐    │   └───┘  ╲ ╱ └───┘   │    ┌──────┐
///  │start├────┤           ╳          ├───►│target│
///  └─────┘    │   ┌───┐  ╱ ╲ ┌───┐   │    └──────┘
///             └──►│0:1├─────►│2:1├───┘
///                 └───┘      └───┘
/// ```
///
/// Layers without candidates (observation `1`, above) are skipped, such that
/// the nearest non-empty layers are connected directly. Nodes are inserted in
/// order: `start`, then each layer's candidates nearest first, then `target`.
#[derive(Debug)]
pub struct Trellis {
    graph: TrellisGraph,

    start: TrellisIx,
    target: TrellisIx,

    layers: Vec<TrellisLayer>,
    skipped: Vec<usize>,
}

impl Trellis {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = tracing::Level::INFO, skip_all))]
    pub fn new(layers: &[Layer]) -> Result<Trellis, MatchError> {
        debug_time!("create trellis over {} layers", layers.len());

        let nodes = layers.iter().map(Layer::len).sum::<usize>();
        let mut graph = TrellisGraph::with_capacity(nodes + 2, nodes * 8);

        let start = graph.add_node(TrellisNode::Sentinel(Sentinel::Start));
        let mut previous: SmallVec<[TrellisIx; 8]> = SmallVec::from_elem(start, 1);

        let mut trellis_layers = Vec::with_capacity(layers.len());
        let mut skipped = vec![];

        for layer in layers {
            if layer.is_empty() {
                debug!("Skipping observation {} without candidates", layer.observation);
                skipped.push(layer.observation);
                continue;
            }

            let nodes = layer
                .candidates
                .iter()
                .map(|candidate| graph.add_node(TrellisNode::Candidate(*candidate)))
                .collect::<SmallVec<[TrellisIx; 8]>>();

            let weight = if trellis_layers.is_empty() {
                TrellisEdge::CERTAIN
            } else {
                TrellisEdge::Deferred
            };

            for source in &previous {
                for target in &nodes {
                    graph.add_edge(*source, *target, weight);
                }
            }

            previous = nodes.clone();
            trellis_layers.push(TrellisLayer {
                observation: layer.observation,
                nodes,
            });
        }

        if trellis_layers.is_empty() {
            return Err(MatchError::NoCandidates);
        }

        let target = graph.add_node(TrellisNode::Sentinel(Sentinel::Target));
        for source in &previous {
            graph.add_edge(*source, target, TrellisEdge::CERTAIN);
        }

        info!(
            "Created trellis of {} layers ({} skipped), {} nodes and {} edges",
            trellis_layers.len(),
            skipped.len(),
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Trellis {
            graph,
            start,
            target,
            layers: trellis_layers,
            skipped,
        })
    }

    #[inline]
    pub fn start(&self) -> TrellisIx {
        self.start
    }

    #[inline]
    pub fn target(&self) -> TrellisIx {
        self.target
    }

    /// The non-empty layers, in observation order.
    pub fn layers(&self) -> &[TrellisLayer] {
        &self.layers
    }

    /// The observations which had no candidates.
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    pub fn graph(&self) -> &TrellisGraph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn node(&self, index: TrellisIx) -> Option<&TrellisNode> {
        self.graph.node_weight(index)
    }

    #[inline]
    pub fn candidate(&self, index: TrellisIx) -> Option<&Candidate> {
        self.node(index).and_then(TrellisNode::candidate)
    }

    /// The edge from `source` to `target`, if one exists.
    #[inline]
    pub fn edge(&self, source: TrellisIx, target: TrellisIx) -> Option<TrellisEdge> {
        self.graph
            .find_edge(source, target)
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }

    /// The label of a node: `start`, `target`, or `layer_id:node_id`.
    pub fn label(&self, index: TrellisIx) -> Option<String> {
        self.node(index).map(ToString::to_string)
    }

    /// The nodes with an edge into `index`, in order of insertion.
    pub fn predecessors(&self, index: TrellisIx) -> Vec<TrellisIx> {
        self.neighbors(index, Direction::Incoming)
    }

    /// The nodes with an edge out of `index`, in order of insertion.
    pub fn successors(&self, index: TrellisIx) -> Vec<TrellisIx> {
        self.neighbors(index, Direction::Outgoing)
    }

    fn neighbors(&self, index: TrellisIx, direction: Direction) -> Vec<TrellisIx> {
        let mut nodes = self
            .graph
            .neighbors_directed(index, direction)
            .collect::<Vec<_>>();

        nodes.sort();
        nodes
    }
}

/// Builds the [`Trellis`] over the candidate layers.
///
/// Fails with [`MatchError::NoCandidates`] if every layer is empty.
pub fn create_trellis(layers: &[Layer]) -> Result<Trellis, MatchError> {
    Trellis::new(layers)
}

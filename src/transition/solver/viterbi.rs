use crate::graph::{RoadGraph, Route};
use crate::transition::*;

use geo::{Distance, Haversine};
use log::{debug, info};
use measure_time::debug_time;
use rayon::prelude::*;

#[cfg(feature = "tracing")]
use tracing::Level;

/// Decodes the most likely path through the trellis using the Viterbi algorithm.
///
/// Layers are evaluated in order, the value of each node is the best of
/// its predecessors' values plus the log-probability of the transition,
/// plus the emission log-probability of the node itself:
///
/// ```math
/// V(start) = 0
/// V(node) = max_p [V(p) + log T(p, node)] + log E(node)
/// ```
///
/// Transitions are only evaluated once their source layer is final, with the
/// transitions out of each source candidate resolved in parallel through a
/// single one-to-many network search. Ties are broken in favour of the
/// earliest-inserted predecessor.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViterbiSolver {
    /// The budget of each network search between two candidates.
    pub bound: SearchBound,
}

impl ViterbiSolver {
    pub fn new(bound: SearchBound) -> Self {
        ViterbiSolver { bound }
    }

    /// The transition log-probabilities from `source` to each of the `targets`.
    fn transitions<E, T>(
        &self,
        context: RoutingContext,
        costing: &CostingStrategies<E, T>,
        source: TrellisIx,
        targets: &[TrellisIx],
    ) -> Vec<f64>
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
    {
        let trellis = context.trellis;
        let from = trellis.candidate(source);

        let candidates = targets
            .iter()
            .map(|target| trellis.candidate(*target))
            .collect::<Vec<_>>();

        // Only deferred edges require the network, which leave candidates alone.
        let mut distances = match from {
            Some(from) => {
                let requests = candidates
                    .iter()
                    .flatten()
                    .map(|to| {
                        let straight = Haversine.distance(from.position, to.position);
                        (to.edge_position(), self.bound.limit(straight))
                    })
                    .collect::<Vec<_>>();

                context.map.route_distances(from.edge_position(), &requests)
            }
            None => vec![],
        }
        .into_iter();

        targets
            .iter()
            .zip(candidates)
            .map(|(target, to)| {
                let route = to.and(from).and_then(|_| distances.next()).flatten();

                match (trellis.edge(source, *target), from, to) {
                    (Some(TrellisEdge::Fixed(weight)), _, _) => weight,
                    (Some(TrellisEdge::Deferred), Some(from), Some(to)) => {
                        costing.transition(TransitionContext::new(from, to, route))
                    }
                    _ => f64::NEG_INFINITY,
                }
            })
            .collect()
    }
}

/// The running values of a decode.
struct State {
    values: Vec<f64>,
    predecessors: Vec<Option<TrellisIx>>,
}

impl State {
    /// Settles the `targets` given the transitions into them from
    /// each of the `sources`, where `rows[s][t]` is the transition
    /// from `sources[s]` to `targets[t]`.
    fn advance(
        &mut self,
        sources: &[TrellisIx],
        targets: &[TrellisIx],
        rows: &[Vec<f64>],
        emission: impl Fn(TrellisIx) -> f64,
    ) {
        for (column, target) in targets.iter().enumerate() {
            let mut best = (f64::NEG_INFINITY, None);

            for (source, row) in sources.iter().zip(rows) {
                let value = self.values[source.index()] + row[column];
                if value > best.0 {
                    best = (value, Some(*source));
                }
            }

            self.values[target.index()] = best.0 + emission(*target);
            self.predecessors[target.index()] = best.1;
        }
    }

    fn unreachable(&self, nodes: &[TrellisIx]) -> bool {
        nodes
            .iter()
            .all(|node| self.values[node.index()] == f64::NEG_INFINITY)
    }
}

impl Solver for ViterbiSolver {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip_all))]
    fn solve<E, T>(
        &self,
        context: RoutingContext,
        costing: &CostingStrategies<E, T>,
    ) -> Result<Decoded, MatchError>
    where
        E: EmissionStrategy + Send + Sync,
        T: TransitionStrategy + Send + Sync,
    {
        let trellis = context.trellis;
        info!(
            "Decoding trellis of {} layers, {} nodes",
            trellis.layers().len(),
            trellis.node_count()
        );

        let mut state = State {
            values: vec![f64::NEG_INFINITY; trellis.node_count()],
            predecessors: vec![None; trellis.node_count()],
        };

        let start = [trellis.start()];
        state.values[trellis.start().index()] = 0.0;

        let emission = |node: TrellisIx| {
            trellis
                .candidate(node)
                .map_or(0.0, |candidate| costing.emission(EmissionContext::from(candidate)))
        };

        let mut previous: &[TrellisIx] = &start;
        let mut previous_observation = None;

        for layer in trellis.layers() {
            let rows = {
                debug_time!("transitions into layer {}", layer.observation);

                previous
                    .par_iter()
                    .map(|source| self.transitions(context, costing, *source, &layer.nodes))
                    .collect::<Vec<_>>()
            };

            state.advance(previous, &layer.nodes, &rows, emission);

            if state.unreachable(&layer.nodes) {
                let from = previous_observation.unwrap_or(layer.observation);
                debug!("No candidate of observation {} is reachable from {from}", layer.observation);

                return Err(MatchError::NoFeasiblePath {
                    from,
                    to: layer.observation,
                });
            }

            previous = layer.nodes.as_slice();
            previous_observation = Some(layer.observation);
        }

        let target = [trellis.target()];
        let rows = previous
            .iter()
            .map(|source| self.transitions(context, costing, *source, &target))
            .collect::<Vec<_>>();

        state.advance(previous, &target, &rows, emission);

        if state.unreachable(&target) {
            let last = previous_observation.unwrap_or_default();
            return Err(MatchError::NoFeasiblePath {
                from: last,
                to: last,
            });
        }

        let decoded = Decoded::new(state.values, state.predecessors, trellis.target());
        info!("Decoded with log-probability {}", decoded.log_probability);

        Ok(decoded)
    }
}

/// Decodes the most likely path through the `trellis`, using the default
/// emission and transition models and search bound.
///
/// Candidates reference the edges of `map`, which for an [`InterpolatedGraph`]
/// is its underlying graph, as given by [`InterpolatedGraph::map`].
///
/// [`InterpolatedGraph`]: crate::graph::InterpolatedGraph
/// [`InterpolatedGraph::map`]: crate::graph::InterpolatedGraph::map
pub fn viterbi_search(map: &RoadGraph, trellis: &Trellis) -> Result<Decoded, MatchError> {
    ViterbiSolver::default().solve(RoutingContext::new(map, trellis), &DefaultCosting::default())
}

use crate::graph::{EdgeIx, EdgePosition, NodeIx, RoadGraph, Route, RouteLeg};
use crate::transition::Dijkstra;

use itertools::Itertools;
use log::trace;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

#[cfg(feature = "tracing")]
use tracing::Level;

/// Routing costs are integer centimetres.
const CENTIMETRES: f64 = 100.0;

type Reached = FxHashMap<NodeIx, (Option<NodeIx>, u64)>;

#[inline]
fn centimetres(meters: f64) -> u64 {
    (meters * CENTIMETRES).round() as u64
}

/// The distance along a single edge, when `to` lies ahead of `from` upon it.
#[inline]
fn along(from: EdgePosition, to: EdgePosition) -> Option<f64> {
    (from.edge == to.edge && to.offset >= from.offset).then(|| to.offset - from.offset)
}

impl RoadGraph {
    /// Settles every node reachable from `source` within `limit` meters.
    fn reach(&self, source: NodeIx, limit: f64) -> Reached {
        if limit.is_nan() || limit < 0.0 {
            return Reached::default();
        }

        let limit = centimetres(limit);
        Dijkstra
            .reach(&source, |node: &NodeIx| {
                self.outgoing(*node)
                    .filter_map(|(edge, target)| {
                        self.edge(edge).map(|e| (target, centimetres(e.length)))
                    })
                    .collect::<SmallVec<[(NodeIx, u64); 8]>>()
            })
            .take_while(|item| item.total_cost <= limit)
            .map(|item| (item.node, (item.parent, item.total_cost)))
            .collect()
    }

    /// The node at which a route leaving `from` enters the network,
    /// and the remaining length of the edge until that node.
    #[inline]
    fn departure(&self, from: EdgePosition) -> Option<(NodeIx, f64)> {
        let edge = self.edge(from.edge)?;
        let (_, head) = self.endpoints(from.edge)?;
        Some((head, (edge.length - from.offset).max(0.0)))
    }

    /// The distance to `to` given the settled nodes of a search
    /// which departed `remaining` meters before reaching its source.
    #[inline]
    fn arrival(&self, reached: &Reached, remaining: f64, to: EdgePosition) -> Option<f64> {
        let (tail, _) = self.endpoints(to.edge)?;
        let (_, cost) = reached.get(&tail)?;
        Some(remaining + *cost as f64 / CENTIMETRES + to.offset)
    }

    /// The shortest of the parallel edges from `source` to `target`.
    fn cheapest_edge(&self, source: NodeIx, target: NodeIx) -> Option<EdgeIx> {
        self.outgoing(source)
            .filter(|(_, node)| *node == target)
            .filter_map(|(ix, _)| self.edge(ix).map(|edge| (ix, edge.length)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(ix, _)| ix)
    }
}

impl Route for RoadGraph {
    #[inline]
    fn route_distance(&self, from: EdgePosition, to: EdgePosition, bound: f64) -> Option<f64> {
        self.route_distances(from, &[(to, bound)])
            .into_iter()
            .next()
            .flatten()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip_all))]
    fn route_distances(&self, from: EdgePosition, targets: &[(EdgePosition, f64)]) -> Vec<Option<f64>> {
        let Some((head, remaining)) = self.departure(from) else {
            return vec![None; targets.len()];
        };

        let budget = targets
            .iter()
            .filter(|(to, _)| along(from, *to).is_none())
            .map(|(_, bound)| *bound)
            .fold(f64::NEG_INFINITY, f64::max);

        let reached = self.reach(head, budget - remaining);
        trace!("Settled {} nodes from {head:?} within {budget}m", reached.len());

        targets
            .iter()
            .map(|(to, bound)| {
                let distance = along(from, *to).or_else(|| self.arrival(&reached, remaining, *to))?;
                (distance <= *bound).then_some(distance)
            })
            .collect()
    }

    fn route(&self, from: EdgePosition, to: EdgePosition, bound: f64) -> Option<RouteLeg> {
        if let Some(distance) = along(from, to) {
            return (distance <= bound).then_some(RouteLeg {
                from,
                to,
                distance,
                via: vec![],
                direct: true,
            });
        }

        let (head, remaining) = self.departure(from)?;
        let reached = self.reach(head, bound - remaining);

        let distance = self.arrival(&reached, remaining, to)?;
        if distance > bound {
            return None;
        }

        let (tail, _) = self.endpoints(to.edge)?;
        let mut nodes = vec![tail];
        while let Some((Some(parent), _)) = nodes.last().and_then(|node| reached.get(node)) {
            nodes.push(*parent);
        }

        nodes.reverse();
        let via = nodes
            .into_iter()
            .tuple_windows()
            .map(|(source, target)| self.cheapest_edge(source, target))
            .collect::<Option<Vec<_>>>()?;

        Some(RouteLeg {
            from,
            to,
            distance,
            via,
            direct: false,
        })
    }
}

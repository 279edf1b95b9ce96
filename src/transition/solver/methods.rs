use crate::transition::*;

/// The result of decoding a [`Trellis`].
///
/// Holds the best log-probability of reaching every node from `start`,
/// alongside the predecessor through which that value was attained.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded {
    /// The log-probability of the most likely path, as attained at `target`.
    pub log_probability: f64,

    values: Vec<f64>,
    predecessors: Vec<Option<TrellisIx>>,
}

impl Decoded {
    pub(crate) fn new(values: Vec<f64>, predecessors: Vec<Option<TrellisIx>>, target: TrellisIx) -> Self {
        Decoded {
            log_probability: values.get(target.index()).copied().unwrap_or(f64::NEG_INFINITY),
            values,
            predecessors,
        }
    }

    /// The best log-probability of any path from `start` to the node.
    #[inline]
    pub fn value(&self, node: TrellisIx) -> Option<f64> {
        self.values.get(node.index()).copied()
    }

    /// The node preceding `node` upon its most likely path.
    #[inline]
    pub fn predecessor(&self, node: TrellisIx) -> Option<TrellisIx> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Follows the predecessors back from `target` to `start`,
    /// recovering the candidate chosen in each layer.
    pub fn path(&self, trellis: &Trellis) -> Result<MatchedPath, MatchError> {
        let unreachable = || {
            let last = trellis.layers().last().map_or(0, |layer| layer.observation);
            MatchError::NoFeasiblePath {
                from: last,
                to: last,
            }
        };

        let mut route = Vec::with_capacity(trellis.layers().len());
        let mut cursor = self.predecessor(trellis.target()).ok_or_else(unreachable)?;

        while cursor != trellis.start() {
            route.push(cursor);
            cursor = self.predecessor(cursor).ok_or_else(unreachable)?;
        }

        route.reverse();
        let candidates = route
            .iter()
            .map(|node| trellis.candidate(*node).copied().ok_or_else(unreachable))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MatchedPath::new(self.log_probability, route, candidates))
    }
}

/// Defines a structure which can decode a [`Trellis`].
///
/// Functionality is implemented using the [`Solver::solve`] method.
pub trait Solver {
    /// Finds the most likely path through the trellis of the context, given
    /// the emission and transition probabilities of the costing strategies.
    ///
    /// It may return a match error when no candidate of some layer
    /// can be reached from any candidate of the layer before it.
    fn solve<E, T>(
        &self,
        context: RoutingContext,
        costing: &CostingStrategies<E, T>,
    ) -> Result<Decoded, MatchError>
    where
        E: EmissionStrategy + Send + Sync,
        T: TransitionStrategy + Send + Sync;
}

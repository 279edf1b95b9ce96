use crate::transition::*;

use geo::LineString;

/// The collapsed solution to a transition graph.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedPath {
    /// The log-probability of the path.
    /// This value is not actionable by the consumer but rather indicative of how confident
    /// the system is in the route chosen.
    pub log_probability: f64,

    /// The route as a vector of trellis nodes, one per non-empty layer.
    /// To obtain the list of [`Candidate`]s, use [`MatchedPath::matched`]
    pub route: Vec<TrellisIx>,

    candidates: Vec<Candidate>,
}

impl MatchedPath {
    pub(crate) fn new(log_probability: f64, route: Vec<TrellisIx>, candidates: Vec<Candidate>) -> Self {
        Self {
            log_probability,
            route,
            candidates,
        }
    }

    /// Returns the [`Candidate`]s involved in a match, in observation order.
    /// Each candidate represents the matched position of an observation.
    ///
    /// This includes further information such as the edge it matched to,
    /// and the location of the candidate within its layer.
    pub fn matched(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The indices of the observations which were matched.
    pub fn observations(&self) -> impl Iterator<Item = usize> + '_ {
        self.candidates.iter().map(Candidate::observation)
    }

    /// Returns the matched positions as a [`LineString`].
    pub fn linestring(&self) -> LineString {
        self.candidates
            .iter()
            .map(|candidate| candidate.position)
            .collect()
    }
}
